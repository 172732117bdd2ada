use hashbrown::{HashMap, HashSet};

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;

use crate::error::{Error, Result};

struct BfsIter<'a> {
    graph: &'a DiGraphMap<usize, ()>,
    bfs: Bfs<usize, HashSet<usize>>,
}

impl Iterator for BfsIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.bfs.next(self.graph)
    }
}

// BFS traversal of a directed graph
// Returns a vector of node ids in the order they were visited
// make sure every parent node is visited before child node
pub(super) fn bfs(graph: &DiGraphMap<usize, ()>, start: usize) -> Vec<usize> {
    let bfs = Bfs::new(graph, start);
    let iter = BfsIter { graph, bfs };
    iter.collect()
}

// parent link id -> child link id, one node per declared link
pub(super) fn link_graph(
    link_names: &[&str],
    parent_of: &HashMap<&str, &str>,
) -> Result<DiGraphMap<usize, ()>> {
    let index = link_names
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect::<HashMap<_, _>>();

    let mut graph = DiGraphMap::<usize, ()>::new();
    for i in 0..link_names.len() {
        graph.add_node(i);
    }

    for (child, parent) in parent_of {
        let child_index = *index.get(child).ok_or_else(|| Error::DanglingChild {
            link: child.to_string(),
        })?;
        let parent_index = *index.get(parent).ok_or_else(|| Error::DanglingParent {
            link: child.to_string(),
            parent: parent.to_string(),
        })?;
        graph.add_edge(parent_index, child_index, ());
    }

    Ok(graph)
}

// Link ids ordered parent-before-child, starting from the single root.
pub(super) fn parent_first_order(
    link_names: &[&str],
    parent_of: &HashMap<&str, &str>,
) -> Result<Vec<usize>> {
    let graph = link_graph(link_names, parent_of)?;

    petgraph::algo::toposort(&graph, None).map_err(|cycle| Error::Cycle {
        link: link_names[cycle.node_id()].to_string(),
    })?;

    let roots = (0..link_names.len())
        .filter(|i| !parent_of.contains_key(link_names[*i]))
        .collect::<Vec<_>>();
    let start = match roots.as_slice() {
        [] if link_names.is_empty() => return Ok(Vec::new()),
        [] => return Err(Error::NoRoot),
        [root] => *root,
        _ => {
            return Err(Error::MultipleRoots(
                roots.iter().map(|i| link_names[*i].to_string()).collect(),
            ))
        }
    };

    Ok(bfs(&graph, start))
}
