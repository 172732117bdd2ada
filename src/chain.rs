use nalgebra::Isometry3;

use crate::error::{Error, Result};
use crate::geometry::compose_transform;
use crate::link::{Link, UrdfLink};
use crate::LinkRegistry;

/// Links from the base to a chosen leaf, one joint coordinate per link.
#[derive(Debug, Clone)]
pub struct SerialChain {
    names: Vec<String>,
    links: Vec<UrdfLink>,
}

impl SerialChain {
    /// Walks parent names from `leaf` until a link without a registered
    /// parent is reached. That link becomes the base of the chain.
    pub fn from_registry(registry: &LinkRegistry, leaf: &str) -> Result<Self> {
        let mut names = Vec::new();
        let mut links = Vec::new();

        let mut name = leaf;
        let mut entry = registry
            .get(name)
            .ok_or_else(|| Error::LinkNotFound(leaf.to_string()))?;
        loop {
            // each registered link can be visited once
            if names.len() == registry.len() {
                return Err(Error::Cycle {
                    link: name.to_string(),
                });
            }
            names.push(name.to_string());
            links.push(entry.link.clone());

            match entry.parent.as_deref().and_then(|p| Some((p, registry.get(p)?))) {
                Some((parent, parent_entry)) => {
                    name = parent;
                    entry = parent_entry;
                }
                None => break,
            }
        }

        names.reverse();
        links.reverse();
        Ok(Self { names, links })
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// One coordinate per link, including the base.
    pub fn dof(&self) -> usize {
        self.links.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn links(&self) -> &[UrdfLink] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().map(UrdfLink::link)
    }

    fn check_len(&self, q: &[f64]) -> Result<()> {
        if q.len() != self.dof() {
            return Err(Error::JointCountMismatch {
                expected: self.dof(),
                actual: q.len(),
            });
        }
        Ok(())
    }

    /// Each link frame w.r.t. its parent link frame.
    pub fn transforms(&self, q: &[f64]) -> Result<Vec<Isometry3<f64>>> {
        self.check_len(q)?;
        Ok(self
            .links
            .iter()
            .zip(q)
            .map(|(link, q)| link.transform(*q))
            .collect())
    }

    /// Each link frame w.r.t. the frame the base link is attached to.
    pub fn forward_kinematics(&self, q: &[f64]) -> Result<Vec<Isometry3<f64>>> {
        let poses = self
            .transforms(q)?
            .into_iter()
            .scan(Isometry3::identity(), |pose, relative| {
                *pose = compose_transform(pose, &relative);
                Some(*pose)
            })
            .collect();
        Ok(poses)
    }

    pub fn end_transform(&self, q: &[f64]) -> Result<Isometry3<f64>> {
        Ok(self
            .forward_kinematics(q)?
            .last()
            .copied()
            .unwrap_or_else(Isometry3::identity))
    }
}
