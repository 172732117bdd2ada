//! Read a URDF robot description into a registry of links, each carrying its
//! mass properties and the screw axis of the joint that drives it, and
//! assemble serial chains from that registry.
//!
//! ```no_run
//! let registry = urdf_chain::read_urdf("urdf/six_dof_arm.urdf").unwrap();
//! let chain = urdf_chain::SerialChain::from_registry(&registry, "link6").unwrap();
//! let tip = chain.end_transform(&[0.0; 6]).unwrap();
//! println!("{tip}");
//! ```
use hashbrown::HashMap;

mod bfs;
mod chain;
mod error;
mod geometry;
mod link;
mod spatial_inertia;
mod urdf;
mod utils;

pub use chain::SerialChain;
pub use error::{Error, Result};
pub use geometry::{
    adjoint, compose_transform, point_to_vector, pose_from_rpy_xyz, unit_twist, vector_to_point,
};
pub use link::{JointType, Link, UrdfLink};
pub use urdf::{read_urdf, read_urdf_str};

#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub link: UrdfLink,
    // None for the root link
    pub parent: Option<String>,
}

/// Links of one URDF document keyed by name. Links without inertial data
/// are left out, so a parent name may refer to a link that is not present.
#[derive(Debug, Clone)]
pub struct LinkRegistry {
    entries: HashMap<String, RegistryEntry>,
    // parent before child
    order: Vec<String>,
}

impl LinkRegistry {
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.parent.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered link without a parent, if the root was not pruned.
    pub fn root(&self) -> Option<&str> {
        self.order
            .iter()
            .find(|name| self.entries[name.as_str()].parent.is_none())
            .map(String::as_str)
    }

    pub fn ordered_names(&self) -> &[String] {
        &self.order
    }

    /// Entries in parent-before-child order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), &self.entries[name.as_str()]))
    }

    /// Registered links that are not the parent of any registered link.
    pub fn leaves(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| {
                !self
                    .entries
                    .values()
                    .any(|e| e.parent.as_deref() == Some(name.as_str()))
            })
            .map(String::as_str)
            .collect()
    }
}
