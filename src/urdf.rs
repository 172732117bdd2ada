use std::path::Path;

use hashbrown::HashMap;
use nalgebra::{Isometry3, Vector3};
use tracing::debug;

use super::bfs::parent_first_order;
use super::link::{JointType, UrdfLink};
use super::utils::*;
use super::{LinkRegistry, RegistryEntry};
use crate::error::{Error, Result};

/// Read the URDF file at `path` into a [`LinkRegistry`].
pub fn read_urdf(path: impl AsRef<Path>) -> Result<LinkRegistry> {
    LinkRegistry::from_urdf(path.as_ref())
}

/// Same as [`read_urdf`] for an in-memory document.
pub fn read_urdf_str(urdf: &str) -> Result<LinkRegistry> {
    LinkRegistry::from_urdf_string(urdf)
}

impl LinkRegistry {
    pub fn from_urdf_string(str: &str) -> Result<Self> {
        let robot = urdf_rs::read_from_string(str).map_err(|e| Error::Parse(e.to_string()))?;
        let declared = declared_elements(str)?;
        Self::from_robot(&robot, &declared)
    }

    pub fn from_urdf(path: &Path) -> Result<Self> {
        let str = read_file(path)?;
        Self::from_urdf_string(&str)
    }

    fn from_robot(robot: &urdf_rs::Robot, declared: &Declared) -> Result<Self> {
        // child_link_name -> joint
        let parent_joints = parent_joint_map(robot)?;
        let parent_of = parent_joints
            .iter()
            .map(|(child, joint)| (*child, joint.parent.link.as_str()))
            .collect::<HashMap<_, _>>();

        // rejects duplicates, cycles, unknown links and forests before anything is built
        let link_names = link_names(robot)?;
        let order = parent_first_order(&link_names, &parent_of)?;

        let mut entries = HashMap::new();
        for link in &robot.links {
            if !has_inertial(link, declared) {
                debug!("skipping link {} without inertial", link.name);
                continue;
            }

            let inertia = inertia_matrix(&link.inertial.inertia);
            let mass = link.inertial.mass.value;
            let center_of_mass = pose_to_se3(&link.inertial.origin);

            let (origin, axis, joint_type, parent) = match parent_joints.get(link.name.as_str()) {
                Some(joint) => (
                    pose_to_se3(&joint.origin),
                    joint_axis(joint, declared),
                    joint_type(joint),
                    Some(joint.parent.link.clone()),
                ),
                None => (Isometry3::identity(), Vector3::z(), JointType::Revolute, None),
            };

            let urdf_link =
                UrdfLink::new(origin, axis, joint_type, mass, center_of_mass, inertia)?;
            debug!(
                "link {} (parent {:?}): mass {}, screw axis {:?}",
                link.name,
                parent,
                mass,
                urdf_link.screw_axis().as_slice()
            );
            entries.insert(
                link.name.clone(),
                RegistryEntry {
                    link: urdf_link,
                    parent,
                },
            );
        }

        let order = order
            .into_iter()
            .map(|i| link_names[i])
            .filter(|name| entries.contains_key(*name))
            .map(str::to_string)
            .collect();

        Ok(Self { entries, order })
    }
}
