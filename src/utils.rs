use hashbrown::{HashMap, HashSet};
use nalgebra::{Isometry3, Matrix3, Vector3};
use sxd_document::parser;
use tracing::warn;

use crate::error::{Error, Result};
use crate::geometry::pose_from_rpy_xyz;
use crate::link::JointType;

pub(super) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn pose_to_se3(pose: &urdf_rs::Pose) -> Isometry3<f64> {
    pose_from_rpy_xyz(pose.rpy.0, pose.xyz.0)
}

pub(super) fn inertia_matrix(i: &urdf_rs::Inertia) -> Matrix3<f64> {
    Matrix3::new(
        i.ixx, i.ixy, i.ixz, i.ixy, i.iyy, i.iyz, i.ixz, i.iyz, i.izz,
    )
}

// urdf-rs fills an absent <inertial> or <axis> with defaults, so which of
// them were written is read from the document itself
#[derive(Debug, Default)]
pub(super) struct Declared {
    inertial_links: HashSet<String>,
    axis_joints: HashSet<String>,
}

pub(super) fn declared_elements(xml: &str) -> Result<Declared> {
    let package = parser::parse(xml).map_err(|e| Error::Parse(e.to_string()))?;
    let document = package.as_document();

    let mut declared = Declared::default();
    let Some(robot) = document
        .root()
        .children()
        .into_iter()
        .find_map(|e| e.element())
    else {
        return Ok(declared);
    };

    for child in robot.children().into_iter().filter_map(|e| e.element()) {
        let Some(name) = child.attribute("name").map(|a| a.value().to_string()) else {
            continue;
        };
        let has = |tag: &str| {
            child
                .children()
                .into_iter()
                .filter_map(|e| e.element())
                .any(|e| e.name().local_part() == tag)
        };
        match child.name().local_part() {
            "link" if has("inertial") => {
                declared.inertial_links.insert(name);
            }
            "joint" if has("axis") => {
                declared.axis_joints.insert(name);
            }
            _ => {}
        }
    }

    Ok(declared)
}

pub(super) fn has_inertial(link: &urdf_rs::Link, declared: &Declared) -> bool {
    declared.inertial_links.contains(&link.name)
}

pub(super) fn joint_type(joint: &urdf_rs::Joint) -> JointType {
    match joint.joint_type {
        urdf_rs::JointType::Revolute | urdf_rs::JointType::Continuous => JointType::Revolute,
        urdf_rs::JointType::Prismatic => JointType::Prismatic,
        ref other => {
            warn!(
                "joint {} of type {:?} is modelled as prismatic",
                joint.name, other
            );
            JointType::Prismatic
        }
    }
}

// z when the joint has no <axis>
pub(super) fn joint_axis(joint: &urdf_rs::Joint, declared: &Declared) -> Vector3<f64> {
    if declared.axis_joints.contains(&joint.name) {
        Vector3::from(joint.axis.xyz.0)
    } else {
        Vector3::z()
    }
}

pub(super) fn link_names(robot: &urdf_rs::Robot) -> Result<Vec<&str>> {
    let mut seen = HashSet::new();
    robot
        .links
        .iter()
        .map(|link| {
            if seen.insert(link.name.as_str()) {
                Ok(link.name.as_str())
            } else {
                Err(Error::DuplicateLink(link.name.clone()))
            }
        })
        .collect()
}

// child link name -> joint that attaches it to its parent
pub(super) fn parent_joint_map(
    robot: &urdf_rs::Robot,
) -> Result<HashMap<&str, &urdf_rs::Joint>> {
    let mut map = HashMap::new();
    for joint in &robot.joints {
        if map.insert(joint.child.link.as_str(), joint).is_some() {
            return Err(Error::MultipleParents {
                link: joint.child.link.clone(),
            });
        }
    }
    Ok(map)
}
