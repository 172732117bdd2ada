use nalgebra::{
    Isometry3, Matrix3, Matrix6, Translation3, Unit, UnitQuaternion, Vector3, Vector6,
};

use crate::error::{Error, Result};
use crate::geometry::{compose_transform, unit_twist};
use crate::spatial_inertia::{com_spatial_inertia, to_link_spatial_inertia};

type SE3 = Isometry3<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointType {
    Revolute,
    Prismatic,
}

/// One rigid body of a chain and the single-dof joint that moves it.
#[derive(Debug, Clone)]
pub struct Link {
    pub joint_type: JointType,
    pub mass: f64,
    // center of mass frame w.r.t. the link frame
    pub center_of_mass: SE3,
    // about the center of mass, in the center of mass frame
    pub inertia: Matrix3<f64>,
    // (w, v), in the center of mass frame
    pub screw_axis: Vector6<f64>,
}

impl Link {
    pub fn new(
        joint_type: JointType,
        mass: f64,
        center_of_mass: SE3,
        inertia: Matrix3<f64>,
        screw_axis: Vector6<f64>,
    ) -> Self {
        Self {
            joint_type,
            mass,
            center_of_mass,
            inertia,
            screw_axis,
        }
    }

    /// 6x6 spatial inertia in the center of mass frame.
    pub fn spatial_inertia(&self) -> Matrix6<f64> {
        com_spatial_inertia(&self.inertia, self.mass)
    }

    /// 6x6 spatial inertia expressed in the link frame.
    pub fn link_frame_spatial_inertia(&self) -> Matrix6<f64> {
        to_link_spatial_inertia(&self.center_of_mass, &self.inertia, self.mass)
    }
}

/// A [`Link`] built from URDF joint and inertial parameters.
#[derive(Debug, Clone)]
pub struct UrdfLink {
    link: Link,
    // link frame w.r.t. the parent link frame
    origin: SE3,
    // joint axis in the link frame
    axis: Unit<Vector3<f64>>,
}

impl UrdfLink {
    /// Derives the screw axis in the center of mass frame. The joint axis is
    /// taken to pass through the link frame origin.
    pub fn new(
        origin: SE3,
        axis: Vector3<f64>,
        joint_type: JointType,
        mass: f64,
        center_of_mass: SE3,
        inertia: Matrix3<f64>,
    ) -> Result<Self> {
        let axis = Unit::try_new(axis, f64::EPSILON).ok_or(Error::DegenerateAxis)?;

        let link_from_com = center_of_mass.inverse();
        let axis_com = link_from_com.rotation * axis.into_inner();
        let point_com = link_from_com.translation.vector;

        let screw_axis = match joint_type {
            JointType::Revolute => unit_twist(&axis_com, &point_com)?,
            JointType::Prismatic => {
                Vector6::new(0., 0., 0., axis_com.x, axis_com.y, axis_com.z)
            }
        };

        Ok(Self {
            link: Link::new(joint_type, mass, center_of_mass, inertia, screw_axis),
            origin,
            axis,
        })
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn origin(&self) -> &SE3 {
        &self.origin
    }

    pub fn axis(&self) -> &Unit<Vector3<f64>> {
        &self.axis
    }

    pub fn joint_type(&self) -> JointType {
        self.link.joint_type
    }

    pub fn mass(&self) -> f64 {
        self.link.mass
    }

    pub fn screw_axis(&self) -> &Vector6<f64> {
        &self.link.screw_axis
    }

    /// Link frame w.r.t. the parent link frame at joint coordinate `q`.
    pub fn transform(&self, q: f64) -> SE3 {
        let motion = match self.link.joint_type {
            JointType::Revolute => Isometry3::from_parts(
                Translation3::identity(),
                UnitQuaternion::from_axis_angle(&self.axis, q),
            ),
            JointType::Prismatic => Isometry3::from_parts(
                Translation3::from(self.axis.into_inner() * q),
                UnitQuaternion::identity(),
            ),
        };
        compose_transform(&self.origin, &motion)
    }

    /// Same as `transform(0.0)`.
    pub fn zero_transform(&self) -> SE3 {
        self.transform(0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::geometry::{adjoint, pose_from_rpy_xyz};

    fn rod_inertia() -> Matrix3<f64> {
        Matrix3::from_diagonal(&Vector3::new(0., 1. / 6., 1. / 6.))
    }

    #[test]
    fn constructor_offset_com() {
        let origin = pose_from_rpy_xyz([0., 0., 0.], [1., 0., 0.]);
        let com = pose_from_rpy_xyz([0., 0., 0.], [1., 0., 0.]);
        let link = UrdfLink::new(
            origin,
            Vector3::z(),
            JointType::Revolute,
            1.0,
            com,
            rod_inertia(),
        )
        .unwrap();
        let expected = unit_twist(&Vector3::z(), &Vector3::new(-1., 0., 0.)).unwrap();
        assert_relative_eq!(*link.screw_axis(), expected, epsilon = 1e-12);
        assert_eq!(link.mass(), 1.0);
        assert_eq!(link.joint_type(), JointType::Revolute);
    }

    #[test]
    fn identity_com_gives_pure_rotation() {
        let link = UrdfLink::new(
            Isometry3::identity(),
            Vector3::new(0., 0., 1.),
            JointType::Revolute,
            2.0,
            Isometry3::identity(),
            rod_inertia(),
        )
        .unwrap();
        assert_relative_eq!(
            *link.screw_axis(),
            Vector6::new(0., 0., 1., 0., 0., 0.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn screw_axis_matches_adjoint_of_com_inverse() {
        let com = pose_from_rpy_xyz([0.2, -0.4, 0.9], [0.1, 0.3, -0.2]);
        let axis = Vector3::new(0., 2., 0.);
        let link = UrdfLink::new(
            Isometry3::identity(),
            axis,
            JointType::Revolute,
            1.0,
            com,
            rod_inertia(),
        )
        .unwrap();
        let expected = adjoint(&com.inverse()) * Vector6::new(0., 1., 0., 0., 0., 0.);
        assert_relative_eq!(*link.screw_axis(), expected, epsilon = 1e-12);
        assert_relative_eq!(link.axis().into_inner(), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn prismatic_screw_axis_is_translation() {
        let com = pose_from_rpy_xyz([0., 0., FRAC_PI_2], [0.5, 0., 0.]);
        let link = UrdfLink::new(
            Isometry3::identity(),
            Vector3::x(),
            JointType::Prismatic,
            1.0,
            com,
            rod_inertia(),
        )
        .unwrap();
        // x of the link frame is -y of a com frame yawed by 90 degrees
        assert_relative_eq!(
            *link.screw_axis(),
            Vector6::new(0., 0., 0., 0., -1., 0.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_axis_is_rejected() {
        let err = UrdfLink::new(
            Isometry3::identity(),
            Vector3::zeros(),
            JointType::Revolute,
            1.0,
            Isometry3::identity(),
            rod_inertia(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateAxis));
    }

    #[test]
    fn revolute_transform_about_arbitrary_axis() {
        let origin = pose_from_rpy_xyz([0., 0., 0.], [0., 0., 1.]);
        let axis = Vector3::new(1., 1., 0.);
        let link = UrdfLink::new(
            origin,
            axis,
            JointType::Revolute,
            1.0,
            Isometry3::identity(),
            rod_inertia(),
        )
        .unwrap();
        let t = link.transform(std::f64::consts::PI);
        // half turn about (1, 1, 0) swaps x and y
        assert_relative_eq!(t.rotation * Vector3::x(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(t.translation.vector, Vector3::new(0., 0., 1.), epsilon = 1e-12);
        assert_relative_eq!(link.zero_transform(), origin, epsilon = 1e-12);
    }

    #[test]
    fn revolute_transform_about_x() {
        let link = UrdfLink::new(
            Isometry3::identity(),
            Vector3::x(),
            JointType::Revolute,
            1.0,
            Isometry3::identity(),
            rod_inertia(),
        )
        .unwrap();
        let t = link.transform(FRAC_PI_2);
        assert_relative_eq!(t.rotation * Vector3::y(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn prismatic_transform_translates_along_axis() {
        let origin = pose_from_rpy_xyz([0., 0., FRAC_PI_2], [1., 0., 0.]);
        let link = UrdfLink::new(
            origin,
            Vector3::new(0., 0., 3.),
            JointType::Prismatic,
            1.0,
            Isometry3::identity(),
            rod_inertia(),
        )
        .unwrap();
        let t = link.transform(0.25);
        assert_relative_eq!(t.translation.vector, Vector3::new(1., 0., 0.25), epsilon = 1e-12);
        assert_relative_eq!(t.rotation, origin.rotation, epsilon = 1e-12);
    }

    #[test]
    fn link_frame_inertia_uses_com_offset() {
        let com = pose_from_rpy_xyz([0., 0., 0.], [0., 0., 2.]);
        let link = Link::new(
            JointType::Revolute,
            3.0,
            com,
            Matrix3::identity(),
            Vector6::zeros(),
        );
        let g = link.link_frame_spatial_inertia();
        assert_relative_eq!(g[(0, 0)], 1. + 3. * 4., epsilon = 1e-12);
        assert_relative_eq!(g[(2, 2)], 1., epsilon = 1e-12);
        assert_relative_eq!(link.spatial_inertia()[(5, 5)], 3., epsilon = 1e-12);
    }
}
