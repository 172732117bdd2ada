use nalgebra::{
    Isometry3, Matrix3, Matrix6, Point3, Translation3, UnitQuaternion, Vector3, Vector6,
};

use crate::error::{Error, Result};

/// `a` followed by `b`.
pub fn compose_transform(a: &Isometry3<f64>, b: &Isometry3<f64>) -> Isometry3<f64> {
    a * b
}

/// Screw axis `(w, v)` of a unit rotation about `axis` through `point`.
///
/// `axis` need not be normalized but must have non-zero length.
pub fn unit_twist(axis: &Vector3<f64>, point: &Vector3<f64>) -> Result<Vector6<f64>> {
    let w = axis.try_normalize(f64::EPSILON).ok_or(Error::DegenerateAxis)?;
    let v = -w.cross(point);
    Ok(Vector6::new(w.x, w.y, w.z, v.x, v.y, v.z))
}

pub fn point_to_vector(point: &Point3<f64>) -> Vector3<f64> {
    point.coords
}

pub fn vector_to_point(vector: &Vector3<f64>) -> Point3<f64> {
    Point3::from(*vector)
}

/// URDF `<origin rpy xyz>` to a rigid transform. Rotation is
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`.
pub fn pose_from_rpy_xyz(rpy: [f64; 3], xyz: [f64; 3]) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::new(xyz[0], xyz[1], xyz[2]),
        UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
    )
}

pub(crate) fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(0., -v.z, v.y, v.z, 0., -v.x, -v.y, v.x, 0.)
}

/// Adjoint map of `pose` acting on `(angular, linear)` twists.
pub fn adjoint(pose: &Isometry3<f64>) -> Matrix6<f64> {
    let r = pose.rotation.to_rotation_matrix().into_inner();
    let p = pose.translation.vector;
    let mut ad = Matrix6::zeros();
    ad.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
    ad.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
    ad.fixed_view_mut::<3, 3>(3, 0).copy_from(&(skew(&p) * r));
    ad
}
