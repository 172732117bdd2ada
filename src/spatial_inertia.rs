use nalgebra::{Isometry3, Matrix3, Matrix6};

use crate::geometry::adjoint;

// angular block first, matching the (w, v) screw ordering
pub(super) fn com_spatial_inertia(inertia: &Matrix3<f64>, mass: f64) -> Matrix6<f64> {
    let mut g = Matrix6::from_diagonal_element(mass);
    g.fixed_view_mut::<3, 3>(0, 0).copy_from(inertia);
    g
}

pub(super) fn to_link_spatial_inertia(
    center_of_mass: &Isometry3<f64>,
    inertia: &Matrix3<f64>,
    mass: f64,
) -> Matrix6<f64> {
    let g_com = com_spatial_inertia(inertia, mass);
    let ad_com_link = adjoint(&center_of_mass.inverse());
    ad_com_link.transpose() * g_com * ad_com_link
}
