//! Jacobian of the forward kinematics residual.
//!
//! The forward solver drives `|leg_i|^2 - L_i^2` to zero. Its Jacobian with respect to the
//! pose `(x, y, z, phi, theta, psi)` is derived by hand here: numerical differencing in
//! every Newton step would cost six more geometry evaluations per iteration.
//!
//! The three angular columns are placed as follows: the yaw partial in column 5, the
//! pitch partial in column 4 and the roll partial in column 3. This pairing is what the
//! solver relies on and must not be reordered. The pitch partial is exact only for a
//! level platform; [`mismatched_columns`] compares the analytic matrix against central
//! differences so that such deviations are visible.

use nalgebra::{Matrix3, Matrix6};

use crate::geometry::{AttachmentSet, Geometry, LegVectors, LEGS};
use crate::kinematic_traits::Pose;
use crate::kinematics_error::KinematicsError;

pub const PHI_COLUMN: usize = 3;
pub const THETA_COLUMN: usize = 4;
pub const PSI_COLUMN: usize = 5;

/// Jacobian rows for all legs, given the rotation and leg vectors already computed
/// for `pose`. Sign convention: derivative of the squared leg length.
pub(crate) fn residual_jacobian(
    pose: &Pose,
    rotation: &Matrix3<f64>,
    vectors: &LegVectors,
    platform: &AttachmentSet,
) -> Matrix6<f64> {
    let (sphi, _) = pose.phi.sin_cos();
    let (sth, cth) = pose.theta.sin_cos();
    let (spsi, cpsi) = pose.psi.sin_cos();
    let r_col2 = rotation.column(2);

    let mut jacobian = Matrix6::zeros();
    for i in 0..LEGS {
        let xbar = &vectors.xbar[i];
        let uvw = &vectors.uvw[i];
        let leg = &vectors.legs[i];
        let p = platform.point(i);

        // Translation enters only through the leg vector.
        jacobian[(i, 0)] = 2.0 * leg.x;
        jacobian[(i, 1)] = 2.0 * leg.y;
        jacobian[(i, 2)] = 2.0 * leg.z;

        jacobian[(i, PSI_COLUMN)] = 2.0 * (-xbar.x * uvw.y + xbar.y * uvw.x);
        jacobian[(i, THETA_COLUMN)] = 2.0
            * ((-xbar.x * cpsi + xbar.y * spsi) * uvw.z - (p.x * cth + p.y * sth * sphi) * xbar.z);
        jacobian[(i, PHI_COLUMN)] = 2.0 * p.y * xbar.dot(&r_col2);
    }
    jacobian
}

/// Analytic Jacobian of the squared leg lengths at the given pose.
pub fn analytic_jacobian(pose: &Pose, geometry: &Geometry) -> Result<Matrix6<f64>, KinematicsError> {
    check_pose(pose)?;
    let (rotation, vectors) = geometry.leg_vectors(pose);
    Ok(residual_jacobian(pose, &rotation, &vectors, &geometry.platform))
}

/// Central-difference Jacobian of the squared leg lengths, column j perturbing
/// pose component j by `epsilon`.
pub fn finite_difference_jacobian(
    pose: &Pose,
    geometry: &Geometry,
    epsilon: f64,
) -> Result<Matrix6<f64>, KinematicsError> {
    check_pose(pose)?;
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(KinematicsError::InvalidInput(format!(
            "differentiation step must be positive, got {}", epsilon
        )));
    }
    let center = pose.to_vector6();
    let mut jacobian = Matrix6::zeros();
    for column in 0..6 {
        let mut ahead = center;
        let mut behind = center;
        ahead[column] += epsilon;
        behind[column] -= epsilon;
        let (_, ahead) = geometry.leg_vectors(&Pose::from_vector6(&ahead));
        let (_, behind) = geometry.leg_vectors(&Pose::from_vector6(&behind));
        let derivative = (ahead.squared_lengths() - behind.squared_lengths()) / (2.0 * epsilon);
        jacobian.set_column(column, &derivative);
    }
    Ok(jacobian)
}

/// Columns where the analytic Jacobian disagrees with central differences by more than
/// `tolerance`, relative to the column magnitude (but at least 1). Empty if all agree.
pub fn mismatched_columns(
    pose: &Pose,
    geometry: &Geometry,
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<usize>, KinematicsError> {
    let analytic = analytic_jacobian(pose, geometry)?;
    let numeric = finite_difference_jacobian(pose, geometry, epsilon)?;
    Ok((0..6)
        .filter(|&column| {
            let deviation = (analytic.column(column) - numeric.column(column)).amax();
            let scale = numeric.column(column).amax().max(1.0);
            deviation / scale > tolerance
        })
        .collect())
}

fn check_pose(pose: &Pose) -> Result<(), KinematicsError> {
    if pose.is_finite() {
        Ok(())
    } else {
        Err(KinematicsError::InvalidInput(format!("pose is not finite: {:?}", pose)))
    }
}
