//! Rotation model and attachment geometry shared by inverse and forward kinematics.

use nalgebra::{Matrix3, Vector3, Vector6};

use crate::kinematic_traits::Pose;
use crate::kinematics_error::KinematicsError;

/// Number of legs (and attachment points on each plate).
pub const LEGS: usize = 6;

/// Builds the 3-2-1 rotation matrix `Rz(psi) * Ry(theta) * Rx(phi)`. The result maps
/// platform-frame vectors into the base frame orientation.
pub fn rotation_matrix(phi: f64, theta: f64, psi: f64) -> Matrix3<f64> {
    let (sphi, cphi) = phi.sin_cos();
    let (sth, cth) = theta.sin_cos();
    let (spsi, cpsi) = psi.sin_cos();

    Matrix3::new(
        cpsi * cth, cpsi * sth * sphi - spsi * cphi, cpsi * sth * cphi + spsi * sphi,
        spsi * cth, spsi * sth * sphi + cpsi * cphi, spsi * sth * cphi - cpsi * sphi,
        -sth, cth * sphi, cth * cphi,
    )
}

/// Exactly six attachment points of one plate, in that plate's own frame.
/// Can only be constructed with six finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentSet {
    points: [Vector3<f64>; LEGS],
}

impl AttachmentSet {
    pub fn new(points: [Vector3<f64>; LEGS]) -> Result<Self, KinematicsError> {
        if let Some(leg) = points.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(KinematicsError::InvalidInput(format!(
                "attachment point {} is not finite: {:?}", leg, points[leg]
            )));
        }
        Ok(AttachmentSet { points })
    }

    pub fn from_slice(points: &[Vector3<f64>]) -> Result<Self, KinematicsError> {
        let points: [Vector3<f64>; LEGS] = points.try_into().map_err(|_| {
            KinematicsError::InvalidInput(format!(
                "expected {} attachment points, found {}", LEGS, points.len()
            ))
        })?;
        AttachmentSet::new(points)
    }

    pub fn points(&self) -> &[Vector3<f64>; LEGS] {
        &self.points
    }

    pub fn point(&self, leg: usize) -> &Vector3<f64> {
        &self.points[leg]
    }
}

impl TryFrom<&[Vector3<f64>]> for AttachmentSet {
    type Error = KinematicsError;

    fn try_from(points: &[Vector3<f64>]) -> Result<Self, Self::Error> {
        AttachmentSet::from_slice(points)
    }
}

impl TryFrom<Vec<Vector3<f64>>> for AttachmentSet {
    type Error = KinematicsError;

    fn try_from(points: Vec<Vector3<f64>>) -> Result<Self, Self::Error> {
        AttachmentSet::from_slice(&points)
    }
}

/// Base and platform attachment points. Leg i connects `base.point(i)` with
/// `platform.point(i)`. Fixed once the platform is built and shared read-only
/// by all solver calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub base: AttachmentSet,
    pub platform: AttachmentSet,
}

impl Geometry {
    pub fn new(base: AttachmentSet, platform: AttachmentSet) -> Self {
        Geometry { base, platform }
    }

    /// Rotation matrix and per-leg vectors for the given pose.
    pub fn leg_vectors(&self, pose: &Pose) -> (Matrix3<f64>, LegVectors) {
        let rotation = rotation_matrix(pose.phi, pose.theta, pose.psi);
        let vectors = LegVectors::new(&rotation, &pose.translation(), self);
        (rotation, vectors)
    }
}

/// Per-leg vectors, all expressed in the base frame.
#[derive(Debug, Clone)]
pub struct LegVectors {
    /// Platform origin relative to the base attachment point: `translation - base_i`.
    pub xbar: [Vector3<f64>; LEGS],
    /// Platform attachment point rotated into base orientation, not translated: `R * platform_i`.
    pub uvw: [Vector3<f64>; LEGS],
    /// From base attachment i to platform attachment i: `xbar_i + uvw_i`.
    pub legs: [Vector3<f64>; LEGS],
}

impl LegVectors {
    pub fn new(rotation: &Matrix3<f64>, translation: &Vector3<f64>, geometry: &Geometry) -> Self {
        let xbar: [Vector3<f64>; LEGS] =
            std::array::from_fn(|i| translation - geometry.base.point(i));
        let uvw: [Vector3<f64>; LEGS] =
            std::array::from_fn(|i| rotation * geometry.platform.point(i));
        let legs = std::array::from_fn(|i| xbar[i] + uvw[i]);
        LegVectors { xbar, uvw, legs }
    }

    pub fn squared_lengths(&self) -> Vector6<f64> {
        Vector6::from_fn(|i, _| self.legs[i].norm_squared())
    }

    pub fn lengths(&self) -> [f64; LEGS] {
        std::array::from_fn(|i| self.legs[i].norm())
    }
}
