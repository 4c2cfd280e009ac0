//! Core types shared by the solvers: the platform pose, leg lengths and the kinematics trait.

use std::fmt;

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3, Vector6};

use crate::forward::ForwardSolution;
use crate::kinematics_error::KinematicsError;

/// Lengths of the six legs, index-aligned with the attachment points
/// (leg i connects base point i with platform point i).
pub type LegLengths = [f64; 6];

/// Pose of the mobile platform relative to the base.
///
/// `x`, `y`, `z` is the platform origin in the base frame. The angles are in radians
/// and follow the 3-2-1 (yaw-pitch-roll) convention: the platform-frame vector `v`
/// maps into the base frame as `Rz(psi) * Ry(theta) * Rx(phi) * v`.
/// ```
/// use rs_stewart_kinematics::kinematic_traits::Pose;
///
/// let pose = Pose::new(0.0, 0.0, 100.0, 0.0, 0.0, 5.0_f64.to_radians());
/// let isometry = pose.to_isometry();
/// assert_eq!(isometry.translation.vector.z, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Roll, rotation about the x axis.
    pub phi: f64,
    /// Pitch, rotation about the y axis.
    pub theta: f64,
    /// Yaw, rotation about the z axis.
    pub psi: f64,
}

/// The home pose the forward solver starts from when nothing better is known:
/// level platform 100 units above the base origin.
pub const HOME_POSE: Pose = Pose { x: 0.0, y: 0.0, z: 100.0, phi: 0.0, theta: 0.0, psi: 0.0 };

impl Pose {
    pub const fn new(x: f64, y: f64, z: f64, phi: f64, theta: f64, psi: f64) -> Self {
        Pose { x, y, z, phi, theta, psi }
    }

    /// Same as `new` but the angles are given in degrees.
    pub fn from_degrees(x: f64, y: f64, z: f64, phi: f64, theta: f64, psi: f64) -> Self {
        Pose::new(x, y, z, phi.to_radians(), theta.to_radians(), psi.to_radians())
    }

    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Solver state vector in the order x, y, z, phi, theta, psi.
    pub fn to_vector6(&self) -> Vector6<f64> {
        Vector6::new(self.x, self.y, self.z, self.phi, self.theta, self.psi)
    }

    pub fn from_vector6(v: &Vector6<f64>) -> Self {
        Pose::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// Converts into nalgebra isometry (the representation used by serial robot kinematics).
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(self.x, self.y, self.z),
            UnitQuaternion::from_euler_angles(self.phi, self.theta, self.psi),
        )
    }

    /// True if all six components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.to_vector6().iter().all(|c| c.is_finite())
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {:.5}, y: {:.5}, z: {:.5}, phi: {:.4}°, theta: {:.4}°, psi: {:.4}°",
            self.x,
            self.y,
            self.z,
            self.phi.to_degrees(),
            self.theta.to_degrees(),
            self.psi.to_degrees()
        )
    }
}

pub trait Kinematics {
    /// Closed form: leg lengths that put the platform into the given pose.
    fn inverse(&self, pose: &Pose) -> Result<LegLengths, KinematicsError>;

    /// Iterative: platform pose for the measured leg lengths, starting from the
    /// configured initial guess.
    fn forward(&self, lengths: &LegLengths) -> Result<ForwardSolution, KinematicsError>;

    /// Same as `forward` but starts from the previously known pose. In a control loop
    /// the pose of the previous cycle is normally the best available guess.
    fn forward_continuing(
        &self,
        lengths: &LegLengths,
        previous: &Pose,
    ) -> Result<ForwardSolution, KinematicsError>;
}
