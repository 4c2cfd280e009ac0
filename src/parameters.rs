//! Defines the platform parameter data structure

use nalgebra::Vector3;

use crate::geometry::{AttachmentSet, Geometry};
use crate::kinematics_error::KinematicsError;

/// Parameters of the platform. Attachment points of each plate lie on a circle around
/// the plate's vertical axis. See [parameters_platforms.rs](parameters_platforms.rs)
/// for concrete platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Angular placement of the six base attachment points, in degrees from the x axis.
    pub base_angles: [f64; 6],

    /// Radius of the circle the base attachment points lie on.
    pub base_radius: f64,

    /// Height (z) of the base attachment points in the base frame.
    pub base_height: f64,

    /// Angular placement of the six platform attachment points, in degrees, in the platform frame.
    pub platform_angles: [f64; 6],

    /// Radius of the circle the platform attachment points lie on.
    pub platform_radius: f64,

    /// Height (z) of the platform attachment points in the platform frame.
    pub platform_height: f64,
}

impl Parameters {
    /// Attachment geometry: point i of a plate is at `(r cos a_i, r sin a_i, h)`.
    pub fn geometry(&self) -> Result<Geometry, KinematicsError> {
        for (name, radius) in [("base_radius", self.base_radius), ("platform_radius", self.platform_radius)] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(KinematicsError::InvalidInput(format!(
                    "{} must be positive and finite, got {}", name, radius
                )));
            }
        }
        Ok(Geometry::new(
            circle(&self.base_angles, self.base_radius, self.base_height)?,
            circle(&self.platform_angles, self.platform_radius, self.platform_height)?,
        ))
    }

    /// Convert to string yaml representation (quick viewing, etc).
    pub fn to_yaml(&self) -> String {
        format!(
            "stewart_platform:\n  \
              base_angles: [{}]\n  \
              base_radius: {}\n  \
              base_height: {}\n  \
              platform_angles: [{}]\n  \
              platform_radius: {}\n  \
              platform_height: {}\n",
            join(&self.base_angles),
            self.base_radius,
            self.base_height,
            join(&self.platform_angles),
            self.platform_radius,
            self.platform_height
        )
    }
}

fn circle(angles: &[f64; 6], radius: f64, height: f64) -> Result<AttachmentSet, KinematicsError> {
    AttachmentSet::new(angles.map(|a| {
        let (sin, cos) = a.to_radians().sin_cos();
        Vector3::new(radius * cos, radius * sin, height)
    }))
}

fn join(values: &[f64; 6]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
