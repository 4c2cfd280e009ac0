//! Helper functions

use crate::kinematic_traits::{LegLengths, Pose};
use crate::kinematics_error::KinematicsError;

/// Leg lengths from a slice that must have exactly six elements.
pub fn leg_lengths(values: &[f64]) -> Result<LegLengths, KinematicsError> {
    values.try_into().map_err(|_| {
        KinematicsError::InvalidInput(format!("expected 6 leg lengths, found {}", values.len()))
    })
}

/// Largest absolute difference between corresponding pose components
/// (translation units and radians mixed, as the solver tolerances are).
pub fn pose_error(a: &Pose, b: &Pose) -> f64 {
    (a.to_vector6() - b.to_vector6()).amax()
}

/// Print the pose, angles converted to degrees.
pub fn dump_pose(pose: &Pose) {
    println!("{}", pose);
}

/// Print leg lengths.
pub fn dump_lengths(lengths: &LegLengths) {
    let mut row_str = String::new();
    for length in lengths {
        row_str.push_str(&format!("{:9.4} ", length));
    }
    println!("[{}]", row_str.trim_end());
}
