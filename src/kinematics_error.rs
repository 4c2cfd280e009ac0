//! Errors reported by the kinematic solvers

use thiserror::Error;

use crate::kinematic_traits::Pose;

/// Failures of inverse or forward kinematics. Reaching the iteration limit
/// is not an error: it is reported as a non-converged `ForwardSolution`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// Non-finite or structurally malformed input, detected before any computation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The Newton-Raphson linear system could not be solved at this estimate.
    #[error("Singular Jacobian at iteration {iteration} ({pose})")]
    SingularJacobian { iteration: u32, pose: Pose },
}
