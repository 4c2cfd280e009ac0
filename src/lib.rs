//! Rust implementation of inverse and forward kinematics for Stewart-Gough platforms:
//! six-legged parallel mechanisms where a mobile platform is connected to a fixed base by six
//! independently actuated legs through spherical or universal joints.
//!
//! # Features
//!
//! - Inverse kinematics (pose to leg lengths) in closed form.
//! - Forward kinematics (leg lengths to pose) with Newton-Raphson iteration over an analytic
//!   Jacobian. Non-convergence is reported as a result carrying the last estimate, not as an error,
//!   since a control loop may prefer an approximate pose over none.
//! - Warm start of the forward solver from the previous pose (`forward_continuing`), the common
//!   case when the solver runs once per control cycle.
//! - Optional divergence abort when the residual keeps growing.
//! - Finite difference diagnostics of the analytic Jacobian.
//! - Platform parameters and solver configuration from YAML (feature `allow_filesystem`).
//!
//! # Conventions
//!
//! A pose is `(x, y, z, phi, theta, psi)`: the platform origin in the base frame and three angles
//! in radians. The rotation follows the 3-2-1 convention `Rz(psi) * Ry(theta) * Rx(phi)`, mapping
//! platform-frame vectors into the base frame. Leg i connects base attachment point i with
//! platform attachment point i.
//!
//! The solvers are pure functions of their inputs. Geometry is read-only and can be shared between
//! threads; every forward call keeps its iteration state to itself. The solvers perform no
//! singularity avoidance, no joint-limit checks and no trajectory planning.
//!
//! ```
//! use rs_stewart_kinematics::kinematic_traits::{Kinematics, Pose};
//! use rs_stewart_kinematics::kinematics_impl::StewartKinematics;
//! use rs_stewart_kinematics::parameters::Parameters;
//!
//! let platform = StewartKinematics::new(Parameters::reference()).unwrap();
//! let pose = Pose::from_degrees(1.0, -2.0, 104.0, 3.0, 0.0, -5.0);
//! let lengths = platform.inverse(&pose).unwrap();
//! let solution = platform.forward(&lengths).unwrap();
//! assert!(solution.converged);
//! ```

pub mod kinematic_traits;
pub mod kinematics_error;
pub mod geometry;
pub mod jacobian;
pub mod forward;
pub mod kinematics_impl;

pub mod parameters;
pub mod parameters_platforms;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;

#[cfg(test)]
mod tests;
