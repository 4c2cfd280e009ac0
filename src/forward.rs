//! Forward kinematics: Newton-Raphson on the six leg length equations.
//!
//! There is no closed form for the forward problem of a 6-6 platform. Starting from an
//! initial guess, every iteration evaluates the residual `f_i = -(|leg_i|^2 - L_i^2)`,
//! builds the analytic Jacobian and solves `J * delta = f` for the pose update.
//! The iteration stops when the summed absolute residual falls below the force tolerance,
//! when the summed update falls below the step tolerance, or when the iteration limit is
//! reached. The solver does not search for a good starting point.

use nalgebra::Vector6;

use crate::geometry::Geometry;
use crate::jacobian::residual_jacobian;
use crate::kinematic_traits::{LegLengths, Pose, HOME_POSE};
use crate::kinematics_error::KinematicsError;

/// Configuration of the forward solver. Each field can be overridden independently,
/// the rest keep the defaults.
/// ```
/// use rs_stewart_kinematics::forward::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_force_tolerance(1e-9)
///     .with_max_iterations(50);
/// assert_eq!(config.step_tolerance, 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Starting estimate when no previous pose is given.
    pub initial_guess: Pose,

    /// Stop when the sum of absolute residuals (squared length units) is below this.
    /// A stop on this criterion alone may still leave some pose error.
    pub force_tolerance: f64,

    /// Stop when the absolute value of the summed update vector is below this.
    pub step_tolerance: f64,

    /// Upper bound of Newton iterations for a single call.
    pub max_iterations: u32,

    /// If set, give up after this many consecutive iterations with a growing residual.
    pub divergence_limit: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            initial_guess: HOME_POSE,
            force_tolerance: 1e-3,
            step_tolerance: 1e-3,
            max_iterations: 1000,
            divergence_limit: None,
        }
    }
}

impl SolverConfig {
    pub fn with_initial_guess(mut self, initial_guess: Pose) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    pub fn with_force_tolerance(mut self, force_tolerance: f64) -> Self {
        self.force_tolerance = force_tolerance;
        self
    }

    pub fn with_step_tolerance(mut self, step_tolerance: f64) -> Self {
        self.step_tolerance = step_tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_divergence_limit(mut self, divergence_limit: Option<u32>) -> Self {
        self.divergence_limit = divergence_limit;
        self
    }

    pub fn validate(&self) -> Result<(), KinematicsError> {
        for (name, value) in [
            ("force_tolerance", self.force_tolerance),
            ("step_tolerance", self.step_tolerance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(KinematicsError::InvalidInput(format!(
                    "{} must be positive and finite, got {}", name, value
                )));
            }
        }
        if self.max_iterations == 0 {
            return Err(KinematicsError::InvalidInput("max_iterations must be at least 1".into()));
        }
        if self.divergence_limit == Some(0) {
            return Err(KinematicsError::InvalidInput("divergence_limit must be at least 1".into()));
        }
        if !self.initial_guess.is_finite() {
            return Err(KinematicsError::InvalidInput(format!(
                "initial guess is not finite: {:?}", self.initial_guess
            )));
        }
        Ok(())
    }
}

/// Why the forward solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Summed absolute residual below `force_tolerance`.
    ForceTolerance,
    /// Summed update below `step_tolerance`. The returned pose already includes
    /// that last update.
    StepTolerance,
    /// `max_iterations` reached without meeting either tolerance.
    IterationLimit,
    /// Residual kept growing for `divergence_limit` iterations in a row.
    Diverged,
}

/// Outcome of a forward kinematics call. When `converged` is false, `pose` is the
/// last estimate and may still be useful to a control loop that prefers an
/// approximate pose over none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardSolution {
    pub pose: Pose,
    pub iterations: u32,
    pub converged: bool,
    pub termination: Termination,
    /// Residual vector `L_i^2 - |leg_i|^2` at the returned pose.
    pub residual: Vector6<f64>,
}

impl ForwardSolution {
    fn new(pose: Pose, iterations: u32, termination: Termination, residual: Vector6<f64>) -> Self {
        let converged = matches!(termination, Termination::ForceTolerance | Termination::StepTolerance);
        ForwardSolution { pose, iterations, converged, termination, residual }
    }

    /// Sum of absolute residuals, the quantity compared against `force_tolerance`.
    pub fn force(&self) -> f64 {
        self.residual.iter().map(|f| f.abs()).sum()
    }
}

/// Checks that all six leg lengths are finite and strictly positive.
pub fn validate_lengths(lengths: &LegLengths) -> Result<(), KinematicsError> {
    for (leg, &length) in lengths.iter().enumerate() {
        if !(length.is_finite() && length > 0.0) {
            return Err(KinematicsError::InvalidInput(format!(
                "leg {} length must be positive and finite, got {}", leg, length
            )));
        }
    }
    Ok(())
}

/// Runs the Newton-Raphson iteration from `start`.
pub fn solve(
    lengths: &LegLengths,
    geometry: &Geometry,
    config: &SolverConfig,
    start: &Pose,
) -> Result<ForwardSolution, KinematicsError> {
    validate_lengths(lengths)?;
    config.validate()?;
    if !start.is_finite() {
        return Err(KinematicsError::InvalidInput(format!("start pose is not finite: {:?}", start)));
    }

    let targets = Vector6::from_fn(|i, _| lengths[i] * lengths[i]);
    let mut estimate = start.to_vector6();
    let mut previous_force = f64::INFINITY;
    let mut growing = 0;
    let mut iteration = 0;

    while iteration < config.max_iterations {
        iteration += 1;

        let pose = Pose::from_vector6(&estimate);
        let (rotation, vectors) = geometry.leg_vectors(&pose);
        let residual = targets - vectors.squared_lengths();
        let force: f64 = residual.iter().map(|f| f.abs()).sum();

        if force < config.force_tolerance {
            return Ok(ForwardSolution::new(pose, iteration, Termination::ForceTolerance, residual));
        }

        if let Some(limit) = config.divergence_limit {
            growing = if force > previous_force { growing + 1 } else { 0 };
            if growing >= limit {
                return Ok(ForwardSolution::new(pose, iteration, Termination::Diverged, residual));
            }
        }
        previous_force = force;

        let jacobian = residual_jacobian(&pose, &rotation, &vectors, &geometry.platform);
        let step = jacobian
            .lu()
            .solve(&residual)
            .filter(|step| step.iter().all(|s| s.is_finite()))
            .ok_or(KinematicsError::SingularJacobian { iteration, pose })?;

        estimate += step;
        if step.sum().abs() < config.step_tolerance {
            return Ok(finish(&estimate, geometry, &targets, iteration, Termination::StepTolerance));
        }
    }

    Ok(finish(&estimate, geometry, &targets, iteration, Termination::IterationLimit))
}

/// Solution at an estimate that has not been evaluated yet.
fn finish(
    estimate: &Vector6<f64>,
    geometry: &Geometry,
    targets: &Vector6<f64>,
    iterations: u32,
    termination: Termination,
) -> ForwardSolution {
    let pose = Pose::from_vector6(estimate);
    let (_, vectors) = geometry.leg_vectors(&pose);
    ForwardSolution::new(pose, iterations, termination, targets - vectors.squared_lengths())
}
