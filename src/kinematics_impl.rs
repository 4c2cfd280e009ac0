use crate::forward::{self, ForwardSolution, SolverConfig};
use crate::geometry::Geometry;
use crate::kinematic_traits::{Kinematics, LegLengths, Pose};
use crate::kinematics_error::KinematicsError;
use crate::parameters::Parameters;

/// Leg lengths that place the platform into the given pose. Closed form: the length of
/// leg i is the norm of the vector from base attachment i to platform attachment i.
pub fn compute_inverse_kinematics(pose: &Pose, geometry: &Geometry) -> Result<LegLengths, KinematicsError> {
    if !pose.is_finite() {
        return Err(KinematicsError::InvalidInput(format!("pose is not finite: {:?}", pose)));
    }
    let (_, vectors) = geometry.leg_vectors(pose);
    Ok(vectors.lengths())
}

/// Platform pose for the given leg lengths. Without `config`, the defaults of
/// [`SolverConfig`] are used.
pub fn compute_forward_kinematics(
    lengths: &LegLengths,
    geometry: &Geometry,
    config: Option<&SolverConfig>,
) -> Result<ForwardSolution, KinematicsError> {
    let config = config.copied().unwrap_or_default();
    forward::solve(lengths, geometry, &config, &config.initial_guess)
}

/// Stewart platform with fixed geometry and solver configuration.
#[derive(Debug, Clone)]
pub struct StewartKinematics {
    geometry: Geometry,
    config: SolverConfig,
}

impl StewartKinematics {
    /// Creates the kinematics from platform parameters, with the default solver configuration.
    pub fn new(parameters: Parameters) -> Result<Self, KinematicsError> {
        Ok(StewartKinematics::from_geometry(parameters.geometry()?))
    }

    pub fn from_geometry(geometry: Geometry) -> Self {
        StewartKinematics { geometry, config: SolverConfig::default() }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Kinematics for StewartKinematics {
    fn inverse(&self, pose: &Pose) -> Result<LegLengths, KinematicsError> {
        compute_inverse_kinematics(pose, &self.geometry)
    }

    fn forward(&self, lengths: &LegLengths) -> Result<ForwardSolution, KinematicsError> {
        forward::solve(lengths, &self.geometry, &self.config, &self.config.initial_guess)
    }

    fn forward_continuing(
        &self,
        lengths: &LegLengths,
        previous: &Pose,
    ) -> Result<ForwardSolution, KinematicsError> {
        forward::solve(lengths, &self.geometry, &self.config, previous)
    }
}
