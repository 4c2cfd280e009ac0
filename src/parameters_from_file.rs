//! Supports extracting platform parameters and solver configuration from YAML file (optional)

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::forward::SolverConfig;
use crate::kinematic_traits::Pose;
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;

#[derive(Deserialize)]
struct PlatformSection {
    pub base_angles: Vec<f64>,
    pub base_radius: f64,
    #[serde(default)]
    pub base_height: f64,
    pub platform_angles: Vec<f64>,
    pub platform_radius: f64,
    #[serde(default)]
    pub platform_height: f64,
}

#[derive(Deserialize)]
struct SolverSection {
    #[serde(default)]
    pub initial_guess: Option<Vec<f64>>,
    #[serde(default)]
    pub force_tolerance: Option<f64>,
    #[serde(default)]
    pub step_tolerance: Option<f64>,
    #[serde(default)]
    pub max_iterations: Option<u32>,
    #[serde(default)]
    pub divergence_limit: Option<u32>,
}

/// Both sections may share one file, each reader takes the section it needs.
#[derive(Deserialize)]
struct Root {
    #[serde(default)]
    pub stewart_platform: Option<PlatformSection>,
    #[serde(default)]
    pub forward_solver: Option<SolverSection>,
}

impl Parameters {
    /// Read the platform configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// stewart_platform:
    ///   base_angles: [15, 105, 135, 225, 255, 345]
    ///   base_radius: 50
    ///   base_height: 0
    ///   platform_angles: [45, 75, 165, 195, 285, 315]
    ///   platform_radius: 50
    ///   platform_height: 0
    /// ```
    /// Angles are in degrees. Heights are optional and default to 0.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let parameters = Parameters::from_yaml_str(&contents)?;
        debug!("Platform parameters read from {}", path.display());
        Ok(parameters)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let section = parse_root(contents)?
            .stewart_platform
            .ok_or_else(|| ParameterError::MissingField("stewart_platform".to_string()))?;

        let parameters = Parameters {
            base_angles: vec_to_six(section.base_angles, "base_angles")?,
            base_radius: section.base_radius,
            base_height: section.base_height,
            platform_angles: vec_to_six(section.platform_angles, "platform_angles")?,
            platform_radius: section.platform_radius,
            platform_height: section.platform_height,
        };

        // Radii and angles must produce a valid attachment geometry.
        parameters.geometry()?;
        Ok(parameters)
    }
}

impl SolverConfig {
    /// Read the forward solver configuration from YAML file:
    /// ```yaml
    /// forward_solver:
    ///   initial_guess: [0, 0, 100, 0, 0, 0]
    ///   force_tolerance: 0.001
    ///   step_tolerance: 0.001
    ///   max_iterations: 1000
    ///   divergence_limit: 20
    /// ```
    /// The section and every key in it are optional, missing values keep the defaults.
    /// The last three components of the initial guess are angles in degrees.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = SolverConfig::from_yaml_str(&contents)?;
        debug!("Solver configuration read from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let mut config = SolverConfig::default();
        let Some(section) = parse_root(contents)?.forward_solver else {
            return Ok(config);
        };

        if let Some(initial_guess) = section.initial_guess {
            let [x, y, z, phi, theta, psi] = vec_to_six(initial_guess, "initial_guess")?;
            config.initial_guess = Pose::from_degrees(x, y, z, phi, theta, psi);
        }
        if let Some(force_tolerance) = section.force_tolerance {
            config.force_tolerance = force_tolerance;
        }
        if let Some(step_tolerance) = section.step_tolerance {
            config.step_tolerance = step_tolerance;
        }
        if let Some(max_iterations) = section.max_iterations {
            config.max_iterations = max_iterations;
        }
        if section.divergence_limit.is_some() {
            config.divergence_limit = section.divergence_limit;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_root(contents: &str) -> Result<Root, ParameterError> {
    if contents.trim().is_empty() {
        return Err(ParameterError::ParseError("empty YAML document".to_string()));
    }
    serde_saphyr::from_str(contents).map_err(|e| ParameterError::ParseError(format!("{}", e)))
}

fn vec_to_six(values: Vec<f64>, field: &str) -> Result<[f64; 6], ParameterError> {
    let found = values.len();
    values.try_into().map_err(|_| ParameterError::InvalidLength {
        field: field.to_string(),
        expected: 6,
        found,
    })
}
