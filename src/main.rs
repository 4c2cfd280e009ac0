//! Command line front end: inverse and forward kinematics of a Stewart platform.
//!
//! - `ik`: leg lengths for a pose
//! - `fk`: pose for leg lengths
//! - `sweep`: repeated warm-started forward solutions while one leg extends

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rs_stewart_kinematics::forward::SolverConfig;
use rs_stewart_kinematics::kinematic_traits::{Kinematics, Pose, HOME_POSE};
use rs_stewart_kinematics::kinematics_impl::StewartKinematics;
use rs_stewart_kinematics::parameters::Parameters;
use rs_stewart_kinematics::utils::{dump_lengths, dump_pose, leg_lengths};

/// Stewart platform kinematics.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// YAML file with the `stewart_platform` section and optional `forward_solver` section.
    /// The built-in reference platform is used if not given.
    #[arg(short, long, global = true)]
    parameters: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Leg lengths for the given pose.
    Ik {
        /// x y z phi theta psi
        #[arg(long, num_args = 6, allow_negative_numbers = true, required = true)]
        pose: Vec<f64>,

        /// Angles are given in degrees rather than radians.
        #[arg(short, long)]
        degrees: bool,
    },

    /// Pose for the given leg lengths.
    Fk {
        /// Six leg lengths.
        #[arg(long, num_args = 6, required = true)]
        lengths: Vec<f64>,
    },

    /// Extend leg 0 step by step, each forward solution starting from the previous pose.
    Sweep {
        /// Number of cycles.
        #[arg(short, long, default_value_t = 10)]
        cycles: u32,

        /// Extension of leg 0 per cycle.
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,

        /// Length of all legs in the first cycle.
        #[arg(long, default_value_t = 122.759)]
        start: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let platform = load_platform(cli.parameters.as_deref())?;

    match cli.command {
        Commands::Ik { pose, degrees } => {
            let [x, y, z, phi, theta, psi]: [f64; 6] = pose
                .as_slice()
                .try_into()
                .context("pose needs exactly six values")?;
            let pose = if degrees {
                Pose::from_degrees(x, y, z, phi, theta, psi)
            } else {
                Pose::new(x, y, z, phi, theta, psi)
            };
            let lengths = platform.inverse(&pose).context("inverse kinematics failed")?;
            dump_lengths(&lengths);
        }
        Commands::Fk { lengths } => {
            let lengths = leg_lengths(&lengths)?;
            let solution = platform.forward(&lengths).context("forward kinematics failed")?;
            if !solution.converged {
                warn!(
                    "No convergence after {} iterations ({:?}), residual {:.3e}, last estimate follows",
                    solution.iterations, solution.termination, solution.force()
                );
            } else {
                info!("Converged in {} iterations ({:?})", solution.iterations, solution.termination);
            }
            dump_pose(&solution.pose);
        }
        Commands::Sweep { cycles, step, start } => sweep(&platform, cycles, step, start)?,
    }
    Ok(())
}

fn load_platform(path: Option<&Path>) -> Result<StewartKinematics> {
    let Some(path) = path else {
        debug!("Using the reference platform");
        return Ok(StewartKinematics::new(Parameters::reference())?);
    };
    let parameters = Parameters::from_yaml_file(path)
        .with_context(|| format!("cannot read platform parameters from {}", path.display()))?;
    let config = SolverConfig::from_yaml_file(path)
        .with_context(|| format!("cannot read solver configuration from {}", path.display()))?;
    info!("Platform parameters:\n{}", parameters.to_yaml());
    Ok(StewartKinematics::new(parameters)?.with_config(config))
}

fn sweep(platform: &StewartKinematics, cycles: u32, step: f64, start: f64) -> Result<()> {
    let mut previous = HOME_POSE;
    let mut total_iterations = 0;
    let started = Instant::now();

    for cycle in 0..cycles {
        let mut lengths = [start; 6];
        lengths[0] += step * cycle as f64;

        let solution = platform
            .forward_continuing(&lengths, &previous)
            .with_context(|| format!("forward kinematics failed in cycle {}", cycle))?;
        if !solution.converged {
            warn!("Cycle {}: no convergence ({:?})", cycle, solution.termination);
        }
        total_iterations += solution.iterations;

        print!("{:4} {:3} ", cycle, solution.iterations);
        dump_pose(&solution.pose);
        previous = solution.pose;
    }

    let elapsed = started.elapsed();
    info!(
        "{} cycles, {} iterations in {:?} ({:?} per cycle)",
        cycles,
        total_iterations,
        elapsed,
        elapsed / cycles.max(1)
    );
    Ok(())
}
