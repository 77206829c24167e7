use crate::solver::*;
use clap::Parser;

/// Solve a 3D discrete Poisson equation with Neumann boundaries
/// by Jacobi relaxation, from a point source at the center of the cube.
/// Prints the middle slice of the resulting field.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Size of one edge of the cube, must be odd.
    #[arg(short = 'n', long = "size", default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Number of Jacobi sweeps.
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// The number of threads to use, defaults to available parallelism.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Distance between voxels.
    #[arg(short, long, default_value_t = DEFAULT_DELTA)]
    pub delta: f32,

    /// Print build info, configuration and sweep timing.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn config(&self) -> SolverConfig {
        SolverConfig {
            size: self.size,
            iterations: self.iterations,
            threads: self.threads.unwrap_or_else(default_threads),
            delta: self.delta,
            debug: self.debug,
        }
    }
}
