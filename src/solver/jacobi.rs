use crate::domain::*;
use crate::error::*;
use crate::par_stencil;
use crate::solver::*;
use crate::stencil::*;
use std::time::{Duration, Instant};

/// Where a solver is in its sweep loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolverState {
    /// Built, no sweep run yet.
    Idle,
    /// The last sweep finished and next became current.
    Swapped,
    /// All configured sweeps have run.
    Done,
}

/// Jacobi relaxation of the Poisson equation on a cube
/// with Neumann boundaries.
///
/// Both solution buffers and the thread pool are created in `new`,
/// so no allocation happens once sweeping starts.
pub struct JacobiSolver<'a> {
    config: SolverConfig,
    source: &'a OwnedDomain<3>,
    stencil: NeumannStencil,
    buffers: BufferPair<3>,
    pool: rayon::ThreadPool,
    state: SolverState,
    sweeps: usize,
}

impl<'a> JacobiSolver<'a> {
    pub fn new(config: SolverConfig, source: &'a OwnedDomain<3>) -> Result<Self> {
        config.validate()?;
        let grid = config.grid();
        if *source.aabb() != grid {
            return Err(PoissonError::SourceShape {
                expected: grid.buffer_size(),
                found: source.aabb().buffer_size(),
            });
        }

        let buffers = BufferPair::new(grid)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;

        Ok(JacobiSolver {
            config,
            source,
            stencil: NeumannStencil::new(config.size, config.delta),
            buffers,
            pool,
            state: SolverState::Idle,
            sweeps: 0,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn sweeps_completed(&self) -> usize {
        self.sweeps
    }

    /// The buffer the next sweep will read from.
    pub fn current(&self) -> &OwnedDomain<3> {
        self.buffers.current()
    }

    /// Run one sweep and swap the buffers.
    pub fn sweep(&mut self) {
        profiling::scope!("jacobi::sweep");
        let (current, next) = self.buffers.split();
        let stencil = &self.stencil;
        let source = self.source;
        self.pool
            .install(|| par_stencil::apply(stencil, source, current, next));

        // All region tasks have joined, next is complete.
        self.buffers.swap();
        self.sweeps += 1;
        self.state = SolverState::Swapped;
    }

    /// Run every configured sweep and hand back the final field.
    pub fn solve(mut self) -> OwnedDomain<3> {
        let elapsed = self.run();
        if self.config.debug {
            println!("Duration: {}", elapsed.as_micros());
        }
        self.buffers.into_current()
    }

    /// Sweep loop only, returns its wall clock duration.
    fn run(&mut self) -> Duration {
        profiling::scope!("jacobi::solve");
        let start = Instant::now();
        for _ in 0..self.config.iterations {
            self.sweep();
        }
        self.state = SolverState::Done;
        start.elapsed()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::init;
    use crate::util::*;
    use float_cmp::assert_approx_eq;

    fn center_source(n: usize) -> OwnedDomain<3> {
        init::point_source(n).unwrap()
    }

    #[test]
    fn state_transitions() {
        let config = SolverConfig::new(5).with_iterations(2).with_threads(2);
        let source = center_source(5);
        let mut solver = JacobiSolver::new(config, &source).unwrap();
        assert_eq!(solver.state(), SolverState::Idle);
        solver.sweep();
        assert_eq!(solver.state(), SolverState::Swapped);
        assert_eq!(solver.sweeps_completed(), 1);
        solver.run();
        assert_eq!(solver.state(), SolverState::Done);
        assert_eq!(solver.sweeps_completed(), 3);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let config = SolverConfig::new(5).with_iterations(0).with_threads(1);
        let source = center_source(5);
        let result = JacobiSolver::new(config, &source).unwrap().solve();
        assert_eq!(result.aabb(), &AABB::cube(5));
        assert!(result.buffer().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn first_sweep_only_touches_center() {
        let config = SolverConfig::new(3).with_iterations(1).with_threads(1);
        let source = center_source(3);
        let mut solver = JacobiSolver::new(config, &source).unwrap();
        solver.sweep();
        let current = solver.current();
        assert_approx_eq!(f32, current.view(&vector![1, 1, 1]), -1.0 / 6.0);
        let nonzero = current.buffer().iter().filter(|v| **v != 0.0).count();
        assert_eq!(nonzero, 1);
    }

    #[test]
    fn rejects_mismatched_source() {
        let config = SolverConfig::new(5);
        let source = center_source(3);
        let err = JacobiSolver::new(config, &source).err().unwrap();
        assert!(matches!(
            err,
            PoissonError::SourceShape {
                expected: 125,
                found: 27
            }
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let source = center_source(3);
        let config = SolverConfig::new(4);
        assert!(matches!(
            JacobiSolver::new(config, &source).err().unwrap(),
            PoissonError::EvenSize(4)
        ));
    }
}
