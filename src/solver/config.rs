use crate::error::*;
use crate::util::indexing::grid_cells;
use crate::util::*;

pub const DEFAULT_SIZE: usize = 7;
pub const DEFAULT_ITERATIONS: usize = 300;
pub const DEFAULT_DELTA: f32 = 1.0;

/// Threads to use when the caller does not say.
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Parameters for one solve, fixed once the solver is built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig {
    /// Edge length of the cube, odd and at least 3.
    pub size: usize,

    /// Number of Jacobi sweeps.
    pub iterations: usize,

    /// Worker threads in the solver's pool.
    pub threads: usize,

    /// Distance between neighboring voxels.
    pub delta: f32,

    /// Report sweep loop timing.
    pub debug: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
            threads: default_threads(),
            delta: DEFAULT_DELTA,
            debug: false,
        }
    }
}

impl SolverConfig {
    pub fn new(size: usize) -> Self {
        SolverConfig {
            size,
            ..Default::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_delta(mut self, delta: f32) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size % 2 == 0 {
            return Err(PoissonError::EvenSize(self.size));
        }
        if self.size < 3 {
            return Err(PoissonError::SizeTooSmall(self.size));
        }
        if grid_cells(self.size).is_none() {
            return Err(PoissonError::Allocation { size: self.size });
        }
        if self.threads == 0 {
            return Err(PoissonError::NoThreads);
        }
        Ok(())
    }

    pub fn grid(&self) -> AABB<3> {
        AABB::cube(self.size)
    }

    /// Index of the center cell along every axis.
    pub fn center(&self) -> usize {
        self.size / 2
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.size, 7);
        assert_eq!(c.iterations, 300);
        assert!(c.threads >= 1);
        assert_eq!(c.delta, 1.0);
        assert!(!c.debug);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_even_size() {
        for n in [0, 2, 4, 100] {
            let err = SolverConfig::new(n).validate().unwrap_err();
            assert!(matches!(err, PoissonError::EvenSize(s) if s == n));
        }
    }

    #[test]
    fn rejects_tiny_size() {
        let err = SolverConfig::new(1).validate().unwrap_err();
        assert!(matches!(err, PoissonError::SizeTooSmall(1)));
    }

    #[test]
    fn rejects_unaddressable_size() {
        for n in [3000001, i32::MAX as usize + 2] {
            let err = SolverConfig::new(n).validate().unwrap_err();
            assert!(matches!(err, PoissonError::Allocation { size } if size == n));
        }
    }

    #[test]
    fn rejects_zero_threads() {
        let err = SolverConfig::new(5).with_threads(0).validate().unwrap_err();
        assert!(matches!(err, PoissonError::NoThreads));
    }

    #[test]
    fn builder() {
        let c = SolverConfig::new(9)
            .with_iterations(0)
            .with_threads(3)
            .with_delta(0.5)
            .with_debug(true);
        assert_eq!(c.iterations, 0);
        assert_eq!(c.threads, 3);
        assert_eq!(c.delta, 0.5);
        assert!(c.debug);
        assert_eq!(c.center(), 4);
        assert_eq!(c.grid().buffer_size(), 729);
        assert!(c.validate().is_ok());
    }
}
