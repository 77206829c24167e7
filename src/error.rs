use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoissonError>;

#[derive(Error, Debug)]
pub enum PoissonError {
    #[error("n should be an odd number, got {0}")]
    EvenSize(usize),

    #[error("n should be at least 3, got {0}")]
    SizeTooSmall(usize),

    #[error("thread count should be at least 1")]
    NoThreads,

    #[error("source field has {found} cells, expected {expected}")]
    SourceShape { expected: usize, found: usize },

    #[error("failed to allocate a {size}x{size}x{size} grid")]
    Allocation { size: usize },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
