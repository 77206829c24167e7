pub use nalgebra::{matrix, vector};
pub use num_traits::{One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive (min, max) pair per dimension, one row per dimension.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
