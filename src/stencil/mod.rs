//! The 7-point Jacobi stencil for the Poisson equation
//! with Neumann (mirror) boundaries.
//!
//! Every region of the grid gets its own `RegionStencil`.
//! Neighbors that fall outside the grid are replaced by the
//! inward neighbor on the same axis with its weight doubled,
//! so every stencil carries six weighted contributions.

mod neumann;
mod region_stencil;

pub use neumann::*;
pub use region_stencil::*;

use crate::util::*;

/// Unit offsets to the six axis neighbors.
pub const AXIS_DIRECTIONS: [[i32; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// Total weight every stencil must carry before the divide.
pub const STENCIL_WEIGHT: f32 = 6.0;

pub fn axis_direction(axis: usize, sign: i32) -> Coord<3> {
    let mut result = Coord::zero();
    result[axis] = sign;
    result
}
