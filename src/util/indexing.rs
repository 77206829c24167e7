use crate::util::*;

/// Linear offset of `(i, j, k)` in an `n x n x n` grid.
/// `k` varies fastest, then `j`, then `i`.
/// Every buffer in the crate (source, current, next) uses this layout.
#[inline]
pub fn grid_index(i: usize, j: usize, k: usize, n: usize) -> usize {
    debug_assert!(i < n && j < n && k < n, "({i}, {j}, {k}) outside n={n}");
    n * (n * i + j) + k
}

pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    let mut accumulator = 1;
    for d in exclusive_bound {
        accumulator *= *d as usize;
    }
    accumulator
}

/// Cells in an `n x n x n` grid, if every coordinate fits in a `Coord`
/// and the `f32` buffer size is addressable.
pub fn grid_cells(n: usize) -> Option<usize> {
    if n > i32::MAX as usize {
        return None;
    }
    let cells = n.checked_pow(3)?;
    cells.checked_mul(std::mem::size_of::<f32>())?;
    Some(cells)
}

pub fn checked_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> Option<usize> {
    exclusive_bound
        .iter()
        .try_fold(1usize, |accumulator, d| accumulator.checked_mul(*d as usize))
}

/// General form of `grid_index`, highest dimension goes the fastest.
pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        debug_assert!(coord[d] < exclusive_bounds[d]);
        accumulator = accumulator * exclusive_bounds[d] as usize
            + coord[d] as usize;
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zero();
    let mut index_accumulator = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (index_accumulator % extent) as i32;
        index_accumulator /= extent;
    }
    result
}
