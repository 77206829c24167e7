use crate::boundary::*;
use crate::stencil::*;
use crate::util::*;

/// Weighted neighbor offsets for every cell of one region.
/// Out of grid neighbors are folded into their mirror image,
/// so a face stencil has 5 terms, an edge 4 and a corner 3.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionStencil {
    region: Region,
    len: usize,
    offsets: [Coord<3>; 6],
    weights: [f32; 6],
    linear_offsets: [isize; 6],
}

impl RegionStencil {
    /// Build the stencil for `region`,
    /// with linear offsets for the buffer layout of `grid`.
    pub fn new(region: Region, grid: &AABB<3>) -> Self {
        let mut result = RegionStencil {
            region,
            len: 0,
            offsets: [Coord::zero(); 6],
            weights: [0.0; 6],
            linear_offsets: [0; 6],
        };

        for axis in 0..3 {
            match region.extents[axis].missing_direction() {
                None => {
                    result.push(axis_direction(axis, -1), 1.0, grid);
                    result.push(axis_direction(axis, 1), 1.0, grid);
                }
                Some(missing) => {
                    result.push(axis_direction(axis, -missing), 2.0, grid);
                }
            }
        }
        debug_assert!(result.len == 6 - region.boundary_axes());
        result
    }

    fn push(&mut self, offset: Coord<3>, weight: f32, grid: &AABB<3>) {
        self.offsets[self.len] = offset;
        self.weights[self.len] = weight;
        self.linear_offsets[self.len] = grid.offset_to_linear(&offset);
        self.len += 1;
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn offsets(&self) -> &[Coord<3>] {
        &self.offsets[0..self.len]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights[0..self.len]
    }

    /// Sum of all weights, reflection doubling included.
    pub fn weight_sum(&self) -> f32 {
        self.weights().iter().sum()
    }

    /// One Jacobi update for the cell at `linear`.
    /// Reads only `current` and `source`.
    #[inline]
    pub fn apply(
        &self,
        current: &[f32],
        source: &[f32],
        linear: usize,
        delta_sq: f32,
    ) -> f32 {
        let mut v = 0.0;
        for t in 0..self.len {
            let neighbor = (linear as isize + self.linear_offsets[t]) as usize;
            v += self.weights[t] * current[neighbor];
        }
        v -= delta_sq * source[linear];
        v / STENCIL_WEIGHT
    }
}
