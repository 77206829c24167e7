use crate::error::*;
use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This class is responsible for alot of indexing operations,
/// where we map between a linear buffer and coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:?}", self.bounds)
    }
}

impl AABB<3> {
    /// The full `n x n x n` grid, `[0, n - 1]` along every axis.
    pub fn cube(n: usize) -> Self {
        let inclusive = n as i32 - 1;
        AABB::new(matrix![0, inclusive; 0, inclusive; 0, inclusive])
    }

    /// Like `cube`, but fails for grids too large to index or allocate.
    pub fn try_cube(n: usize) -> Result<Self> {
        grid_cells(n).ok_or(PoissonError::Allocation { size: n })?;
        Ok(AABB::cube(n))
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Moving min to the origin, returns the exclusie size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// `buffer_size`, or `None` if it overflows `usize`.
    pub fn checked_buffer_size(&self) -> Option<usize> {
        checked_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether another AABB is contained in the instance.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        for d in 0..DIMENSION {
            if other.bounds[(d, 0)] < self.bounds[(d, 0)]
                || other.bounds[(d, 1)] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether two boxes share at least one coordinate.
    pub fn intersects(&self, other: &Self) -> bool {
        for d in 0..DIMENSION {
            if other.bounds[(d, 1)] < self.bounds[(d, 0)]
                || other.bounds[(d, 0)] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }

    /// Linear buffer distance covered by a coordinate offset.
    /// Highest dimension goes the fastest.
    pub fn offset_to_linear(&self, coord_offset: &Coord<DIMENSION>) -> isize {
        let exclusive_bounds = self.exclusive_bounds();
        let mut linear_offset = 0;
        let mut accumulator = 1;
        for d in (0..DIMENSION).rev() {
            linear_offset += coord_offset[d] as isize * accumulator;
            accumulator *= exclusive_bounds[d] as isize;
        }
        linear_offset
    }
}
