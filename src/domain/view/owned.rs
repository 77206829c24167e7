use super::*;
use crate::error::*;
use crate::util::*;

/// A domain that owns its buffer.
/// Allocation is fallible so that huge grids report an error
/// instead of aborting the process.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedDomain<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f32>,
}

impl<const GRID_DIMENSION: usize> OwnedDomain<GRID_DIMENSION> {
    /// Zero filled domain covering `aabb`.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Result<Self> {
        let size = aabb.exclusive_bounds()[0] as usize;
        let cells = aabb
            .checked_buffer_size()
            .ok_or(PoissonError::Allocation { size })?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_| PoissonError::Allocation { size })?;
        buffer.resize(cells, 0.0);
        Ok(OwnedDomain { aabb, buffer })
    }

    /// Wrap an existing buffer, which must be laid out like `aabb`.
    pub fn from_buffer(
        aabb: AABB<GRID_DIMENSION>,
        buffer: Vec<f32>,
    ) -> Result<Self> {
        let expected = aabb.buffer_size();
        if buffer.len() != expected {
            return Err(PoissonError::SourceShape {
                expected,
                found: buffer.len(),
            });
        }
        Ok(OwnedDomain { aabb, buffer })
    }
}

impl<const GRID_DIMENSION: usize> DomainView<GRID_DIMENSION>
    for OwnedDomain<GRID_DIMENSION>
{
    fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [f32] {
        &mut self.buffer
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f32]) {
        (&self.aabb, &mut self.buffer)
    }

    #[track_caller]
    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f32 {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f32) {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index] = value;
    }
}
