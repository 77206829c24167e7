use crate::util::*;

pub struct DomainChunk<'a, const GRID_DIMENSION: usize> {
    offset: usize,
    aabb: &'a AABB<GRID_DIMENSION>,
    buffer: &'a mut [f32],
}

impl<'a, const GRID_DIMENSION: usize> DomainChunk<'a, GRID_DIMENSION> {
    pub fn new(
        offset: usize,
        aabb: &'a AABB<GRID_DIMENSION>,
        buffer: &'a mut [f32],
    ) -> Self {
        DomainChunk {
            offset,
            aabb,
            buffer,
        }
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<GRID_DIMENSION>, &mut f32)> {
        let offset = self.offset;
        let aabb = self.aabb;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut f32)| {
                let coord = aabb.linear_to_coord(offset + i);
                (coord, v)
            })
    }
}
