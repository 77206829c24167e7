use crate::domain::*;
use crate::error::*;
use crate::util::*;

/// Two equally sized domains with a rotating role.
/// `active` names the current buffer, the other one is next.
/// Swapping flips the index, no element is copied.
pub struct BufferPair<const GRID_DIMENSION: usize> {
    buffers: [OwnedDomain<GRID_DIMENSION>; 2],
    active: usize,
}

impl<const GRID_DIMENSION: usize> BufferPair<GRID_DIMENSION> {
    /// Both buffers are allocated up front and zero filled.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Result<Self> {
        let current = OwnedDomain::new(aabb)?;
        let next = OwnedDomain::new(aabb)?;
        Ok(BufferPair {
            buffers: [current, next],
            active: 0,
        })
    }

    pub fn current(&self) -> &OwnedDomain<GRID_DIMENSION> {
        &self.buffers[self.active]
    }

    /// Frozen current buffer and writable next buffer.
    pub fn split(
        &mut self,
    ) -> (&OwnedDomain<GRID_DIMENSION>, &mut OwnedDomain<GRID_DIMENSION>) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.active == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Next becomes current.
    pub fn swap(&mut self) {
        self.active = 1 - self.active;
    }

    pub fn into_current(self) -> OwnedDomain<GRID_DIMENSION> {
        let [first, second] = self.buffers;
        if self.active == 0 {
            first
        } else {
            second
        }
    }
}
