use std::marker::PhantomData;
use sync_ptr::SyncMutPtr;

/// Shared write handle to a buffer that several tasks fill at once.
/// Each task must own a disjoint set of indices, which the
/// region partition of the grid guarantees.
pub struct RegionWriter<'a> {
    ptr: SyncMutPtr<f32>,
    len: usize,
    _buffer: PhantomData<&'a mut [f32]>,
}

impl<'a> RegionWriter<'a> {
    pub fn new(buffer: &'a mut [f32]) -> Self {
        let len = buffer.len();
        let ptr = unsafe { SyncMutPtr::new(buffer.as_mut_ptr()) };
        RegionWriter {
            ptr,
            len,
            _buffer: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    /// No other task may write `linear` while this writer is alive.
    #[inline]
    pub unsafe fn write(&self, linear: usize, value: f32) {
        debug_assert!(linear < self.len);
        *self.ptr.inner().add(linear) = value;
    }
}
