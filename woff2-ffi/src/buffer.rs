//! The owned buffer handed across the boundary.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::mem::{align_of, size_of};
use std::ptr::NonNull;

use crate::BoundaryError;

/// Size of the capacity word stored ahead of the data.
const PREFIX: usize = size_of::<usize>();

/// A heap allocation whose ownership can leave Rust and come back.
///
/// The host receives only the data pointer and a length, and the length it
/// sees may be smaller than the capacity that was allocated: encode sizes
/// are upper bounds, and the excess is never trimmed or reallocated. To
/// make a one-argument release possible anyway, the capacity is stored in
/// a word directly ahead of the data, where [`OwnedBuffer::from_raw`] can
/// find it again.
///
/// Ownership transfer is final and exclusive. After [`into_raw`] this side
/// keeps no record of the allocation; the host releases it exactly once by
/// handing the pointer back through `free_woff2_buffer`, which reclaims it
/// via [`from_raw`] and drops it.
///
/// [`into_raw`]: OwnedBuffer::into_raw
/// [`from_raw`]: OwnedBuffer::from_raw
pub struct OwnedBuffer {
    data: NonNull<u8>,
    capacity: usize,
    filled: usize,
}

impl OwnedBuffer {
    /// Allocate a zeroed buffer of exactly `capacity` bytes.
    ///
    /// A capacity the allocator declines (including one so large the
    /// layout itself cannot be formed) is an error, never an abort.
    pub fn with_capacity(capacity: usize) -> Result<Self, BoundaryError> {
        let layout = Self::layout(capacity).ok_or(BoundaryError::AllocationFailed(capacity))?;
        // Safety: the layout is non-zero sized (the prefix word at minimum).
        let base = unsafe { alloc_zeroed(layout) };
        let Some(base) = NonNull::new(base) else {
            return Err(BoundaryError::AllocationFailed(capacity));
        };
        // Safety: the allocation begins with an aligned capacity word,
        // followed by `capacity` data bytes.
        let data = unsafe {
            base.as_ptr().cast::<usize>().write(capacity);
            NonNull::new_unchecked(base.as_ptr().add(PREFIX))
        };
        Ok(OwnedBuffer {
            data,
            capacity,
            filled: 0,
        })
    }

    fn layout(capacity: usize) -> Option<Layout> {
        let size = capacity.checked_add(PREFIX)?;
        Layout::from_size_align(size, align_of::<usize>()).ok()
    }

    /// Capacity in bytes, as allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of leading bytes holding valid output.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// The full allocation, for a transform to write into.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // Safety: `data` points at `capacity` allocated, initialized bytes.
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.capacity) }
    }

    /// The filled prefix of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        // Safety: `data` points at `capacity` initialized bytes and
        // `filled` never exceeds `capacity`.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.filled) }
    }

    /// Record that the first `filled` bytes now hold valid output.
    ///
    /// # Panics
    ///
    /// Panics if `filled` exceeds the capacity.
    pub fn set_filled(&mut self, filled: usize) {
        assert!(filled <= self.capacity);
        self.filled = filled;
    }

    /// Hand the allocation to the host: the data pointer and the filled
    /// length.
    ///
    /// The buffer is not dropped; from this point the host is the sole
    /// owner, and release happens through [`OwnedBuffer::from_raw`].
    pub fn into_raw(self) -> (*mut u8, usize) {
        let parts = (self.data.as_ptr(), self.filled);
        std::mem::forget(self);
        parts
    }

    /// Take ownership back of a pointer produced by [`OwnedBuffer::into_raw`].
    ///
    /// The filled length is not recovered; a reclaimed buffer is only good
    /// for releasing.
    ///
    /// # Safety
    ///
    /// `data` must have come from [`OwnedBuffer::into_raw`], and ownership
    /// must not already have been reclaimed.
    pub unsafe fn from_raw(data: *mut u8) -> OwnedBuffer {
        let base = data.sub(PREFIX);
        let capacity = base.cast::<usize>().read();
        OwnedBuffer {
            data: NonNull::new_unchecked(data),
            capacity,
            filled: 0,
        }
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        // A live buffer always came from a formable layout.
        if let Some(layout) = Self::layout(self.capacity) {
            // Safety: `data - PREFIX` is the pointer the allocation came
            // from, with the same layout it was allocated with.
            unsafe { dealloc(self.data.as_ptr().sub(PREFIX), layout) };
        }
    }
}

// Safety: the buffer exclusively owns its allocation; the raw pointer is
// not aliased anywhere once ownership is held.
unsafe impl Send for OwnedBuffer {}
unsafe impl Sync for OwnedBuffer {}

impl std::fmt::Debug for OwnedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("capacity", &self.capacity)
            .field("filled", &self.filled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_is_zeroed_and_unfilled() {
        let mut buf = OwnedBuffer::with_capacity(32).unwrap();
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.filled(), 0);
        assert!(buf.as_mut_slice().iter().all(|&b| b == 0));
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn filled_tracks_the_valid_prefix() {
        let mut buf = OwnedBuffer::with_capacity(8).unwrap();
        buf.as_mut_slice()[..3].copy_from_slice(b"abc");
        buf.set_filled(3);
        assert_eq!(buf.as_slice(), b"abc");
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    #[should_panic]
    fn filled_cannot_exceed_capacity() {
        let mut buf = OwnedBuffer::with_capacity(4).unwrap();
        buf.set_filled(5);
    }

    #[test]
    fn raw_round_trip_preserves_data_and_capacity() {
        let mut buf = OwnedBuffer::with_capacity(16).unwrap();
        buf.as_mut_slice()[..4].copy_from_slice(b"wOF2");
        buf.set_filled(4);

        let (ptr, len) = buf.into_raw();
        assert_eq!(len, 4);

        let mut reclaimed = unsafe { OwnedBuffer::from_raw(ptr) };
        assert_eq!(reclaimed.capacity(), 16);
        assert_eq!(&reclaimed.as_mut_slice()[..4], b"wOF2");
        // dropping `reclaimed` is the release
    }

    #[test]
    fn zero_capacity_is_allocatable() {
        let buf = OwnedBuffer::with_capacity(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.filled(), 0);
    }

    #[test]
    fn impossible_capacity_is_an_allocation_failure() {
        match OwnedBuffer::with_capacity(usize::MAX) {
            Err(BoundaryError::AllocationFailed(capacity)) => {
                assert_eq!(capacity, usize::MAX)
            }
            other => panic!("expected allocation failure, got {other:?}"),
        }
    }
}
