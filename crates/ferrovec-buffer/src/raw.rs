//! Low-level primitives for owned, uninitialized element storage.
//!
//! [`RawBuffer`] owns `capacity` slots of `T` and nothing else: it never
//! constructs, reads, or drops elements. The container on top tracks which
//! prefix is live. Every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use ferrovec_core::VecError;

/// Exclusively owned storage for `capacity` slots of `T`.
///
/// Zero-sized element types never allocate; their capacity is purely
/// logical. A zero capacity holds a dangling pointer and no allocation.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer owns its allocation outright, like Box<[T]>.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `*const T`, like Box<[T]>.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// An empty buffer. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate storage for exactly `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, VecError> {
        Ok(Self {
            ptr: Self::allocate(capacity)?,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of allocated slots.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Base address of the storage.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Move the first `len` slots into a fresh buffer of `new_capacity`
    /// slots and release the old one.
    ///
    /// The new buffer is allocated before anything is moved; if allocation
    /// fails the old buffer and its contents are untouched.
    ///
    /// # Safety
    ///
    /// `len <= self.capacity()`, `len <= new_capacity`, and slots `[0, len)`
    /// must hold initialized values. Pointers previously derived from
    /// [`RawBuffer::ptr`] are invalid afterwards.
    pub(crate) unsafe fn reallocate(
        &mut self,
        len: usize,
        new_capacity: usize,
    ) -> Result<(), VecError> {
        debug_assert!(len <= self.capacity && len <= new_capacity);
        let fresh = Self::with_capacity(new_capacity)?;
        // SAFETY: both regions hold at least `len` slots, the fresh
        // allocation cannot overlap the old one, and the caller guarantees
        // `[0, len)` is initialized. After the copy the old slots are
        // treated as uninitialized, so each value is owned exactly once.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.ptr.as_ptr(), len);
        }
        // The old buffer is released when `_old` drops.
        let _old = mem::replace(self, fresh);
        Ok(())
    }

    fn allocate(capacity: usize) -> Result<NonNull<T>, VecError> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(NonNull::dangling());
        }
        let layout = Self::layout(capacity)?;
        // SAFETY: `layout` has non-zero size (capacity > 0, T not zero-sized).
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or(VecError::AllocFailed {
            bytes: layout.size(),
            align: layout.align(),
        })
    }

    fn layout(capacity: usize) -> Result<Layout, VecError> {
        Layout::array::<T>(capacity).map_err(|_| VecError::CapacityOverflow {
            requested: capacity,
        })
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if Self::IS_ZST || self.capacity == 0 {
            return;
        }
        // The layout was valid when this buffer was allocated.
        if let Ok(layout) = Self::layout(self.capacity) {
            // SAFETY: `ptr` was returned by `alloc::alloc` with this layout
            // and has not been freed; `reallocate` swaps ownership wholesale.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Turn a failed allocation into the process-level response std uses:
/// `handle_alloc_error` for a null allocator result, a panic otherwise.
#[cold]
#[track_caller]
pub(crate) fn alloc_failure(err: VecError) -> ! {
    tracing::debug!(error = %err, "vector allocation failed");
    if let VecError::AllocFailed { bytes, align } = err {
        if let Ok(layout) = Layout::from_size_align(bytes, align) {
            alloc::handle_alloc_error(layout);
        }
    }
    panic!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_has_no_capacity() {
        let buf = RawBuffer::<u64>::new();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let buf = RawBuffer::<u64>::with_capacity(16).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.ptr() as usize % mem::align_of::<u64>(), 0);
    }

    #[test]
    fn zero_sized_types_never_allocate() {
        let buf = RawBuffer::<()>::with_capacity(usize::MAX).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
        assert_eq!(buf.ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    fn oversized_request_reports_overflow() {
        let result = RawBuffer::<u64>::with_capacity(usize::MAX);
        assert!(matches!(
            result,
            Err(VecError::CapacityOverflow { requested }) if requested == usize::MAX
        ));
    }

    #[test]
    fn reallocate_moves_initialized_prefix() {
        let mut buf = RawBuffer::<u32>::with_capacity(2).unwrap();
        unsafe {
            buf.ptr().write(7);
            buf.ptr().add(1).write(9);
            buf.reallocate(2, 8).unwrap();
            assert_eq!(buf.capacity(), 8);
            assert_eq!(buf.ptr().read(), 7);
            assert_eq!(buf.ptr().add(1).read(), 9);
        }
    }

    #[test]
    fn failed_reallocate_keeps_old_contents() {
        let mut buf = RawBuffer::<u64>::with_capacity(1).unwrap();
        unsafe {
            buf.ptr().write(42);
            let result = buf.reallocate(1, usize::MAX);
            assert!(matches!(result, Err(VecError::CapacityOverflow { .. })));
            assert_eq!(buf.capacity(), 1);
            assert_eq!(buf.ptr().read(), 42);
        }
    }

    #[test]
    fn reallocate_to_zero_releases_storage() {
        let mut buf = RawBuffer::<u8>::with_capacity(32).unwrap();
        unsafe { buf.reallocate(0, 0).unwrap() };
        assert_eq!(buf.capacity(), 0);
    }
}
