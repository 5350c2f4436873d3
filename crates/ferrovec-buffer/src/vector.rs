//! The growable contiguous container.
//!
//! [`Vector`] pairs a [`RawBuffer`] with a live length. Slots `[0, len)`
//! hold constructed values; slots `[len, capacity)` are uninitialized and
//! never read. Capacity grows through a [`GrowthPolicy`] on append and
//! exactly on [`Vector::reserve`]; it only shrinks on
//! [`Vector::shrink_to_fit`].

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use ferrovec_core::{Geometric, GrowthPolicy, VecError};

use crate::into_iter::IntoIter;
use crate::position::{Position, PositionMut};
use crate::raw::{alloc_failure, RawBuffer};

/// A growable, contiguous sequence of `T` with a pluggable growth policy.
///
/// # Checked and unchecked access
///
/// [`Vector::at`] is the checked accessor and reports
/// [`VecError::OutOfRange`]. [`Vector::get_unchecked`] is the unchecked
/// one and is `unsafe`. The remaining element accessors stay safe:
/// [`front`](Vector::front), [`back`](Vector::back) and
/// [`pop`](Vector::pop) return `None` on an empty vector, while
/// [`insert`](Vector::insert), [`remove`](Vector::remove),
/// [`erase`](Vector::erase) and indexing panic on a bad index.
///
/// # Allocation failure
///
/// The `try_*` methods return the error and leave the vector untouched.
/// The other growing methods hand the failure to
/// [`std::alloc::handle_alloc_error`], or panic with "capacity overflow"
/// when the request cannot be laid out at all.
pub struct Vector<T, P = Geometric> {
    buf: RawBuffer<T>,
    len: usize,
    policy: P,
}

impl<T> Vector<T> {
    /// An empty vector with the default doubling policy. Does not allocate.
    pub fn new() -> Self {
        Self::with_policy(Geometric::default())
    }

    /// An empty vector with room for exactly `capacity` elements.
    ///
    /// Only reserves: the result has `len() == 0`. Use
    /// [`Vector::with_len`] for a vector of `n` default values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, Geometric::default())
    }
}

impl<T: Default> Vector<T> {
    /// A vector of `len` default-constructed elements, with
    /// `capacity() == len`.
    pub fn with_len(len: usize) -> Self {
        let mut v = Self::with_capacity(len);
        v.resize(len);
        v
    }
}

impl<T, P> Vector<T, P> {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Base address of the buffer. Dangling when nothing is allocated.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable base address of the buffer.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned (dangling only when
        // nothing is allocated, in which case len == 0 or T is zero-sized)
        // and slots [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` makes the borrow unique.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Element `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index` addresses a live element.
        unsafe { &*self.buf.ptr().add(index) }
    }

    /// Mutable element `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index` addresses a live element.
        unsafe { &mut *self.buf.ptr().add(index) }
    }

    /// Element `index`, or [`VecError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VecError::OutOfRange { index, len })
    }

    /// Mutable element `index`, or [`VecError::OutOfRange`] if
    /// `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VecError::OutOfRange { index, len })
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The first element, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// The last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The last element, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside [0, len), so the
        // value is read out exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Remove and return element `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`, so the read takes a live value; the copy
        // moves (index, len) onto [index, len - 1), overlapping regions
        // handled by `ptr::copy` in ascending order.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Destroy element `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Destroy elements `[new_len, len)` in index order. No-op if
    /// `new_len >= len()`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // SAFETY: [new_len, len) are live. `len` is lowered first so a
        // panicking destructor cannot leave dropped slots marked live.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(new_len), tail_len);
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Destroy all elements in index order. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Read-only position at the first element.
    pub fn begin(&self) -> Position<'_, T> {
        Position::new(self.as_slice(), 0)
    }

    /// Read-only position one past the last element.
    pub fn end(&self) -> Position<'_, T> {
        Position::new(self.as_slice(), self.end_offset())
    }

    /// Read-only position at the first element.
    pub fn cbegin(&self) -> Position<'_, T> {
        self.begin()
    }

    /// Read-only position one past the last element.
    pub fn cend(&self) -> Position<'_, T> {
        self.end()
    }

    /// Exclusive position at the first element.
    pub fn begin_mut(&mut self) -> PositionMut<'_, T> {
        PositionMut::new(self.as_mut_slice(), 0)
    }

    /// Exclusive position one past the last element.
    pub fn end_mut(&mut self) -> PositionMut<'_, T> {
        let offset = self.end_offset();
        PositionMut::new(self.as_mut_slice(), offset)
    }

    /// Iterate the live elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate the live elements mutably in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Memory held by the buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * mem::size_of::<T>()
    }

    fn end_offset(&self) -> isize {
        // Only zero-sized element types can exceed isize::MAX live elements.
        isize::try_from(self.len).unwrap_or(isize::MAX)
    }
}

impl<T, P: GrowthPolicy> Vector<T, P> {
    /// An empty vector that grows according to `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            policy,
        }
    }

    /// An empty vector with room for exactly `capacity` elements that grows
    /// according to `policy`.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        let mut v = Self::with_policy(policy);
        v.reserve(capacity);
        v
    }

    /// Ensure `capacity() >= min_capacity`.
    ///
    /// If `min_capacity` exceeds the current capacity, allocates exactly
    /// `min_capacity` slots and moves every live element across in index
    /// order. Otherwise does nothing. Note that the argument is a total
    /// capacity, not a count of additional elements.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), VecError> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(min_capacity)
    }

    /// Infallible form of [`Vector::try_reserve`].
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve(min_capacity) {
            alloc_failure(err);
        }
    }

    /// Reallocate so that `capacity() == len()`. Releases the buffer
    /// entirely when empty.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), VecError> {
        if self.capacity() > self.len {
            self.reallocate(self.len)?;
        }
        Ok(())
    }

    /// Infallible form of [`Vector::try_shrink_to_fit`].
    pub fn shrink_to_fit(&mut self) {
        if let Err(err) = self.try_shrink_to_fit() {
            alloc_failure(err);
        }
    }

    /// Append `value`, growing by the policy when full.
    ///
    /// On failure `value` is dropped and the vector is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), VecError> {
        if self.len == self.capacity() {
            self.grow_for(1)?;
        }
        // SAFETY: len < capacity, so slot `len` is allocated and uninitialized.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Append `value`, growing by the policy when full.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            alloc_failure(err);
        }
    }

    /// Insert `value` at `index`, shifting `[index, len)` up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            if let Err(err) = self.grow_for(1) {
                alloc_failure(err);
            }
        }
        // SAFETY: len < capacity after growth. `ptr::copy` moves
        // [index, len) onto [index + 1, len + 1) back to front, then the
        // vacated slot `index` is written.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            ptr::write(slot, value);
        }
        self.len = len + 1;
    }

    /// Resize to `new_len`, filling new slots with values from `fill`.
    ///
    /// Growing reserves exactly `new_len` if needed; shrinking destroys
    /// `[new_len, len)` in index order. Capacity never shrinks here. If
    /// `fill` panics, the elements constructed so far stay live.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        while self.len < new_len {
            self.push(fill());
        }
    }

    /// Move the contents out, leaving this vector empty with no allocation.
    pub fn take(&mut self) -> Self
    where
        P: Clone,
    {
        let empty = Self::with_policy(self.policy.clone());
        mem::replace(self, empty)
    }

    /// Make room for `additional` more elements, growing by the policy.
    fn grow_for(&mut self, additional: usize) -> Result<(), VecError> {
        let capacity = self.capacity();
        if additional <= capacity - self.len {
            return Ok(());
        }
        let required = self
            .len
            .checked_add(additional)
            .ok_or(VecError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        let next = self.policy.next_capacity(capacity, required).max(required);
        self.reallocate(next)
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<(), VecError> {
        let old_capacity = self.capacity();
        // SAFETY: [0, len) is initialized and every caller passes
        // `new_capacity >= len`.
        unsafe { self.buf.reallocate(self.len, new_capacity)? };
        tracing::trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            "vector buffer reallocated"
        );
        Ok(())
    }
}

impl<T: Default, P: GrowthPolicy> Vector<T, P> {
    /// Resize to `new_len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T: Clone, P: GrowthPolicy> Vector<T, P> {
    /// Append clones of `other` in order.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        if let Err(err) = self.grow_for(other.len()) {
            alloc_failure(err);
        }
        for item in other {
            self.push(item.clone());
        }
    }
}

impl<T, P> Drop for Vector<T, P> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is initialized; the buffer itself is released
        // afterwards by RawBuffer's own Drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T, P: GrowthPolicy + Default> Default for Vector<T, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<T: Clone, P: GrowthPolicy + Clone> Clone for Vector<T, P> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity_and_policy(self.len, self.policy.clone());
        out.extend_from_slice(self.as_slice());
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source.as_slice());
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Vector<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P> Deref for Vector<T, P> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> DerefMut for Vector<T, P> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P, I: SliceIndex<[T]>> Index<I> for Vector<T, P> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, P, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, P> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: PartialEq, P, Q> PartialEq<Vector<T, Q>> for Vector<T, P> {
    fn eq(&self, other: &Vector<T, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P> Eq for Vector<T, P> {}

impl<T: PartialEq, P> PartialEq<[T]> for Vector<T, P> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, P, const N: usize> PartialEq<[T; N]> for Vector<T, P> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, P: GrowthPolicy> Extend<T> for Vector<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.grow_for(lower) {
            alloc_failure(err);
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, P: GrowthPolicy + Default> FromIterator<T> for Vector<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        let mut v = Self::with_capacity(items.len());
        v.extend_from_slice(items);
        v
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        v.extend(items);
        v
    }
}

impl<T, P> IntoIterator for Vector<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let buf = mem::replace(&mut self.buf, RawBuffer::new());
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(buf, len)
    }
}

impl<'a, T, P> IntoIterator for &'a Vector<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, P> IntoIterator for &'a mut Vector<T, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
