//! Random-access positions into a [`Vector`](crate::Vector)'s storage.
//!
//! A position is a slot offset relative to the start of a borrowed view of
//! the live elements. It behaves like a raw address: it can be moved
//! forward and back by any amount, compared, and subtracted from another
//! position, none of which checks bounds. Only producing an element does.
//!
//! Positions borrow the vector they came from, so a vector cannot be
//! reallocated, shifted, or dropped while any of its positions is alive.
//!
//! ```compile_fail
//! use ferrovec_buffer::Vector;
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.push(1);
//! let first = v.begin();
//! v.push(2); // would invalidate `first`
//! assert_eq!(*first, 1);
//! ```

#![allow(unsafe_code)]

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};
use std::ptr;

/// Read-only position over a vector's live elements.
///
/// Obtained from [`Vector::begin`](crate::Vector::begin),
/// [`Vector::end`](crate::Vector::end) and their `c`-prefixed variants.
/// Cheap to copy.
pub struct Position<'a, T> {
    view: &'a [T],
    offset: isize,
}

impl<'a, T> Position<'a, T> {
    pub(crate) fn new(view: &'a [T], offset: isize) -> Self {
        Self { view, offset }
    }

    /// Slot offset from the start of the buffer.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// The element at this position, or `None` if the position is outside
    /// the live elements (including the one-past-end sentinel).
    pub fn get(&self) -> Option<&'a T> {
        usize::try_from(self.offset)
            .ok()
            .and_then(|i| self.view.get(i))
    }

    /// The element at this position, without checking bounds.
    ///
    /// # Safety
    ///
    /// `0 <= self.offset() < len` of the vector this position came from.
    pub unsafe fn get_unchecked(&self) -> &'a T {
        // SAFETY: the caller guarantees the offset addresses a live element.
        unsafe { self.view.get_unchecked(self.offset as usize) }
    }

    /// Pre-increment: advance by one slot.
    pub fn inc(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Pre-decrement: step back by one slot.
    pub fn dec(&mut self) -> &mut Self {
        self.offset -= 1;
        self
    }

    /// Post-increment: advance by one slot, returning the old position.
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.offset += 1;
        prev
    }

    /// Post-decrement: step back by one slot, returning the old position.
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.offset -= 1;
        prev
    }

    /// Iterate the elements in `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the two positions come from different buffers, or if the
    /// range is reversed or reaches outside the live elements.
    pub fn until(self, end: Position<'a, T>) -> std::slice::Iter<'a, T> {
        assert!(self.same_buffer(&end), "positions belong to different buffers");
        let (Ok(start), Ok(stop)) = (usize::try_from(self.offset), usize::try_from(end.offset))
        else {
            panic!(
                "position range {}..{} starts before the buffer",
                self.offset, end.offset
            );
        };
        self.view[start..stop].iter()
    }

    fn same_buffer(&self, other: &Self) -> bool {
        ptr::eq(self.view.as_ptr(), other.view.as_ptr())
    }

    #[track_caller]
    fn deref_or_panic(&self) -> &'a T {
        match self.get() {
            Some(value) => value,
            None => panic!(
                "position {} dereferenced outside live range 0..{}",
                self.offset,
                self.view.len()
            ),
        }
    }
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T> fmt::Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("base", &self.view.as_ptr())
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T> Deref for Position<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.deref_or_panic()
    }
}

impl<T> Index<isize> for Position<'_, T> {
    type Output = T;

    fn index(&self, k: isize) -> &T {
        (*self + k).deref_or_panic()
    }
}

impl<T> Add<isize> for Position<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.offset += n;
        self
    }
}

impl<T> Sub<isize> for Position<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.offset -= n;
        self
    }
}

impl<T> AddAssign<isize> for Position<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.offset += n;
    }
}

impl<T> SubAssign<isize> for Position<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.offset -= n;
    }
}

/// Signed slot distance between two positions of the same buffer.
impl<'a, T> Sub for Position<'a, T> {
    type Output = isize;

    fn sub(self, other: Position<'a, T>) -> isize {
        debug_assert!(
            self.same_buffer(&other),
            "distance between positions of different buffers"
        );
        self.offset - other.offset
    }
}

/// Same buffer and same offset. Views with no allocation share the dangling
/// base, so positions of two distinct empty vectors compare equal.
impl<T> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.offset == other.offset
    }
}

impl<T> Eq for Position<'_, T> {}

/// Positions of different buffers are unordered.
impl<T> PartialOrd for Position<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_buffer(other).then(|| self.offset.cmp(&other.offset))
    }
}

/// Exclusive position over a vector's live elements.
///
/// Obtained from [`Vector::begin_mut`](crate::Vector::begin_mut) or
/// [`Vector::end_mut`](crate::Vector::end_mut). Unlike [`Position`] it is
/// not `Copy`, so at most one mutable position per vector exists at a time;
/// post-increment is therefore not offered.
pub struct PositionMut<'a, T> {
    view: &'a mut [T],
    offset: isize,
}

impl<'a, T> PositionMut<'a, T> {
    pub(crate) fn new(view: &'a mut [T], offset: isize) -> Self {
        Self { view, offset }
    }

    /// Slot offset from the start of the buffer.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Whether this position sits on the one-past-end sentinel.
    pub fn is_end(&self) -> bool {
        usize::try_from(self.offset).is_ok_and(|i| i == self.view.len())
    }

    /// The element at this position, if it is live.
    pub fn get(&self) -> Option<&T> {
        usize::try_from(self.offset)
            .ok()
            .and_then(|i| self.view.get(i))
    }

    /// Mutable access to the element at this position, if it is live.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        usize::try_from(self.offset)
            .ok()
            .and_then(|i| self.view.get_mut(i))
    }

    /// Mutable access to the element at this position, without checking
    /// bounds.
    ///
    /// # Safety
    ///
    /// `0 <= self.offset() < len` of the vector this position came from.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: the caller guarantees the offset addresses a live element.
        unsafe { self.view.get_unchecked_mut(self.offset as usize) }
    }

    /// Pre-increment: advance by one slot.
    pub fn inc(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Pre-decrement: step back by one slot.
    pub fn dec(&mut self) -> &mut Self {
        self.offset -= 1;
        self
    }

    /// Give up exclusivity and continue as a read-only position.
    pub fn into_position(self) -> Position<'a, T> {
        Position::new(self.view, self.offset)
    }

    fn slot(&self, offset: isize) -> Option<usize> {
        usize::try_from(offset)
            .ok()
            .filter(|&i| i < self.view.len())
    }

    #[track_caller]
    fn slot_or_panic(&self, offset: isize) -> usize {
        match self.slot(offset) {
            Some(i) => i,
            None => panic!(
                "position {offset} dereferenced outside live range 0..{}",
                self.view.len()
            ),
        }
    }
}

impl<T> fmt::Debug for PositionMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionMut")
            .field("base", &self.view.as_ptr())
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T> Deref for PositionMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        let i = self.slot_or_panic(self.offset);
        &self.view[i]
    }
}

impl<T> DerefMut for PositionMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        let i = self.slot_or_panic(self.offset);
        &mut self.view[i]
    }
}

impl<T> Index<isize> for PositionMut<'_, T> {
    type Output = T;

    fn index(&self, k: isize) -> &T {
        let i = self.slot_or_panic(self.offset + k);
        &self.view[i]
    }
}

impl<T> IndexMut<isize> for PositionMut<'_, T> {
    fn index_mut(&mut self, k: isize) -> &mut T {
        let i = self.slot_or_panic(self.offset + k);
        &mut self.view[i]
    }
}

impl<T> Add<isize> for PositionMut<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.offset += n;
        self
    }
}

impl<T> Sub<isize> for PositionMut<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.offset -= n;
        self
    }
}

impl<T> AddAssign<isize> for PositionMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.offset += n;
    }
}

impl<T> SubAssign<isize> for PositionMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.offset -= n;
    }
}
