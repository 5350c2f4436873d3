//! Owning iterator over a consumed [`Vector`](crate::Vector).

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawBuffer;

/// Yields the elements of a vector by value, front to back or back to
/// front. Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `buf` must hold `len` initialized elements at its front.
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) are initialized and not yet moved out.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is initialized; advancing it marks the slot moved.
        let value = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was the last initialized slot and is now excluded.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: [start, end) still hold values nobody else owns.
        unsafe {
            let remaining = self.end - self.start;
            let rest = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.start), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Vector;

    #[test]
    fn yields_from_both_ends() {
        let v = Vector::from([1, 2, 3, 4]);
        let mut it = v.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn partially_consumed_iterator_drops_rest() {
        let v = Vector::from([String::from("x"), "y".into(), "z".into()]);
        let mut it = v.into_iter();
        assert_eq!(it.next().as_deref(), Some("x"));
        drop(it);
    }
}
