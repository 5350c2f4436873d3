//! Benchmark profiles and utilities for ferrovec.
//!
//! Provides pre-built vectors for benchmarks and the walkthrough example:
//!
//! - [`sequential`]: `0..n` pushed one at a time from empty
//! - [`preallocated`]: `0..n` pushed after an exact `reserve`
//! - [`summary`]: one-line size/capacity report with the live elements

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::{self, Display, Write};

use ferrovec_buffer::Vector;
use ferrovec_core::{Geometric, GrowthConfig};

/// Element count for the small profile.
pub const SMALL: usize = 1_000;

/// Element count for the large profile.
pub const LARGE: usize = 100_000;

/// Build `0..n` by pushing onto an empty vector, growing by doubling.
pub fn sequential(n: usize) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// Build `0..n` after reserving exactly `n` slots, so no push reallocates.
pub fn preallocated(n: usize) -> Vector<u64> {
    let mut v = Vector::with_capacity(n);
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// Build `0..n` with a growth factor other than the default.
///
/// # Panics
///
/// Panics if `factor < 2`.
pub fn with_factor(n: usize, factor: usize) -> Vector<u64, Geometric> {
    let policy = Geometric::new(GrowthConfig {
        factor,
        min_capacity: GrowthConfig::DEFAULT_MIN_CAPACITY,
    })
    .unwrap_or_else(|err| panic!("bench profile: {err}"));
    let mut v = Vector::with_policy(policy);
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// `"<elements>\nSize: <len>, Capacity: <capacity>"`, elements visited
/// through positions.
pub fn summary<T: Display, P>(v: &Vector<T, P>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut pos = v.begin();
    while pos != v.end() {
        write!(out, "{} ", *pos)?;
        pos.inc();
    }
    write!(out, "\nSize: {}, Capacity: {}", v.len(), v.capacity())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_hold_the_same_contents() {
        let a = sequential(100);
        let b = preallocated(100);
        let c = with_factor(100, 3);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(b.capacity(), 100);
        assert_eq!(a.capacity(), 128);
        assert_eq!(c.capacity(), 243);
    }

    #[test]
    fn summary_lists_elements_then_counts() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(summary(&v).unwrap(), "1 2 3 \nSize: 3, Capacity: 3");
    }
}
