//! Growable contiguous storage and random-access positions for ferrovec.
//!
//! Provides [`Vector`], a heap-backed sequence with explicit capacity
//! management, and the [`Position`] / [`PositionMut`] handles that traverse
//! it. This is the only crate in the workspace that contains `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! Vector<T, P: GrowthPolicy>
//! ├── RawBuffer<T>      (owned slots; allocate / move prefix / release)
//! ├── len               (slots [0, len) are live, the rest uninitialized)
//! └── P                 (capacity → next capacity, Geometric by default)
//!
//! Position<'a, T>       (Copy, read-only, borrows the live elements)
//! PositionMut<'a, T>    (exclusive, borrows the live elements mutably)
//! IntoIter<T>           (owns the buffer after the Vector is consumed)
//! ```
//!
//! # Invalidation
//!
//! A position borrows the vector it was obtained from. Reallocation,
//! shifting, truncation and destruction all need `&mut Vector` or ownership,
//! so they cannot happen while a position is alive.
//!
//! # Unsafe code
//!
//! The crate denies `unsafe_code` by default. Only `raw`, `vector`,
//! `position` and `into_iter` opt back in, and each block there carries a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod into_iter;
pub mod position;
mod raw;
pub mod vector;

pub use ferrovec_core::{Geometric, GrowthConfig, GrowthPolicy, VecError};
pub use into_iter::IntoIter;
pub use position::{Position, PositionMut};
pub use vector::Vector;
