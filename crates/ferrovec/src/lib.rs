//! ferrovec: a growable contiguous vector with explicit capacity control.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ferrovec sub-crates. For most users, adding `ferrovec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ferrovec::prelude::*;
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! v.insert(1, 10);
//! v.erase(2);
//! assert_eq!(v, [1, 10, 3]);
//!
//! // Checked access reports, unchecked access is `unsafe`.
//! assert!(matches!(v.at(5), Err(VecError::OutOfRange { index: 5, len: 3 })));
//!
//! // Positions borrow the vector and behave like raw addresses.
//! let begin = v.begin();
//! let end = v.end();
//! assert_eq!(end - begin, 3);
//! assert_eq!(begin[1], 10);
//!
//! // Capacity is managed explicitly.
//! v.reserve(16);
//! assert_eq!(v.capacity(), 16);
//! v.shrink_to_fit();
//! assert_eq!(v.capacity(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `ferrovec-buffer` | `Vector`, `Position`, `PositionMut`, `IntoIter` |
//! | [`types`] | `ferrovec-core` | `VecError`, `GrowthConfig`, `GrowthPolicy`, `Geometric` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The container and its positions (`ferrovec-buffer`).
///
/// [`buffer::Vector`] is also available in the [`prelude`].
pub use ferrovec_buffer as buffer;

/// Errors, growth configuration and policies (`ferrovec-core`).
///
/// Implement [`types::GrowthPolicy`] to control how capacity expands.
pub use ferrovec_core as types;

/// Common imports for typical ferrovec usage.
///
/// ```rust
/// use ferrovec::prelude::*;
/// ```
pub mod prelude {
    // Container and positions
    pub use ferrovec_buffer::{IntoIter, Position, PositionMut, Vector};

    // Growth and errors
    pub use ferrovec_core::{Geometric, GrowthConfig, GrowthPolicy, VecError};
}
