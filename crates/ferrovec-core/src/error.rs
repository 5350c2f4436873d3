//! Error types for ferrovec containers.
//!
//! Only two kinds of operation report errors: checked element access
//! (`at`) and fallible allocation (`try_reserve`, `try_push`, ...).
//! Everything else either cannot fail or panics on a violated precondition.

use std::error::Error;
use std::fmt;

/// Errors reported by container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// Checked access with an index at or past the live length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The requested capacity cannot be expressed as an allocation layout
    /// (element count times element size exceeds `isize::MAX` bytes).
    CapacityOverflow {
        /// Requested capacity in elements.
        requested: usize,
    },
    /// The global allocator returned null.
    AllocFailed {
        /// Size of the rejected allocation in bytes.
        bytes: usize,
        /// Alignment of the rejected allocation in bytes.
        align: usize,
    },
    /// A growth configuration failed validation.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements")
            }
            Self::AllocFailed { bytes, align } => {
                write!(f, "allocation of {bytes} bytes (align {align}) failed")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid growth configuration: {reason}")
            }
        }
    }
}

impl Error for VecError {}
