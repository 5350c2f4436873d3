//! Core types and traits for ferrovec containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces the buffer layer is parameterised over: the error type, the
//! growth configuration, and the [`GrowthPolicy`] trait with its default
//! geometric implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod growth;

pub use config::GrowthConfig;
pub use error::VecError;
pub use growth::{Geometric, GrowthPolicy};
