//! Test utilities for ferrovec development.
//!
//! Provides lifecycle-tracking element fixtures ([`DropLedger`],
//! [`Tracked`]) and proptest strategies that generate container operation
//! sequences for model-based testing against `std::vec::Vec`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{DropLedger, Tracked};
pub use strategies::{arb_op, arb_ops, Op};
