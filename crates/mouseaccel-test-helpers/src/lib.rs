//! Shared test utilities for mouseaccel.
//!
//! Test code in this workspace denies `unwrap()` and `expect()` like
//! production code does; [`must`] is the replacement.

#![warn(missing_docs, rust_2018_idioms)]

pub mod must;

pub use must::must;
