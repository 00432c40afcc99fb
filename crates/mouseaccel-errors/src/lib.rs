//! Error types for mouseaccel
//!
//! Two families of errors live here:
//!
//! - [`cycle`]: per-sample errors returned from the hot path. These are `Copy`,
//!   carry a numeric code and never allocate.
//! - [`param`] and [`validation`]: parameter surface, config file and
//!   validation errors raised outside the hot path.
//!
//! Cycle errors carry an [`ErrorSeverity`] so callers can pick a log level
//! without matching on variants.
//!
//! # Example
//!
//! ```
//! use mouseaccel_errors::prelude::*;
//!
//! fn check_sensitivity(value: f32) -> Result<f32, ValidationError> {
//!     if !value.is_finite() {
//!         return Err(ValidationError::non_finite("Sensitivity"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_sensitivity(1.0).is_ok());
//! assert!(check_sensitivity(f32::NAN).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cycle;
pub mod param;
pub mod prelude;
pub mod severity;
pub mod validation;

pub use cycle::CycleError;
pub use param::ParamError;
pub use severity::ErrorSeverity;
pub use validation::ValidationError;

/// A specialized `Result` type for a single processing cycle.
pub type CycleResult<T> = std::result::Result<T, CycleError>;
