//! Parameter store for the mouseaccel engine
//!
//! The engine reads a typed [`ParameterSet`] on every sample. Outside
//! collaborators never touch that set directly: they edit string values on a
//! shared [`TunableSurface`] and raise its reload flag. The engine's
//! [`ReloadController`] then parses the strings and swaps a complete new set
//! in, at most once per second.
//!
//! # Overview
//!
//! - [`defaults`]: compiled-in default for every tunable
//! - [`mode`]: the acceleration curve selector
//! - [`types`]: [`ParameterSet`] and the [`ParamName`] key table
//! - [`parse`]: the string-to-float collaborator
//! - [`surface`]: thread-safe, human-editable string surface
//! - [`reload`]: debounced parse-and-swap
//! - [`config`]: JSON/YAML parameter files and validation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mouseaccel_params::prelude::*;
//!
//! let surface = Arc::new(TunableSurface::new());
//! let mut reload = ReloadController::new(Arc::clone(&surface));
//! let mut live = ParameterSet::default();
//!
//! surface.set(ParamName::Sensitivity, "1.5");
//! surface.request_reload();
//!
//! assert_eq!(reload.maybe_reload(0, &mut live), ReloadOutcome::Applied);
//! assert!((live.sensitivity - 1.5).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod defaults;
pub mod mode;
pub mod parse;
pub mod prelude;
pub mod reload;
pub mod surface;
pub mod types;

pub use mode::AccelerationMode;
pub use parse::{FloatParser, StdFloatParser};
pub use reload::{RELOAD_INTERVAL_NS, ReloadController, ReloadOutcome};
pub use surface::TunableSurface;
pub use types::{ParamName, ParameterSet};
