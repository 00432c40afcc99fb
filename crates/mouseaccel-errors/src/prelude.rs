//! Prelude module for convenient error handling imports.

pub use crate::{
    CycleResult, cycle::CycleError, param::ParamError, severity::ErrorSeverity,
    validation::ValidationError,
};
