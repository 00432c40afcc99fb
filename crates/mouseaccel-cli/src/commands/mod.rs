//! Command implementations for accelctl CLI

pub mod check;
pub mod curve;
pub mod defaults;
pub mod replay;

use std::path::Path;

use mouseaccel_params::ParameterSet;
use tracing::info;

use crate::error::CliError;

/// Load a parameter file, or the compiled-in defaults when none is given.
pub fn load_params(config: Option<&Path>) -> Result<ParameterSet, CliError> {
    let Some(path) = config else {
        return Ok(ParameterSet::default());
    };
    let params = ParameterSet::load(path).map_err(|source| CliError::InvalidConfiguration {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), mode = %params.mode, "loaded parameters");
    Ok(params)
}
