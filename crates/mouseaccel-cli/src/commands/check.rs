//! Validate a parameter file

use std::path::Path;

use anyhow::Result;

use crate::commands::load_params;
use crate::output;

pub fn execute(config: &Path, json: bool) -> Result<()> {
    let params = load_params(Some(config))?;
    output::print_params(&params, json)
}
