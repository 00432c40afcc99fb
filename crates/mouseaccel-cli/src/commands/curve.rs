//! Tabulate the configured gain curve

use std::path::Path;

use anyhow::Result;
use mouseaccel_curves::GainTable;
use tracing::debug;

use crate::commands::load_params;
use crate::error::CliError;
use crate::output;

pub fn execute(config: Option<&Path>, from: f32, to: f32, steps: usize, json: bool) -> Result<()> {
    let params = load_params(config)?;
    let table = GainTable::sample(&params, from, to, steps).map_err(CliError::from)?;
    debug!(points = table.len(), max_gain = ?table.max_gain(), "sampled curve");
    output::print_curve(&params, &table, json)
}
