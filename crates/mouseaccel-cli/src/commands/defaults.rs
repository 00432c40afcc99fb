//! Print the compiled-in parameter set

use anyhow::Result;
use mouseaccel_params::ParameterSet;

use crate::output;

pub fn execute(json: bool) -> Result<()> {
    output::print_params(&ParameterSet::default(), json)
}
