//! Replay a recorded motion stream through the engine
//!
//! Input is JSON Lines, one sample per line:
//!
//! ```text
//! {"t_us": 1000, "dx": 3, "dy": -1}
//! {"t_us": 2000, "dx": 4, "dy": 0, "usable": false}
//! {"t_us": 3000, "dx": 1, "set": {"Sensitivity": "1.5"}, "reload": true}
//! ```
//!
//! `dx`, `dy` and `dwheel` default to 0 and `usable` to true. `set` edits
//! the tunable surface before the sample is processed and `reload` raises
//! the reload flag, so a replay can exercise the debounce window. Blank
//! lines and lines starting with `#` are skipped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use mouseaccel_atomic::CounterSnapshot;
use mouseaccel_engine::{
    AccelEngine, CarryState, EventAccumulator, ManualClock, ProcessStatus, RawSample,
    ScriptedContext,
};
use mouseaccel_params::{ParameterSet, TunableSurface};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::load_params;
use crate::error::CliError;
use crate::output;

/// One line of a replay file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayRecord {
    pub t_us: u64,
    #[serde(default)]
    pub dx: i32,
    #[serde(default)]
    pub dy: i32,
    #[serde(default)]
    pub dwheel: i32,
    #[serde(default = "default_usable")]
    pub usable: bool,
    #[serde(default)]
    pub set: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub reload: bool,
}

fn default_usable() -> bool {
    true
}

/// Result of one replayed sample.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayRow {
    pub line: usize,
    pub t_us: u64,
    pub input: RawSample,
    pub status: ProcessStatus,
    pub output: Option<RawSample>,
}

/// Everything a replay produced.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub rows: Vec<ReplayRow>,
    pub counters: CounterSnapshot,
    pub carry: CarryState,
    pub buffered: EventAccumulator,
    pub params: ParameterSet,
}

pub fn execute(input: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let params = load_params(config)?;
    let records = read_records(input)?;
    info!(path = %input.display(), records = records.len(), "replaying");
    let report = replay(&params, &records)?;
    output::print_replay(&report, json)
}

/// Parse a replay file into `(line number, record)` pairs.
pub fn read_records(path: &Path) -> Result<Vec<(usize, ReplayRecord)>, CliError> {
    let unreadable = |source| CliError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(unreadable)?);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index.saturating_add(1);
        let line = line.map_err(unreadable)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record: ReplayRecord = serde_json::from_str(trimmed)
            .map_err(|e| CliError::invalid_input(line_no, e.to_string()))?;
        records.push((line_no, record));
    }
    Ok(records)
}

/// Drive a fresh engine through `records`.
pub fn replay(
    params: &ParameterSet,
    records: &[(usize, ReplayRecord)],
) -> Result<ReplayReport, CliError> {
    let clock = ManualClock::new();
    let ctx = ScriptedContext::new(true);
    let surface = Arc::new(TunableSurface::from_params(params));
    let mut engine = AccelEngine::with_parts(clock.clone(), ctx.clone(), Arc::clone(&surface))
        .with_params(*params);

    let mut rows = Vec::with_capacity(records.len());
    for (line, record) in records {
        for (key, value) in &record.set {
            let raw = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            surface
                .set_by_key(key, &raw)
                .map_err(|e| CliError::invalid_input(*line, e.to_string()))?;
            debug!(line, key = %key, value = %raw, "surface edited");
        }
        if record.reload {
            surface.request_reload();
        }

        clock.set_ns(record.t_us.saturating_mul(1_000));
        ctx.set_usable(record.usable);

        let input = RawSample::new(record.dx, record.dy, record.dwheel);
        let result = engine.process(input);
        rows.push(ReplayRow {
            line: *line,
            t_us: record.t_us,
            input,
            status: ProcessStatus::of(&result),
            output: result.ok(),
        });
    }

    Ok(ReplayReport {
        rows,
        counters: engine.counters().snapshot(),
        carry: engine.carry(),
        buffered: engine.buffered(),
        params: *engine.params(),
    })
}
