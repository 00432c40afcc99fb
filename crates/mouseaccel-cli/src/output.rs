//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use mouseaccel_curves::GainTable;
use mouseaccel_engine::ProcessStatus;
use mouseaccel_params::{ParamName, ParameterSet};
use serde_json::json;

use crate::commands::replay::ReplayReport;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print a parameter set with key descriptions
pub fn print_params(params: &ParameterSet, json: bool) -> anyhow::Result<()> {
    if json {
        let output = json!({
            "success": true,
            "parameters": params,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Parameters:".bold());
    for name in ParamName::ALL {
        println!(
            "  {:<16} {:>10}  {}",
            name.key(),
            params.get(name),
            name.description().dimmed()
        );
    }
    println!(
        "  {:<16} {:>10}  {}",
        "AccelerationMode",
        params.mode.code(),
        params.mode.name().cyan()
    );
    Ok(())
}

/// Print a sampled gain curve
pub fn print_curve(params: &ParameterSet, table: &GainTable, json: bool) -> anyhow::Result<()> {
    if json {
        let output = json!({
            "success": true,
            "mode": params.mode.name(),
            "monotonic": table.is_monotonic(),
            "max_gain": table.max_gain(),
            "points": table.points(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Curve:".bold(), params.mode.name().cyan());
    println!("  {:>12} {:>12}", "rate".dimmed(), "gain".dimmed());
    for point in table.points() {
        println!("  {:>12.4} {:>12.6}", point.rate, point.gain);
    }
    if !table.is_monotonic() {
        println!("{}", "Warning: gain decreases somewhere in this range".yellow());
    }
    Ok(())
}

fn status_label(status: ProcessStatus) -> ColoredString {
    match status {
        ProcessStatus::Ok => "ok".green(),
        ProcessStatus::ContextUnavailable => "buffered".yellow(),
        ProcessStatus::NumericFault => "fault".red(),
    }
}

/// Print every replayed sample and the final engine state
pub fn print_replay(report: &ReplayReport, json: bool) -> anyhow::Result<()> {
    let c = &report.counters;
    if json {
        let output = json!({
            "success": true,
            "rows": report.rows,
            "counters": {
                "cycles_ok": c.cycles_ok,
                "context_unavailable": c.context_unavailable,
                "pre_validation_faults": c.pre_validation_faults,
                "post_validation_faults": c.post_validation_faults,
                "reloads_applied": c.reloads_applied,
                "reloads_deferred": c.reloads_deferred,
                "samples_merged": c.samples_merged,
            },
            "carry": [report.carry.x, report.carry.y, report.carry.wheel],
            "buffered": [report.buffered.x, report.buffered.y, report.buffered.wheel],
            "parameters": report.params,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "  {:>5} {:>10} {:>20} {:>9} {:>20}",
        "line".dimmed(),
        "t_us".dimmed(),
        "input".dimmed(),
        "status".dimmed(),
        "output".dimmed()
    );
    for row in &report.rows {
        let input = format!("{} {} {}", row.input.dx, row.input.dy, row.input.dwheel);
        let output = row
            .output
            .map(|o| format!("{} {} {}", o.dx, o.dy, o.dwheel))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>5} {:>10} {:>20} {:>9} {:>20}",
            row.line,
            row.t_us,
            input,
            status_label(row.status),
            output
        );
    }

    println!();
    println!("{}", "Summary:".bold());
    println!("  Cycles:       {} ok of {}", c.cycles_ok, c.total_cycles());
    println!("  Buffered:     {}", c.context_unavailable);
    let faults = c.numeric_faults();
    let faults_label = if faults == 0 {
        faults.to_string().green()
    } else {
        faults.to_string().red()
    };
    println!("  Faults:       {faults_label}");
    println!(
        "  Reloads:      {} applied, {} deferred",
        c.reloads_applied, c.reloads_deferred
    );
    println!(
        "  Carry:        {:.4} {:.4} {:.4}",
        report.carry.x, report.carry.y, report.carry.wheel
    );
    if !report.buffered.is_empty() {
        println!(
            "  {} {} {} {}",
            "Pending:".yellow(),
            report.buffered.x,
            report.buffered.y,
            report.buffered.wheel
        );
    }
    Ok(())
}
