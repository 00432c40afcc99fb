//! accelctl - mouseaccel curve and replay CLI
//!
//! Inspect the compiled-in parameters, validate parameter files, preview a
//! gain curve and replay recorded motion through the acceleration engine.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "accelctl")]
#[command(about = "mouseaccel CLI - preview acceleration curves and replay motion captures")]
#[command(version)]
#[command(long_about = "
accelctl drives the mouseaccel engine outside the input path.
It prints the compiled-in parameters, checks parameter files, tabulates
gain curves and replays JSON Lines motion captures sample by sample.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled-in parameter set
    Defaults,

    /// Validate a parameter file and print the resulting set
    Check {
        /// Parameter file (.json, .yaml or .yml)
        config: PathBuf,
    },

    /// Tabulate gain over a range of rates
    Curve {
        /// Parameter file; defaults are used when omitted
        #[arg(short, long, env = "ACCELCTL_CONFIG")]
        config: Option<PathBuf>,
        /// First rate (counts per millisecond, after offset)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f32,
        /// Last rate
        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        to: f32,
        /// Number of samples, endpoints included
        #[arg(long, default_value_t = 11)]
        steps: usize,
    },

    /// Replay a JSON Lines motion capture through the engine
    Replay {
        /// Capture file
        #[arg(short, long)]
        input: PathBuf,
        /// Parameter file; defaults are used when omitted
        #[arg(short, long, env = "ACCELCTL_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "accelctl={log_level},mouseaccel_engine={log_level},mouseaccel_params={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Defaults => commands::defaults::execute(cli.json),
        Commands::Check { config } => commands::check::execute(config, cli.json),
        Commands::Curve {
            config,
            from,
            to,
            steps,
        } => commands::curve::execute(config.as_deref(), *from, *to, *steps, cli.json),
        Commands::Replay { input, config } => {
            commands::replay::execute(input, config.as_deref(), cli.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_defaults_command() -> TestResult {
        let cli = Cli::try_parse_from(["accelctl", "defaults"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Defaults));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["accelctl", "defaults", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli = Cli::try_parse_from(["accelctl", "-vv", "defaults"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }

    #[test]
    fn parse_curve_with_negative_range() -> TestResult {
        let cli = Cli::try_parse_from([
            "accelctl", "curve", "--from", "-5", "--to", "20", "--steps", "6",
        ])?;
        match cli.command {
            Commands::Curve {
                from, to, steps, ..
            } => {
                assert!((from + 5.0).abs() < f32::EPSILON);
                assert!((to - 20.0).abs() < f32::EPSILON);
                assert_eq!(steps, 6);
            }
            _ => return Err("expected curve command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_replay_requires_input() {
        assert!(Cli::try_parse_from(["accelctl", "replay"]).is_err());
    }

    #[test]
    fn exit_codes_by_error_kind() {
        let input = CliError::invalid_input(3, "bad");
        assert_eq!(input.exit_code(), 3);
        let config = CliError::InvalidConfiguration {
            path: PathBuf::from("x.toml"),
            source: mouseaccel_errors::ParamError::UnsupportedFormat("toml".into()),
        };
        assert_eq!(config.exit_code(), 2);
        let range = CliError::from(mouseaccel_curves::CurveError::TooFewSteps(1));
        assert_eq!(range.exit_code(), 1);
        let unreadable = CliError::UnreadableInput {
            path: PathBuf::from("missing.jsonl"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(unreadable.exit_code(), 3);
    }
}
