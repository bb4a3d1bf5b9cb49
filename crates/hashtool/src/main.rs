// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! hashtool - a single-shot digest tool for agent orchestrators.
//!
//! The orchestrator runs `hashtool <command>` with inputs in the environment
//! and reads exactly one line from stdout. Logs and rich diagnostics go to
//! stderr only.

mod dispatch;
mod inputs;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use hashtool_config::LogLevel;

use crate::dispatch::Settings;
use crate::inputs::Inputs;

/// Exit status for configuration and usage failures.
const EXIT_USAGE: u8 = 2;

/// hashtool - digest data for an orchestrating agent.
#[derive(Parser, Debug)]
#[command(name = "hashtool", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured log level (logs are written to stderr).
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(LogLevel::names().iter().copied())
            .try_map(|s| s.parse::<LogLevel>())
    )]
    log_level: Option<LogLevel>,

    /// The command to run.
    #[arg(value_name = "COMMAND")]
    command: String,
}

fn main() -> ExitCode {
    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{}", err.render());
            return finish(&usage_line(&err), false, EXIT_USAGE);
        }
    };

    let loaded = match &cli.config {
        Some(path) => hashtool_config::load_and_validate_from(path),
        None => hashtool_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            hashtool_config::render_errors(&errors);
            return finish(&hashtool_config::summary_line(&errors), false, EXIT_USAGE);
        }
    };

    init_tracing(cli.log_level.unwrap_or(config.log.level));

    let outcome = dispatch::dispatch(&cli.command, &Inputs::from_env(), &Settings::from(&config));
    finish(&outcome.line, outcome.success, 1)
}

fn parse_cli() -> Result<Cli, clap::Error> {
    let matches = Cli::command()
        .after_help(dispatch::help_text())
        .try_get_matches()?;
    Cli::from_arg_matches(&matches)
}

/// First line of a clap error, without its `error: ` prefix.
fn usage_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or("invalid invocation");
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Write the single output line and map the outcome to an exit status.
fn finish(line: &str, success: bool, failure_code: u8) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
        tracing::error!(error = %e, "failed to write output line");
        return ExitCode::FAILURE;
    }
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(failure_code)
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Output goes to stderr so stdout carries only the result line.
fn init_tracing(log_level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hashtool={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .init();
}
