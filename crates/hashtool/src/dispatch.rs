// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command table and dispatcher.
//!
//! Every invocation produces exactly one [`Outcome`]: a single line for the
//! output channel plus a success flag for the exit status. Errors never take
//! another path; they become the outcome line.

use hashtool_config::HashtoolConfig;
use hashtool_core::{to_line, Algorithm, AlgorithmList, ToolError};
use tracing::{debug, info};

use crate::inputs::{Inputs, ALGO, DATA, EXPECTED};

/// Settings resolved from configuration that operations depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Algorithm used when `ALGO` is empty.
    pub default_algorithm: Algorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::DEFAULT,
        }
    }
}

impl From<&HashtoolConfig> for Settings {
    fn from(config: &HashtoolConfig) -> Self {
        Self {
            default_algorithm: config.tool.default_algorithm,
        }
    }
}

/// The result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The single line written to the output channel.
    pub line: String,
    /// Whether the process should exit successfully.
    pub success: bool,
}

impl Outcome {
    fn ok(line: String) -> Self {
        Self {
            line,
            success: true,
        }
    }
}

impl From<ToolError> for Outcome {
    fn from(err: ToolError) -> Self {
        Self {
            line: err.to_string(),
            success: false,
        }
    }
}

type Operation = fn(&Inputs, &Settings) -> Result<Outcome, ToolError>;

/// A named operation callable from the command line.
pub struct Command {
    pub name: &'static str,
    pub summary: &'static str,
    run: Operation,
}

/// All commands, in the order they are listed to users.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "hash",
        summary: "Digest DATA with ALGO (default sha256) and print {\"algo\",\"hash\"}",
        run: run_hash,
    },
    Command {
        name: "verify",
        summary: "Digest DATA with ALGO and compare it against EXPECTED",
        run: run_verify,
    },
    Command {
        name: "algorithms",
        summary: "List the supported algorithms and the default",
        run: run_algorithms,
    },
];

/// Look up a command by exact name.
pub fn find(name: &str) -> Result<&'static Command, ToolError> {
    COMMANDS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ToolError::UnknownCommand {
            name: name.escape_debug().to_string(),
            available: COMMANDS
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Resolve and run a command, folding any error into the outcome.
pub fn dispatch(name: &str, inputs: &Inputs, settings: &Settings) -> Outcome {
    let outcome = find(name)
        .and_then(|command| {
            info!(command = command.name, "dispatching");
            (command.run)(inputs, settings)
        })
        .unwrap_or_else(Outcome::from);
    debug!(command = name, success = outcome.success, "command finished");
    outcome
}

/// Command listing for `--help`.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut text = String::from("Commands:\n");
    for c in COMMANDS {
        text.push_str(&format!("  {:width$}  {}\n", c.name, c.summary));
    }
    text.push_str("\nInputs are read from the DATA, ALGO and EXPECTED environment variables.");
    text
}

fn run_hash(inputs: &Inputs, settings: &Settings) -> Result<Outcome, ToolError> {
    let result = hashtool_core::hash(
        inputs.bytes(DATA),
        &inputs.text(ALGO),
        settings.default_algorithm,
    )?;
    Ok(Outcome::ok(to_line(&result)?))
}

fn run_verify(inputs: &Inputs, settings: &Settings) -> Result<Outcome, ToolError> {
    let result = hashtool_core::verify(
        inputs.bytes(DATA),
        &inputs.text(ALGO),
        &inputs.text(EXPECTED),
        settings.default_algorithm,
    )?;
    Ok(Outcome {
        line: to_line(&result)?,
        success: result.matched,
    })
}

fn run_algorithms(_inputs: &Inputs, settings: &Settings) -> Result<Outcome, ToolError> {
    let list = AlgorithmList::new(settings.default_algorithm);
    Ok(Outcome::ok(to_line(&list)?))
}
