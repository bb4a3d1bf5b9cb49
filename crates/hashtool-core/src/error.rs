// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the hashtool command contract.
//!
//! Every variant's `Display` output is the exact line written to the
//! orchestrator's output channel, so messages are kept to a single line.

use thiserror::Error;

/// The error type returned by every command operation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The `DATA` input was absent or empty.
    #[error("a non-empty data argument is required")]
    MissingData,

    /// The requested algorithm is not in the supported set.
    #[error(
        "unsupported algorithm `{name}`: supported algorithms are {supported}{}",
        suggestion_suffix(.suggestion)
    )]
    UnsupportedAlgorithm {
        /// The algorithm name as supplied.
        name: String,
        /// Comma-separated supported names, in sorted order.
        supported: String,
        /// Closest supported name, if any is similar enough.
        suggestion: Option<String>,
    },

    /// `verify` was invoked without an `EXPECTED` digest.
    #[error("a non-empty expected digest is required")]
    MissingExpected,

    /// The `EXPECTED` input is not a well-formed digest for the algorithm.
    #[error("expected digest is not a valid {algo} digest: {reason}")]
    InvalidDigest { algo: String, reason: String },

    /// The command name is not in the command table.
    #[error("unknown command `{name}`: available commands are {available}")]
    UnknownCommand { name: String, available: String },

    /// The structured result could not be encoded.
    #[error("failed to encode result: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean `{s}`?)"),
        None => String::new(),
    }
}
