// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for hashtool.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Values are typed, so a config that deserializes is
//! a config that is used as written: `"md5 "` is rejected, not trimmed.

use hashtool_core::Algorithm;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// Top-level hashtool configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HashtoolConfig {
    /// Command behavior settings.
    #[serde(default)]
    pub tool: ToolConfig,

    /// Diagnostic logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Algorithm used when `ALGO` is empty.
    #[serde(default = "default_algorithm")]
    pub default_algorithm: Algorithm,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
        }
    }
}

fn default_algorithm() -> Algorithm {
    Algorithm::DEFAULT
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level. Logs go to stderr.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log levels accepted by `log.level` and `--log-level`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every level name, lowest severity first.
    pub fn names() -> &'static [&'static str] {
        Self::VARIANTS
    }
}
