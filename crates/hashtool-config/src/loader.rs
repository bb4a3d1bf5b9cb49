// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Files are merged from `/etc/hashtool/hashtool.toml`, then
//! `~/.config/hashtool/hashtool.toml`, then `./hashtool.toml`, each overriding
//! the last, with `HASHTOOL_*` environment variables applied on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HashtoolConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/hashtool/hashtool.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "hashtool.toml";

/// The user's XDG config file, if a config dir exists on this platform.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hashtool/hashtool.toml"))
}

/// The standard config files in merge order, lowest precedence first.
pub fn standard_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    paths.extend(user_config_path());
    paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
    paths
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hashtool/hashtool.toml` (system-wide)
/// 3. `~/.config/hashtool/hashtool.toml` (user XDG config)
/// 4. `./hashtool.toml` (local directory)
/// 5. `HASHTOOL_*` environment variables
pub fn load_config() -> Result<HashtoolConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing.
pub fn load_config_from_str(toml_content: &str) -> Result<HashtoolConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HashtoolConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// The XDG hierarchy is skipped entirely.
pub fn load_config_from_path(path: &Path) -> Result<HashtoolConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HashtoolConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the standard hierarchy, before extraction.
pub fn build_figment() -> Figment {
    standard_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(HashtoolConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `HASHTOOL_TOOL_DEFAULT_ALGORITHM` must map to
/// `tool.default_algorithm`, not `tool.default.algorithm`.
fn env_provider() -> Env {
    Env::prefixed("HASHTOOL_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = if let Some(rest) = key_str.strip_prefix("tool_") {
            format!("tool.{rest}")
        } else if let Some(rest) = key_str.strip_prefix("log_") {
            format!("log.{rest}")
        } else {
            key_str.to_string()
        };
        mapped.into()
    })
}
