// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for hashtool.
//!
//! Provides TOML configuration parsing into typed settings (`deny_unknown_fields`,
//! enum-valued fields), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use hashtool_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("default algorithm: {}", config.tool.default_algorithm);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;

use std::path::{Path, PathBuf};

pub use diagnostic::{render_errors, summary_line, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{HashtoolConfig, LogLevel};

use crate::diagnostic::SourceFile;

/// Load configuration from the XDG hierarchy.
///
/// Returns either a valid `HashtoolConfig` or every diagnostic found.
pub fn load_and_validate() -> Result<HashtoolConfig, Vec<ConfigError>> {
    finish(loader::load_config(), loader::standard_paths)
}

/// Load configuration from an explicit file plus env overrides.
pub fn load_and_validate_from(path: &Path) -> Result<HashtoolConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || vec![path.to_path_buf()])
}

/// Load configuration from a TOML string.
pub fn load_and_validate_str(toml_content: &str) -> Result<HashtoolConfig, Vec<ConfigError>> {
    loader::load_config_from_str(toml_content).map_err(|err| {
        let inline = SourceFile {
            path: "<inline>".to_string(),
            content: toml_content.to_string(),
        };
        diagnostic::from_figment(err, &[inline])
    })
}

fn finish(
    loaded: Result<HashtoolConfig, figment::Error>,
    paths: impl FnOnce() -> Vec<PathBuf>,
) -> Result<HashtoolConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            tracing::debug!(
                default_algorithm = %config.tool.default_algorithm,
                log_level = %config.log.level,
                "configuration loaded"
            );
            Ok(config)
        }
        // Files are only read back on failure, for span information.
        Err(err) => {
            let sources: Vec<SourceFile> =
                paths().iter().filter_map(|p| SourceFile::read(p)).collect();
            Err(diagnostic::from_figment(err, &sources))
        }
    }
}
