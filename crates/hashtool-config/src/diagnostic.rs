// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge.
//!
//! Every [`ConfigError`] has two renderings: the miette report written to
//! stderr, and [`ConfigError::line`], a single line for the output channel.
//! User-supplied keys and values are `escape_debug`-ed when the error is built.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(hashtool::config::unknown_key),
        help("{}", choices_help(suggestion.as_deref(), "valid keys", valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("not a hashtool setting")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A string value that names no variant of the setting, e.g. `"md5 "`.
    #[error("invalid value `{value}` for `{key}`: expected one of {expected}")]
    #[diagnostic(
        code(hashtool::config::invalid_value),
        help("{}", choices_help(suggestion.as_deref(), "accepted values", expected))
    )]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
        suggestion: Option<String>,
    },

    #[error("invalid type for `{key}`: {detail}")]
    #[diagnostic(code(hashtool::config::invalid_type))]
    InvalidType { key: String, detail: String },

    /// Anything else figment reports, including TOML syntax errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(hashtool::config::other))]
    Other(String),
}

fn choices_help(suggestion: Option<&str>, what: &str, choices: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? {what}: {choices}"),
        None => format!("{what}: {choices}"),
    }
}

impl ConfigError {
    /// The error as one line, for the output channel.
    ///
    /// Parser messages can span several lines and quote the offending source;
    /// the quoted source is dropped and the remaining lines are joined.
    pub fn line(&self) -> String {
        self.to_string()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !is_source_excerpt(l))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Gutter lines of a quoted source excerpt: `|`, `3 | key = 1`, `|   ^`.
fn is_source_excerpt(line: &str) -> bool {
    line.split_once('|')
        .is_some_and(|(gutter, _)| gutter.trim().bytes().all(|b| b.is_ascii_digit()))
}

/// A config file read back so unknown keys can be pointed at.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    /// Read `path`, keyed by its canonical form since that is what figment
    /// records as an error's source.
    pub fn read(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Some(Self {
            path: resolved.display().to_string(),
            content,
        })
    }

    /// Byte span of `key` under `[section]`, or at top level for `None`.
    pub fn key_span(&self, section: Option<&str>, key: &str) -> Option<SourceSpan> {
        let mut in_section = section.is_none();
        let mut offset = 0;
        for line in self.content.split_inclusive('\n') {
            let trimmed = line.trim_start();
            if let Some(header) = trimmed.strip_prefix('[') {
                let name = header.split_once(']').map(|(name, _)| name.trim());
                in_section = section.is_some() && name == section;
            } else if in_section
                && trimmed
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.trim_start().starts_with('='))
            {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::new(start.into(), key.len()));
            }
            offset += line.len();
        }
        None
    }
}

/// Convert a `figment::Error` chain into diagnostics, one per error.
pub fn from_figment(err: figment::Error, sources: &[SourceFile]) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| convert(&error, sources))
        .collect()
}

fn convert(error: &figment::Error, sources: &[SourceFile]) -> ConfigError {
    use figment::error::Kind;

    let path = error.path.join(".").escape_debug().to_string();
    match &error.kind {
        Kind::UnknownField(field, expected) => {
            let (span, src) = source_file(error, sources)
                .and_then(|file| {
                    let span = file.key_span(error.path.first().map(String::as_str), field)?;
                    Some((span, NamedSource::new(&file.path, file.content.clone())))
                })
                .unzip();
            ConfigError::UnknownKey {
                key: field.escape_debug().to_string(),
                suggestion: closest(field, expected).map(str::to_string),
                valid_keys: expected.join(", "),
                span,
                src,
            }
        }
        Kind::UnknownVariant(value, expected) => ConfigError::InvalidValue {
            key: path,
            value: value.escape_debug().to_string(),
            expected: expected.join(", "),
            suggestion: closest(&value.trim().to_lowercase(), expected).map(str::to_string),
        },
        Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
            key: path,
            detail: format!("found {actual}, expected {expected}"),
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

fn source_file<'a>(error: &figment::Error, sources: &'a [SourceFile]) -> Option<&'a SourceFile> {
    let figment::Source::File(path) = error.metadata.as_ref()?.source.as_ref()? else {
        return None;
    };
    let path = path.display().to_string();
    sources.iter().find(|s| s.path == path)
}

/// The option most similar to `input`, if any clears the threshold.
pub fn closest<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    options
        .iter()
        .map(|&option| (strsim::jaro_winkler(input, option), option))
        .filter(|&(score, _)| score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, option)| option)
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

/// Condense errors into one line for the output channel.
pub fn summary_line(errors: &[ConfigError]) -> String {
    match errors {
        [] => "configuration error".to_string(),
        [only] => only.line(),
        [first, rest @ ..] => format!("{} (and {} more)", first.line(), rest.len()),
    }
}
