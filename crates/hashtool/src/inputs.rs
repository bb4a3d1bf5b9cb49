// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named inputs supplied by the orchestrator.
//!
//! Values are kept as raw bytes. `DATA` is hashed exactly as the environment
//! carried it; names such as `ALGO` are read as text.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::OsString;

/// The data to digest.
pub const DATA: &str = "DATA";
/// The algorithm name; empty means the configured default.
pub const ALGO: &str = "ALGO";
/// The digest `verify` compares against.
pub const EXPECTED: &str = "EXPECTED";

/// Every input name a command may read.
pub const KNOWN: &[&str] = &[DATA, ALGO, EXPECTED];

/// A mapping of named inputs. Absent and empty are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    values: BTreeMap<String, Vec<u8>>,
}

impl Inputs {
    /// Read every known input from the process environment.
    pub fn from_env() -> Self {
        KNOWN
            .iter()
            .filter_map(|&name| std::env::var_os(name).map(|v| (name, os_bytes(v))))
            .collect()
    }

    /// The named input's bytes, or `b""` if it was not supplied.
    pub fn bytes(&self, name: &str) -> &[u8] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The named input as text; invalid UTF-8 is replaced with U+FFFD.
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes(name))
    }
}

#[cfg(unix)]
fn os_bytes(value: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    value.into_vec()
}

// Non-unix environments are UTF-16; there is no byte form to preserve.
#[cfg(not(unix))]
fn os_bytes(value: OsString) -> Vec<u8> {
    value.to_string_lossy().into_owned().into_bytes()
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
