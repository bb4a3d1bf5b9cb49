// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Algorithm set and the structured results emitted by commands.

use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::ToolError;

/// Minimum Jaro-Winkler similarity for an algorithm name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A supported digest algorithm.
///
/// Names are matched exactly and are always lowercase on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha256,
}

impl Algorithm {
    /// Every supported algorithm, sorted by name.
    pub const ALL: [Algorithm; 2] = [Algorithm::Md5, Algorithm::Sha256];

    /// The algorithm used when none is requested.
    pub const DEFAULT: Algorithm = Algorithm::Sha256;

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Raw digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha256 => 32,
        }
    }

    /// Hex-encoded digest length in characters.
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Compute the raw digest of `data`.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => Md5::digest(data).to_vec(),
            Algorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Compute the lowercase hex digest of `data`.
    pub fn hex_digest(self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }

    /// Supported names joined for display, e.g. `md5, sha256`.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve a requested algorithm name.
    ///
    /// An empty name resolves to `default`. Anything outside the supported set
    /// fails with [`ToolError::UnsupportedAlgorithm`].
    pub fn resolve(name: &str, default: Algorithm) -> Result<Algorithm, ToolError> {
        if name.is_empty() {
            return Ok(default);
        }
        Algorithm::from_str(name).map_err(|_| ToolError::UnsupportedAlgorithm {
            name: name.escape_debug().to_string(),
            supported: Self::supported_list(),
            suggestion: suggest_algorithm(name).map(str::to_string),
        })
    }
}

/// Suggest the closest supported algorithm name, compared case-insensitively.
pub fn suggest_algorithm(unknown: &str) -> Option<&'static str> {
    let unknown = unknown.to_ascii_lowercase();
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for algo in Algorithm::ALL {
        let score = strsim::jaro_winkler(&unknown, algo.name());
        if score > best_score {
            best_score = score;
            best_match = Some(algo.name());
        }
    }

    best_match
}

/// Successful output of the `hash` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub algo: Algorithm,
    /// Lowercase hex digest.
    pub hash: String,
}

impl HashResult {
    /// Hash `data` with `algo`.
    pub fn compute(algo: Algorithm, data: &[u8]) -> Self {
        Self {
            algo,
            hash: algo.hex_digest(data),
        }
    }
}

/// Output of the `verify` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub algo: Algorithm,
    /// Lowercase hex digest of the data.
    pub hash: String,
    /// The expected digest, normalized to lowercase.
    pub expected: String,
    #[serde(rename = "match")]
    pub matched: bool,
}

/// Output of the `algorithms` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmList {
    pub algorithms: Vec<Algorithm>,
    pub default: Algorithm,
}

impl AlgorithmList {
    pub fn new(default: Algorithm) -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            default,
        }
    }
}

/// Encode a result as a compact, single-line JSON object.
pub fn to_line<T: Serialize>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string(value)?)
}
