// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `hash` and `verify` operations.
//!
//! Both validate in a fixed order (data, then algorithm, then any expected
//! digest) so the first failing input decides the error.

use tracing::debug;

use crate::error::ToolError;
use crate::types::{Algorithm, HashResult, VerifyResult};

/// Hash `data` with the named algorithm.
///
/// `data` is taken as raw bytes; it need not be UTF-8. An empty `algorithm`
/// falls back to `default`.
pub fn hash(data: &[u8], algorithm: &str, default: Algorithm) -> Result<HashResult, ToolError> {
    if data.is_empty() {
        return Err(ToolError::MissingData);
    }
    let algo = Algorithm::resolve(algorithm, default)?;
    debug!(algo = %algo, bytes = data.len(), "computing digest");
    Ok(HashResult::compute(algo, data))
}

/// Hash `data` and compare the digest against `expected`.
///
/// `expected` is accepted in either hex case. A well-formed digest that does
/// not match is not an error; it is reported through [`VerifyResult::matched`].
pub fn verify(
    data: &[u8],
    algorithm: &str,
    expected: &str,
    default: Algorithm,
) -> Result<VerifyResult, ToolError> {
    if data.is_empty() {
        return Err(ToolError::MissingData);
    }
    let algo = Algorithm::resolve(algorithm, default)?;
    if expected.is_empty() {
        return Err(ToolError::MissingExpected);
    }
    let expected = parse_expected(algo, expected)?;

    let actual = algo.digest(data);
    let matched = actual == expected;
    debug!(algo = %algo, matched, "verified digest");

    Ok(VerifyResult {
        algo,
        hash: hex::encode(&actual),
        expected: hex::encode(&expected),
        matched,
    })
}

fn parse_expected(algo: Algorithm, expected: &str) -> Result<Vec<u8>, ToolError> {
    if expected.len() != algo.hex_len() {
        return Err(ToolError::InvalidDigest {
            algo: algo.to_string(),
            reason: format!(
                "expected {} hex characters, got {}",
                algo.hex_len(),
                expected.len()
            ),
        });
    }
    hex::decode(expected).map_err(|e| ToolError::InvalidDigest {
        algo: algo.to_string(),
        reason: e.to_string(),
    })
}
