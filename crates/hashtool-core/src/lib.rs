// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for hashtool.
//!
//! This crate provides the supported digest algorithms, the `hash` and
//! `verify` operations, the structured results they produce, and the error
//! type shared by the binary and configuration crates.

pub mod error;
pub mod ops;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ToolError;
pub use ops::{hash, verify};
pub use types::{suggest_algorithm, to_line, Algorithm, AlgorithmList, HashResult, VerifyResult};
