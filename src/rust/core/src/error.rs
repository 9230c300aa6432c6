// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Error types for the wormhole kernel.
//!
//! Parameter validity is reported as data (`ValidationResult`), not through
//! this enum. Errors here are only raised at the kernel boundary and by the
//! export serializer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WormholeError {
    /// Input outside the numeric domain of a formula (zero radius, zero frequency, NaN).
    #[error("Domain error: {parameter} = {value} ({reason})")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WormholeError {
    pub fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        WormholeError::Domain {
            parameter,
            value,
            reason,
        }
    }
}

impl From<serde_json::Error> for WormholeError {
    fn from(err: serde_json::Error) -> Self {
        WormholeError::Serialization(err.to_string())
    }
}

/// Result type for kernel operations
pub type WormholeResult<T> = Result<T, WormholeError>;
