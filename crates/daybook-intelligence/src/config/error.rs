// ABOUTME: Error type for engine configuration validation
// ABOUTME: Returned by the validate methods on every config section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., penalty not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Weight set that breaks the scoring contract
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Malformed scoring curve, message names the curve
    #[error("Invalid curve: {0}")]
    InvalidCurve(String),
}
