// ABOUTME: Error types shared across the daybook engine
// ABOUTME: Defines EngineError for store and configuration failures plus a result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Error types shared across the daybook engine.
//!
//! The engine itself never fails: malformed input resolves to safe defaults
//! inside [`crate::parse`], a missing target band is an `Option`, and an empty
//! candidate set is an empty `Vec`. `EngineError` exists for the boundaries
//! where failure is real — store implementations serving reads, and
//! configuration validation — and is absorbed (logged, defaulted) by the
//! calling computation rather than propagated to display code.

use thiserror::Error;

/// Failures surfaced at the engine's boundaries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An external day store or food catalog failed to serve a read.
    #[error("store error: {0}")]
    Store(String),

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Store failure with a context message.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Configuration failure with a context message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Convenience result alias for fallible store and configuration calls.
pub type EngineResult<T> = Result<T, EngineError>;
