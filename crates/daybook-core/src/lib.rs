// ABOUTME: Core types for the daybook scoring engine
// ABOUTME: Foundation crate with domain models, raw-field storage traits, and tolerant parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

#![deny(unsafe_code)]

//! # Daybook Core
//!
//! Foundation crate for the daybook daily-tracking engine. It owns the
//! canonical day model, the loosely-typed storage layer it is assembled
//! from, and the tolerant field parsers that bridge the two. This crate is
//! designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Canonical [`models::DayRecord`] plus training, steps,
//!   food, and expense types
//! - **store**: [`store::DayStore`] / [`store::FoodCatalog`] traits over
//!   raw fields, with an in-memory backend
//! - **parse**: Tolerant parsers for numbers, sleep sentinels, and choice
//!   tokens in messy stored data
//! - **errors**: Engine error type shared across the workspace
//! - **time**: Zone-aware "today" resolution

/// Engine error type and result alias
pub mod errors;

/// Core domain models (`DayRecord`, `Training`, `MacroVector`, etc.)
pub mod models;

/// Tolerant parsers for raw stored field values
pub mod parse;

/// Raw-field storage traits and the in-memory backend
pub mod store;

/// Time-zone aware date helpers
pub mod time;
