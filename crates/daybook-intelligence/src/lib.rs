// ABOUTME: Scoring and analysis engine for the daybook tracker
// ABOUTME: Day assembly, quality scoring, completion gates, nutrition, and period stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

#![deny(unsafe_code)]

//! # Daybook Intelligence
//!
//! The engine half of the daybook workspace: everything that turns raw
//! stored day fields into scores, classifications, recommendations, and
//! period summaries. All computation is pure and synchronous — records are
//! assembled on demand from the storage traits in `daybook-core` and never
//! cached, so every answer reflects current store state.
//!
//! ## Modules
//!
//! - **assembler**: [`assembler::DayAssembler`], raw fields to finished
//!   [`daybook_core::models::DayRecord`]s
//! - **quality**: The 0..=115 daily quality score and its breakdown
//! - **completion**: Daily-minimum gates and the empty/full/partial/none
//!   status
//! - **nutrition**: Target bands, deficit scoring, portion recommendations,
//!   and greedy meal plans
//! - **stats**: Period aggregation with conditional averages, expense
//!   ranking, and shots streaks
//! - **curve**: Piecewise-linear scoring curve primitives
//! - **config**: [`config::EngineConfig`] with validated defaults

/// Day assembly from raw stored fields
pub mod assembler;

/// Daily-minimum gates and completion classification
pub mod completion;

/// Engine configuration sections and validation
pub mod config;

/// Piecewise-linear curves and the linear bonus ramp
pub mod curve;

/// Macro bands, deficit scoring, recommendations, and meal plans
pub mod nutrition;

/// Daily quality score and its component breakdown
pub mod quality;

/// Period statistics aggregation
pub mod stats;
