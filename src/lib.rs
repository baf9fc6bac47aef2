// ABOUTME: Main library entry point for the Daybook scoring engine
// ABOUTME: Re-exports the core data layer and the intelligence layer as one facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

// Crate-level attributes:
// - deny(unsafe_code): the engine is pure computation over in-memory day
//   records; nothing here justifies an unsafe block
#![deny(unsafe_code)]

//! # Daybook
//!
//! A scoring and statistics engine for personal daily-activity tracking.
//! Each calendar day is a loosely-typed bag of logged fields (training,
//! study minutes, sleep, food, expenses); Daybook normalizes those fields
//! into typed records, grades each day, and aggregates periods of days
//! into summaries.
//!
//! ## Features
//!
//! - **Day assembly**: Tolerant parsing of free-form logged values into a
//!   typed [`models::DayRecord`]
//! - **Quality scoring**: A weighted 0-100 day score built from
//!   piecewise-linear curves over sleep, steps, study, and sport
//! - **Completion tracking**: Four daily gates with a human-readable
//!   summary of what is still missing
//! - **Nutrition targets**: Macro target bands per day type, deficit
//!   scoring, portion recommendations, and a greedy meal planner
//! - **Period statistics**: Windowed averages, expense breakdowns, and
//!   shots activity classification over a week, month, or full history
//!
//! ## Architecture
//!
//! The workspace splits into two layers:
//! - **`daybook-core`**: Field storage traits, tolerant field parsing,
//!   and the domain model (day records, portions, expense categories)
//! - **`daybook-intelligence`**: Everything derived from stored fields:
//!   scoring curves, completion gates, nutrition analysis, and period
//!   aggregation
//!
//! This facade crate re-exports both so applications depend on a single
//! `daybook` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daybook::assembler::DayAssembler;
//! use daybook::config::EngineConfig;
//! use daybook::store::{DayField, FieldValue, MemoryStore, RawDay};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let date = NaiveDate::from_ymd_opt(2025, 7, 14).ok_or("bad date")?;
//!
//!     let mut store = MemoryStore::new();
//!     store.put_day(
//!         date,
//!         RawDay::new()
//!             .with(DayField::Training, FieldValue::text("Upper"))
//!             .with(DayField::StepsCount, FieldValue::number(9_200.0))
//!             .with(DayField::EnglishMin, FieldValue::number(45.0))
//!             .with(DayField::MlMin, FieldValue::number(70.0))
//!             .with(DayField::SleepHours, FieldValue::text("7,5")),
//!     );
//!
//!     let config = EngineConfig::default();
//!     config.validate()?;
//!
//!     let assembler = DayAssembler::new(&store, &store, &config);
//!     let day = assembler.assemble(date);
//!     println!("{}: quality {} ({})", date, day.quality, day.completion.label());
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Re-exported module-by-module so downstream code can write
// `daybook::quality::...` without caring which workspace crate owns it.

pub use daybook_core::{errors, models, parse, store, time};

pub use daybook_intelligence::{assembler, completion, config, curve, nutrition, quality, stats};
