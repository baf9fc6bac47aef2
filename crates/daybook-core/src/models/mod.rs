// ABOUTME: Domain model types for days, food, and expenses
// ABOUTME: Submodules stay private; everything public is re-exported flat from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Core domain models.
//!
//! The canonical [`DayRecord`] and its supporting enums live in `day`,
//! food-tracking types in `food`, and the expense breakdown in `expense`.
//! Callers import from this module directly; the submodule split is an
//! implementation detail.

mod day;
mod expense;
mod food;

pub use day::{CompletionStatus, DayRecord, StepsBucket, Training};
pub use expense::{ExpenseBreakdown, ExpenseCategory};
pub use food::{
    BandProgress, DayType, FoodLogEntry, Macro, MacroVector, Portion, TargetBand,
};
