// ABOUTME: Shared fixtures for Daybook integration tests
// ABOUTME: Provides date parsing, raw-day builders, and a small portion catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test fixtures for `daybook`
//!
//! Builders used across the integration tests so each scenario file can
//! focus on assertions instead of setup.

use chrono::NaiveDate;
use daybook::models::{MacroVector, Portion};
use daybook::store::{DayField, FieldValue, MemoryStore, RawDay};

/// Parse an ISO date literal.
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A day that passes every gate: upper-body session, 8000 steps,
/// 45 english minutes, 70 ML minutes, 7.5 hours of sleep.
///
/// With default configuration it scores a quality of 72.
pub fn full_training_day() -> RawDay {
    RawDay::new()
        .with(DayField::Training, FieldValue::text("Upper"))
        .with(DayField::StepsCount, FieldValue::number(8_000.0))
        .with(DayField::EnglishMin, FieldValue::number(45.0))
        .with(DayField::MlMin, FieldValue::number(70.0))
        .with(DayField::SleepHours, FieldValue::text("7,5"))
}

/// Build a catalog portion from its macro numbers.
pub fn portion(code: &str, product: &str, kcal: f64, protein: f64, fat: f64, carb: f64) -> Portion {
    Portion {
        code: code.to_owned(),
        product: product.to_owned(),
        label: code.replace('_', " "),
        grams: 100.0,
        macros: MacroVector::new(kcal, protein, fat, carb),
    }
}

/// Seed the five-portion catalog the nutrition tests run against.
pub fn seed_catalog(store: &mut MemoryStore) {
    store.add_portion(portion("chicken_200", "chicken", 330.0, 62.0, 7.0, 0.0));
    store.add_portion(portion("rice_150", "rice", 195.0, 4.0, 0.0, 42.0));
    store.add_portion(portion("oats_100", "oats", 380.0, 13.0, 7.0, 62.0));
    store.add_portion(portion("salmon_150", "salmon", 310.0, 30.0, 20.0, 0.0));
    store.add_portion(portion("shake_300", "whey", 180.0, 35.0, 3.0, 8.0));
}
