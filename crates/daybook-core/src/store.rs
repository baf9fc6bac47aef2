// ABOUTME: Raw per-day field storage model plus the DayStore and FoodCatalog traits
// ABOUTME: Includes MemoryStore, the in-memory backend used by tests and embedders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Storage abstraction for raw day data.
//!
//! The engine never talks to a concrete backend. It reads loosely-typed
//! [`RawDay`] maps through [`DayStore`] and portion definitions through
//! [`FoodCatalog`]; all normalization happens downstream in the assembler.
//! [`MemoryStore`] implements both traits over plain maps.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;
use crate::models::{FoodLogEntry, Portion};

/// One raw stored cell: a number or free text, exactly as the backend holds it.
///
/// Backends are free to store numbers as text ("12 500 руб."); the tolerant
/// parsers in [`crate::parse`] accept either variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Already-numeric value
    Number(f64),
    /// Free-form text, possibly with units or decorations
    Text(String),
}

impl FieldValue {
    /// Text value constructor.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric value constructor.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Whether the cell carries anything: numbers always do, text only
    /// when non-blank.
    #[must_use]
    pub fn has_value(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// Every raw field a day can carry, keyed independently of any backend's
/// column naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayField {
    /// Training choice token
    Training,
    /// Coarse steps bucket token
    StepsCategory,
    /// Direct step count
    StepsCount,
    /// English practice minutes
    EnglishMin,
    /// ML study minutes
    MlMin,
    /// Algorithms study minutes
    AlgoMin,
    /// University minutes
    UniMin,
    /// Cardio minutes
    CardioMin,
    /// Pages read
    ReadingPages,
    /// Shots counter
    ShotsCount,
    /// Night sleep (sentinel token or hours)
    SleepHours,
    /// Daytime nap hours
    NapHours,
    /// Sleep regime choice
    SleepRegime,
    /// Rest type choice
    RestType,
    /// Mood choice
    Mood,
    /// Energy choice
    Energy,
    /// Body weight
    Weight,
    /// Self-rated productivity
    Productivity,
    /// Active kilocalories
    ActiveKcal,
    /// Habit list, `;`- or `,`-separated
    Habits,
    /// Explicit kilocalorie total
    FoodKcal,
    /// Explicit protein grams
    FoodProtein,
    /// Explicit fat grams
    FoodFat,
    /// Explicit carb grams
    FoodCarb,
    /// Total spend
    ExpenseTotal,
    /// Food spend
    ExpenseFood,
    /// Clothes spend
    ExpenseClothes,
    /// Household spend
    ExpenseHousehold,
    /// Going-out spend
    ExpenseParty,
    /// Health spend
    ExpenseHealth,
    /// Uncategorized spend
    ExpenseOther,
    /// Free-text regret note
    Regret,
    /// Free-text day review
    Review,
}

/// Loosely-typed raw fields for one date, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    fields: HashMap<DayField, FieldValue>,
}

impl RawDay {
    /// An empty raw day.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, field: DayField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    /// Builder-style [`Self::set`].
    #[must_use]
    pub fn with(mut self, field: DayField, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, field: DayField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Whether no field is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Read access to raw day rows and food logs.
///
/// Implementations map whatever the backend stores onto [`RawDay`] fields;
/// absent rows are `Ok(None)`, backend failures are `Err` and downgraded to
/// empty days by the assembler.
pub trait DayStore {
    /// Raw fields for `date`, or `None` when the backend has no row.
    fn raw_day(&self, date: NaiveDate) -> EngineResult<Option<RawDay>>;

    /// Ascending list of dates that carry at least one raw field.
    fn dates_with_data(&self) -> EngineResult<Vec<NaiveDate>>;

    /// Food-log entries recorded for `date`, empty when none.
    fn food_log(&self, date: NaiveDate) -> EngineResult<Vec<FoodLogEntry>>;
}

/// Read access to the portion catalog.
pub trait FoodCatalog {
    /// All known portions.
    fn portions(&self) -> EngineResult<Vec<Portion>>;
}

/// In-memory [`DayStore`] and [`FoodCatalog`] over plain maps.
///
/// The reference backend: tests seed it directly, and embedders can use it
/// as-is when persistence is handled elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    days: BTreeMap<NaiveDate, RawDay>,
    food_logs: BTreeMap<NaiveDate, Vec<FoodLogEntry>>,
    catalog: Vec<Portion>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the raw fields for a date.
    pub fn put_day(&mut self, date: NaiveDate, raw: RawDay) {
        self.days.insert(date, raw);
    }

    /// Append one food-log entry for a date.
    pub fn log_food(&mut self, date: NaiveDate, entry: FoodLogEntry) {
        self.food_logs.entry(date).or_default().push(entry);
    }

    /// Add a portion to the catalog.
    pub fn add_portion(&mut self, portion: Portion) {
        self.catalog.push(portion);
    }
}

impl DayStore for MemoryStore {
    fn raw_day(&self, date: NaiveDate) -> EngineResult<Option<RawDay>> {
        Ok(self.days.get(&date).cloned())
    }

    fn dates_with_data(&self) -> EngineResult<Vec<NaiveDate>> {
        Ok(self
            .days
            .iter()
            .filter(|(_, raw)| !raw.is_empty())
            .map(|(date, _)| *date)
            .collect())
    }

    fn food_log(&self, date: NaiveDate) -> EngineResult<Vec<FoodLogEntry>> {
        Ok(self.food_logs.get(&date).cloned().unwrap_or_default())
    }
}

impl FoodCatalog for MemoryStore {
    fn portions(&self) -> EngineResult<Vec<Portion>> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroVector;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap_or_default()
    }

    #[test]
    fn raw_day_set_and_get() {
        let raw = RawDay::new()
            .with(DayField::Training, FieldValue::text("upper"))
            .with(DayField::EnglishMin, FieldValue::number(45.0));
        assert_eq!(raw.get(DayField::Training), Some(&FieldValue::text("upper")));
        assert_eq!(raw.get(DayField::Weight), None);
        assert!(!raw.is_empty());
    }

    #[test]
    fn blank_text_carries_no_value() {
        assert!(FieldValue::text("upper").has_value());
        assert!(FieldValue::number(0.0).has_value());
        assert!(!FieldValue::text("").has_value());
        assert!(!FieldValue::text("   ").has_value());
    }

    #[test]
    fn memory_store_round_trips_days() {
        let mut store = MemoryStore::new();
        store.put_day(
            date("2025-03-10"),
            RawDay::new().with(DayField::MlMin, FieldValue::number(70.0)),
        );

        let raw = store.raw_day(date("2025-03-10")).unwrap();
        assert_eq!(
            raw.and_then(|r| r.get(DayField::MlMin).cloned()),
            Some(FieldValue::number(70.0))
        );
        assert!(store.raw_day(date("2025-03-11")).unwrap().is_none());
    }

    #[test]
    fn dates_come_back_ascending_and_skip_blank_rows() {
        let mut store = MemoryStore::new();
        store.put_day(
            date("2025-03-12"),
            RawDay::new().with(DayField::Mood, FieldValue::text("good")),
        );
        store.put_day(
            date("2025-03-10"),
            RawDay::new().with(DayField::Mood, FieldValue::text("ok")),
        );
        store.put_day(date("2025-03-11"), RawDay::new());

        assert_eq!(
            store.dates_with_data().unwrap(),
            vec![date("2025-03-10"), date("2025-03-12")]
        );
    }

    #[test]
    fn food_log_defaults_to_empty() {
        let mut store = MemoryStore::new();
        assert!(store.food_log(date("2025-03-10")).unwrap().is_empty());

        store.log_food(date("2025-03-10"), FoodLogEntry::new("chicken_200", 2.0));
        store.log_food(date("2025-03-10"), FoodLogEntry::new("rice_150", 1.0));
        assert_eq!(store.food_log(date("2025-03-10")).unwrap().len(), 2);
    }

    #[test]
    fn catalog_round_trips_portions() {
        let mut store = MemoryStore::new();
        store.add_portion(Portion {
            code: "chicken_200".to_owned(),
            product: "chicken".to_owned(),
            label: "Chicken breast 200g".to_owned(),
            grams: 200.0,
            macros: MacroVector::new(330.0, 62.0, 7.0, 0.0),
        });

        let portions = store.portions().unwrap();
        assert_eq!(portions.len(), 1);
        assert_eq!(portions[0].code, "chicken_200");
    }
}
