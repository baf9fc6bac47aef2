// ABOUTME: Assembles canonical DayRecords from raw stored fields on demand
// ABOUTME: Tolerant normalization, food-log macro fallback, and derived-field attachment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Day assembly.
//!
//! [`DayAssembler`] turns one date's loosely-typed [`RawDay`] into a
//! finished [`DayRecord`]: every field runs through the tolerant parsers,
//! macros fall back to the food log when no explicit totals were typed,
//! and completion status, quality score, and the missing-gates summary are
//! attached at the end. Store failures never surface — a day that cannot
//! be read scores as an empty day, with a warning.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use daybook_core::models::{DayRecord, ExpenseBreakdown, MacroVector, StepsBucket, Training};
use daybook_core::parse;
use daybook_core::store::{DayField, DayStore, FieldValue, FoodCatalog, RawDay};

use crate::completion;
use crate::config::EngineConfig;
use crate::quality;

/// Assembles finished day records from a store and a portion catalog.
pub struct DayAssembler<'a, S, C> {
    store: &'a S,
    catalog: &'a C,
    config: &'a EngineConfig,
}

impl<'a, S: DayStore, C: FoodCatalog> DayAssembler<'a, S, C> {
    /// Wire an assembler over borrowed store, catalog, and configuration.
    #[must_use]
    pub const fn new(store: &'a S, catalog: &'a C, config: &'a EngineConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    /// Assemble the record for `date`, recomputed from current store state.
    ///
    /// A missing row or a failed read both produce an empty day; the
    /// failure case additionally logs a warning.
    #[must_use]
    pub fn assemble(&self, date: NaiveDate) -> DayRecord {
        let raw = match self.store.raw_day(date) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%date, "no stored row for date");
                RawDay::new()
            }
            Err(err) => {
                warn!(%date, error = %err, "raw day read failed, treating the day as empty");
                RawDay::new()
            }
        };
        let mut record = self.normalize(date, &raw);
        self.attach_derived(&mut record);
        record
    }

    /// Map every raw field onto the canonical record.
    fn normalize(&self, date: NaiveDate, raw: &RawDay) -> DayRecord {
        let mut record = DayRecord::empty(date);

        record.training = raw
            .get(DayField::Training)
            .and_then(|value| Training::from_str_lossy(&parse::choice(value)));

        record.steps_count = num(raw, DayField::StepsCount);
        record.steps_bucket = raw
            .get(DayField::StepsCategory)
            .and_then(|value| StepsBucket::from_label_lossy(&parse::choice(value)));
        if record.steps_bucket.is_none() && record.steps_count > 0.0 {
            record.steps_bucket = Some(StepsBucket::from_count(record.steps_count));
        }

        record.english_min = num(raw, DayField::EnglishMin);
        record.ml_min = num(raw, DayField::MlMin);
        record.algo_min = num(raw, DayField::AlgoMin);
        record.uni_min = num(raw, DayField::UniMin);
        record.cardio_min = num(raw, DayField::CardioMin);
        record.reading_pages = num(raw, DayField::ReadingPages);
        record.shots_count = num(raw, DayField::ShotsCount);

        record.sleep_hours = raw.get(DayField::SleepHours).and_then(parse::sleep_hours);
        record.nap_hours = num(raw, DayField::NapHours);

        record.sleep_regime = opt_choice(raw, DayField::SleepRegime);
        record.rest_type = opt_choice(raw, DayField::RestType);
        record.mood = opt_choice(raw, DayField::Mood);
        record.energy = opt_choice(raw, DayField::Energy);

        record.weight = opt_number(raw, DayField::Weight);
        record.productivity = opt_number(raw, DayField::Productivity);
        record.active_kcal = opt_number(raw, DayField::ActiveKcal);

        record.habits_done = raw
            .get(DayField::Habits)
            .map(parse::habit_list)
            .unwrap_or_default();

        record.macros = if has_explicit_macros(raw) {
            Some(MacroVector::new(
                num(raw, DayField::FoodKcal),
                num(raw, DayField::FoodProtein),
                num(raw, DayField::FoodFat),
                num(raw, DayField::FoodCarb),
            ))
        } else {
            self.food_log_total(date)
        };

        record.expenses = ExpenseBreakdown {
            total: num(raw, DayField::ExpenseTotal),
            food: num(raw, DayField::ExpenseFood),
            clothes: num(raw, DayField::ExpenseClothes),
            household: num(raw, DayField::ExpenseHousehold),
            party: num(raw, DayField::ExpenseParty),
            health: num(raw, DayField::ExpenseHealth),
            other: num(raw, DayField::ExpenseOther),
        };

        record.regret = opt_text(raw, DayField::Regret);
        record.review = opt_text(raw, DayField::Review);

        record
    }

    /// Total macros from the day's food log, `None` when nothing matched.
    fn food_log_total(&self, date: NaiveDate) -> Option<MacroVector> {
        let entries = match self.store.food_log(date) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%date, error = %err, "food log read failed, macros stay untracked");
                return None;
            }
        };
        if entries.is_empty() {
            return None;
        }
        let portions = match self.catalog.portions() {
            Ok(portions) => portions,
            Err(err) => {
                warn!(%date, error = %err, "portion catalog read failed, macros stay untracked");
                return None;
            }
        };
        let by_code: HashMap<&str, MacroVector> = portions
            .iter()
            .map(|portion| (portion.code.as_str(), portion.macros))
            .collect();

        let mut total = MacroVector::ZERO;
        let mut matched = false;
        for entry in &entries {
            if let Some(macros) = by_code.get(entry.portion_code.as_str()) {
                total += macros.scale(entry.quantity);
                matched = true;
            } else {
                debug!(code = %entry.portion_code, "unknown portion code in food log");
            }
        }
        matched.then_some(total)
    }

    /// Attach completion status, missing-gates summary, and quality score.
    fn attach_derived(&self, record: &mut DayRecord) {
        let completion = completion::classify(record, &self.config.gates);
        record.completion = completion.status;
        record.missing = completion.missing;
        record.quality = quality::quality_score(record, &self.config.quality);
    }
}

fn num(raw: &RawDay, field: DayField) -> f64 {
    raw.get(field).map_or(0.0, parse::number)
}

/// A number that distinguishes "not filled in" from zero.
fn opt_number(raw: &RawDay, field: DayField) -> Option<f64> {
    raw.get(field)
        .filter(|value| value.has_value())
        .map(parse::number)
}

/// A choice token, `None` when the field is absent or blank.
fn opt_choice(raw: &RawDay, field: DayField) -> Option<String> {
    raw.get(field)
        .map(parse::choice)
        .filter(|token| !token.is_empty())
}

/// Free text, trimmed; `None` when absent or blank.
fn opt_text(raw: &RawDay, field: DayField) -> Option<String> {
    raw.get(field).and_then(|value| match value {
        FieldValue::Number(n) => Some(format!("{n}")),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
    })
}

/// Whether any of the four explicit macro fields carries a value; typed
/// totals always win over the food log.
fn has_explicit_macros(raw: &RawDay) -> bool {
    [
        DayField::FoodKcal,
        DayField::FoodProtein,
        DayField::FoodFat,
        DayField::FoodCarb,
    ]
    .iter()
    .any(|field| raw.get(*field).is_some_and(FieldValue::has_value))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use daybook_core::errors::{EngineError, EngineResult};
    use daybook_core::models::{CompletionStatus, FoodLogEntry, Portion};
    use daybook_core::store::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn catalog_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_portion(Portion {
            code: "chicken_200".to_owned(),
            product: "chicken".to_owned(),
            label: "Chicken breast 200g".to_owned(),
            grams: 200.0,
            macros: MacroVector::new(330.0, 62.0, 7.0, 0.0),
        });
        store.add_portion(Portion {
            code: "rice_150".to_owned(),
            product: "rice".to_owned(),
            label: "Rice 150g".to_owned(),
            grams: 150.0,
            macros: MacroVector::new(195.0, 4.0, 0.5, 42.0),
        });
        store
    }

    struct FailingStore;

    impl DayStore for FailingStore {
        fn raw_day(&self, _date: NaiveDate) -> EngineResult<Option<RawDay>> {
            Err(EngineError::store("backend offline"))
        }

        fn dates_with_data(&self) -> EngineResult<Vec<NaiveDate>> {
            Err(EngineError::store("backend offline"))
        }

        fn food_log(&self, _date: NaiveDate) -> EngineResult<Vec<FoodLogEntry>> {
            Err(EngineError::store("backend offline"))
        }
    }

    #[test]
    fn messy_raw_fields_normalize() {
        let mut store = MemoryStore::new();
        store.put_day(
            date("2025-03-10"),
            RawDay::new()
                .with(DayField::Training, FieldValue::text("  Upper "))
                .with(DayField::StepsCategory, FieldValue::text("7-10k"))
                .with(DayField::EnglishMin, FieldValue::text("45"))
                .with(DayField::MlMin, FieldValue::number(70.0))
                .with(DayField::SleepHours, FieldValue::text("6-8"))
                .with(DayField::Weight, FieldValue::text("85,6 кг"))
                .with(DayField::Mood, FieldValue::text(" good "))
                .with(DayField::ExpenseTotal, FieldValue::text("1 250 руб")),
        );
        let config = EngineConfig::default();
        let catalog = MemoryStore::new();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        assert_eq!(record.training, Some(Training::Upper));
        assert_eq!(record.steps_bucket, Some(StepsBucket::From7kTo10k));
        assert_eq!(record.steps_value(), 8500.0);
        assert_eq!(record.english_min, 45.0);
        assert_eq!(record.sleep_hours, Some(7.0));
        assert_eq!(record.weight, Some(85.6));
        assert_eq!(record.mood.as_deref(), Some("good"));
        assert_eq!(record.expenses.total, 1250.0);
        assert_eq!(record.completion, CompletionStatus::Full);
        assert!(record.quality > 0);
        assert_eq!(record.missing, None);
    }

    #[test]
    fn missing_row_assembles_an_empty_day() {
        let store = MemoryStore::new();
        let config = EngineConfig::default();
        let catalog = MemoryStore::new();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        assert_eq!(record.completion, CompletionStatus::Empty);
        assert_eq!(record.quality, 0);
        assert!(record.missing.is_some(), "empty days still list every gate");
    }

    #[test]
    fn store_failure_degrades_to_an_empty_day() {
        let config = EngineConfig::default();
        let catalog = MemoryStore::new();
        let record = DayAssembler::new(&FailingStore, &catalog, &config).assemble(date("2025-03-10"));

        assert_eq!(record.completion, CompletionStatus::Empty);
        assert_eq!(record.quality, 0);
        assert!(!record.has_any_signal());
    }

    #[test]
    fn macros_fall_back_to_the_food_log() {
        let mut store = catalog_store();
        store.put_day(
            date("2025-03-10"),
            RawDay::new().with(DayField::Training, FieldValue::text("rest")),
        );
        store.log_food(date("2025-03-10"), FoodLogEntry::new("chicken_200", 2.0));
        store.log_food(date("2025-03-10"), FoodLogEntry::new("rice_150", 1.0));
        store.log_food(date("2025-03-10"), FoodLogEntry::new("mystery_999", 1.0));

        let config = EngineConfig::default();
        let catalog = store.clone();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        let macros = record.macros.unwrap();
        assert_eq!(macros.kcal, 855.0, "two chicken portions plus one rice, mystery skipped");
        assert_eq!(macros.protein, 128.0);
        assert_eq!(macros.carb, 42.0);
    }

    #[test]
    fn explicit_macro_fields_override_the_food_log() {
        let mut store = catalog_store();
        store.put_day(
            date("2025-03-10"),
            RawDay::new()
                .with(DayField::FoodKcal, FieldValue::number(1800.0))
                .with(DayField::FoodProtein, FieldValue::text("120")),
        );
        store.log_food(date("2025-03-10"), FoodLogEntry::new("chicken_200", 1.0));

        let config = EngineConfig::default();
        let catalog = store.clone();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        let macros = record.macros.unwrap();
        assert_eq!(macros.kcal, 1800.0);
        assert_eq!(macros.protein, 120.0);
        assert_eq!(macros.fat, 0.0, "unset explicit fields read as zero");
    }

    #[test]
    fn unmatched_log_alone_leaves_macros_untracked() {
        let mut store = catalog_store();
        store.put_day(
            date("2025-03-10"),
            RawDay::new().with(DayField::Mood, FieldValue::text("fine")),
        );
        store.log_food(date("2025-03-10"), FoodLogEntry::new("mystery_999", 3.0));

        let config = EngineConfig::default();
        let catalog = store.clone();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));
        assert_eq!(record.macros, None);
    }

    #[test]
    fn blank_text_reads_as_unset() {
        let mut store = MemoryStore::new();
        store.put_day(
            date("2025-03-10"),
            RawDay::new()
                .with(DayField::Training, FieldValue::text(""))
                .with(DayField::Weight, FieldValue::text("  "))
                .with(DayField::Mood, FieldValue::text("   ")),
        );
        let config = EngineConfig::default();
        let catalog = MemoryStore::new();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        assert_eq!(record.training, None);
        assert_eq!(record.weight, None);
        assert_eq!(record.mood, None);
        assert!(!record.has_any_signal());
        assert_eq!(record.completion, CompletionStatus::Empty);
    }

    #[test]
    fn bucket_derives_from_a_direct_count() {
        let mut store = MemoryStore::new();
        store.put_day(
            date("2025-03-10"),
            RawDay::new().with(DayField::StepsCount, FieldValue::text("11 500")),
        );
        let config = EngineConfig::default();
        let catalog = MemoryStore::new();
        let record = DayAssembler::new(&store, &catalog, &config).assemble(date("2025-03-10"));

        assert_eq!(record.steps_count, 11_500.0);
        assert_eq!(record.steps_bucket, Some(StepsBucket::From10kTo12k));
        assert_eq!(record.steps_value(), 11_500.0, "direct count wins over the estimate");
    }
}
