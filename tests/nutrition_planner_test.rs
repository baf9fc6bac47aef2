// ABOUTME: Integration tests for band selection, portion recommendations, and meal plans
// ABOUTME: Runs the nutrition engine against assembled days and the shared catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use chrono::NaiveDate;
use daybook::assembler::DayAssembler;
use daybook::config::EngineConfig;
use daybook::models::{DayType, FoodLogEntry, MacroVector};
use daybook::nutrition::{
    band_progress, build_plan, deficit_score, eaten_products, recommend_portions, target_band,
};
use daybook::store::{DayField, DayStore, FieldValue, FoodCatalog, MemoryStore, RawDay};

/// Store with a training day, one chicken portion logged, and the shared
/// catalog. The assembled record carries macros (330, 62, 7, 0).
fn training_day_store() -> (MemoryStore, NaiveDate) {
    let mut store = MemoryStore::new();
    let date = common::date("2025-06-30");
    common::seed_catalog(&mut store);
    store.put_day(
        date,
        RawDay::new().with(DayField::Training, FieldValue::text("Upper")),
    );
    store.log_food(date, FoodLogEntry::new("chicken_200", 1.0));
    (store, date)
}

// === Band selection ===

#[test]
fn training_day_reaches_for_the_training_band() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    assert_eq!(band.day_type, DayType::Training);

    let current = record.macros.unwrap();
    let progress = band_progress(current, &band);
    assert!(progress.to_min.kcal > 0.0, "one chicken is far below the band");
    assert!(progress.within_max());
}

#[test]
fn rest_band_sits_below_the_training_band() {
    let config = EngineConfig::default();
    let rest = config.nutrition.bands.band(DayType::Rest);
    let training = config.nutrition.bands.band(DayType::Training);
    assert!(rest.midpoint().kcal < training.midpoint().kcal);
    assert!(rest.max.kcal < training.min.kcal);
}

// === Recommendations ===

#[test]
fn recommendations_rank_by_deficit_cut_and_stay_positive() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    let current = record.macros.unwrap();
    let portions = store.portions().unwrap();
    let log = store.food_log(date).unwrap();
    let eaten = eaten_products(&log, &portions);
    assert!(eaten.contains("chicken"));

    let recs = recommend_portions(current, &band, &portions, &eaten, &config.nutrition, 5);
    assert!(!recs.is_empty());
    assert!(recs.iter().all(|rec| rec.improvement > 0.0));
    for pair in recs.windows(2) {
        assert!(
            pair[0].improvement >= pair[1].improvement,
            "suggestions must come ranked best-first"
        );
    }
}

#[test]
fn eaten_discount_is_exactly_the_configured_factor() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    let current = record.macros.unwrap();
    let portions = store.portions().unwrap();

    let fresh = recommend_portions(current, &band, &portions, &HashSet::new(), &config.nutrition, 5);
    let mut eaten = HashSet::new();
    eaten.insert("chicken".to_owned());
    let discounted = recommend_portions(current, &band, &portions, &eaten, &config.nutrition, 5);

    let fresh_chicken = fresh
        .iter()
        .find(|rec| rec.portion.code == "chicken_200")
        .unwrap();
    let discounted_chicken = discounted
        .iter()
        .find(|rec| rec.portion.code == "chicken_200")
        .unwrap();
    let ratio = discounted_chicken.improvement / fresh_chicken.improvement;
    assert!(
        (ratio - config.nutrition.eaten_penalty).abs() < 1e-9,
        "discount must be the configured eaten penalty, got {ratio}"
    );
}

// === Planning ===

#[test]
fn plan_walks_the_deficit_down() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    let current = record.macros.unwrap();
    let portions = store.portions().unwrap();
    let log = store.food_log(date).unwrap();
    let eaten = eaten_products(&log, &portions);

    let plan = build_plan(current, &band, &portions, &eaten, &config.nutrition);
    assert_eq!(
        plan.len(),
        config.nutrition.max_plan_steps,
        "a big deficit uses every plan step"
    );

    let mut running = current;
    for step in &plan {
        let after = running + step.portion.macros;
        assert!(
            deficit_score(after, &band, &config.nutrition.deficit_weights)
                < deficit_score(running, &band, &config.nutrition.deficit_weights),
            "each step must strictly cut the deficit"
        );
        running = after;
    }
}

#[test]
fn plan_is_deterministic() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    let current = record.macros.unwrap();
    let portions = store.portions().unwrap();
    let eaten = HashSet::new();

    let first = build_plan(current, &band, &portions, &eaten, &config.nutrition);
    let second = build_plan(current, &band, &portions, &eaten, &config.nutrition);
    assert_eq!(first, second);
}

#[test]
fn satisfied_intake_plans_nothing() {
    let (store, date) = training_day_store();
    let config = EngineConfig::default();
    let assembler = DayAssembler::new(&store, &store, &config);
    let record = assembler.assemble(date);

    let band = target_band(record.training.as_ref(), &config.nutrition.bands).unwrap();
    let portions = store.portions().unwrap();
    let overshoot = MacroVector::new(3_000.0, 200.0, 90.0, 300.0);

    let plan = build_plan(overshoot, &band, &portions, &HashSet::new(), &config.nutrition);
    assert!(plan.is_empty());
    let recs = recommend_portions(overshoot, &band, &portions, &HashSet::new(), &config.nutrition, 3);
    assert!(recs.is_empty());
}
