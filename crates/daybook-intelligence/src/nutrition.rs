// ABOUTME: Macro target bands, deficit scoring, portion recommendations, and meal plans
// ABOUTME: Greedy planner re-scores after every pick and penalizes repeated products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Nutrition engine.
//!
//! The day's training value selects a macro target band; the weighted
//! quadratic [`deficit_score`] measures how far intake still sits below
//! the band's midpoint. [`recommend_portions`] ranks catalog portions by
//! how much one serving would close that gap, discounting products already
//! eaten today, and [`build_plan`] chains single recommendations into a
//! short greedy plan, re-scoring from the simulated intake after each pick.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use daybook_core::models::{
    BandProgress, DayType, FoodLogEntry, Macro, MacroVector, Portion, TargetBand, Training,
};

use crate::config::{DeficitWeights, NutritionBands, NutritionConfig};

/// Band for the day's training value: active sessions take the training
/// band, rest and skip the rest band. Unknown values and days without a
/// training entry have no band at all.
#[must_use]
pub fn target_band(training: Option<&Training>, bands: &NutritionBands) -> Option<TargetBand> {
    let training = training?;
    if training.is_active() {
        Some(bands.band(DayType::Training))
    } else if training.is_rest() {
        Some(bands.band(DayType::Rest))
    } else {
        None
    }
}

/// Weighted quadratic shortfall of `current` against the band midpoint.
///
/// Only shortfalls count: intake at or above the midpoint contributes
/// nothing, so the score is zero exactly when every macro has reached its
/// midpoint and adding food can never make it worse.
#[must_use]
pub fn deficit_score(current: MacroVector, band: &TargetBand, weights: &DeficitWeights) -> f64 {
    let mid = band.midpoint();
    Macro::ALL.into_iter().fold(0.0, |acc, macro_kind| {
        let gap = (mid.component(macro_kind) - current.component(macro_kind)).max(0.0);
        weights.component(macro_kind).mul_add(gap * gap, acc)
    })
}

/// Remaining distance of `current` to each band boundary.
#[must_use]
pub fn band_progress(current: MacroVector, band: &TargetBand) -> BandProgress {
    BandProgress {
        to_min: band.min.saturating_sub(&current),
        to_max: band.max.saturating_sub(&current),
        over: current.saturating_sub(&band.max),
    }
}

/// One ranked portion suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionSuggestion {
    /// The suggested portion
    pub portion: Portion,
    /// Deficit-score reduction one serving would bring, after any
    /// already-eaten discount
    pub improvement: f64,
}

/// Products represented in today's food log, resolved through the catalog.
#[must_use]
pub fn eaten_products(entries: &[FoodLogEntry], portions: &[Portion]) -> HashSet<String> {
    let product_by_code: HashMap<&str, &str> = portions
        .iter()
        .map(|portion| (portion.code.as_str(), portion.product.as_str()))
        .collect();
    entries
        .iter()
        .filter_map(|entry| product_by_code.get(entry.portion_code.as_str()))
        .map(|product| (*product).to_owned())
        .collect()
}

/// Rank portions by how much one serving would cut the deficit.
///
/// Portions that change nothing are dropped; products in `eaten` keep
/// competing but with their improvement discounted. Ties order by portion
/// code so results are stable across runs.
#[must_use]
pub fn recommend_portions(
    current: MacroVector,
    band: &TargetBand,
    portions: &[Portion],
    eaten: &HashSet<String>,
    config: &NutritionConfig,
    limit: usize,
) -> Vec<PortionSuggestion> {
    let base = deficit_score(current, band, &config.deficit_weights);
    let mut suggestions: Vec<PortionSuggestion> = portions
        .iter()
        .filter_map(|portion| {
            let after = current + portion.macros;
            let mut improvement = base - deficit_score(after, band, &config.deficit_weights);
            if improvement <= 0.0 {
                return None;
            }
            if eaten.contains(&portion.product) {
                improvement *= config.eaten_penalty;
            }
            Some(PortionSuggestion {
                portion: portion.clone(),
                improvement,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.improvement
            .partial_cmp(&a.improvement)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.portion.code.cmp(&b.portion.code))
    });
    suggestions.truncate(limit);
    suggestions
}

/// Greedy meal plan toward the band midpoint.
///
/// Each step takes the single best recommendation from the intake
/// simulated so far, then adds the pick's product to the penalized set —
/// so a product may repeat, but only when it stays ahead despite the
/// discount. Stops early once no portion improves anything.
#[must_use]
pub fn build_plan(
    current: MacroVector,
    band: &TargetBand,
    portions: &[Portion],
    eaten: &HashSet<String>,
    config: &NutritionConfig,
) -> Vec<PortionSuggestion> {
    let mut running = current;
    let mut penalized = eaten.clone();
    let mut plan = Vec::new();
    for _ in 0..config.max_plan_steps {
        let Some(best) =
            recommend_portions(running, band, portions, &penalized, config, 1).pop()
        else {
            break;
        };
        debug!(code = %best.portion.code, improvement = best.improvement, "plan step chosen");
        running += best.portion.macros;
        penalized.insert(best.portion.product.clone());
        plan.push(best);
    }
    plan
}
