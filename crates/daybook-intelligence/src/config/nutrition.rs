// ABOUTME: Nutrition configuration: macro target bands, deficit weights, planner limits
// ABOUTME: Defaults carry the tracker's training-day and rest-day bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Nutrition Configuration
//!
//! Target macro bands per day type, the per-macro weights of the deficit
//! score, and the limits of the portion recommender and the greedy planner.

use serde::{Deserialize, Serialize};

use daybook_core::models::{DayType, Macro, MacroVector, TargetBand};

use super::error::ConfigError;

/// Nutrition engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Target bands per day type
    pub bands: NutritionBands,
    /// Per-macro weights of the quadratic deficit score
    pub deficit_weights: DeficitWeights,
    /// Multiplier applied to a portion's improvement when its product was
    /// already eaten today
    pub eaten_penalty: f64,
    /// Portions returned by one recommendation call
    pub max_recommendations: usize,
    /// Greedy plan length cap
    pub max_plan_steps: usize,
}

/// Macro target band boundaries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandLimits {
    /// Lower bound per macro
    pub min: MacroVector,
    /// Upper bound per macro
    pub max: MacroVector,
}

/// The two target bands, keyed by day type
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionBands {
    /// Band applied on training days
    pub training: BandLimits,
    /// Band applied on rest days
    pub rest: BandLimits,
}

/// Per-macro weights of the deficit score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeficitWeights {
    /// Kilocalorie weight
    pub kcal: f64,
    /// Protein weight
    pub protein: f64,
    /// Fat weight
    pub fat: f64,
    /// Carb weight
    pub carb: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bands: NutritionBands::default(),
            deficit_weights: DeficitWeights::default(),
            eaten_penalty: 0.6,
            max_recommendations: 3,
            max_plan_steps: 4,
        }
    }
}

impl Default for NutritionBands {
    fn default() -> Self {
        Self {
            training: BandLimits {
                min: MacroVector::new(1900.0, 125.0, 55.0, 180.0),
                max: MacroVector::new(2000.0, 135.0, 65.0, 210.0),
            },
            rest: BandLimits {
                min: MacroVector::new(1700.0, 120.0, 55.0, 140.0),
                max: MacroVector::new(1800.0, 130.0, 65.0, 170.0),
            },
        }
    }
}

impl Default for DeficitWeights {
    fn default() -> Self {
        Self {
            kcal: 1.0,
            protein: 1.3,
            fat: 0.8,
            carb: 1.0,
        }
    }
}

impl NutritionConfig {
    /// Validate bands, weights, and planner limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bands.validate()?;
        self.deficit_weights.validate()?;
        if !(0.0..=1.0).contains(&self.eaten_penalty) {
            return Err(ConfigError::InvalidRange(
                "eaten_penalty must lie in 0..=1",
            ));
        }
        if self.max_recommendations == 0 {
            return Err(ConfigError::InvalidRange(
                "max_recommendations must be at least 1",
            ));
        }
        if self.max_plan_steps == 0 {
            return Err(ConfigError::InvalidRange(
                "max_plan_steps must be at least 1",
            ));
        }
        Ok(())
    }
}

impl NutritionBands {
    /// Materialize the [`TargetBand`] for a day type.
    #[must_use]
    pub const fn band(&self, day_type: DayType) -> TargetBand {
        let limits = match day_type {
            DayType::Training => self.training,
            DayType::Rest => self.rest,
        };
        TargetBand {
            day_type,
            min: limits.min,
            max: limits.max,
        }
    }

    /// Check each band's lower bound stays at or below its upper bound,
    /// macro by macro.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] for an inverted band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for limits in [self.training, self.rest] {
            for macro_kind in Macro::ALL {
                if limits.min.component(macro_kind) > limits.max.component(macro_kind) {
                    return Err(ConfigError::InvalidRange(
                        "band minimum must not exceed its maximum",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl DeficitWeights {
    /// Weight for one macro.
    #[must_use]
    pub const fn component(&self, macro_kind: Macro) -> f64 {
        match macro_kind {
            Macro::Kcal => self.kcal,
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carb => self.carb,
        }
    }

    /// Check every weight is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWeights`] otherwise.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.kcal <= 0.0 || self.protein <= 0.0 || self.fat <= 0.0 || self.carb <= 0.0 {
            return Err(ConfigError::InvalidWeights(
                "deficit weights must be strictly positive",
            ));
        }
        Ok(())
    }
}
