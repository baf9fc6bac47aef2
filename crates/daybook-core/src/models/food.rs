// ABOUTME: Macro nutrition types - vectors, catalog portions, and target bands
// ABOUTME: Defines MacroVector arithmetic used by the deficit recommender and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// One macro nutrition component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    /// Energy, kilocalories
    Kcal,
    /// Protein, grams
    Protein,
    /// Fat, grams
    Fat,
    /// Carbohydrate, grams
    Carb,
}

impl Macro {
    /// All components in canonical order (kcal, protein, fat, carb).
    pub const ALL: [Self; 4] = [Self::Kcal, Self::Protein, Self::Fat, Self::Carb];

    /// Short lowercase name of the component.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carb => "carb",
        }
    }
}

/// A {kcal, protein, fat, carb} tuple.
///
/// Used for daily intake, portion contributions, band bounds, and deficit
/// weights alike — anywhere the four components travel together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroVector {
    /// Kilocalories
    pub kcal: f64,
    /// Protein grams
    pub protein: f64,
    /// Fat grams
    pub fat: f64,
    /// Carbohydrate grams
    pub carb: f64,
}

impl MacroVector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Construct from the four components.
    #[must_use]
    pub const fn new(kcal: f64, protein: f64, fat: f64, carb: f64) -> Self {
        Self { kcal, protein, fat, carb }
    }

    /// Read one component.
    #[must_use]
    pub const fn component(&self, component: Macro) -> f64 {
        match component {
            Macro::Kcal => self.kcal,
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carb => self.carb,
        }
    }

    /// Multiply every component by `factor` (portion quantity scaling).
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.kcal * factor,
            self.protein * factor,
            self.fat * factor,
            self.carb * factor,
        )
    }

    /// Component-wise `max(0, self - other)`.
    ///
    /// Shortfalls and surpluses are both expressed this way: distance to a
    /// band bound in one direction, clamped at zero in the other.
    #[must_use]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        Self::new(
            (self.kcal - other.kcal).max(0.0),
            (self.protein - other.protein).max(0.0),
            (self.fat - other.fat).max(0.0),
            (self.carb - other.carb).max(0.0),
        )
    }

    /// Component-wise midpoint between two vectors.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            f64::midpoint(self.kcal, other.kcal),
            f64::midpoint(self.protein, other.protein),
            f64::midpoint(self.fat, other.fat),
            f64::midpoint(self.carb, other.carb),
        )
    }

    /// True when every component is zero or below.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Macro::ALL.iter().all(|m| self.component(*m) <= 0.0)
    }
}

impl Add for MacroVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.kcal + rhs.kcal,
            self.protein + rhs.protein,
            self.fat + rhs.fat,
            self.carb + rhs.carb,
        )
    }
}

impl AddAssign for MacroVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A fixed-size serving of a catalog product with a precomputed macro
/// contribution (grams × per-100g composition, resolved by the catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Stable catalog code identifying this portion
    pub code: String,
    /// Product the portion is a serving of (repetition penalties key on this)
    pub product: String,
    /// Human-readable label, e.g. "chicken breast (grilled, 150g)"
    pub label: String,
    /// Serving size in grams
    pub grams: f64,
    /// Macro contribution of one serving
    pub macros: MacroVector,
}

/// One logged food intake: which portion, how many servings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Catalog code of the logged portion
    pub portion_code: String,
    /// Number of servings (fractional allowed)
    pub quantity: f64,
}

impl FoodLogEntry {
    /// Construct an entry.
    #[must_use]
    pub fn new(portion_code: impl Into<String>, quantity: f64) -> Self {
        Self { portion_code: portion_code.into(), quantity }
    }
}

/// The two day types that carry macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Any active training value was logged
    Training,
    /// Explicit rest or skipped training
    Rest,
}

impl DayType {
    /// Human-readable day-type name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Training => "training day",
            Self::Rest => "rest day",
        }
    }
}

/// Per day-type macro target: a (min, max) range for each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    /// Which day type this band belongs to
    pub day_type: DayType,
    /// Lower bound per component
    pub min: MacroVector,
    /// Upper bound per component
    pub max: MacroVector,
}

impl TargetBand {
    /// Component-wise midpoint of the band, the deficit reference point.
    #[must_use]
    pub fn midpoint(&self) -> MacroVector {
        self.min.midpoint(&self.max)
    }
}

/// Where an intake vector sits relative to a target band, per component.
///
/// Surplus over the max is reported on its own — the deficit score is
/// strictly a shortfall measure and never goes negative, so "over target"
/// must not be folded into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandProgress {
    /// Remaining to reach each component's minimum (0 once met)
    pub to_min: MacroVector,
    /// Remaining room up to each component's maximum (0 once met)
    pub to_max: MacroVector,
    /// Surplus beyond each component's maximum (0 while within)
    pub over: MacroVector,
}

impl BandProgress {
    /// True when no component exceeds its band maximum.
    #[must_use]
    pub fn within_max(&self) -> bool {
        self.over.is_zero()
    }
}
