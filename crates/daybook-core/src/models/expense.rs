// ABOUTME: Daily expense vector - total spend plus six fixed categories
// ABOUTME: Feeds the period statistics expense breakdown and top-category shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

use serde::{Deserialize, Serialize};

/// The six fixed expense categories tracked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Groceries and eating out
    Food,
    /// Clothing
    Clothes,
    /// Household goods
    Household,
    /// Going out / partying
    Party,
    /// Health and pharmacy
    Health,
    /// Everything else
    Other,
}

impl ExpenseCategory {
    /// All categories in canonical order. Tie-breaks in ranked breakdowns
    /// follow this order via stable sorting.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Clothes,
        Self::Household,
        Self::Party,
        Self::Health,
        Self::Other,
    ];

    /// Lowercase category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Clothes => "clothes",
            Self::Household => "household",
            Self::Party => "party",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

/// One day's spend: the total plus the six category amounts.
///
/// The total is stored independently of the categories (uncategorized spend
/// is legal), so the categories need not sum to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Total spend for the day
    pub total: f64,
    /// Food spend
    pub food: f64,
    /// Clothes spend
    pub clothes: f64,
    /// Household spend
    pub household: f64,
    /// Party / going-out spend
    pub party: f64,
    /// Health spend
    pub health: f64,
    /// Uncategorized spend
    pub other: f64,
}

impl ExpenseBreakdown {
    /// A day with no spend at all.
    pub const ZERO: Self = Self {
        total: 0.0,
        food: 0.0,
        clothes: 0.0,
        household: 0.0,
        party: 0.0,
        health: 0.0,
        other: 0.0,
    };

    /// Amount spent in one category.
    #[must_use]
    pub const fn amount(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Clothes => self.clothes,
            ExpenseCategory::Household => self.household,
            ExpenseCategory::Party => self.party,
            ExpenseCategory::Health => self.health,
            ExpenseCategory::Other => self.other,
        }
    }

    /// True when anything was spent that day.
    #[must_use]
    pub fn has_spend(&self) -> bool {
        self.total > 0.0
    }
}
