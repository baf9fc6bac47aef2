// ABOUTME: Shots-tracking configuration: rolling windows and activity-label thresholds
// ABOUTME: Defaults reproduce the historical 7-day label ladder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Shots Tracking Configuration
//!
//! Window lengths for the rolling "best streak" figures and the total/day
//! thresholds of the recent-activity label ladder.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Shots subsystem configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotsConfig {
    /// Days of recent history behind the activity label and last-week list
    pub recent_window_days: usize,
    /// Short rolling window for the best-run figure
    pub best_short_window: usize,
    /// Long rolling window for the best-run figure
    pub best_long_window: usize,
    /// Label ladder thresholds over the recent window
    pub thresholds: ShotsThresholds,
}

/// Thresholds of the activity label ladder, checked top-down
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotsThresholds {
    /// Total needed for the top label when every recent day is active
    pub super_active_total: u32,
    /// Total needed for the active label
    pub active_total: u32,
    /// Active days needed for the active label
    pub active_days: usize,
    /// Total needed for the moderate label
    pub moderate_total: u32,
    /// Active days needed for the moderate label
    pub moderate_days: usize,
    /// Total needed to escape the single/inactive floor
    pub very_low_total: u32,
}

impl Default for ShotsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            best_short_window: 7,
            best_long_window: 30,
            thresholds: ShotsThresholds::default(),
        }
    }
}

impl Default for ShotsThresholds {
    fn default() -> Self {
        Self {
            super_active_total: 21,
            active_total: 12,
            active_days: 4,
            moderate_total: 6,
            moderate_days: 3,
            very_low_total: 2,
        }
    }
}

impl ShotsConfig {
    /// Check windows are non-zero and the label totals descend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] otherwise.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_window_days == 0
            || self.best_short_window == 0
            || self.best_long_window == 0
        {
            return Err(ConfigError::InvalidRange(
                "shots windows must be at least one day",
            ));
        }
        let t = self.thresholds;
        if t.super_active_total <= t.active_total
            || t.active_total <= t.moderate_total
            || t.moderate_total <= t.very_low_total
        {
            return Err(ConfigError::InvalidRange(
                "activity label totals must strictly descend",
            ));
        }
        Ok(())
    }
}
