// ABOUTME: Quality-score configuration: component weights, curves, bonus ramp, and gates
// ABOUTME: Defaults reproduce the tracker's long-standing scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Quality Scoring Configuration
//!
//! Weights, curves, and thresholds behind the daily quality score and the
//! four daily-minimum gates. Every default matches the values the tracker
//! has used historically, so an unconfigured engine scores identically to
//! the legacy one.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::curve::{Curve, LinearBonus};

/// Quality scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Component weights in the blended base score
    pub weights: QualityWeights,
    /// Raw-value-to-score curves per component
    pub curves: QualityCurves,
    /// Sport component score granted for an explicit rest day
    pub rest_score: f64,
    /// University-minutes bonus ramp added on top of the base
    pub bonus: LinearBonus,
}

/// Weights for the five quality components; must sum to 1.0
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityWeights {
    /// Weight of the combined ML + algorithms deep-work score
    pub deep_work: f64,
    /// Weight of the english-practice score
    pub english: f64,
    /// Weight of the sleep score
    pub sleep: f64,
    /// Weight of the sport score
    pub sport: f64,
    /// Weight of the steps score
    pub steps: f64,
}

/// Piecewise-linear curves mapping raw values onto `0.0..=1.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCurves {
    /// Total sleep hours (night plus nap)
    pub sleep: Curve,
    /// Resolved step count
    pub steps: Curve,
    /// English practice minutes
    pub english: Curve,
    /// Combined ML + algorithms minutes
    pub deep_work: Curve,
}

/// Daily-minimum gate thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GatesConfig {
    /// English minutes required to pass the english gate
    pub english_min: f64,
    /// Minutes required on the best deep-work track
    pub deep_work_min: f64,
    /// Resolved step count required to pass the steps gate
    pub steps_min: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            weights: QualityWeights::default(),
            curves: QualityCurves::default(),
            rest_score: 0.4,
            bonus: LinearBonus {
                start: 30.0,
                end: 180.0,
                max_bonus: 15.0,
            },
        }
    }
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            deep_work: 0.35,
            english: 0.25,
            sleep: 0.15,
            sport: 0.15,
            steps: 0.10,
        }
    }
}

impl Default for QualityCurves {
    fn default() -> Self {
        Self {
            sleep: Curve::from_table(&[(4.0, 0.0), (5.0, 0.2), (6.0, 0.5), (9.0, 1.0)]),
            steps: Curve::from_table(&[(0.0, 0.0), (6000.0, 0.5), (12_000.0, 1.0)]),
            english: Curve::from_table(&[(0.0, 0.0), (30.0, 0.5), (60.0, 1.0)]),
            deep_work: Curve::from_table(&[(0.0, 0.0), (60.0, 0.5), (120.0, 1.0)]),
        }
    }
}

impl Default for GatesConfig {
    fn default() -> Self {
        Self {
            english_min: 30.0,
            deep_work_min: 60.0,
            steps_min: 6000.0,
        }
    }
}

impl QualityConfig {
    /// Validate weights, curves, bonus ramp, and the rest-day score.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.curves.validate()?;
        self.bonus.validate()?;
        if !(0.0..=1.0).contains(&self.rest_score) {
            return Err(ConfigError::InvalidRange(
                "rest_score must lie in 0..=1",
            ));
        }
        Ok(())
    }
}

impl QualityWeights {
    /// Check every weight lies in `0..=1` and the set sums to 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWeights`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.deep_work, self.english, self.sleep, self.sport, self.steps];
        if all.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ConfigError::InvalidWeights(
                "each quality weight must lie in 0..=1",
            ));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(
                "quality weights must sum to 1.0",
            ));
        }
        Ok(())
    }
}

impl QualityCurves {
    /// Validate each curve, naming it in the error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurve`] for the first bad curve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sleep.validate("sleep")?;
        self.steps.validate("steps")?;
        self.english.validate("english")?;
        self.deep_work.validate("deep_work")?;
        Ok(())
    }
}

impl GatesConfig {
    /// Check every gate threshold is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] for a negative threshold.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.english_min < 0.0 || self.deep_work_min < 0.0 || self.steps_min < 0.0 {
            return Err(ConfigError::InvalidRange(
                "gate thresholds must not be negative",
            ));
        }
        Ok(())
    }
}
