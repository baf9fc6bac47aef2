// ABOUTME: Piecewise-linear scoring curves and the linear bonus ramp
// ABOUTME: Data-driven primitives behind every quality component score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Scoring curve primitives.
//!
//! Quality components map a raw daily value (hours, minutes, steps) onto
//! `0.0..=1.0` through a [`Curve`]: linear interpolation between configured
//! points, clamped flat outside them. The university bonus uses the simpler
//! [`LinearBonus`] ramp. Both are plain data so configuration can reshape
//! scoring without code changes.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// One knot of a piecewise-linear curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Input value this knot sits at
    pub at: f64,
    /// Score produced exactly at this input
    pub score: f64,
}

/// Piecewise-linear curve over ascending input knots.
///
/// Evaluation clamps: inputs at or below the first knot take the first
/// score, inputs at or past the last knot take the last score. Knots must
/// be strictly ascending in `at`; [`Self::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Ascending interpolation knots
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Build a curve from `(at, score)` pairs.
    #[must_use]
    pub fn from_table(table: &[(f64, f64)]) -> Self {
        Self {
            points: table
                .iter()
                .map(|&(at, score)| CurvePoint { at, score })
                .collect(),
        }
    }

    /// Check the curve is non-empty with strictly ascending knots.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurve`] naming the offending curve.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.points.is_empty() {
            return Err(ConfigError::InvalidCurve(format!(
                "{name}: needs at least one point"
            )));
        }
        for pair in self.points.windows(2) {
            if pair[1].at <= pair[0].at {
                return Err(ConfigError::InvalidCurve(format!(
                    "{name}: knots must be strictly ascending"
                )));
            }
        }
        Ok(())
    }

    /// Score for `value`, interpolating between knots and clamping outside.
    ///
    /// An empty curve scores everything 0.0 so a half-built configuration
    /// degrades instead of panicking.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if value <= first.at {
            return first.score;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.at {
                let t = (value - lo.at) / (hi.at - lo.at);
                return t.mul_add(hi.score - lo.score, lo.score);
            }
        }
        self.points.last().map_or(0.0, |last| last.score)
    }
}

/// Linear ramp from zero at `start` to `max_bonus` at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearBonus {
    /// Input at which the ramp leaves zero
    pub start: f64,
    /// Input at which the ramp reaches the full bonus
    pub end: f64,
    /// Bonus points granted at and past `end`
    pub max_bonus: f64,
}

impl LinearBonus {
    /// Bonus points for `value`.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        if value <= self.start {
            return 0.0;
        }
        if value >= self.end {
            return self.max_bonus;
        }
        (value - self.start) / (self.end - self.start) * self.max_bonus
    }

    /// Check the ramp is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] when `end` does not exceed
    /// `start` or the bonus is negative.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.end <= self.start {
            return Err(ConfigError::InvalidRange(
                "bonus ramp end must exceed its start",
            ));
        }
        if self.max_bonus < 0.0 {
            return Err(ConfigError::InvalidRange("bonus must not be negative"));
        }
        Ok(())
    }
}
