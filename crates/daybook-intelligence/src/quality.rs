// ABOUTME: Daily quality score: five weighted curve components plus the university bonus
// ABOUTME: Produces the 0..=115 headline number and its per-component breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Quality scoring.
//!
//! The headline daily number blends five component scores — deep work,
//! english, sleep, sport, and steps — each mapped through its configured
//! curve, weighted, and scaled to 100. University minutes add a linear
//! bonus on top, and the total is capped at 100 plus the maximum bonus.
//! A day with no signal scores 0 without touching the curves.

use daybook_core::models::{DayRecord, Training};

use crate::config::QualityConfig;

/// Per-component view of one day's quality score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityBreakdown {
    /// Sleep component, `0.0..=1.0`
    pub sleep: f64,
    /// Steps component, `0.0..=1.0`
    pub steps: f64,
    /// English component, `0.0..=1.0`
    pub english: f64,
    /// Deep-work component, `0.0..=1.0`
    pub deep_work: f64,
    /// Sport component, `0.0..=1.0`
    pub sport: f64,
    /// Weighted blend of the five components, `0.0..=1.0`
    pub base: f64,
    /// University bonus points added on top of the scaled base
    pub bonus: f64,
    /// Final rounded and capped score
    pub score: u16,
}

impl QualityBreakdown {
    const fn zero() -> Self {
        Self {
            sleep: 0.0,
            steps: 0.0,
            english: 0.0,
            deep_work: 0.0,
            sport: 0.0,
            base: 0.0,
            bonus: 0.0,
            score: 0,
        }
    }
}

/// Sport component: full credit for an active session, the configured
/// fraction for an explicit rest day, nothing for skip or unknown values.
fn sport_component(training: Option<&Training>, config: &QualityConfig) -> f64 {
    training.map_or(0.0, |t| {
        if t.is_active() {
            1.0
        } else if matches!(t, Training::Rest) {
            config.rest_score
        } else {
            0.0
        }
    })
}

/// Full component breakdown for one day.
#[must_use]
pub fn quality_breakdown(record: &DayRecord, config: &QualityConfig) -> QualityBreakdown {
    if !record.has_any_signal() {
        return QualityBreakdown::zero();
    }

    let sleep = config.curves.sleep.evaluate(record.sleep_total_hours());
    let steps = config.curves.steps.evaluate(record.steps_value());
    let english = config.curves.english.evaluate(record.english_min);
    let deep_work = config.curves.deep_work.evaluate(record.study_total_min());
    let sport = sport_component(record.training.as_ref(), config);

    let weights = config.weights;
    let base = weights.deep_work.mul_add(
        deep_work,
        weights.english.mul_add(
            english,
            weights
                .sleep
                .mul_add(sleep, weights.sport.mul_add(sport, weights.steps * steps)),
        ),
    );
    let bonus = config.bonus.evaluate(record.uni_min);

    let cap = 100.0 + config.bonus.max_bonus;
    let score = base.mul_add(100.0, bonus).round().min(cap) as u16;

    QualityBreakdown {
        sleep,
        steps,
        english,
        deep_work,
        sport,
        base,
        bonus,
        score,
    }
}

/// The headline score alone.
#[must_use]
pub fn quality_score(record: &DayRecord, config: &QualityConfig) -> u16 {
    quality_breakdown(record, config).score
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn solid_day() -> DayRecord {
        let mut record = DayRecord::empty(date("2025-03-10"));
        record.training = Some(Training::Upper);
        record.sleep_hours = Some(7.5);
        record.steps_count = 9000.0;
        record.english_min = 45.0;
        record.ml_min = 70.0;
        record.algo_min = 20.0;
        record
    }

    #[test]
    fn empty_day_scores_zero() {
        let record = DayRecord::empty(date("2025-03-10"));
        assert_eq!(quality_score(&record, &QualityConfig::default()), 0);
    }

    #[test]
    fn solid_day_lands_at_79() {
        let breakdown = quality_breakdown(&solid_day(), &QualityConfig::default());
        assert_eq!(breakdown.sleep, 0.75);
        assert_eq!(breakdown.steps, 0.75);
        assert_eq!(breakdown.english, 0.75);
        assert_eq!(breakdown.deep_work, 0.75);
        assert_eq!(breakdown.sport, 1.0);
        assert!((breakdown.base - 0.7875).abs() < 1e-9);
        assert_eq!(breakdown.score, 79);
    }

    #[test]
    fn perfect_day_with_full_bonus_hits_the_cap() {
        let mut record = solid_day();
        record.sleep_hours = Some(9.0);
        record.steps_count = 12_000.0;
        record.english_min = 60.0;
        record.ml_min = 120.0;
        record.algo_min = 0.0;
        record.uni_min = 400.0;
        assert_eq!(quality_score(&record, &QualityConfig::default()), 115);
    }

    #[test]
    fn rest_day_earns_the_rest_fraction_only() {
        let mut record = DayRecord::empty(date("2025-03-10"));
        record.training = Some(Training::Rest);
        let breakdown = quality_breakdown(&record, &QualityConfig::default());
        assert_eq!(breakdown.sport, 0.4);
        assert_eq!(breakdown.score, 6, "0.15 weight on 0.4 gives six points");
    }

    #[test]
    fn skipped_training_earns_nothing() {
        let mut record = DayRecord::empty(date("2025-03-10"));
        record.training = Some(Training::Skip);
        let breakdown = quality_breakdown(&record, &QualityConfig::default());
        assert_eq!(breakdown.sport, 0.0);
        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn unknown_training_earns_nothing_for_sport() {
        let mut record = DayRecord::empty(date("2025-03-10"));
        record.training = Some(Training::Other("yoga".to_owned()));
        let breakdown = quality_breakdown(&record, &QualityConfig::default());
        assert_eq!(breakdown.sport, 0.0);
    }

    #[test]
    fn bonus_is_additive_but_capped() {
        let mut record = solid_day();
        record.uni_min = 105.0;
        let breakdown = quality_breakdown(&record, &QualityConfig::default());
        assert!((breakdown.bonus - 7.5).abs() < 1e-9);
        assert_eq!(breakdown.score, 86, "78.75 base plus 7.5 bonus rounds to 86");
    }

    #[test]
    fn nap_extends_the_sleep_component() {
        let mut record = solid_day();
        record.sleep_hours = Some(6.0);
        record.nap_hours = 1.5;
        let breakdown = quality_breakdown(&record, &QualityConfig::default());
        assert_eq!(breakdown.sleep, 0.75, "7.5 total hours via the nap");
    }

    #[test]
    fn more_sleep_never_lowers_the_score() {
        let config = QualityConfig::default();
        let mut last = 0;
        for half_hours in 0..=20 {
            let mut record = solid_day();
            record.sleep_hours = Some(f64::from(half_hours) * 0.5);
            let score = quality_score(&record, &config);
            assert!(score >= last, "score dropped at {half_hours} half-hours of sleep");
            last = score;
        }
    }
}
