// ABOUTME: Canonical per-day record plus the training, steps-bucket, and completion enums
// ABOUTME: One DayRecord is materialized on demand per date and recomputed on every read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::ExpenseBreakdown;
use super::food::MacroVector;

/// Logged training value for a day.
///
/// The `Other` variant preserves unknown non-empty values from legacy data:
/// they count as "training present" for the completion gate, but are neither
/// active nor rest for scoring and target-band purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Training {
    /// Explicit rest day
    Rest,
    /// Deliberately skipped training
    Skip,
    /// Upper-body session
    Upper,
    /// Lower-body session
    Lower,
    /// Full-body session
    Full,
    /// Unknown value preserved as-is
    Other(String),
}

impl Training {
    /// Parse a normalized choice token; `None` for an empty value.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace;
    /// "legs" is accepted as a legacy synonym for lower-body sessions.
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed = match trimmed.to_lowercase().as_str() {
            "rest" => Self::Rest,
            "skip" | "skipped" => Self::Skip,
            "upper" => Self::Upper,
            "lower" | "legs" => Self::Lower,
            "full" => Self::Full,
            _ => Self::Other(trimmed.to_owned()),
        };
        Some(parsed)
    }

    /// True for sessions that make the day a training day.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Upper | Self::Lower | Self::Full)
    }

    /// True for explicit rest or skipped training (the rest-day band applies).
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest | Self::Skip)
    }
}

/// Six fixed step-count buckets used when only a coarse category was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepsBucket {
    /// Below 5000 steps
    #[serde(rename = "<5k")]
    Under5k,
    /// 5000 to 6999 steps
    #[serde(rename = "5-7k")]
    From5kTo7k,
    /// 7000 to 9999 steps
    #[serde(rename = "7-10k")]
    From7kTo10k,
    /// 10000 to 11999 steps
    #[serde(rename = "10-12k")]
    From10kTo12k,
    /// 12000 to 14999 steps
    #[serde(rename = "12-15k")]
    From12kTo15k,
    /// 15000 steps and above
    #[serde(rename = "15k+")]
    Over15k,
}

impl StepsBucket {
    /// All buckets in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Under5k,
        Self::From5kTo7k,
        Self::From7kTo10k,
        Self::From10kTo12k,
        Self::From12kTo15k,
        Self::Over15k,
    ];

    /// Bucket a direct step count via the fixed breakpoints.
    #[must_use]
    pub fn from_count(count: f64) -> Self {
        if count < 5000.0 {
            Self::Under5k
        } else if count < 7000.0 {
            Self::From5kTo7k
        } else if count < 10000.0 {
            Self::From7kTo10k
        } else if count < 12000.0 {
            Self::From10kTo12k
        } else if count < 15000.0 {
            Self::From12kTo15k
        } else {
            Self::Over15k
        }
    }

    /// Parse a stored bucket token; `None` for anything unrecognized.
    #[must_use]
    pub fn from_label_lossy(label: &str) -> Option<Self> {
        match label.trim() {
            "<5k" => Some(Self::Under5k),
            "5-7k" => Some(Self::From5kTo7k),
            "7-10k" => Some(Self::From7kTo10k),
            "10-12k" => Some(Self::From10kTo12k),
            "12-15k" => Some(Self::From12kTo15k),
            "15k+" => Some(Self::Over15k),
            _ => None,
        }
    }

    /// Representative step count for the bucket (fixed midpoint table).
    #[must_use]
    pub const fn estimate(self) -> f64 {
        match self {
            Self::Under5k => 4000.0,
            Self::From5kTo7k => 6000.0,
            Self::From7kTo10k => 8500.0,
            Self::From10kTo12k => 11000.0,
            Self::From12kTo15k => 13500.0,
            Self::Over15k => 15000.0,
        }
    }

    /// The stored token for this bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under5k => "<5k",
            Self::From5kTo7k => "5-7k",
            Self::From7kTo10k => "7-10k",
            Self::From10kTo12k => "10-12k",
            Self::From12kTo15k => "12-15k",
            Self::Over15k => "15k+",
        }
    }
}

/// Completion classification of a day against the four minimum gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    /// No field on the day carries any signal
    #[default]
    Empty,
    /// All four gates pass
    Full,
    /// Exactly three gates pass
    Partial,
    /// Two or fewer gates pass
    None,
}

impl CompletionStatus {
    /// Lowercase status name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

/// Canonical, fully-normalized snapshot of one date's tracked fields.
///
/// Materialized on demand from raw stored fields and recomputed on every
/// read — never cached, so each record is a pure function of current store
/// state. Numeric minutes and counts use `0.0` for "no signal" (the raw
/// data cannot distinguish unset from zero there); genuinely tri-state
/// fields are `Option`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date this record describes
    pub date: NaiveDate,
    /// Logged training value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<Training>,
    /// Coarse steps bucket (derived from the count when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_bucket: Option<StepsBucket>,
    /// Direct step count, 0.0 when not logged
    #[serde(default)]
    pub steps_count: f64,
    /// English practice minutes
    #[serde(default)]
    pub english_min: f64,
    /// ML study minutes (first deep-work track)
    #[serde(default)]
    pub ml_min: f64,
    /// Algorithms study minutes (second deep-work track)
    #[serde(default)]
    pub algo_min: f64,
    /// University minutes
    #[serde(default)]
    pub uni_min: f64,
    /// Cardio minutes
    #[serde(default)]
    pub cardio_min: f64,
    /// Pages read
    #[serde(default)]
    pub reading_pages: f64,
    /// Generic "shots" counter for the day
    #[serde(default)]
    pub shots_count: f64,
    /// Night sleep hours; `None` when not filled in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Daytime nap hours
    #[serde(default)]
    pub nap_hours: f64,
    /// Sleep regime choice token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_regime: Option<String>,
    /// Rest type choice token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_type: Option<String>,
    /// Mood choice token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Energy choice token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<String>,
    /// Body weight, kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Self-rated productivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity: Option<f64>,
    /// Active kilocalories synced from a wearable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_kcal: Option<f64>,
    /// Names of habits completed this day
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub habits_done: Vec<String>,
    /// Tracked macro intake; `None` means untracked, never "zero intake"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroVector>,
    /// Spend for the day
    #[serde(default)]
    pub expenses: ExpenseBreakdown,
    /// Free-text regret note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regret: Option<String>,
    /// Free-text day review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// Completion status attached by the assembler
    #[serde(default)]
    pub completion: CompletionStatus,
    /// Quality score attached by the assembler (0 for empty days)
    #[serde(default)]
    pub quality: u16,
    /// Failing-gate explanation attached by the assembler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

impl DayRecord {
    /// A record with no signal for `date`, the fallback for missing rows
    /// and failed store reads.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            training: None,
            steps_bucket: None,
            steps_count: 0.0,
            english_min: 0.0,
            ml_min: 0.0,
            algo_min: 0.0,
            uni_min: 0.0,
            cardio_min: 0.0,
            reading_pages: 0.0,
            shots_count: 0.0,
            sleep_hours: None,
            nap_hours: 0.0,
            sleep_regime: None,
            rest_type: None,
            mood: None,
            energy: None,
            weight: None,
            productivity: None,
            active_kcal: None,
            habits_done: Vec::new(),
            macros: None,
            expenses: ExpenseBreakdown::ZERO,
            regret: None,
            review: None,
            completion: CompletionStatus::Empty,
            quality: 0,
            missing: None,
        }
    }

    /// Resolved step count: the direct count when positive, else the
    /// bucket's midpoint estimate, else 0.
    #[must_use]
    pub fn steps_value(&self) -> f64 {
        if self.steps_count > 0.0 {
            return self.steps_count;
        }
        self.steps_bucket.map_or(0.0, StepsBucket::estimate)
    }

    /// Sum of the two deep-work study tracks (feeds the quality curve).
    #[must_use]
    pub fn study_total_min(&self) -> f64 {
        self.ml_min + self.algo_min
    }

    /// Best of the two deep-work study tracks (feeds the completion gate).
    #[must_use]
    pub fn study_best_min(&self) -> f64 {
        self.ml_min.max(self.algo_min)
    }

    /// Night sleep plus nap, ignoring a negative nap artifact.
    #[must_use]
    pub fn sleep_total_hours(&self) -> f64 {
        self.sleep_hours.unwrap_or(0.0) + self.nap_hours.max(0.0)
    }

    /// Whether any field in the signal set is present.
    ///
    /// This is the emptiness test for completion classification and period
    /// statistics: a day is `empty` iff none of these carry data. Cardio,
    /// nap, shots, and habits are deliberately not signals — they never
    /// appear without one of the listed fields in practice, and a day of
    /// nothing but a nap should still read as untracked.
    #[must_use]
    pub fn has_any_signal(&self) -> bool {
        self.training.is_some()
            || self.english_min > 0.0
            || self.ml_min > 0.0
            || self.algo_min > 0.0
            || self.uni_min > 0.0
            || self.steps_value() > 0.0
            || self.sleep_hours.unwrap_or(0.0) > 0.0
            || self.reading_pages > 0.0
            || self.macros.is_some()
            || self.expenses.total > 0.0
            || self.weight.is_some()
            || self.mood.is_some()
            || self.energy.is_some()
    }
}
