// ABOUTME: Daily-minimum gates and completion-status classification
// ABOUTME: Produces the empty/full/partial/none status and the missing-gates summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Completion classification.
//!
//! Four daily-minimum gates decide how complete a day was: training logged,
//! enough steps, enough english, and enough deep work on the better study
//! track. A day with no signal at all is `empty` regardless of gates; with
//! signal, all four passing is `full`, three is `partial`, anything less
//! is `none`.

use daybook_core::models::{CompletionStatus, DayRecord};

use crate::config::GatesConfig;

/// One of the four daily-minimum gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyGate {
    /// Any training value is logged (rest and skip count)
    Training,
    /// Resolved step count reaches the steps threshold
    Steps,
    /// English minutes reach the english threshold
    English,
    /// The better deep-work track reaches the deep-work threshold
    DeepWork,
}

impl DailyGate {
    /// All gates, in the order the missing-gates summary lists them.
    pub const ALL: [Self; 4] = [Self::Training, Self::Steps, Self::English, Self::DeepWork];

    /// Whether `record` passes this gate under `gates`.
    #[must_use]
    pub fn passes(self, record: &DayRecord, gates: &GatesConfig) -> bool {
        match self {
            Self::Training => record.training.is_some(),
            Self::Steps => record.steps_value() >= gates.steps_min,
            Self::English => record.english_min >= gates.english_min,
            Self::DeepWork => record.study_best_min() >= gates.deep_work_min,
        }
    }

    /// Human-readable description used in the missing-gates summary.
    #[must_use]
    pub fn description(self, gates: &GatesConfig) -> String {
        match self {
            Self::Training => "sport".to_owned(),
            Self::Steps => format!("steps \u{2265}{:.0}", gates.steps_min),
            Self::English => format!("english \u{2265}{:.0} min", gates.english_min),
            Self::DeepWork => format!("ml/algos \u{2265}{:.0} min", gates.deep_work_min),
        }
    }
}

/// Completion classification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The day's status
    pub status: CompletionStatus,
    /// Comma-joined failing gates, `None` when everything passes
    pub missing: Option<String>,
}

/// Classify a day against the gates.
///
/// The missing-gates summary is computed even for empty days (where it
/// lists all four), so a caller rendering "what's left today" never has
/// to special-case an untouched day.
#[must_use]
pub fn classify(record: &DayRecord, gates: &GatesConfig) -> Completion {
    let failed: Vec<String> = DailyGate::ALL
        .into_iter()
        .filter(|gate| !gate.passes(record, gates))
        .map(|gate| gate.description(gates))
        .collect();

    let status = if record.has_any_signal() {
        match DailyGate::ALL.len() - failed.len() {
            4 => CompletionStatus::Full,
            3 => CompletionStatus::Partial,
            _ => CompletionStatus::None,
        }
    } else {
        CompletionStatus::Empty
    };

    let missing = if failed.is_empty() {
        None
    } else {
        Some(failed.join(", "))
    };

    Completion { status, missing }
}
