// ABOUTME: Tolerant value parsing for noisy, hand-typed stored field values
// ABOUTME: Converts raw text or numbers into clean floats and normalized choice tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Tolerant value parsing for noisy stored field values.
//!
//! Historical day data contains hand-typed values: thousands separators,
//! comma decimal points, trailing units ("12kg", "12 500 руб"), sentinel
//! words for sleep duration, and numeric-as-text round-trip artifacts
//! ("7.0"). Every function here is total — parse failures resolve to a safe
//! default (0.0, `None`, or an empty string) and never propagate. This is
//! the only module allowed to be lenient; everything downstream works on
//! strictly typed values.

use crate::store::FieldValue;

/// Parse a raw field value into a float.
///
/// Native numbers pass through unchanged. Text is scanned for its leading
/// numeric run after stripping spaces and converting comma decimal points,
/// so `"12 500 руб"` parses as `12500.0` and `"12,5kg"` as `12.5`.
/// Unparseable input yields `0.0`.
#[must_use]
pub fn number(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => number_from_text(text),
    }
}

/// Parse the leading numeric run out of free-form text; `0.0` on failure.
///
/// Spaces are stripped and commas become dots *before* scanning, which is
/// what makes space-grouped thousands ("12 500") collapse into one run.
/// The scan accumulates digits, `.` and `-`, and stops at the first other
/// character once at least one has been collected (tolerating trailing
/// units). A run that is not a valid float ("12.5.3") yields `0.0`.
#[must_use]
pub fn number_from_text(text: &str) -> f64 {
    let cleaned = text.replace(' ', "").replace(',', ".");
    let mut run = String::new();
    for ch in cleaned.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == '-' {
            run.push(ch);
        } else if !run.is_empty() {
            break;
        }
    }
    run.parse().unwrap_or(0.0)
}

/// Parse a sleep-duration value into hours, if present.
///
/// Categorical sentinels map to fixed hour values (`"<6"` → 5.5,
/// `"6-8"` → 7.0, `">8"` → 8.5); anything else parses as a plain number
/// with comma decimal points tolerated. Empty or unparseable input is
/// `None`, not zero — "did not fill in" and "did not sleep" are different
/// states.
#[must_use]
pub fn sleep_hours(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::Text(text) => sleep_hours_from_text(text),
    }
}

/// Text half of [`sleep_hours`]: sentinel words first, then numeric parse.
#[must_use]
pub fn sleep_hours_from_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed {
        "<6" => Some(5.5),
        "6-8" => Some(7.0),
        ">8" => Some(8.5),
        other => other.replace(',', ".").parse().ok(),
    }
}

/// Normalize a categorical choice value into a clean token.
///
/// Trims surrounding whitespace and strips one trailing `".0"` artifact
/// left by numeric-as-text round trips ("7.0" → "7"). Numbers render via
/// their shortest float form, so `FieldValue::Number(7.0)` is also `"7"`.
#[must_use]
pub fn choice(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => format!("{n}"),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            trimmed.strip_suffix(".0").unwrap_or(trimmed).to_owned()
        }
    }
}

/// Split a habit-list value into individual habit names.
///
/// Both `;` and `,` separate entries (the data contains both eras of the
/// format); each entry is trimmed and empties are dropped.
#[must_use]
pub fn habit_list(value: &FieldValue) -> Vec<String> {
    let text = match value {
        FieldValue::Number(n) => format!("{n}"),
        FieldValue::Text(text) => text.clone(),
    };
    text.replace(',', ";")
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
