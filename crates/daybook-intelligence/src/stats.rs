// ABOUTME: Period statistics: completion rates, conditional averages, expenses, shots
// ABOUTME: One aggregation pass over assembled records, shots always over full history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Period aggregation.
//!
//! [`PeriodAggregator`] folds assembled day records over a window — the
//! last 7 days, the last 30, or all history — into one [`PeriodStats`]:
//! completion rates, averages conditioned on "the field was actually
//! filled in that day", expense totals with a category ranking, and the
//! shots subsystem. Shots peak figures always run over full history so a
//! week view still shows the all-time best streaks.
//!
//! Days whose record carries no signal are skipped everywhere except the
//! period span, which counts every window date that had a stored row.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use daybook_core::errors::EngineResult;
use daybook_core::models::{CompletionStatus, DayRecord, ExpenseCategory, MacroVector};
use daybook_core::store::{DayStore, FoodCatalog};

use crate::assembler::DayAssembler;
use crate::config::{EngineConfig, ShotsConfig, ShotsThresholds};

/// Aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Today and the 6 days before it
    Week,
    /// Today and the 29 days before it
    Month,
    /// Everything ever tracked
    All,
}

impl Period {
    /// Human-readable window name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "7 days",
            Self::Month => "30 days",
            Self::All => "all time",
        }
    }

    /// First date inside the window, `None` for the unbounded period.
    #[must_use]
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Week => Some(today - Duration::days(6)),
            Self::Month => Some(today - Duration::days(29)),
            Self::All => None,
        }
    }
}

/// Recent shooting-activity label, classified over the recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotsActivity {
    /// Every recent day active and the top total reached
    SuperActive,
    /// High total on most days
    Active,
    /// Steady but light
    Moderate,
    /// A couple of shots all week
    VeryLow,
    /// Exactly one shot
    Single,
    /// Nothing at all
    Inactive,
}

impl ShotsActivity {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperActive => "super active",
            Self::Active => "active",
            Self::Moderate => "moderate",
            Self::VeryLow => "very low",
            Self::Single => "single",
            Self::Inactive => "inactive",
        }
    }

    /// Walk the label ladder top-down for a recent window's total and
    /// active-day count.
    #[must_use]
    pub fn classify(
        total: u32,
        active_days: usize,
        window_days: usize,
        thresholds: ShotsThresholds,
    ) -> Self {
        if active_days >= window_days && total >= thresholds.super_active_total {
            Self::SuperActive
        } else if total >= thresholds.active_total && active_days >= thresholds.active_days {
            Self::Active
        } else if total >= thresholds.moderate_total && active_days >= thresholds.moderate_days {
            Self::Moderate
        } else if total >= thresholds.very_low_total {
            Self::VeryLow
        } else if total == 1 {
            Self::Single
        } else {
            Self::Inactive
        }
    }
}

/// Maximum sum of any `window` consecutive values, in one pass.
///
/// Degenerate inputs follow the series' own shape: an empty series is 0,
/// a window of one is the plain maximum, and a series shorter than the
/// window sums whole.
#[must_use]
pub fn rolling_window_max(series: &[u32], window: usize) -> u32 {
    if series.is_empty() {
        return 0;
    }
    if window <= 1 {
        return series.iter().copied().max().unwrap_or(0);
    }
    if series.len() < window {
        return series.iter().sum();
    }
    let mut current: u32 = series.iter().take(window).sum();
    let mut best = current;
    for (incoming, outgoing) in series.iter().skip(window).zip(series.iter()) {
        current = current + incoming - outgoing;
        best = best.max(current);
    }
    best
}

/// One period's aggregated statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// The window aggregated over
    pub period: Period,
    /// Anchor date the window ends at
    pub today: NaiveDate,
    /// First window date, `None` for all-time
    pub start: Option<NaiveDate>,
    /// Window dates that had a stored row, empty records included
    pub period_span: usize,
    /// Window days whose record carried signal
    pub days_tracked: usize,
    /// Completion counts and rates over tracked days
    pub completion: CompletionCounts,
    /// Conditional averages over tracked days
    pub averages: PeriodAverages,
    /// Expense totals and category ranking
    pub expenses: ExpenseStats,
    /// Shots subsystem figures
    pub shots: ShotsStats,
}

/// Completion status counts with rounded percentages of tracked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCounts {
    /// Days with every gate passed
    pub full: usize,
    /// Days with exactly three gates passed
    pub partial: usize,
    /// Days with two or fewer gates passed
    pub none: usize,
    /// `full` as a rounded percentage of tracked days
    pub full_pct: u32,
    /// `partial` as a rounded percentage of tracked days
    pub partial_pct: u32,
    /// `none` as a rounded percentage of tracked days
    pub none_pct: u32,
}

/// Averages conditioned on the field being filled in that day.
///
/// Each is `None` when no day in the window qualified, which renders as
/// "no data" rather than a misleading zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodAverages {
    /// Mean quality score over all tracked days
    pub quality: Option<f64>,
    /// Mean total sleep over days with any sleep logged
    pub sleep_hours: Option<f64>,
    /// Mean resolved steps over days with steps
    pub steps: Option<f64>,
    /// Mean macro intake over days with tracked macros
    pub macros: Option<MacroVector>,
    /// Mean english minutes over days with english
    pub english_min: Option<f64>,
    /// Mean ML minutes over days with ML work
    pub ml_min: Option<f64>,
    /// Mean algorithms minutes over days with algorithms work
    pub algo_min: Option<f64>,
    /// Mean university minutes over days with university work
    pub uni_min: Option<f64>,
}

/// The window's biggest single-day spend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxSpendDay {
    /// Date of the spend
    pub date: NaiveDate,
    /// Amount spent that day
    pub amount: f64,
}

/// One ranked expense category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// The category
    pub category: ExpenseCategory,
    /// Total spent on it over the window
    pub amount: f64,
    /// Rounded share of the window's total spend
    pub share_pct: u32,
}

/// Expense aggregation over the window's tracked days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStats {
    /// Total spend
    pub total: f64,
    /// Tracked days with a positive spend
    pub days_with_spend: usize,
    /// Total divided by the period span
    pub avg_per_day: f64,
    /// Total divided by spend days, `None` when there were none
    pub avg_per_spend_day: Option<f64>,
    /// Biggest single-day spend; ties keep the earliest day
    pub max_day: Option<MaxSpendDay>,
    /// Up to four categories ranked by amount, zero-spend ones dropped
    pub top_categories: Vec<CategoryShare>,
}

/// Shots figures: period totals plus all-history streaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotsStats {
    /// Recent-window activity label
    pub activity: ShotsActivity,
    /// Shots inside the period
    pub period_total: u32,
    /// Period days with at least one shot
    pub period_active_days: usize,
    /// Active days as a rounded percentage of the period span
    pub frequency_pct: u32,
    /// Period total divided by the period span
    pub avg_per_day: f64,
    /// Days since the last shot anywhere in history; the period span when
    /// there has never been one
    pub days_since_last: i64,
    /// Date of the last shot, if any
    pub last_shot: Option<NaiveDate>,
    /// Best short rolling-window sum over all history
    pub best_week: u32,
    /// Best long rolling-window sum over all history
    pub best_month: u32,
    /// Total shots over all history
    pub all_time_total: u32,
}

/// Aggregates period statistics from a store and a portion catalog.
pub struct PeriodAggregator<'a, S, C> {
    store: &'a S,
    catalog: &'a C,
    config: &'a EngineConfig,
}

impl<'a, S: DayStore, C: FoodCatalog> PeriodAggregator<'a, S, C> {
    /// Wire an aggregator over borrowed store, catalog, and configuration.
    #[must_use]
    pub const fn new(store: &'a S, catalog: &'a C, config: &'a EngineConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    /// Aggregate one period ending at `today`.
    ///
    /// `Ok(None)` means the window holds no dates, or only empty days.
    ///
    /// # Errors
    ///
    /// Returns [`daybook_core::errors::EngineError`] when the date listing
    /// itself cannot be read; per-day read failures degrade to empty days
    /// inside the assembler instead.
    pub fn aggregate(&self, period: Period, today: NaiveDate) -> EngineResult<Option<PeriodStats>> {
        let all_dates = self.store.dates_with_data()?;
        let start = period.start(today);
        let in_window = |date: NaiveDate| start.is_none_or(|s| date >= s);

        let period_span = all_dates.iter().filter(|&&date| in_window(date)).count();
        if period_span == 0 {
            debug!(period = period.label(), "no dates in window");
            return Ok(None);
        }

        let assembler = DayAssembler::new(self.store, self.catalog, self.config);
        let records: Vec<DayRecord> = all_dates
            .iter()
            .map(|&date| assembler.assemble(date))
            .collect();

        let mut accum = WindowAccum::default();
        for record in &records {
            if in_window(record.date) && record.completion != CompletionStatus::Empty {
                accum.absorb(record);
            }
        }
        if accum.tracked == 0 {
            debug!(period = period.label(), "window holds only empty days");
            return Ok(None);
        }

        let shots = compute_shots(&records, start, today, period_span, &self.config.shots);

        Ok(Some(PeriodStats {
            period,
            today,
            start,
            period_span,
            days_tracked: accum.tracked,
            completion: accum.completion_counts(),
            averages: accum.averages(),
            expenses: accum.expenses(period_span),
            shots,
        }))
    }
}

/// Running sums over the window's non-empty records.
#[derive(Default)]
struct WindowAccum {
    tracked: usize,
    full: usize,
    partial: usize,
    none: usize,
    quality_sum: f64,
    sleep_sum: f64,
    sleep_count: usize,
    steps_sum: f64,
    steps_count: usize,
    macro_sum: MacroVector,
    macro_count: usize,
    english_sum: f64,
    english_count: usize,
    ml_sum: f64,
    ml_count: usize,
    algo_sum: f64,
    algo_count: usize,
    uni_sum: f64,
    uni_count: usize,
    expense_total: f64,
    expense_days: usize,
    expense_max: Option<(NaiveDate, f64)>,
    category_totals: [f64; 6],
}

impl WindowAccum {
    fn absorb(&mut self, record: &DayRecord) {
        self.tracked += 1;
        match record.completion {
            CompletionStatus::Full => self.full += 1,
            CompletionStatus::Partial => self.partial += 1,
            _ => self.none += 1,
        }
        self.quality_sum += f64::from(record.quality);

        let sleep_total = record.sleep_total_hours();
        if sleep_total > 0.0 {
            self.sleep_sum += sleep_total;
            self.sleep_count += 1;
        }
        let steps = record.steps_value();
        if steps > 0.0 {
            self.steps_sum += steps;
            self.steps_count += 1;
        }
        if let Some(macros) = record.macros {
            self.macro_sum += macros;
            self.macro_count += 1;
        }
        absorb_positive(record.english_min, &mut self.english_sum, &mut self.english_count);
        absorb_positive(record.ml_min, &mut self.ml_sum, &mut self.ml_count);
        absorb_positive(record.algo_min, &mut self.algo_sum, &mut self.algo_count);
        absorb_positive(record.uni_min, &mut self.uni_sum, &mut self.uni_count);

        let spend = record.expenses.total;
        self.expense_total += spend;
        if spend > 0.0 {
            self.expense_days += 1;
            if self.expense_max.is_none_or(|(_, best)| spend > best) {
                self.expense_max = Some((record.date, spend));
            }
        }
        for (slot, category) in self.category_totals.iter_mut().zip(ExpenseCategory::ALL) {
            *slot += record.expenses.amount(category);
        }
    }

    fn completion_counts(&self) -> CompletionCounts {
        CompletionCounts {
            full: self.full,
            partial: self.partial,
            none: self.none,
            full_pct: pct(self.full, self.tracked),
            partial_pct: pct(self.partial, self.tracked),
            none_pct: pct(self.none, self.tracked),
        }
    }

    fn averages(&self) -> PeriodAverages {
        PeriodAverages {
            quality: avg(self.quality_sum, self.tracked),
            sleep_hours: avg(self.sleep_sum, self.sleep_count),
            steps: avg(self.steps_sum, self.steps_count),
            macros: (self.macro_count > 0)
                .then(|| self.macro_sum.scale(1.0 / self.macro_count as f64)),
            english_min: avg(self.english_sum, self.english_count),
            ml_min: avg(self.ml_sum, self.ml_count),
            algo_min: avg(self.algo_sum, self.algo_count),
            uni_min: avg(self.uni_sum, self.uni_count),
        }
    }

    fn expenses(&self, period_span: usize) -> ExpenseStats {
        ExpenseStats {
            total: self.expense_total,
            days_with_spend: self.expense_days,
            avg_per_day: if period_span > 0 {
                self.expense_total / period_span as f64
            } else {
                0.0
            },
            avg_per_spend_day: (self.expense_days > 0)
                .then(|| self.expense_total / self.expense_days as f64),
            max_day: self
                .expense_max
                .map(|(date, amount)| MaxSpendDay { date, amount }),
            top_categories: top_categories(&self.category_totals, self.expense_total),
        }
    }
}

fn absorb_positive(value: f64, sum: &mut f64, count: &mut usize) {
    if value > 0.0 {
        *sum += value;
        *count += 1;
    }
}

fn avg(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

fn pct(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Rank categories by amount (ties keep canonical order), drop zero-spend
/// ones, cap at four.
fn top_categories(category_totals: &[f64; 6], grand_total: f64) -> Vec<CategoryShare> {
    if grand_total <= 0.0 {
        return Vec::new();
    }
    let mut ranked: Vec<(ExpenseCategory, f64)> = ExpenseCategory::ALL
        .into_iter()
        .zip(category_totals.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
        .into_iter()
        .filter(|&(_, amount)| amount > 0.0)
        .take(4)
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            share_pct: ((amount / grand_total) * 100.0).round() as u32,
        })
        .collect()
}

fn shots_of(record: &DayRecord) -> u32 {
    record.shots_count.max(0.0) as u32
}

/// Shots figures: period totals from the window, streaks and the last-shot
/// date from full history.
fn compute_shots(
    records: &[DayRecord],
    window_start: Option<NaiveDate>,
    today: NaiveDate,
    period_span: usize,
    config: &ShotsConfig,
) -> ShotsStats {
    let mut by_date: HashMap<NaiveDate, u32> = HashMap::new();
    let mut last_shot = None;
    let mut period_total = 0u32;
    let mut period_active_days = 0usize;
    for record in records {
        let shots = shots_of(record);
        by_date.insert(record.date, shots);
        if shots > 0 {
            last_shot = Some(record.date);
        }
        if window_start.is_none_or(|start| record.date >= start) {
            period_total += shots;
            if shots > 0 {
                period_active_days += 1;
            }
        }
    }

    let (best_week, best_month, all_time_total) = records.first().map_or((0, 0, 0), |first| {
        let span = (today - first.date).num_days() + 1;
        let mut by_day = vec![0u32; usize::try_from(span).unwrap_or(1).max(1)];
        for record in records {
            let offset = (record.date - first.date).num_days();
            if let Ok(idx) = usize::try_from(offset) {
                if idx < by_day.len() {
                    by_day[idx] = shots_of(record);
                }
            }
        }
        (
            rolling_window_max(&by_day, config.best_short_window),
            rolling_window_max(&by_day, config.best_long_window),
            by_day.iter().sum(),
        )
    });

    let recent_window = i64::try_from(config.recent_window_days).unwrap_or(1);
    let recent_start = today - Duration::days(recent_window - 1);
    let mut recent_total = 0u32;
    let mut recent_days = 0usize;
    for offset in 0..recent_window {
        let date = recent_start + Duration::days(offset);
        let value = by_date.get(&date).copied().unwrap_or(0);
        recent_total += value;
        if value > 0 {
            recent_days += 1;
        }
    }

    ShotsStats {
        activity: ShotsActivity::classify(
            recent_total,
            recent_days,
            config.recent_window_days,
            config.thresholds,
        ),
        period_total,
        period_active_days,
        frequency_pct: pct(period_active_days, period_span),
        avg_per_day: if period_span > 0 {
            f64::from(period_total) / period_span as f64
        } else {
            0.0
        },
        days_since_last: last_shot.map_or_else(
            || i64::try_from(period_span).unwrap_or(i64::MAX),
            |date| (today - date).num_days().max(0),
        ),
        last_shot,
        best_week,
        best_month,
        all_time_total,
    }
}
