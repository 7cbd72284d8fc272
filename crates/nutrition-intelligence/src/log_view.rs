// ABOUTME: Parsed views over meal-log batches shared by every analyzer
// ABOUTME: Skips malformed timestamps and provides hour-window counts, distinct days, and per-weekday averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::statistics::StatisticalAnalyzer;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use nutrition_core::models::{DayOfWeek, FoodLogEntry};
use std::collections::{BTreeMap, HashSet};

/// A log entry with its parsed wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct TimedEntry<'a> {
    /// Source entry
    pub entry: &'a FoodLogEntry,
    /// Parsed wall-clock time
    pub at: NaiveDateTime,
}

impl TimedEntry<'_> {
    /// Hour of day
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    /// Minutes since midnight
    #[must_use]
    pub fn minutes(&self) -> f64 {
        f64::from(self.at.hour() * 60 + self.at.minute())
    }

    /// Day of week
    #[must_use]
    pub fn day(&self) -> DayOfWeek {
        DayOfWeek::of(self.at.date())
    }

    /// Calendar date
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    /// Calories of the entry
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.entry.calories()
    }
}

/// Calorie statistics for one weekday
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayStats {
    /// Number of entries on this weekday
    pub frequency: usize,
    /// Mean calories per entry, zero when there are none
    pub avg_calories: f64,
}

/// Entries with a parseable timestamp, in input order
#[must_use]
pub fn timed(logs: &[FoodLogEntry]) -> Vec<TimedEntry<'_>> {
    logs.iter()
        .filter_map(|entry| entry.recorded_at().map(|at| TimedEntry { entry, at }))
        .collect()
}

/// Number of entries whose hour falls in `[start, end)`
#[must_use]
pub fn count_in_hours(logs: &[FoodLogEntry], start: u32, end: u32) -> usize {
    timed(logs)
        .iter()
        .filter(|timed| (start..end).contains(&timed.hour()))
        .count()
}

/// Share of all entries (malformed ones included) whose hour falls in `[start, end)`
#[must_use]
pub fn share_in_hours(logs: &[FoodLogEntry], start: u32, end: u32) -> f64 {
    count_in_hours(logs, start, end) as f64 / logs.len().max(1) as f64
}

/// Number of distinct calendar dates, at least one
#[must_use]
pub fn distinct_days(logs: &[FoodLogEntry]) -> usize {
    timed(logs)
        .iter()
        .map(TimedEntry::date)
        .collect::<HashSet<_>>()
        .len()
        .max(1)
}

/// Per-weekday entry counts and mean calories, Monday first
#[must_use]
pub fn day_stats(logs: &[FoodLogEntry]) -> [DayStats; 7] {
    let mut calories: BTreeMap<DayOfWeek, Vec<f64>> = BTreeMap::new();
    for timed in timed(logs) {
        calories.entry(timed.day()).or_default().push(timed.calories());
    }

    let mut stats = [DayStats::default(); 7];
    for (day, values) in calories {
        stats[day.index()] = DayStats {
            frequency: values.len(),
            avg_calories: StatisticalAnalyzer::mean_or(&values, 0.0),
        };
    }
    stats
}

/// Mean of the Monday-Friday and Saturday-Sunday calorie averages
#[must_use]
pub fn weekday_weekend_averages(stats: &[DayStats; 7]) -> (f64, f64) {
    let weekday: Vec<f64> = stats[..5].iter().map(|s| s.avg_calories).collect();
    let weekend: Vec<f64> = stats[5..].iter().map(|s| s.avg_calories).collect();
    (
        StatisticalAnalyzer::mean_or(&weekday, 0.0),
        StatisticalAnalyzer::mean_or(&weekend, 0.0),
    )
}
