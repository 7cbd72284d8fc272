// ABOUTME: Temporal eating-pattern analysis: meal-time distributions, weekend shift, late-night share
// ABOUTME: Also derives the hourly energy/appetite curve and time-based insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::config::intelligence::TimeStatistics;
use crate::log_view::{self, TimedEntry};
use crate::statistics::{StatisticalAnalyzer, MINUTES_PER_DAY};
use crate::text::TextRenderer;
use chrono::{NaiveTime, Timelike};
use nutrition_core::constants::hours;
use nutrition_core::models::{
    DayOfWeek, EnergyPattern, FoodLogEntry, MealType, TemporalPattern,
};
use nutrition_core::time::time_of_day;
use tracing::warn;

/// Minutes of standard deviation at which a slot has zero consistency
const ZERO_CONSISTENCY_STD_MINUTES: f64 = 240.0;

/// Mean meal hour assumed for a side of the week with no entries
const DEFAULT_MEAN_HOUR: f64 = 12.0;

/// Energy window bounds, `[start, end)`
const MORNING_WINDOW: (u32, u32) = (6, 12);
const AFTERNOON_WINDOW: (u32, u32) = (12, 18);
const EVENING_WINDOW: (u32, u32) = (18, 22);

/// Meal times grouped by slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealTimes {
    /// Entries in `[05:00, 11:00)`
    pub breakfast: Vec<NaiveTime>,
    /// Entries in `[11:00, 16:00)`
    pub lunch: Vec<NaiveTime>,
    /// Entries in `[18:00, 23:00)`
    pub dinner: Vec<NaiveTime>,
    /// Everything else
    pub snack: Vec<NaiveTime>,
}

/// Weekday versus weekend comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSplit {
    /// Mean meal hour Monday-Friday
    pub weekday_avg_hour: f64,
    /// Mean meal hour Saturday-Sunday
    pub weekend_avg_hour: f64,
    /// Mean calories per weekday entry
    pub weekday_avg_calories: f64,
    /// Mean calories per weekend entry
    pub weekend_avg_calories: f64,
    /// Weekend over weekday calories, 1.0 when weekday calories are zero
    pub calorie_ratio: f64,
}

impl WeekSplit {
    /// Absolute shift of the mean meal hour
    #[must_use]
    pub fn shift_hours(&self) -> f64 {
        (self.weekend_avg_hour - self.weekday_avg_hour).abs()
    }
}

/// Analyzes when a user eats
#[derive(Debug, Clone, Default)]
pub struct TemporalPatternAnalyzer {
    mode: TimeStatistics,
    text: TextRenderer,
}

impl TemporalPatternAnalyzer {
    /// Analyzer with linear time statistics and English text
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given time-of-day statistics mode
    #[must_use]
    pub const fn with_time_statistics(mut self, mode: TimeStatistics) -> Self {
        self.mode = mode;
        self
    }

    /// Render insights through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Group meal times by slot; malformed timestamps are skipped
    #[must_use]
    pub fn extract_meal_times(logs: &[FoodLogEntry]) -> MealTimes {
        let mut times = MealTimes::default();
        for entry in logs {
            let Some(at) = entry.recorded_at() else {
                warn!(timestamp = %entry.timestamp, "Skipping entry with malformed timestamp");
                continue;
            };
            let slot = match MealType::from_hour(at.hour()) {
                MealType::Breakfast => &mut times.breakfast,
                MealType::Lunch => &mut times.lunch,
                MealType::Dinner => &mut times.dinner,
                MealType::Snack => &mut times.snack,
            };
            slot.push(at.time());
        }
        times
    }

    /// Average time of day, truncated to the minute
    #[must_use]
    pub fn average_time(&self, times: &[NaiveTime]) -> Option<NaiveTime> {
        let minutes = Self::minutes(times);
        let mean = StatisticalAnalyzer::time_mean(&minutes, self.mode)?;
        let total = (mean.trunc() as u32) % MINUTES_PER_DAY as u32;
        Some(time_of_day(total / 60, total % 60))
    }

    /// Consistency in `[0, 1]`; fewer than two samples count as fully consistent
    #[must_use]
    pub fn time_consistency(&self, times: &[NaiveTime]) -> f64 {
        let minutes = Self::minutes(times);
        StatisticalAnalyzer::time_std_dev(&minutes, self.mode)
            .map_or(1.0, |std| (1.0 - std / ZERO_CONSISTENCY_STD_MINUTES).max(0.0))
    }

    /// Compare weekday and weekend meal hours and calories
    #[must_use]
    pub fn weekend_vs_weekday(logs: &[FoodLogEntry]) -> WeekSplit {
        let timed = log_view::timed(logs);
        let (weekend, weekday): (Vec<&TimedEntry<'_>>, Vec<&TimedEntry<'_>>) =
            timed.iter().partition(|t| t.day().is_weekend());

        let weekday_hours: Vec<f64> = weekday.iter().map(|t| f64::from(t.hour())).collect();
        let weekend_hours: Vec<f64> = weekend.iter().map(|t| f64::from(t.hour())).collect();
        let weekday_calories: Vec<f64> = weekday.iter().map(|t| t.calories()).collect();
        let weekend_calories: Vec<f64> = weekend.iter().map(|t| t.calories()).collect();

        let weekday_avg_calories = StatisticalAnalyzer::mean_or(&weekday_calories, 0.0);
        let weekend_avg_calories = StatisticalAnalyzer::mean_or(&weekend_calories, 0.0);

        WeekSplit {
            weekday_avg_hour: StatisticalAnalyzer::mean_or(&weekday_hours, DEFAULT_MEAN_HOUR),
            weekend_avg_hour: StatisticalAnalyzer::mean_or(&weekend_hours, DEFAULT_MEAN_HOUR),
            weekday_avg_calories,
            weekend_avg_calories,
            calorie_ratio: StatisticalAnalyzer::ratio_or_neutral(
                weekend_avg_calories,
                weekday_avg_calories,
            ),
        }
    }

    /// Full temporal pattern of a log batch
    #[must_use]
    pub fn analyze(&self, logs: &[FoodLogEntry]) -> TemporalPattern {
        let times = Self::extract_meal_times(logs);
        let defaults = TemporalPattern::default();

        let consistency = [&times.breakfast, &times.lunch, &times.dinner]
            .into_iter()
            .map(|slot| self.time_consistency(slot))
            .sum::<f64>()
            / 3.0;

        TemporalPattern {
            preferred_breakfast_time: self
                .average_time(&times.breakfast)
                .unwrap_or(defaults.preferred_breakfast_time),
            preferred_lunch_time: self
                .average_time(&times.lunch)
                .unwrap_or(defaults.preferred_lunch_time),
            preferred_dinner_time: self
                .average_time(&times.dinner)
                .unwrap_or(defaults.preferred_dinner_time),
            meal_timing_consistency: consistency,
            weekend_shift_hours: Self::weekend_vs_weekday(logs).shift_hours(),
            late_night_eating_frequency: log_view::share_in_hours(
                logs,
                hours::LATE_NIGHT_START,
                24,
            ),
        }
    }

    /// Appetite distribution over the day
    #[must_use]
    pub fn analyze_energy(logs: &[FoodLogEntry]) -> EnergyPattern {
        let mut by_hour: [Vec<f64>; 24] = Default::default();
        for timed in log_view::timed(logs) {
            by_hour[timed.hour() as usize].push(timed.calories());
        }
        let hourly: Vec<f64> = by_hour
            .iter()
            .map(|values| StatisticalAnalyzer::mean_or(values, 0.0))
            .collect();

        let window = |(start, end): (u32, u32)| -> f64 {
            hourly[start as usize..end as usize].iter().sum()
        };
        let morning = window(MORNING_WINDOW);
        let afternoon = window(AFTERNOON_WINDOW);
        let evening = window(EVENING_WINDOW);
        let total = morning + afternoon + evening;
        let total = if total <= 0.0 { 1.0 } else { total };

        let mut peak = 0;
        let mut lowest = 0;
        for (hour, value) in hourly.iter().enumerate() {
            if *value > hourly[peak] {
                peak = hour;
            }
            if *value < hourly[lowest] {
                lowest = hour;
            }
        }

        EnergyPattern {
            morning_appetite: (morning / total).min(1.0),
            afternoon_hunger: (afternoon / total).min(1.0),
            evening_comfort_eating: (evening / total).min(1.0),
            peak_hunger_time: time_of_day(peak as u32, 0),
            lowest_energy_time: time_of_day(lowest as u32, 0),
        }
    }

    /// Human-readable observations about a temporal pattern
    #[must_use]
    pub fn insights(&self, pattern: &TemporalPattern) -> Vec<String> {
        let mut insights = Vec::new();

        let breakfast_hour = pattern.preferred_breakfast_time.hour();
        if breakfast_hour < 7 {
            insights.push(self.text.text("temporal.early_breakfast"));
        } else if breakfast_hour > 10 {
            insights.push(self.text.text("temporal.late_breakfast"));
        }

        if pattern.meal_timing_consistency > 0.8 {
            insights.push(self.text.text("temporal.stable_schedule"));
        } else if pattern.meal_timing_consistency < 0.5 {
            insights.push(self.text.text("temporal.chaotic_schedule"));
        }

        if pattern.weekend_shift_hours > 2.0 {
            insights.push(self.text.render(
                "temporal.weekend_shift",
                &[("hours", format!("{:.1}", pattern.weekend_shift_hours))],
            ));
        }

        if pattern.late_night_eating_frequency > 0.3 {
            insights.push(self.text.text("temporal.late_eating"));
        }

        insights
    }

    /// One recommendation for `day` based on the pattern
    #[must_use]
    pub fn day_recommendation(&self, pattern: &TemporalPattern, day: DayOfWeek) -> String {
        let breakfast = pattern.preferred_breakfast_time.format("%H:%M").to_string();
        let day_name = self.text.text(&format!("day.{day}"));
        let args = [("day", day_name), ("time", breakfast)];

        let key = match day {
            DayOfWeek::Monday if pattern.weekend_shift_hours > 1.0 => "temporal.day.monday_reset",
            DayOfWeek::Monday => "temporal.day.monday",
            DayOfWeek::Friday => "temporal.day.friday",
            DayOfWeek::Saturday | DayOfWeek::Sunday if pattern.weekend_shift_hours > 1.0 => {
                "temporal.day.weekend_shifted"
            }
            DayOfWeek::Saturday | DayOfWeek::Sunday => "temporal.day.weekend",
            _ if pattern.meal_timing_consistency > 0.7 => "temporal.day.midweek_steady",
            _ => "temporal.day.midweek",
        };
        self.text.render(key, &args)
    }

    fn minutes(times: &[NaiveTime]) -> Vec<f64> {
        times
            .iter()
            .map(|t| f64::from(t.hour() * 60 + t.minute()))
            .collect()
    }
}
