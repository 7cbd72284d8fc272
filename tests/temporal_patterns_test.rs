// ABOUTME: Integration tests for temporal eating-pattern analysis
// ABOUTME: Meal-slot extraction, consistency, weekend shift, energy curve, and time insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, clippy::float_cmp, missing_docs)]

mod common;

use chrono::{NaiveTime, Timelike};
use common::{date, early_bird_logs, meal, monday, plus_days};
use nutrition_dna::intelligence::config::TimeStatistics;
use nutrition_dna::intelligence::TemporalPatternAnalyzer;
use nutrition_dna::models::{DayOfWeek, FoodLogEntry, TemporalPattern};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_empty_input_yields_default_pattern() {
    let pattern = TemporalPatternAnalyzer::new().analyze(&[]);

    assert_eq!(pattern.preferred_breakfast_time, time(8, 0));
    assert_eq!(pattern.preferred_lunch_time, time(13, 0));
    assert_eq!(pattern.preferred_dinner_time, time(19, 0));
    assert!((pattern.meal_timing_consistency - 1.0).abs() < 1e-9);
    assert!(pattern.late_night_eating_frequency.abs() < 1e-9);
}

#[test]
fn test_meal_times_are_grouped_by_slot() {
    let day = monday();
    let logs = vec![
        meal(day, 7, 30, 300.0),
        meal(day, 12, 15, 600.0),
        meal(day, 19, 45, 700.0),
        meal(day, 16, 30, 150.0),
        meal(day, 23, 30, 200.0),
    ];

    let times = TemporalPatternAnalyzer::extract_meal_times(&logs);

    assert_eq!(times.breakfast, vec![time(7, 30)]);
    assert_eq!(times.lunch, vec![time(12, 15)]);
    assert_eq!(times.dinner, vec![time(19, 45)]);
    assert_eq!(times.snack, vec![time(16, 30), time(23, 30)]);
}

#[test]
fn test_malformed_timestamps_are_skipped() {
    let logs = vec![
        FoodLogEntry::new("yesterday at noon", None),
        meal(monday(), 8, 0, 400.0),
    ];

    let times = TemporalPatternAnalyzer::extract_meal_times(&logs);
    assert_eq!(times.breakfast.len(), 1);
    assert!(times.lunch.is_empty() && times.dinner.is_empty() && times.snack.is_empty());
}

#[test]
fn test_average_time_truncates_to_minute() {
    let analyzer = TemporalPatternAnalyzer::new();
    let average = analyzer.average_time(&[time(8, 0), time(8, 1)]).unwrap();
    assert_eq!(average, time(8, 0));
    assert!(analyzer.average_time(&[]).is_none());
}

#[test]
fn test_consistency_drops_with_spread() {
    let analyzer = TemporalPatternAnalyzer::new();
    let tight = analyzer.time_consistency(&[time(8, 0), time(8, 5), time(7, 55)]);
    let loose = analyzer.time_consistency(&[time(6, 0), time(10, 0), time(8, 0)]);

    assert!(tight > 0.95);
    assert!(loose < tight);
    assert!((analyzer.time_consistency(&[time(9, 0)]) - 1.0).abs() < 1e-9);
}

#[test]
fn test_consistency_is_floored_at_zero() {
    let analyzer = TemporalPatternAnalyzer::new();
    let scattered = analyzer.time_consistency(&[time(0, 0), time(23, 59), time(0, 0), time(23, 59)]);
    assert!(scattered.abs() < 1e-9);
}

#[test]
fn test_circular_statistics_join_midnight() {
    let analyzer = TemporalPatternAnalyzer::new().with_time_statistics(TimeStatistics::Circular);
    let around_midnight = [time(23, 50), time(0, 10), time(23, 55), time(0, 5)];

    assert!(analyzer.time_consistency(&around_midnight) > 0.9);
    let mean = analyzer.average_time(&around_midnight).unwrap();
    assert!(mean.hour() == 23 || mean.hour() == 0);
}

#[test]
fn test_weekend_shift_and_calorie_ratio() {
    let saturday = plus_days(monday(), 5);
    let logs = vec![
        meal(monday(), 8, 0, 500.0),
        meal(monday(), 12, 0, 500.0),
        meal(saturday, 11, 0, 900.0),
        meal(saturday, 15, 0, 900.0),
    ];

    let split = TemporalPatternAnalyzer::weekend_vs_weekday(&logs);
    assert!((split.weekday_avg_hour - 10.0).abs() < 1e-9);
    assert!((split.weekend_avg_hour - 13.0).abs() < 1e-9);
    assert!((split.shift_hours() - 3.0).abs() < 1e-9);
    assert!((split.calorie_ratio - 1.8).abs() < 1e-9);
}

#[test]
fn test_weekend_ratio_is_neutral_without_weekday_calories() {
    let saturday = plus_days(monday(), 5);
    let split = TemporalPatternAnalyzer::weekend_vs_weekday(&[meal(saturday, 12, 0, 800.0)]);
    assert!((split.calorie_ratio - 1.0).abs() < 1e-9);
}

#[test]
fn test_early_bird_scenario_is_consistent_without_late_eating() {
    let pattern = TemporalPatternAnalyzer::new().analyze(&early_bird_logs());

    assert!(pattern.meal_timing_consistency > 0.9);
    assert!(pattern.late_night_eating_frequency.abs() < 1e-9);
    assert_eq!(pattern.preferred_breakfast_time.hour(), 7);
}

#[test]
fn test_energy_pattern_tracks_calorie_distribution() {
    let day = monday();
    let logs = vec![
        meal(day, 8, 0, 200.0),
        meal(day, 13, 0, 800.0),
        meal(day, 19, 0, 400.0),
    ];

    let energy = TemporalPatternAnalyzer::analyze_energy(&logs);
    let total = 1400.0;
    assert!((energy.morning_appetite - 200.0 / total).abs() < 1e-9);
    assert!((energy.afternoon_hunger - 800.0 / total).abs() < 1e-9);
    assert!((energy.evening_comfort_eating - 400.0 / total).abs() < 1e-9);
    assert_eq!(energy.peak_hunger_time, time(13, 0));
    assert_eq!(energy.lowest_energy_time, time(0, 0));
}

#[test]
fn test_energy_pattern_of_empty_input_is_zeroed() {
    let energy = TemporalPatternAnalyzer::analyze_energy(&[]);
    assert!(energy.morning_appetite.abs() < 1e-9);
    assert!(energy.afternoon_hunger.abs() < 1e-9);
    assert!(energy.evening_comfort_eating.abs() < 1e-9);
    assert_eq!(energy.peak_hunger_time, time(0, 0));
}

#[test]
fn test_insights_follow_thresholds() {
    let analyzer = TemporalPatternAnalyzer::new();
    let pattern = TemporalPattern {
        preferred_breakfast_time: time(6, 15),
        meal_timing_consistency: 0.9,
        weekend_shift_hours: 2.5,
        late_night_eating_frequency: 0.35,
        ..TemporalPattern::default()
    };

    let insights = analyzer.insights(&pattern);
    assert_eq!(insights.len(), 4);
    assert!(insights.iter().any(|i| i.contains("2.5")));

    let quiet = analyzer.insights(&TemporalPattern {
        meal_timing_consistency: 0.6,
        ..TemporalPattern::default()
    });
    assert!(quiet.is_empty());
}

#[test]
fn test_day_recommendation_varies_by_day() {
    let analyzer = TemporalPatternAnalyzer::new();
    let shifted = TemporalPattern {
        weekend_shift_hours: 1.5,
        meal_timing_consistency: 0.8,
        ..TemporalPattern::default()
    };

    let monday_tip = analyzer.day_recommendation(&shifted, DayOfWeek::Monday);
    let friday_tip = analyzer.day_recommendation(&shifted, DayOfWeek::Friday);
    let saturday_tip = analyzer.day_recommendation(&shifted, DayOfWeek::Saturday);
    let wednesday_tip = analyzer.day_recommendation(&shifted, DayOfWeek::Wednesday);

    assert_ne!(monday_tip, friday_tip);
    assert_ne!(saturday_tip, wednesday_tip);
    assert_eq!(
        monday_tip,
        "Monday: bring breakfast back to 08:00 after the weekend shift."
    );
    assert!(wednesday_tip.starts_with("Wednesday"));
    assert_eq!(DayOfWeek::of(date(2025, 3, 8)), DayOfWeek::Saturday);
}
