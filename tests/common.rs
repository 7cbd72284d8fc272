// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Meal-log builders, dates, fixed clocks, and synthetic behavior scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `nutrition_dna`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use nutrition_dna::models::{DayOfWeek, FoodLogEntry, Macros, UserProfile};
use nutrition_dna::time::{Clock, FixedClock};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC instant
pub fn instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Clock frozen at `instant`
pub fn fixed_clock(at: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(at))
}

/// Monday, 2025-03-03
pub fn monday() -> NaiveDate {
    date(2025, 3, 3)
}

/// Entry at `day` + `hour:minute` with the given calories and proportional macros
pub fn meal(day: NaiveDate, hour: u32, minute: u32, calories: f64) -> FoodLogEntry {
    FoodLogEntry::new(
        format!("{day}T{hour:02}:{minute:02}:00"),
        Some(Macros::new(calories, calories * 0.05, calories * 0.035, calories * 0.12).with_fiber(4.0)),
    )
}

/// `day` shifted by `offset` days
pub fn plus_days(day: NaiveDate, offset: i64) -> NaiveDate {
    day + Duration::days(offset)
}

/// Breakfast at 08:00 (+/- 5 minutes) on 20 consecutive weekdays plus extra entries, 50 total
pub fn early_bird_logs() -> Vec<FoodLogEntry> {
    let mut weekdays = Vec::new();
    let mut day = monday();
    while weekdays.len() < 20 {
        if !DayOfWeek::of(day).is_weekend() {
            weekdays.push(day);
        }
        day = plus_days(day, 1);
    }

    (0..50)
        .map(|index| {
            let day = weekdays[index % weekdays.len()];
            let minute = [55, 0, 5][index % 3];
            let hour = if minute == 55 { 7 } else { 8 };
            meal(day, hour, minute, 400.0)
        })
        .collect()
}

/// Lunch-time meals all week with weekend calories 1.8x the weekday level
pub fn weekend_warrior_logs() -> Vec<FoodLogEntry> {
    (0..21)
        .map(|offset| {
            let day = plus_days(monday(), offset);
            let weekend = offset % 7 >= 5;
            let calories = if weekend { 900.0 } else { 500.0 };
            meal(day, 12, 30, calories)
        })
        .collect()
}

/// 40 entries, 14 of them between 22:00 and 23:30
pub fn late_night_logs() -> Vec<FoodLogEntry> {
    (0..40)
        .map(|index| {
            let day = plus_days(monday(), (index / 3) as i64);
            if index % 3 == 0 {
                meal(day, 22 + (index % 2) as u32, 15, 450.0)
            } else {
                meal(day, 13, 0, 600.0)
            }
        })
        .collect()
}

/// Profile with a weight-loss goal and a calorie target
pub fn weight_loss_profile() -> UserProfile {
    UserProfile {
        age: Some(35),
        gender: Some("female".to_owned()),
        height_cm: Some(168.0),
        weight_kg: Some(72.0),
        activity_level: Some("moderate".to_owned()),
        goal: Some("weight loss".to_owned()),
        daily_calories_target: Some(1800.0),
        ..UserProfile::default()
    }
}
