// ABOUTME: Integration tests for personalized daily and weekly insights
// ABOUTME: Insight caps, recent-window handling, micro-goal limits, and de-duplicated risk days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use common::{instant, meal, monday, plus_days};
use nutrition_dna::intelligence::config::InsightConfig;
use nutrition_dna::intelligence::{PersonalizedInsightsEngine, TextRenderer};
use nutrition_dna::models::{
    DayOfWeek, EatingArchetype, NutritionDna, OptimizationArea, OptimizationZone, SuccessPattern,
    Trigger,
};

fn trigger(name: &str, probability: f64) -> Trigger {
    Trigger {
        trigger: name.to_owned(),
        food_response: "increased_intake".to_owned(),
        probability,
        time_of_day: None,
    }
}

fn busy_weekend_dna() -> NutritionDna {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::WeekendWarrior;
    dna.confidence_score = 0.7;
    dna.consistency_score = 0.3;
    dna.temporal_patterns.meal_timing_consistency = 0.3;
    dna.temporal_patterns.weekend_shift_hours = 2.0;
    dna.temporal_patterns.late_night_eating_frequency = 0.5;
    dna.energy_patterns.morning_appetite = 0.1;
    dna.energy_patterns.evening_comfort_eating = 0.7;
    dna.triggers = vec![
        trigger("monday_compensation", 0.8),
        trigger("monday_blues", 0.7),
        trigger("evening_hunger", 0.7),
    ];
    dna.optimization_zones = vec![
        OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.2),
        OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.3),
    ];
    dna
}

#[test]
fn test_daily_insights_are_capped_at_five() {
    let engine = PersonalizedInsightsEngine::default();
    let old_logs = vec![meal(plus_days(monday(), -20), 13, 0, 500.0)];

    let insights = engine.daily_insights(&busy_weekend_dna(), monday(), &old_logs);

    assert_eq!(insights.len(), 5);
    assert_eq!(
        insights[0],
        "Back to routine: a regular breakfast resets the week."
    );
}

#[test]
fn test_sparse_recent_window_is_reported() {
    let engine = PersonalizedInsightsEngine::new(InsightConfig {
        max_daily_insights: 10,
        ..InsightConfig::default()
    });
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let wednesday = plus_days(monday(), 2);

    let stale = vec![meal(plus_days(monday(), -10), 13, 0, 500.0)];
    let insights = engine.daily_insights(&dna, wednesday, &stale);
    assert!(insights.contains(&text.text("insight.recent.sparse_data")));

    let without_logs = engine.daily_insights(&dna, wednesday, &[]);
    assert!(!without_logs.contains(&text.text("insight.recent.sparse_data")));
}

#[test]
fn test_recent_large_portions_are_flagged() {
    let engine = PersonalizedInsightsEngine::new(InsightConfig {
        max_daily_insights: 10,
        ..InsightConfig::default()
    });
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let thursday = plus_days(monday(), 3);
    let recent = vec![
        meal(monday(), 13, 0, 950.0),
        meal(plus_days(monday(), 1), 13, 0, 900.0),
        meal(plus_days(monday(), 2), 13, 0, 1000.0),
        meal(thursday, 13, 0, 850.0),
    ];

    let insights = engine.daily_insights(&dna, thursday, &recent);
    assert!(insights.contains(&text.text("insight.recent.large_portions")));
}

#[test]
fn test_recent_window_covers_three_days_ending_on_target() {
    let engine = PersonalizedInsightsEngine::new(InsightConfig {
        max_daily_insights: 10,
        ..InsightConfig::default()
    });
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let thursday = plus_days(monday(), 3);

    // Monday is four calendar days back and falls outside the window
    let with_monday = vec![
        meal(monday(), 13, 0, 950.0),
        meal(plus_days(monday(), 1), 13, 0, 900.0),
        meal(thursday, 13, 0, 850.0),
    ];
    let insights = engine.daily_insights(&dna, thursday, &with_monday);
    assert!(insights.contains(&text.text("insight.recent.sparse_data")));

    let inside = vec![
        meal(plus_days(monday(), 1), 0, 0, 950.0),
        meal(plus_days(monday(), 2), 13, 0, 900.0),
        meal(thursday, 20, 30, 850.0),
    ];
    let insights = engine.daily_insights(&dna, thursday, &inside);
    assert!(!insights.contains(&text.text("insight.recent.sparse_data")));
    assert!(insights.contains(&text.text("insight.recent.large_portions")));

    // Anything after the target day is not recent yet
    let future = vec![
        meal(plus_days(monday(), 1), 13, 0, 950.0),
        meal(thursday, 13, 0, 900.0),
        meal(plus_days(monday(), 4), 0, 0, 850.0),
    ];
    let insights = engine.daily_insights(&dna, thursday, &future);
    assert!(insights.contains(&text.text("insight.recent.sparse_data")));
}

#[test]
fn test_weekly_micro_goals_are_capped() {
    let weekly =
        PersonalizedInsightsEngine::default().weekly_insights(&busy_weekend_dna(), monday(), &[]);

    assert_eq!(weekly.micro_goals.len(), 4);
    assert_eq!(weekly.week_start, monday());
}

#[test]
fn test_risk_days_are_deduplicated() {
    let text = TextRenderer::english();
    let weekly =
        PersonalizedInsightsEngine::default().weekly_insights(&busy_weekend_dna(), monday(), &[]);

    assert_eq!(
        weekly.risk_days,
        vec![
            text.text("risk.monday_adjustment"),
            text.text("risk.saturday_freedom"),
            text.text("risk.sunday_anxiety"),
            text.text("risk.daily_evenings"),
        ]
    );
}

#[test]
fn test_weekly_day_insights_only_for_days_with_something_to_say() {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::EarlyBirdPlanner;
    dna.consistency_score = 0.9;
    dna.temporal_patterns.meal_timing_consistency = 0.9;
    dna.temporal_patterns.weekend_shift_hours = 0.5;
    dna.energy_patterns.morning_appetite = 0.5;
    dna.success_patterns = vec![SuccessPattern {
        pattern: "regular_breakfast".to_owned(),
        outcome: "stable_energy".to_owned(),
        correlation: 0.9,
    }];

    let weekly = PersonalizedInsightsEngine::default().weekly_insights(&dna, monday(), &[]);

    let days: Vec<DayOfWeek> = weekly.day_insights.keys().copied().collect();
    assert!(days.contains(&DayOfWeek::Monday));
    assert!(days.contains(&DayOfWeek::Sunday));
    assert!(!days.contains(&DayOfWeek::Tuesday));
    assert!(weekly.risk_days.is_empty());
    assert!(!weekly.opportunity_moments.is_empty());
    assert!(weekly.opportunity_moments.len() <= 5);
    assert!(!weekly.observed_patterns.is_empty());
}
