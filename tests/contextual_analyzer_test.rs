// ABOUTME: Integration tests for contextual eating analysis
// ABOUTME: Weather, time, social and location buckets, influence ranking, sensitivity, responses and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use chrono::NaiveTime;
use common::{early_bird_logs, instant, meal, monday, plus_days};
use nutrition_dna::intelligence::config::ContextConfig;
use nutrition_dna::intelligence::contextual_analyzer::{InfluenceKind, TimePeriod};
use nutrition_dna::intelligence::{ContextualAnalyzer, TextRenderer};
use nutrition_dna::models::{ContextSample, EatingArchetype, FoodLogEntry, NutritionDna};

fn weather_logs() -> (Vec<FoodLogEntry>, Vec<ContextSample>) {
    let rainy = monday();
    let sunny = plus_days(monday(), 1);
    let unknown = plus_days(monday(), 2);
    let logs = vec![
        meal(rainy, 8, 0, 800.0),
        meal(rainy, 13, 0, 800.0),
        meal(rainy, 19, 0, 800.0),
        meal(sunny, 8, 0, 400.0),
        meal(sunny, 13, 0, 400.0),
        meal(sunny, 19, 0, 400.0),
        meal(unknown, 13, 0, 600.0),
    ];
    let context = vec![
        ContextSample::new(rainy).with_weather("Rainy"),
        ContextSample::new(sunny).with_weather("sunny"),
    ];
    (logs, context)
}

fn setting_logs() -> Vec<FoodLogEntry> {
    let day = monday();
    vec![
        meal(day, 13, 0, 1000.0).with_metadata("place", "restaurant"),
        meal(plus_days(day, 1), 13, 0, 1000.0).with_metadata("place", "restaurant"),
        meal(day, 19, 0, 400.0).with_metadata("place", "home"),
        meal(plus_days(day, 1), 19, 0, 400.0).with_metadata("place", "home"),
    ]
}

#[test]
fn test_weather_buckets_join_context_by_date() {
    let (logs, context) = weather_logs();
    let impact = ContextualAnalyzer::default().weather_impact(&logs, &context);

    let keys: Vec<&str> = impact.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["rainy", "sunny"]);
    let rainy = &impact["rainy"];
    assert_eq!(rainy.meal_count, 3);
    assert!((rainy.avg_calories_per_meal - 800.0).abs() < 1e-9);
    assert!((rainy.avg_eating_hour - 40.0 / 3.0).abs() < 1e-9);
    assert!(rainy.calorie_variance.abs() < 1e-9);
}

#[test]
fn test_small_weather_buckets_are_dropped() {
    let (logs, context) = weather_logs();
    let strict = ContextualAnalyzer::new(ContextConfig {
        min_weather_samples: 4,
        ..ContextConfig::default()
    });
    assert!(strict.weather_impact(&logs, &context).is_empty());
}

#[test]
fn test_time_buckets_split_weekday_and_weekend() {
    let saturday = plus_days(monday(), 5);
    let logs = vec![
        meal(monday(), 9, 0, 300.0),
        meal(saturday, 10, 0, 500.0),
        meal(saturday, 22, 0, 200.0),
        meal(monday(), 3, 0, 100.0),
    ];

    let impact = ContextualAnalyzer::time_impact(&logs);

    let morning = &impact[&TimePeriod::Morning];
    assert_eq!(morning.frequency, 2);
    assert_eq!(morning.weekday_frequency, 1);
    assert_eq!(morning.weekend_frequency, 1);
    assert!((morning.avg_calories - 400.0).abs() < 1e-9);
    assert_eq!(impact[&TimePeriod::LateNight].frequency, 1);
    assert_eq!(impact.len(), 2);
    assert_eq!(TimePeriod::of_hour(3), None);
}

#[test]
fn test_social_and_location_buckets() {
    let analyzer = ContextualAnalyzer::default();
    let logs = setting_logs();

    let social = analyzer.social_impact(&logs);
    assert!((social["restaurant"].avg_calories - 1000.0).abs() < 1e-9);
    assert!((social["home_alone"].max_calories - 400.0).abs() < 1e-9);

    let location = analyzer.location_impact(&logs);
    assert_eq!(location["home"].frequency, 2);
    assert!((location["home"].avg_hour - 19.0).abs() < 1e-9);
    assert!((location["restaurant"].time_consistency - 1.0).abs() < 1e-9);
}

#[test]
fn test_strongest_influences_are_ranked_and_capped() {
    let analyzer = ContextualAnalyzer::default();
    let (mut logs, context) = weather_logs();
    logs.extend(setting_logs());

    let analysis = analyzer.analyze(&logs, &context);

    assert!(!analysis.strongest_influences.is_empty());
    assert!(analysis.strongest_influences.len() <= 3);
    for pair in analysis.strongest_influences.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
    let kinds: Vec<InfluenceKind> = analysis
        .strongest_influences
        .iter()
        .map(|i| i.kind)
        .collect();
    assert!(kinds.contains(&InfluenceKind::Location) || kinds.contains(&InfluenceKind::SocialContext));
}

#[test]
fn test_sensitivity_needs_enough_logs() {
    let analyzer = ContextualAnalyzer::default();
    assert!((analyzer.context_sensitivity(&setting_logs()) - 0.5).abs() < 1e-9);

    let score = analyzer.context_sensitivity(&early_bird_logs());
    assert!((0.1..=0.9).contains(&score));
}

#[test]
fn test_predicted_response_uses_buckets_and_archetype_table() {
    let analyzer = ContextualAnalyzer::default();
    let (logs, context) = weather_logs();
    let analysis = analyzer.analyze(&logs, &context);

    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::StressDriven;
    let predicted = ContextSample::new(plus_days(monday(), 7))
        .with_weather("rainy")
        .with_work_stress(9.0);

    let response = ContextualAnalyzer::predict_response(&dna, &analysis, &predicted);

    let change = response.expected_calories_change.unwrap();
    assert!((change - 800.0 / 600.0).abs() < 1e-9);
    assert!(response.social_calorie_multiplier.is_none());
    assert!((response.archetype_responses["overeating_risk"] - 0.8).abs() < 1e-9);
    assert!((response.archetype_responses["comfort_food_craving"] - 0.9).abs() < 1e-9);
}

#[test]
fn test_recommendations_for_current_context() {
    let analyzer = ContextualAnalyzer::default();
    let text = TextRenderer::english();
    let analysis = analyzer.analyze(&setting_logs(), &[]);
    let current = ContextSample::new(monday())
        .with_weather("cold")
        .with_social_context("Work");

    let late = analyzer.recommendations(
        &analysis,
        Some(&current),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    );

    assert!(late.len() <= 4);
    assert!(late.contains(&text.text("context.rec.cold_weather")));
    assert!(late.contains(&text.text("context.rec.work")));
}

#[test]
fn test_insights_mention_sensitive_archetypes() {
    let analyzer = ContextualAnalyzer::default();
    let text = TextRenderer::english();
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::SocialEater;

    let analysis = analyzer.analyze(&[meal(monday(), 13, 0, 500.0)], &[]);
    let insights = analyzer.insights(&analysis, &dna);

    assert!(insights.len() <= 3);
    assert!(insights.contains(&text.text("context.insight.sensitive_archetype")));
}
