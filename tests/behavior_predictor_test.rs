// ABOUTME: Integration tests for behavior prediction
// ABOUTME: Daily ranking and truncation, weekly fan-out with dated context, goal-success bounds, recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use common::{instant, meal, monday, plus_days};
use nutrition_dna::intelligence::BehaviorPredictor;
use nutrition_dna::models::{
    ContextSample, DayOfWeek, EatingArchetype, NutritionDna, OptimizationArea, OptimizationZone,
    SuccessPattern, Trigger,
};

fn trigger(name: &str, probability: f64) -> Trigger {
    Trigger {
        trigger: name.to_owned(),
        food_response: "snacking".to_owned(),
        probability,
        time_of_day: None,
    }
}

fn stressed_dna() -> NutritionDna {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::StressDriven;
    dna.confidence_score = 0.8;
    dna.temporal_patterns.late_night_eating_frequency = 0.5;
    dna.temporal_patterns.weekend_shift_hours = 2.5;
    dna.energy_patterns.morning_appetite = 0.1;
    dna.triggers = vec![
        trigger("stress_eating", 0.8),
        trigger("evening_hunger", 0.6),
        trigger("monday_compensation", 0.8),
    ];
    dna
}

#[test]
fn test_fallback_profile_predicts_nothing_on_plain_monday() {
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let predictions = BehaviorPredictor::default().predict_daily(&dna, monday(), &[], None);
    assert!(predictions.is_empty());
}

#[test]
fn test_daily_predictions_are_ranked_and_capped() {
    let wednesday = plus_days(monday(), 2);
    let context = ContextSample::new(wednesday)
        .with_weather("Rainy")
        .with_work_stress(9.0)
        .with_travel(true);

    let predictions =
        BehaviorPredictor::default().predict_daily(&stressed_dna(), wednesday, &[], Some(&context));

    assert_eq!(predictions.len(), 8);
    for pair in predictions.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    for prediction in &predictions {
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert!(!prediction.recommended_action.is_empty());
    }
    assert_eq!(predictions[0].prediction_type, "stress_induced_eating");
}

#[test]
fn test_monday_trigger_only_fires_on_monday() {
    let predictor = BehaviorPredictor::default();
    let dna = stressed_dna();

    let on_monday = predictor.predict_daily(&dna, monday(), &[], None);
    let on_thursday = predictor.predict_daily(&dna, plus_days(monday(), 3), &[], None);

    let tag = "trigger_monday_compensation";
    assert!(on_monday.iter().any(|p| p.prediction_type == tag));
    assert!(!on_thursday.iter().any(|p| p.prediction_type == tag));
    assert!(on_monday
        .iter()
        .any(|p| p.prediction_type == "monday_adjustment_difficulty"));
}

#[test]
fn test_recent_late_eating_trend_continues() {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.confidence_score = 0.7;
    let recent: Vec<_> = (0..5)
        .map(|offset| meal(plus_days(monday(), offset), 22, 30, 500.0))
        .collect();

    let predictions =
        BehaviorPredictor::default().predict_daily(&dna, plus_days(monday(), 5), &recent, None);
    assert!(predictions
        .iter()
        .any(|p| p.prediction_type == "late_eating_trend_continuation"));
}

#[test]
fn test_weekly_predictions_cover_every_day_and_match_context_by_date() {
    let wednesday = plus_days(monday(), 2);
    let context = vec![ContextSample::new(wednesday).with_travel(true)];

    let weekly = BehaviorPredictor::default().predict_weekly(&stressed_dna(), monday(), &context);

    let days: Vec<DayOfWeek> = weekly.keys().copied().collect();
    assert_eq!(days, DayOfWeek::ALL.to_vec());
    for (day, predictions) in &weekly {
        let travel = predictions
            .iter()
            .any(|p| p.prediction_type == "travel_disruption");
        assert_eq!(travel, *day == DayOfWeek::Wednesday, "{day}");
        assert!(predictions.len() <= 8);
    }
}

#[test]
fn test_weekend_warrior_weekend_and_friday_predictions() {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::WeekendWarrior;
    let predictor = BehaviorPredictor::default();

    let friday = predictor.predict_daily(&dna, plus_days(monday(), 4), &[], None);
    let saturday = predictor.predict_daily(&dna, plus_days(monday(), 5), &[], None);

    assert!(friday.iter().any(|p| p.prediction_type == "friday_reward_eating"));
    assert!(saturday.iter().any(|p| p.prediction_type == "weekend_indulgence"));
}

#[test]
fn test_goal_success_is_bounded() {
    let predictor = BehaviorPredictor::default();

    let mut weak = stressed_dna();
    weak.goal_alignment_score = 0.0;
    weak.consistency_score = 0.2;
    let low = predictor.predict_goal_success(&weak, "weight loss", 90);
    assert!((low.probability - 0.1).abs() < 1e-9);
    assert!(!low.factors.is_empty());

    let mut strong = NutritionDna::fallback(instant(2025, 3, 1, 12));
    strong.archetype = EatingArchetype::StructuredBalanced;
    strong.goal_alignment_score = 1.0;
    strong.consistency_score = 0.95;
    strong.temporal_patterns.meal_timing_consistency = 0.95;
    strong.success_patterns = vec![SuccessPattern {
        pattern: "regular_breakfast".to_owned(),
        outcome: "stable_energy".to_owned(),
        correlation: 0.9,
    }];
    let high = predictor.predict_goal_success(&strong, "Weight Loss", 7);
    assert!(high.probability <= 0.95);
    assert!(high.probability > low.probability);
}

#[test]
fn test_goal_success_grows_with_alignment() {
    let predictor = BehaviorPredictor::default();
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));

    let mut previous = 0.0;
    for step in 0..=10 {
        dna.goal_alignment_score = f64::from(step) / 10.0;
        let probability = predictor.predict_goal_success(&dna, "muscle gain", 30).probability;
        assert!(probability >= previous, "{probability} < {previous}");
        assert!((0.1..=0.95).contains(&probability));
        previous = probability;
    }
}

#[test]
fn test_short_timeframes_score_higher_than_long_ones() {
    let predictor = BehaviorPredictor::default();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));

    let short = predictor.predict_goal_success(&dna, "maintenance", 7).probability;
    let long = predictor.predict_goal_success(&dna, "maintenance", 90).probability;
    assert!(short > long);
}

#[test]
fn test_recommendations_include_archetype_tip_and_easy_win() {
    let predictor = BehaviorPredictor::default();
    let mut dna = stressed_dna();
    dna.optimization_zones = vec![OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.3)];

    let predictions = predictor.predict_daily(&dna, plus_days(monday(), 2), &[], None);
    let recommendations = predictor.recommendations(&predictions, &dna);

    assert!(recommendations.len() <= 5);
    assert!(recommendations.len() >= 2);
    let confident = predictions.iter().filter(|p| p.probability > 0.7).count().min(3);
    assert_eq!(recommendations.len(), confident + 2);
}
