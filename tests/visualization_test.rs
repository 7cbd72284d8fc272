// ABOUTME: Integration tests for chart payloads and the full visualization report
// ABOUTME: Score bands, risk dashboard counts, zone priority order, progress timeline window, report assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use chrono::NaiveDateTime;
use common::{early_bird_logs, fixed_clock, instant, monday};
use nutrition_dna::intelligence::visualization::{
    overall_risk_score, ReportComponent, RiskLevel, ScoreBand,
};
use nutrition_dna::intelligence::{NutritionVisualizer, PersonalizedInsightsEngine};
use nutrition_dna::models::{
    NutritionDna, OptimizationArea, OptimizationZone, PredictionResult,
};

fn reference() -> NaiveDateTime {
    instant(2025, 3, 31, 0).naive_utc()
}

fn prediction(probability: f64) -> PredictionResult {
    PredictionResult::new("late_night_snacking", probability, 0.5, "Plan a light dinner")
}

#[test]
fn test_score_band_boundaries() {
    assert_eq!(ScoreBand::of(0.8), ScoreBand::Excellent);
    assert_eq!(ScoreBand::of(0.6), ScoreBand::Good);
    assert_eq!(ScoreBand::of(0.4), ScoreBand::Fair);
    assert_eq!(ScoreBand::of(0.39), ScoreBand::NeedsImprovement);
}

#[test]
fn test_predictions_dashboard_counts_and_cards() {
    let predictions: Vec<PredictionResult> = [0.9, 0.8, 0.5, 0.5, 0.5, 0.5, 0.2]
        .into_iter()
        .map(prediction)
        .collect();

    let dashboard = NutritionVisualizer::new().predictions_dashboard(&predictions);

    assert_eq!(dashboard.summary.high_risk_count, 2);
    assert_eq!(dashboard.summary.medium_risk_count, 4);
    assert_eq!(dashboard.summary.low_risk_count, 1);
    assert_eq!(dashboard.prediction_cards.len(), 5);
    assert_eq!(dashboard.prediction_cards[0].risk_level, RiskLevel::High);
    assert!((dashboard.overall_risk_score - overall_risk_score(&predictions)).abs() < 1e-12);
    assert!((overall_risk_score(&predictions) - 3.9 * 0.5 / 7.0).abs() < 1e-9);
    assert!(overall_risk_score(&[]).abs() < 1e-12);
}

#[test]
fn test_zone_cards_sorted_by_priority() {
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.optimization_zones = vec![
        OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.2),
        OptimizationZone::for_area(OptimizationArea::ProteinIntake, 0.3),
    ];

    let chart = NutritionVisualizer::new().optimization_zones_chart(&dna);

    assert_eq!(chart.total_zones, 2);
    assert_eq!(chart.easy_wins, 1);
    assert_eq!(chart.optimization_cards[0].area, "Protein intake");
    assert!((chart.optimization_cards[0].priority - 0.48).abs() < 1e-9);
    assert!((chart.optimization_cards[1].improvement_needed - 60.0).abs() < 1e-9);
}

#[test]
fn test_progress_timeline_keeps_last_fourteen_active_days() {
    let timeline = NutritionVisualizer::new().progress_timeline(&early_bird_logs(), 30, reference());

    assert!(timeline.message.is_none());
    assert_eq!(timeline.timeline.len(), 14);
    assert_eq!(timeline.summary.active_days, 14);
    for pair in timeline.timeline.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    for point in &timeline.timeline {
        assert!((0.0..=1.0).contains(&point.quality_score));
    }
}

#[test]
fn test_progress_timeline_without_recent_data() {
    let far_future = instant(2026, 1, 1, 0).naive_utc();
    let timeline = NutritionVisualizer::new().progress_timeline(&early_bird_logs(), 30, far_future);

    assert!(timeline.message.is_some());
    assert!(timeline.timeline.is_empty());
    assert_eq!(timeline.summary.total_analyses, 0);
}

#[test]
fn test_social_radar_inverts_risk_axes() {
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let radar = NutritionVisualizer::new().social_patterns_radar(&dna);

    assert_eq!(radar.radar_data.len(), 5);
    assert!((radar.radar_data[0].value - 0.4).abs() < 1e-9);
    assert!((radar.radar_data[1].value - 0.7).abs() < 1e-9);
    assert_eq!(radar.insights.len(), 3);
}

#[test]
fn test_temporal_chart_spans_the_waking_day() {
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let chart = NutritionVisualizer::new().temporal_patterns_chart(&dna);

    assert_eq!(chart.time_pattern.len(), 17);
    assert_eq!(chart.time_pattern[0].hour, 6);
    assert_eq!(chart.meal_times.breakfast, "08:00");
    assert!(chart.time_pattern.iter().all(|p| p.energy_level <= 1.0));
}

#[test]
fn test_report_sections_follow_inputs() {
    let visualizer = NutritionVisualizer::new().with_clock(fixed_clock(instant(2025, 3, 31, 0)));
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));

    let minimal = visualizer.report(&dna, &early_bird_logs(), None, &[]);
    assert_eq!(minimal.components.len(), 5);
    assert_eq!(minimal.summary.total_components, 5);
    assert_eq!(minimal.generated_at, instant(2025, 3, 31, 0));
    assert!(matches!(minimal.components[0], ReportComponent::DnaSummaryCard(_)));

    let weekly = PersonalizedInsightsEngine::default().weekly_insights(&dna, monday(), &[]);
    let full = visualizer.report(&dna, &early_bird_logs(), Some(&weekly), &[prediction(0.8)]);
    assert_eq!(full.components.len(), 7);
    assert!(matches!(
        full.components.last(),
        Some(ReportComponent::PredictionsDashboard(_))
    ));
    assert!((full.summary.overall_score - 0.5).abs() < 1e-9);
}
