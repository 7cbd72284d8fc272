// ABOUTME: Integration tests for the psychological profile analyzer
// ABOUTME: Archetype decision table rule-by-rule, social scores, triggers, success patterns, zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use common::{early_bird_logs, late_night_logs, meal, monday, plus_days, weekend_warrior_logs};
use nutrition_dna::intelligence::psychological_profile::{ArchetypeSignals, ARCHETYPE_RULES};
use nutrition_dna::intelligence::PsychologicalProfileAnalyzer;
use nutrition_dna::models::{
    EatingArchetype, FoodLogEntry, Macros, OptimizationArea, SocialEatingPattern, UserProfile,
};

fn signals() -> ArchetypeSignals {
    ArchetypeSignals {
        morning_ratio: 0.2,
        late_ratio: 0.1,
        weekend_ratio: 1.0,
        social_score: 0.1,
        temporal_consistency: 0.6,
    }
}

#[test]
fn test_rule_table_order_is_stable() {
    let names: Vec<&str> = ARCHETYPE_RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        vec![
            "early_and_consistent",
            "no_mornings_late_evenings",
            "consistent_and_even_week",
            "weekend_surge",
            "social_context",
            "late_or_weekend_spikes",
            "irregular_timing",
        ]
    );
}

#[test]
fn test_each_rule_in_isolation() {
    let cases = [
        (
            ArchetypeSignals {
                morning_ratio: 0.4,
                temporal_consistency: 0.75,
                ..signals()
            },
            EatingArchetype::EarlyBirdPlanner,
        ),
        (
            ArchetypeSignals {
                morning_ratio: 0.05,
                late_ratio: 0.25,
                ..signals()
            },
            EatingArchetype::LateStarterImpulsive,
        ),
        (
            ArchetypeSignals {
                temporal_consistency: 0.85,
                weekend_ratio: 1.1,
                ..signals()
            },
            EatingArchetype::StructuredBalanced,
        ),
        (
            ArchetypeSignals {
                weekend_ratio: 1.6,
                ..signals()
            },
            EatingArchetype::WeekendWarrior,
        ),
        (
            ArchetypeSignals {
                social_score: 0.5,
                ..signals()
            },
            EatingArchetype::SocialEater,
        ),
        (
            ArchetypeSignals {
                weekend_ratio: 1.4,
                ..signals()
            },
            EatingArchetype::StressDriven,
        ),
        (
            ArchetypeSignals {
                temporal_consistency: 0.4,
                ..signals()
            },
            EatingArchetype::BusyProfessional,
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(PsychologicalProfileAnalyzer::classify(&input), expected, "{input:?}");
    }
}

#[test]
fn test_default_is_intuitive_grazer() {
    assert!(PsychologicalProfileAnalyzer::matching_rule(&signals()).is_none());
    assert_eq!(
        PsychologicalProfileAnalyzer::classify(&signals()),
        EatingArchetype::IntuitiveGrazer
    );
}

#[test]
fn test_earlier_rule_wins_on_overlap() {
    let both = ArchetypeSignals {
        morning_ratio: 0.5,
        temporal_consistency: 0.9,
        weekend_ratio: 1.0,
        ..signals()
    };
    let rule = PsychologicalProfileAnalyzer::matching_rule(&both).unwrap();
    assert_eq!(rule.name, "early_and_consistent");
}

#[test]
fn test_weekend_surge_beats_social_signal() {
    let both = ArchetypeSignals {
        weekend_ratio: 1.7,
        social_score: 0.9,
        ..signals()
    };
    assert_eq!(
        PsychologicalProfileAnalyzer::classify(&both),
        EatingArchetype::WeekendWarrior
    );
}

#[test]
fn test_classification_is_deterministic() {
    let logs = late_night_logs();
    let first = PsychologicalProfileAnalyzer::detect_archetype(&logs, 0.6);
    for _ in 0..10 {
        assert_eq!(PsychologicalProfileAnalyzer::detect_archetype(&logs, 0.6), first);
    }
}

#[test]
fn test_early_bird_logs_classify_as_early_bird() {
    assert_eq!(
        PsychologicalProfileAnalyzer::detect_archetype(&early_bird_logs(), 0.95),
        EatingArchetype::EarlyBirdPlanner
    );
}

#[test]
fn test_weekend_warrior_signals() {
    let logs = weekend_warrior_logs();
    let signals = PsychologicalProfileAnalyzer::signals(&logs, 1.0);
    assert!((signals.weekend_ratio - 1.8).abs() < 1e-9);

    let social = PsychologicalProfileAnalyzer::analyze_social(&logs);
    assert!(social.weekend_indulgence_score > 0.4);
}

#[test]
fn test_social_score_uses_metadata_keywords() {
    let day = monday();
    let logs = vec![
        meal(day, 13, 0, 600.0).with_metadata("place", "Restaurant with friends"),
        meal(day, 19, 0, 600.0).with_metadata("place", "home"),
        meal(day, 8, 0, 300.0),
        meal(day, 16, 0, 200.0).with_metadata("note", "cafe"),
    ];

    assert!((PsychologicalProfileAnalyzer::social_score(&logs) - 0.5).abs() < 1e-9);
    let social = PsychologicalProfileAnalyzer::analyze_social(&logs);
    assert!((social.restaurant_frequency - 0.5).abs() < 1e-9);
}

#[test]
fn test_social_scores_stay_in_unit_range() {
    for logs in [early_bird_logs(), late_night_logs(), weekend_warrior_logs(), Vec::new()] {
        let social = PsychologicalProfileAnalyzer::analyze_social(&logs);
        for score in [
            social.weekend_indulgence_score,
            social.work_stress_snacking,
            social.restaurant_frequency,
            social.social_meal_impact,
            social.planning_score,
        ] {
            assert!((0.0..=1.0).contains(&score), "{score}");
        }
    }
}

#[test]
fn test_evening_hunger_trigger_for_late_eaters() {
    let triggers = PsychologicalProfileAnalyzer::identify_triggers(&late_night_logs());
    let evening = triggers
        .iter()
        .find(|t| t.trigger == "evening_hunger")
        .unwrap();
    assert!(evening.probability >= 0.3);
    assert!(evening.probability <= 0.9);
    assert_eq!(evening.food_response, "late_night_snacking");
}

#[test]
fn test_monday_compensation_trigger() {
    let sunday = plus_days(monday(), 6);
    let next_monday = plus_days(monday(), 7);
    let logs = vec![meal(sunday, 13, 0, 500.0), meal(next_monday, 13, 0, 800.0)];

    let triggers = PsychologicalProfileAnalyzer::identify_triggers(&logs);
    let monday_trigger = triggers
        .iter()
        .find(|t| t.trigger == "monday_compensation")
        .unwrap();
    assert!((monday_trigger.probability - 0.8).abs() < 1e-9);
}

#[test]
fn test_no_triggers_without_data() {
    assert!(PsychologicalProfileAnalyzer::identify_triggers(&[]).is_empty());
}

#[test]
fn test_regular_breakfast_success_pattern() {
    let patterns = PsychologicalProfileAnalyzer::identify_success_patterns(&early_bird_logs());
    let names: Vec<&str> = patterns.iter().map(|p| p.pattern.as_str()).collect();
    assert!(names.contains(&"regular_breakfast"));
    assert!(names.contains(&"consistent_meal_timing"));
}

#[test]
fn test_optimization_zones_for_low_protein_and_fiber() {
    let logs: Vec<FoodLogEntry> = (0..7)
        .map(|offset| {
            FoodLogEntry::new(
                format!("{}T13:00:00", plus_days(monday(), offset)),
                Some(Macros::new(1800.0, 30.0, 60.0, 250.0).with_fiber(5.0)),
            )
        })
        .collect();
    let profile = UserProfile {
        weight_kg: Some(80.0),
        ..UserProfile::default()
    };

    let zones = PsychologicalProfileAnalyzer::identify_optimization_zones(&logs, &profile);
    let areas: Vec<OptimizationArea> = zones.iter().map(|z| z.area).collect();
    assert!(areas.contains(&OptimizationArea::ProteinIntake));
    assert!(areas.contains(&OptimizationArea::FiberIntake));
    assert!(!areas.contains(&OptimizationArea::MealTiming));

    for zone in &zones {
        assert!((0.0..=1.0).contains(&zone.current_score));
        assert!(zone.current_score <= zone.target_score);
    }
}

#[test]
fn test_meal_timing_zone_for_late_eaters() {
    let zones = PsychologicalProfileAnalyzer::identify_optimization_zones(
        &late_night_logs(),
        &UserProfile::default(),
    );
    assert!(zones.iter().any(|z| z.area == OptimizationArea::MealTiming));
}

#[test]
fn test_insights_for_archetype_and_social_scores() {
    let analyzer = PsychologicalProfileAnalyzer::new();
    let social = SocialEatingPattern {
        weekend_indulgence_score: 0.5,
        work_stress_snacking: 0.5,
        restaurant_frequency: 0.1,
        social_meal_impact: 0.1,
        planning_score: 0.3,
    };

    let insights = analyzer.insights(EatingArchetype::StressDriven, &social);
    assert_eq!(insights.len(), 4);

    let calm = SocialEatingPattern {
        weekend_indulgence_score: 0.0,
        work_stress_snacking: 0.0,
        planning_score: 0.9,
        ..social
    };
    assert!(analyzer
        .insights(EatingArchetype::StructuredBalanced, &calm)
        .is_empty());
}
