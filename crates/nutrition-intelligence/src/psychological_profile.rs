// ABOUTME: Psychological eating-profile analysis: archetype cascade, social scores, triggers
// ABOUTME: Success patterns and optimization zones from fixed threshold rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Psychological Profile
//!
//! Archetype classification is an ordered decision table. Each rule is a named
//! predicate over [`ArchetypeSignals`]; rules are evaluated in table order and
//! the first match wins, with `INTUITIVE_GRAZER` as the default. The order is
//! part of the contract and is covered rule-by-rule in tests.

use crate::log_view::{self, DayStats};
use crate::statistics::StatisticalAnalyzer;
use crate::text::TextRenderer;
use nutrition_core::constants::{hours, keywords};
use nutrition_core::models::{
    DayOfWeek, EatingArchetype, FoodLogEntry, OptimizationArea, OptimizationZone,
    SocialEatingPattern, SuccessPattern, Trigger, UserProfile,
};
use nutrition_core::time::time_of_day;

/// Body weight assumed when the profile has none
const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Protein target in grams per kilogram of body weight
const PROTEIN_G_PER_KG: f64 = 1.2;
/// Daily fiber target in grams
const FIBER_TARGET_G: f64 = 25.0;
/// Weekday calorie standard deviation below which weekdays count as consistent
const WEEKDAY_STD_LIMIT: f64 = 200.0;

/// Signals the archetype cascade is evaluated over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeSignals {
    /// Share of entries in `[05:00, 11:00)`
    pub morning_ratio: f64,
    /// Share of entries in `[21:00, 24:00)`
    pub late_ratio: f64,
    /// Weekend over weekday mean calories, 1.0 without weekday calories
    pub weekend_ratio: f64,
    /// Share of entries with social keywords
    pub social_score: f64,
    /// Temporal meal-timing consistency
    pub temporal_consistency: f64,
}

/// One row of the archetype decision table
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    /// Rule name for diagnostics
    pub name: &'static str,
    /// Predicate over the signals
    pub matches: fn(&ArchetypeSignals) -> bool,
    /// Archetype assigned when the predicate holds
    pub archetype: EatingArchetype,
}

/// Ordered archetype decision table; the first matching rule wins
pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        name: "early_and_consistent",
        matches: |s| s.morning_ratio > 0.3 && s.temporal_consistency > 0.7,
        archetype: EatingArchetype::EarlyBirdPlanner,
    },
    ArchetypeRule {
        name: "no_mornings_late_evenings",
        matches: |s| s.morning_ratio < 0.1 && s.late_ratio > 0.2,
        archetype: EatingArchetype::LateStarterImpulsive,
    },
    ArchetypeRule {
        name: "consistent_and_even_week",
        matches: |s| s.temporal_consistency > 0.8 && (s.weekend_ratio - 1.0).abs() < 0.2,
        archetype: EatingArchetype::StructuredBalanced,
    },
    ArchetypeRule {
        name: "weekend_surge",
        matches: |s| s.weekend_ratio > 1.5,
        archetype: EatingArchetype::WeekendWarrior,
    },
    ArchetypeRule {
        name: "social_context",
        matches: |s| s.social_score > 0.4,
        archetype: EatingArchetype::SocialEater,
    },
    ArchetypeRule {
        name: "late_or_weekend_spikes",
        matches: |s| s.late_ratio > 0.3 || s.weekend_ratio > 1.3,
        archetype: EatingArchetype::StressDriven,
    },
    ArchetypeRule {
        name: "irregular_timing",
        matches: |s| s.temporal_consistency < 0.5,
        archetype: EatingArchetype::BusyProfessional,
    },
];

/// Analyzes psychological and social eating patterns
#[derive(Debug, Clone, Default)]
pub struct PsychologicalProfileAnalyzer {
    text: TextRenderer,
}

impl PsychologicalProfileAnalyzer {
    /// Analyzer with English text
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render insights through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Derive the cascade signals from a log batch
    #[must_use]
    pub fn signals(logs: &[FoodLogEntry], temporal_consistency: f64) -> ArchetypeSignals {
        let stats = log_view::day_stats(logs);
        let (weekday_avg, weekend_avg) = log_view::weekday_weekend_averages(&stats);

        ArchetypeSignals {
            morning_ratio: log_view::share_in_hours(
                logs,
                hours::BREAKFAST_START,
                hours::BREAKFAST_END,
            ),
            late_ratio: log_view::share_in_hours(logs, hours::LATE_NIGHT_START, 24),
            weekend_ratio: StatisticalAnalyzer::ratio_or_neutral(weekend_avg, weekday_avg),
            social_score: Self::social_score(logs),
            temporal_consistency,
        }
    }

    /// Evaluate the decision table
    #[must_use]
    pub fn classify(signals: &ArchetypeSignals) -> EatingArchetype {
        Self::matching_rule(signals).map_or(EatingArchetype::IntuitiveGrazer, |rule| rule.archetype)
    }

    /// First rule of the table that matches, if any
    #[must_use]
    pub fn matching_rule(signals: &ArchetypeSignals) -> Option<&'static ArchetypeRule> {
        ARCHETYPE_RULES.iter().find(|rule| (rule.matches)(signals))
    }

    /// Detect the archetype of a log batch
    #[must_use]
    pub fn detect_archetype(logs: &[FoodLogEntry], temporal_consistency: f64) -> EatingArchetype {
        Self::classify(&Self::signals(logs, temporal_consistency))
    }

    /// Share of entries whose metadata mentions a social keyword
    #[must_use]
    pub fn social_score(logs: &[FoodLogEntry]) -> f64 {
        Self::keyword_share(logs, keywords::SOCIAL)
    }

    /// Five independent social-eating scores
    #[must_use]
    pub fn analyze_social(logs: &[FoodLogEntry]) -> SocialEatingPattern {
        let stats = log_view::day_stats(logs);
        let (weekday_avg, weekend_avg) = log_view::weekday_weekend_averages(&stats);

        let weekend_indulgence = ((weekend_avg - weekday_avg) / weekday_avg.max(1.0)).clamp(0.0, 1.0);
        let work_stress =
            (log_view::share_in_hours(logs, hours::WORK_START, hours::WORK_END) * 2.0).min(1.0);

        let meal_hours: Vec<f64> = log_view::timed(logs)
            .iter()
            .map(|t| f64::from(t.hour()))
            .collect();
        let planning = StatisticalAnalyzer::sample_std_dev(&meal_hours)
            .map_or(0.5, |std| (1.0 - std / 12.0).max(0.0));

        SocialEatingPattern {
            weekend_indulgence_score: weekend_indulgence,
            work_stress_snacking: work_stress,
            restaurant_frequency: Self::keyword_share(logs, keywords::RESTAURANT),
            social_meal_impact: Self::social_score(logs),
            planning_score: planning,
        }
    }

    /// Rule-based behavioral triggers
    #[must_use]
    pub fn identify_triggers(logs: &[FoodLogEntry]) -> Vec<Trigger> {
        let stats = log_view::day_stats(logs);
        let mut triggers = Vec::new();

        let monday = Self::avg(&stats, DayOfWeek::Monday);
        let sunday = Self::avg(&stats, DayOfWeek::Sunday);
        if monday > 0.0 && sunday > 0.0 {
            let ratio = monday / sunday;
            if ratio > 1.2 {
                triggers.push(Trigger {
                    trigger: "monday_compensation".to_owned(),
                    food_response: "higher_calorie_intake".to_owned(),
                    probability: ((ratio - 1.0) / 0.5).min(0.8),
                    time_of_day: None,
                });
            }
        }

        let friday = Self::avg(&stats, DayOfWeek::Friday);
        let early_week: Vec<f64> = stats[..4].iter().map(|s| s.avg_calories).collect();
        let early_week_avg = StatisticalAnalyzer::mean_or(&early_week, 0.0);
        if friday > 0.0 && early_week_avg > 0.0 {
            let ratio = friday / early_week_avg;
            if ratio > 1.15 {
                triggers.push(Trigger {
                    trigger: "friday_celebration".to_owned(),
                    food_response: "increased_intake".to_owned(),
                    probability: ((ratio - 1.0) / 0.3).min(0.7),
                    time_of_day: None,
                });
            }
        }

        let late = log_view::count_in_hours(logs, hours::LATE_NIGHT_START, 24);
        if late > 0 {
            triggers.push(Trigger {
                trigger: "evening_hunger".to_owned(),
                food_response: "late_night_snacking".to_owned(),
                probability: (late as f64 / logs.len().max(1) as f64 * 3.0).min(0.9),
                time_of_day: Some(time_of_day(22, 0)),
            });
        }

        triggers
    }

    /// Patterns correlating with stable progress
    #[must_use]
    pub fn identify_success_patterns(logs: &[FoodLogEntry]) -> Vec<SuccessPattern> {
        let mut patterns = Vec::new();

        if log_view::share_in_hours(logs, 6, 10) > 0.3 {
            patterns.push(SuccessPattern {
                pattern: "regular_breakfast".to_owned(),
                outcome: "stable_energy_levels".to_owned(),
                correlation: 0.8,
            });
        }

        let meal_hours: Vec<f64> = log_view::timed(logs)
            .iter()
            .map(|t| f64::from(t.hour()))
            .collect();
        if meal_hours.len() > 3 {
            let std = StatisticalAnalyzer::sample_std_dev(&meal_hours).unwrap_or(0.0);
            let consistency = 1.0 - (std / 12.0).min(1.0);
            if consistency > 0.7 {
                patterns.push(SuccessPattern {
                    pattern: "consistent_meal_timing".to_owned(),
                    outcome: "better_appetite_control".to_owned(),
                    correlation: consistency,
                });
            }
        }

        let stats = log_view::day_stats(logs);
        let weekdays: Vec<f64> = stats[..5].iter().map(|s| s.avg_calories).collect();
        let weekday_std = StatisticalAnalyzer::sample_std_dev(&weekdays).unwrap_or(0.0);
        if weekday_std < WEEKDAY_STD_LIMIT {
            patterns.push(SuccessPattern {
                pattern: "weekday_consistency".to_owned(),
                outcome: "steady_progress".to_owned(),
                correlation: 0.75,
            });
        }

        patterns
    }

    /// Behavior gaps against fixed nutritional targets
    #[must_use]
    pub fn identify_optimization_zones(
        logs: &[FoodLogEntry],
        profile: &UserProfile,
    ) -> Vec<OptimizationZone> {
        let days = log_view::distinct_days(logs) as f64;
        let with_macros = logs.iter().filter(|entry| entry.macros.is_some());
        let (protein, fiber) = with_macros.fold((0.0, 0.0), |(protein, fiber), entry| {
            (protein + entry.protein(), fiber + entry.fiber())
        });

        let mut zones = Vec::new();

        let weight = profile.weight_kg.filter(|w| *w > 0.0).unwrap_or(DEFAULT_WEIGHT_KG);
        let protein_score = (protein / days / (weight * PROTEIN_G_PER_KG)).min(1.0);
        if protein_score < 0.8 {
            zones.push(OptimizationZone::for_area(
                OptimizationArea::ProteinIntake,
                protein_score,
            ));
        }

        let fiber_score = (fiber / days / FIBER_TARGET_G).min(1.0);
        if fiber_score < 0.6 {
            zones.push(OptimizationZone::for_area(
                OptimizationArea::FiberIntake,
                fiber_score,
            ));
        }

        let late = log_view::share_in_hours(logs, hours::LATE_NIGHT_START, 24);
        if late > 0.3 {
            zones.push(OptimizationZone::for_area(
                OptimizationArea::MealTiming,
                1.0 - late,
            ));
        }

        let (weekday_avg, weekend_avg) =
            log_view::weekday_weekend_averages(&log_view::day_stats(logs));
        let weekend_consistency =
            1.0 - ((weekend_avg - weekday_avg).abs() / weekday_avg.max(1.0)).min(1.0);
        if weekend_consistency < 0.7 {
            zones.push(OptimizationZone::for_area(
                OptimizationArea::WeekendConsistency,
                weekend_consistency,
            ));
        }

        zones
    }

    /// Observations about an archetype and its social scores
    #[must_use]
    pub fn insights(&self, archetype: EatingArchetype, social: &SocialEatingPattern) -> Vec<String> {
        let mut insights = Vec::new();

        let archetype_key = match archetype {
            EatingArchetype::EarlyBirdPlanner => Some("psych.early_bird"),
            EatingArchetype::LateStarterImpulsive => Some("psych.late_starter"),
            EatingArchetype::StressDriven => Some("psych.stress_driven"),
            EatingArchetype::SocialEater => Some("psych.social_eater"),
            EatingArchetype::WeekendWarrior => Some("psych.weekend_warrior"),
            EatingArchetype::StructuredBalanced
            | EatingArchetype::IntuitiveGrazer
            | EatingArchetype::BusyProfessional => None,
        };
        if let Some(key) = archetype_key {
            insights.push(self.text.text(key));
        }

        if social.weekend_indulgence_score > 0.3 {
            insights.push(self.text.text("psych.weekend_indulgence"));
        }
        if social.work_stress_snacking > 0.4 {
            insights.push(self.text.text("psych.work_snacking"));
        }
        if social.planning_score < 0.5 {
            insights.push(self.text.text("psych.low_planning"));
        }

        insights
    }

    fn avg(stats: &[DayStats; 7], day: DayOfWeek) -> f64 {
        stats[day.index()].avg_calories
    }

    fn keyword_share(logs: &[FoodLogEntry], words: &[&str]) -> f64 {
        let hits = logs
            .iter()
            .filter(|entry| keywords::contains_any(&entry.metadata_text(), words))
            .count();
        hits as f64 / logs.len().max(1) as f64
    }
}
