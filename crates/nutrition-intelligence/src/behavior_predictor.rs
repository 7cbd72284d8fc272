// ABOUTME: Ranked near-term behavior predictions pooled from temporal, archetype, trigger, recent, and context sources
// ABOUTME: Also estimates the probability of reaching a nutrition goal within a timeframe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Behavior Predictor
//!
//! Each source emits zero or more [`PredictionResult`]s independently. All
//! candidates are pooled, sorted by `probability * confidence` descending and
//! truncated; there is no cross-source de-duplication.

use crate::config::intelligence::PredictionConfig;
use crate::goal::GoalKind;
use crate::log_view;
use crate::statistics::StatisticalAnalyzer;
use crate::text::TextRenderer;
use chrono::{Days, NaiveDate};
use nutrition_core::constants::hours;
use nutrition_core::models::{
    ContextSample, DayOfWeek, Difficulty, EatingArchetype, FoodLogEntry, NutritionDna,
    PredictionResult,
};
use nutrition_core::time::time_of_day;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Outcome of a goal-success estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSuccess {
    /// Probability of reaching the goal
    pub probability: f64,
    /// Success factors followed by risk factors
    pub factors: Vec<String>,
}

/// Success multiplier applied per archetype
#[must_use]
pub const fn archetype_success_modifier(archetype: EatingArchetype) -> f64 {
    match archetype {
        EatingArchetype::EarlyBirdPlanner => 0.8,
        EatingArchetype::StructuredBalanced => 0.85,
        EatingArchetype::LateStarterImpulsive | EatingArchetype::BusyProfessional => 0.4,
        EatingArchetype::StressDriven | EatingArchetype::WeekendWarrior => 0.5,
        EatingArchetype::SocialEater => 0.6,
        EatingArchetype::IntuitiveGrazer => 0.7,
    }
}

/// Predicts near-term eating behavior
#[derive(Debug, Clone, Default)]
pub struct BehaviorPredictor {
    config: PredictionConfig,
    text: TextRenderer,
}

impl BehaviorPredictor {
    /// Predictor with the given limits and English text
    #[must_use]
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            text: TextRenderer::default(),
        }
    }

    /// Render actions through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Ranked predictions for `date`
    #[must_use]
    pub fn predict_daily(
        &self,
        dna: &NutritionDna,
        date: NaiveDate,
        recent_logs: &[FoodLogEntry],
        context: Option<&ContextSample>,
    ) -> Vec<PredictionResult> {
        let day = DayOfWeek::of(date);

        let mut predictions = self.temporal_predictions(dna, day);
        predictions.extend(self.archetype_predictions(dna.archetype, day));
        predictions.extend(self.trigger_predictions(dna, day));
        predictions.extend(self.recent_predictions(recent_logs, day));
        if let Some(context) = context {
            predictions.extend(self.context_predictions(dna, context));
        }

        predictions.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        predictions.truncate(self.config.max_predictions);

        debug!(
            %date,
            %day,
            predictions = predictions.len(),
            "Predicted daily behavior"
        );
        predictions
    }

    /// Daily predictions for the seven days starting at `week_start`
    ///
    /// Context samples are matched to days by date; recent logs are not used.
    #[must_use]
    pub fn predict_weekly(
        &self,
        dna: &NutritionDna,
        week_start: NaiveDate,
        weekly_context: &[ContextSample],
    ) -> BTreeMap<DayOfWeek, Vec<PredictionResult>> {
        (0..7u64)
            .filter_map(|offset| week_start.checked_add_days(Days::new(offset)))
            .map(|date| {
                let context = weekly_context.iter().find(|sample| sample.date == date);
                (
                    DayOfWeek::of(date),
                    self.predict_daily(dna, date, &[], context),
                )
            })
            .collect()
    }

    /// Probability of reaching `goal` within `timeframe_days`
    #[must_use]
    pub fn predict_goal_success(
        &self,
        dna: &NutritionDna,
        goal: &str,
        timeframe_days: u32,
    ) -> GoalSuccess {
        let mut success = Vec::new();
        let mut risks = Vec::new();
        let mut probability = dna.goal_alignment_score;

        let temporal = &dna.temporal_patterns;
        match GoalKind::parse(goal) {
            GoalKind::WeightLoss => {
                if temporal.meal_timing_consistency > 0.7 {
                    success.push(self.text.text("goal.factor.stable_schedule"));
                    probability += 0.1;
                }
                if temporal.late_night_eating_frequency > 0.4 {
                    risks.push(self.text.text("goal.factor.frequent_late_eating"));
                    probability -= 0.15;
                }
                if dna.social_patterns.weekend_indulgence_score > 0.5 {
                    risks.push(self.text.text("goal.factor.weekend_deviation"));
                    probability -= 0.1;
                }
            }
            GoalKind::MuscleGain => {
                if dna.energy_patterns.morning_appetite > 0.5 {
                    success.push(self.text.text("goal.factor.morning_appetite"));
                    probability += 0.1;
                }
                if dna.consistency_score > 0.8 {
                    success.push(self.text.text("goal.factor.high_consistency"));
                    probability += 0.15;
                }
            }
            GoalKind::Other => {}
        }

        if dna.consistency_score > 0.8 {
            success.push(self.text.text("goal.factor.excellent_consistency"));
        } else if dna.consistency_score < 0.4 {
            risks.push(self.text.text("goal.factor.unstable_schedule"));
        }

        let strong_patterns = dna
            .success_patterns
            .iter()
            .filter(|p| p.correlation > 0.7)
            .count();
        if strong_patterns > 0 {
            success.push(self.text.render(
                "goal.factor.strong_patterns",
                &[("count", strong_patterns.to_string())],
            ));
            probability += strong_patterns as f64 * 0.05;
        }

        let risky_triggers = dna.triggers.iter().filter(|t| t.probability > 0.7).count();
        if risky_triggers > 0 {
            risks.push(self.text.render(
                "goal.factor.strong_triggers",
                &[("count", risky_triggers.to_string())],
            ));
            probability -= risky_triggers as f64 * 0.03;
        }

        probability *= archetype_success_modifier(dna.archetype);
        if timeframe_days > self.config.long_timeframe_days {
            probability *= 0.9;
        } else if timeframe_days < self.config.short_timeframe_days {
            probability *= 1.1;
        }

        success.extend(risks);
        GoalSuccess {
            probability: probability.clamp(
                self.config.min_success_probability,
                self.config.max_success_probability,
            ),
            factors: success,
        }
    }

    /// Actionable advice derived from predictions
    #[must_use]
    pub fn recommendations(
        &self,
        predictions: &[PredictionResult],
        dna: &NutritionDna,
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = predictions
            .iter()
            .filter(|p| p.probability > 0.7)
            .take(3)
            .map(|p| p.recommended_action.clone())
            .collect();

        let tip = match dna.archetype {
            EatingArchetype::StressDriven => Some("predict.tip.stress_driven"),
            EatingArchetype::SocialEater => Some("predict.tip.social_eater"),
            EatingArchetype::WeekendWarrior => Some("predict.tip.weekend_warrior"),
            _ => None,
        };
        if let Some(key) = tip {
            recommendations.push(self.text.text(key));
        }

        if let Some(zone) = dna
            .optimization_zones
            .iter()
            .find(|zone| zone.difficulty == Difficulty::EasyWins)
        {
            let area = self.text.text(&format!("area.{}", zone.area));
            recommendations.push(self.text.render("predict.tip.easy_win", &[("area", area)]));
        }

        recommendations.truncate(self.config.max_recommendations);
        recommendations
    }

    fn temporal_predictions(&self, dna: &NutritionDna, day: DayOfWeek) -> Vec<PredictionResult> {
        let temporal = &dna.temporal_patterns;
        let mut predictions = Vec::new();

        if temporal.late_night_eating_frequency > 0.3 {
            let boost = if matches!(
                day,
                DayOfWeek::Friday | DayOfWeek::Saturday | DayOfWeek::Sunday
            ) {
                1.3
            } else {
                1.0
            };
            predictions.push(
                self.prediction(
                    "late_night_snacking",
                    (temporal.late_night_eating_frequency * boost).min(0.95),
                    0.8,
                )
                .at(time_of_day(20, 30)),
            );
        }

        if dna.energy_patterns.morning_appetite < 0.3 && !day.is_weekend() {
            predictions.push(
                self.prediction(
                    "breakfast_skip",
                    1.0 - dna.energy_patterns.morning_appetite,
                    0.7,
                )
                .at(temporal.preferred_breakfast_time),
            );
        }

        if temporal.weekend_shift_hours > 2.0 && day.is_weekend() {
            predictions.push(self.prediction(
                "weekend_routine_disruption",
                (temporal.weekend_shift_hours / 4.0).min(0.9),
                0.6,
            ));
        }

        if day == DayOfWeek::Monday && temporal.weekend_shift_hours > 1.5 {
            predictions.push(self.prediction(
                "monday_adjustment_difficulty",
                (temporal.weekend_shift_hours / 3.0).min(0.8),
                0.7,
            ));
        }

        predictions
    }

    fn archetype_predictions(
        &self,
        archetype: EatingArchetype,
        day: DayOfWeek,
    ) -> Vec<PredictionResult> {
        let mut predictions = Vec::new();
        match archetype {
            EatingArchetype::StressDriven => {
                if day.is_midweek() {
                    predictions.push(
                        self.prediction("stress_induced_eating", 0.8 * 1.2, 0.8)
                            .at(time_of_day(15, 0)),
                    );
                }
                predictions.push(self.prediction("comfort_food_craving", 0.7, 0.7));
            }
            EatingArchetype::WeekendWarrior => {
                if day.is_weekend() {
                    predictions.push(self.prediction("weekend_indulgence", 0.8, 0.8));
                } else if day == DayOfWeek::Friday {
                    predictions.push(self.prediction("friday_reward_eating", 0.6, 0.7));
                }
            }
            EatingArchetype::SocialEater if day.is_weekend() => {
                predictions.push(self.prediction("social_dining_excess", 0.7, 0.6));
            }
            EatingArchetype::BusyProfessional if !day.is_weekend() => {
                predictions.push(
                    self.prediction("meal_skipping", 0.7, 0.8)
                        .at(time_of_day(13, 0)),
                );
            }
            EatingArchetype::LateStarterImpulsive => {
                predictions.push(self.prediction("impulse_food_purchase", 0.8, 0.7));
            }
            _ => {}
        }
        predictions
    }

    fn trigger_predictions(&self, dna: &NutritionDna, day: DayOfWeek) -> Vec<PredictionResult> {
        let mut predictions = Vec::new();
        let threshold = self.config.trigger_probability_threshold;

        for trigger in dna.triggers.iter().filter(|t| t.probability > threshold) {
            let name = trigger.trigger.to_lowercase();
            let response = [("response", trigger.food_response.clone())];

            if name.contains("monday") && day == DayOfWeek::Monday {
                predictions.push(PredictionResult::new(
                    format!("trigger_{}", trigger.trigger),
                    trigger.probability,
                    0.8,
                    self.text.render("predict.action.monday_trigger", &response),
                ));
            } else if name.contains("friday") && day == DayOfWeek::Friday {
                predictions.push(PredictionResult::new(
                    format!("trigger_{}", trigger.trigger),
                    trigger.probability,
                    0.8,
                    self.text.render("predict.action.friday_trigger", &response),
                ));
            } else if name.contains("stress") {
                let boost = if day.is_midweek() { 1.3 } else { 1.0 };
                predictions.push(self.prediction(
                    "stress_trigger_activation",
                    (trigger.probability * boost).min(0.95),
                    0.7,
                ));
            } else if name.contains("evening") {
                predictions.push(
                    self.prediction("evening_trigger", trigger.probability, 0.8)
                        .at(trigger.time_of_day.unwrap_or_else(|| time_of_day(20, 0))),
                );
            }
        }

        predictions
    }

    fn recent_predictions(&self, recent: &[FoodLogEntry], day: DayOfWeek) -> Vec<PredictionResult> {
        let mut predictions = Vec::new();
        if recent.len() < self.config.min_recent_logs {
            return predictions;
        }

        let timed = log_view::timed(recent);
        let same_day: Vec<_> = timed.iter().filter(|t| t.day() == day).collect();
        if same_day.len() >= 2 {
            let hours: Vec<f64> = same_day.iter().map(|t| f64::from(t.hour())).collect();
            let calories: Vec<f64> = same_day
                .iter()
                .map(|t| t.calories())
                .filter(|c| *c > 0.0)
                .collect();
            let avg_hour = StatisticalAnalyzer::mean_or(&hours, 0.0);

            if avg_hour >= 20.0 {
                predictions.push(PredictionResult::new(
                    "same_day_late_eating",
                    0.7,
                    0.6,
                    self.text.render(
                        "predict.action.same_day_late_eating",
                        &[("hour", format!("{avg_hour:.0}"))],
                    ),
                ));
            }
            if StatisticalAnalyzer::mean_or(&calories, 0.0) > 600.0 {
                predictions.push(self.prediction("same_day_high_intake", 0.6, 0.5));
            }
        }

        let late = timed
            .iter()
            .filter(|t| t.hour() >= hours::LATE_NIGHT_START)
            .count();
        let days: HashSet<_> = timed.iter().map(|t| t.date()).collect();
        let trend = late as f64 / days.len().max(1) as f64;
        if trend > 0.4 {
            predictions.push(self.prediction("late_eating_trend_continuation", trend, 0.7));
        }

        predictions
    }

    fn context_predictions(&self, dna: &NutritionDna, context: &ContextSample) -> Vec<PredictionResult> {
        let mut predictions = Vec::new();

        let weather = context.weather_tag();
        if weather.contains("rain") || weather.contains("cold") {
            predictions.push(self.prediction(
                "weather_comfort_eating",
                (dna.energy_patterns.evening_comfort_eating * 1.4).min(0.9),
                0.5,
            ));
        }

        if context.work_stress_level.is_some_and(|level| level > 7.0) {
            predictions.push(self.prediction(
                "high_stress_eating",
                (dna.social_patterns.work_stress_snacking * 1.5).min(0.95),
                0.8,
            ));
        }

        if context.social_plans && dna.archetype == EatingArchetype::SocialEater {
            predictions.push(self.prediction(
                "social_eating_excess",
                dna.social_patterns.social_meal_impact,
                0.7,
            ));
        }

        if context.travel {
            predictions.push(self.prediction("travel_disruption", 0.8, 0.6));
        }

        predictions
    }

    /// Prediction whose action text is keyed by its event tag
    fn prediction(&self, event: &str, probability: f64, confidence: f64) -> PredictionResult {
        PredictionResult::new(
            event,
            probability,
            confidence,
            self.text.text(&format!("predict.action.{event}")),
        )
    }
}
