// ABOUTME: Personalized daily and weekly narrative insights derived from a Nutrition DNA
// ABOUTME: Combines archetype-by-weekday lookups, temporal and trigger rules, recent deviations, and energy patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! Insight generation for the weekly planning flow

use crate::config::intelligence::InsightConfig;
use crate::log_view;
use crate::text::TextRenderer;
use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use nutrition_core::constants::hours;
use nutrition_core::models::{
    DayOfWeek, Difficulty, EatingArchetype, FoodLogEntry, NutritionDna, OptimizationArea,
    WeeklyInsight,
};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Archetypes with a dedicated insight for a weekday
const ARCHETYPE_DAY_INSIGHTS: &[(EatingArchetype, DayOfWeek)] = &[
    (EatingArchetype::EarlyBirdPlanner, DayOfWeek::Monday),
    (EatingArchetype::EarlyBirdPlanner, DayOfWeek::Friday),
    (EatingArchetype::EarlyBirdPlanner, DayOfWeek::Sunday),
    (EatingArchetype::LateStarterImpulsive, DayOfWeek::Monday),
    (EatingArchetype::LateStarterImpulsive, DayOfWeek::Thursday),
    (EatingArchetype::LateStarterImpulsive, DayOfWeek::Saturday),
    (EatingArchetype::StressDriven, DayOfWeek::Monday),
    (EatingArchetype::StressDriven, DayOfWeek::Wednesday),
    (EatingArchetype::StressDriven, DayOfWeek::Friday),
    (EatingArchetype::SocialEater, DayOfWeek::Friday),
    (EatingArchetype::SocialEater, DayOfWeek::Saturday),
    (EatingArchetype::SocialEater, DayOfWeek::Sunday),
    (EatingArchetype::WeekendWarrior, DayOfWeek::Monday),
    (EatingArchetype::WeekendWarrior, DayOfWeek::Friday),
    (EatingArchetype::WeekendWarrior, DayOfWeek::Saturday),
];

/// Triggers at or below this probability produce no insight
const TRIGGER_INSIGHT_THRESHOLD: f64 = 0.6;
/// Per-meal calories below which recent meals count as small
const LOW_MEAL_CALORIES: f64 = 300.0;
/// Per-meal calories above which recent meals count as large
const HIGH_MEAL_CALORIES: f64 = 800.0;

/// Generates personalized narrative insights
#[derive(Debug, Clone, Default)]
pub struct PersonalizedInsightsEngine {
    config: InsightConfig,
    text: TextRenderer,
}

impl PersonalizedInsightsEngine {
    /// Engine with the given limits and English text
    #[must_use]
    pub fn new(config: InsightConfig) -> Self {
        Self {
            config,
            text: TextRenderer::default(),
        }
    }

    /// Render insights through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Up to five ordered insights for `date`
    #[must_use]
    pub fn daily_insights(
        &self,
        dna: &NutritionDna,
        date: NaiveDate,
        recent_logs: &[FoodLogEntry],
    ) -> Vec<String> {
        let day = DayOfWeek::of(date);

        let mut insights = self.archetype_day_insight(dna.archetype, day);
        insights.extend(self.temporal_insights(dna, day));
        insights.extend(self.trigger_insights(dna, day));
        if !recent_logs.is_empty() {
            insights.extend(self.recent_insights(dna, date, recent_logs));
        }
        insights.extend(self.energy_insights(dna, day));

        insights.truncate(self.config.max_daily_insights);
        insights
    }

    /// Narrative aggregate for the week starting at `week_start`
    #[must_use]
    pub fn weekly_insights(
        &self,
        dna: &NutritionDna,
        week_start: NaiveDate,
        week_logs: &[FoodLogEntry],
    ) -> WeeklyInsight {
        let day_insights: BTreeMap<DayOfWeek, String> = (0..7u64)
            .filter_map(|offset| week_start.checked_add_days(Days::new(offset)))
            .filter_map(|date| {
                self.daily_insights(dna, date, week_logs)
                    .into_iter()
                    .next()
                    .map(|insight| (DayOfWeek::of(date), insight))
            })
            .collect();

        let weekly = WeeklyInsight {
            week_start,
            day_insights,
            observed_patterns: self.observed_patterns(dna),
            micro_goals: self.micro_goals(dna),
            risk_days: self.risk_days(dna),
            opportunity_moments: self.opportunity_moments(dna),
        };
        debug!(
            %week_start,
            days = weekly.day_insights.len(),
            micro_goals = weekly.micro_goals.len(),
            risk_days = weekly.risk_days.len(),
            "Generated weekly insights"
        );
        weekly
    }

    fn archetype_day_insight(&self, archetype: EatingArchetype, day: DayOfWeek) -> Vec<String> {
        ARCHETYPE_DAY_INSIGHTS
            .iter()
            .filter(|(a, d)| *a == archetype && *d == day)
            .map(|(a, d)| self.text.text(&format!("insight.archetype.{a}.{d}")))
            .collect()
    }

    fn temporal_insights(&self, dna: &NutritionDna, day: DayOfWeek) -> Vec<String> {
        let patterns = &dna.temporal_patterns;
        let mut insights = Vec::new();

        if day.is_weekend() && patterns.weekend_shift_hours > 1.5 {
            insights.push(self.text.render(
                "insight.temporal.weekend_shift",
                &[("hours", format!("{:.1}", patterns.weekend_shift_hours))],
            ));
        }

        if day == DayOfWeek::Monday && patterns.weekend_shift_hours > 1.0 {
            insights.push(self.text.render(
                "insight.temporal.monday_recovery",
                &[(
                    "time",
                    patterns.preferred_breakfast_time.format("%H:%M").to_string(),
                )],
            ));
        }

        if patterns.late_night_eating_frequency > 0.3
            && matches!(
                day,
                DayOfWeek::Friday | DayOfWeek::Saturday | DayOfWeek::Sunday
            )
        {
            insights.push(self.text.text("insight.temporal.late_weekend"));
        }

        if patterns.meal_timing_consistency < 0.5
            && matches!(day, DayOfWeek::Monday | DayOfWeek::Tuesday)
        {
            insights.push(self.text.text("insight.temporal.week_start_routine"));
        }

        insights
    }

    fn trigger_insights(&self, dna: &NutritionDna, day: DayOfWeek) -> Vec<String> {
        let mut insights = Vec::new();
        for trigger in dna
            .triggers
            .iter()
            .filter(|t| t.probability > TRIGGER_INSIGHT_THRESHOLD)
        {
            let name = trigger.trigger.to_lowercase();
            let response = ("response", trigger.food_response.clone());

            if name.contains("monday") && day == DayOfWeek::Monday {
                insights.push(self.text.render("insight.trigger.monday", &[response]));
            } else if name.contains("friday") && day == DayOfWeek::Friday {
                insights.push(self.text.render("insight.trigger.friday", &[response]));
            } else if name.contains("stress") && day.is_midweek() {
                insights.push(self.text.render("insight.trigger.stress", &[response]));
            } else if name.contains("evening") {
                let time = trigger
                    .time_of_day
                    .map_or_else(|| "21:30".to_owned(), |t| t.format("%H:%M").to_string());
                insights.push(
                    self.text
                        .render("insight.trigger.evening", &[response, ("time", time)]),
                );
            }
        }
        insights
    }

    fn recent_insights(
        &self,
        dna: &NutritionDna,
        date: NaiveDate,
        recent_logs: &[FoodLogEntry],
    ) -> Vec<String> {
        let (start, end) = self.recent_window(date);
        let window: Vec<_> = log_view::timed(recent_logs)
            .into_iter()
            .filter(|t| t.at >= start && t.at < end)
            .collect();

        if window.len() < self.config.min_recent_logs {
            return vec![self.text.text("insight.recent.sparse_data")];
        }

        let mut insights = Vec::new();
        let late = window
            .iter()
            .filter(|t| t.hour() >= hours::LATE_NIGHT_START)
            .count() as f64
            / window.len() as f64;
        if late > dna.temporal_patterns.late_night_eating_frequency + 0.2 {
            insights.push(self.text.text("insight.recent.later_than_usual"));
        }

        let calories: Vec<f64> = window
            .iter()
            .filter(|t| t.entry.macros.is_some())
            .map(|t| t.calories())
            .collect();
        if !calories.is_empty() {
            let avg = calories.iter().sum::<f64>() / calories.len() as f64;
            if avg < LOW_MEAL_CALORIES {
                insights.push(self.text.text("insight.recent.low_calories"));
            } else if avg > HIGH_MEAL_CALORIES {
                insights.push(self.text.text("insight.recent.large_portions"));
            }
        }

        insights
    }

    /// The last `recent_window_days` calendar days ending with `date`, inclusive
    ///
    /// With the default of 3 and a Thursday target this is Tuesday 00:00 up to
    /// Friday 00:00 in wall-clock time.
    fn recent_window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let day_start = date.and_time(chrono::NaiveTime::MIN);
        let start = day_start
            .checked_sub_signed(chrono::Duration::days(self.config.recent_window_days - 1))
            .unwrap_or(NaiveDateTime::MIN);
        let end = day_start
            .checked_add_signed(chrono::Duration::days(1))
            .unwrap_or(NaiveDateTime::MAX);
        (start, end)
    }

    fn energy_insights(&self, dna: &NutritionDna, day: DayOfWeek) -> Vec<String> {
        let energy = &dna.energy_patterns;
        let peak = energy.peak_hunger_time.format("%H:%M").to_string();
        let mut insights = Vec::new();

        if energy.morning_appetite < 0.3 && !day.is_weekend() {
            insights.push(self.text.render(
                "insight.energy.low_morning_appetite",
                &[("time", peak.clone())],
            ));
        }
        if energy.evening_comfort_eating > 0.5 {
            insights.push(self.text.text("insight.energy.evening_comfort"));
        }
        if day.is_weekend() && (11..=13).contains(&energy.peak_hunger_time.hour()) {
            insights.push(
                self.text
                    .render("insight.energy.weekend_brunch", &[("time", peak)]),
            );
        }

        insights
    }

    fn observed_patterns(&self, dna: &NutritionDna) -> Vec<String> {
        let mut patterns = Vec::new();

        if dna.social_patterns.weekend_indulgence_score > 0.4 {
            patterns.push(self.text.text("weekly.pattern.weekend_differs"));
        }
        if dna.consistency_score > 0.8 {
            patterns.push(self.text.text("weekly.pattern.stable"));
        } else if dna.consistency_score < 0.4 {
            patterns.push(self.text.text("weekly.pattern.chaotic"));
        }
        if dna.energy_patterns.evening_comfort_eating > 0.6 {
            patterns.push(self.text.text("weekly.pattern.evening_comfort"));
        }

        let strong_triggers = dna.triggers.iter().filter(|t| t.probability > 0.7).count();
        if strong_triggers > 0 {
            patterns.push(self.text.render(
                "weekly.pattern.strong_triggers",
                &[("count", strong_triggers.to_string())],
            ));
        }

        patterns
    }

    fn micro_goals(&self, dna: &NutritionDna) -> Vec<String> {
        let mut goals: Vec<String> = dna
            .optimization_zones
            .iter()
            .filter(|zone| zone.difficulty == Difficulty::EasyWins)
            .filter_map(|zone| match zone.area {
                OptimizationArea::FiberIntake => Some(self.text.text("goal.micro.fiber")),
                OptimizationArea::ProteinIntake => Some(self.text.text("goal.micro.protein")),
                OptimizationArea::MealTiming | OptimizationArea::WeekendConsistency => None,
            })
            .collect();

        let archetype_goal = match dna.archetype {
            EatingArchetype::LateStarterImpulsive => Some("goal.micro.healthy_snacks"),
            EatingArchetype::StressDriven => Some("goal.micro.relaxation"),
            EatingArchetype::WeekendWarrior => Some("goal.micro.weekend_habit"),
            _ => None,
        };
        if let Some(key) = archetype_goal {
            goals.push(self.text.text(key));
        }

        if dna.temporal_patterns.late_night_eating_frequency > 0.4 {
            goals.push(self.text.text("goal.micro.earlier_dinner"));
        }
        if dna.consistency_score < 0.6 {
            goals.push(self.text.text("goal.micro.fixed_breakfast"));
        }

        goals.truncate(self.config.max_micro_goals);
        goals
    }

    fn risk_days(&self, dna: &NutritionDna) -> Vec<String> {
        let mut keys = Vec::new();

        for trigger in dna
            .triggers
            .iter()
            .filter(|t| t.probability > TRIGGER_INSIGHT_THRESHOLD)
        {
            let name = trigger.trigger.to_lowercase();
            if name.contains("monday") {
                keys.push("risk.monday_adjustment");
            } else if name.contains("friday") {
                keys.push("risk.friday_celebration");
            }
        }

        match dna.archetype {
            EatingArchetype::WeekendWarrior => {
                keys.extend(["risk.saturday_freedom", "risk.sunday_anxiety"]);
            }
            EatingArchetype::StressDriven => {
                keys.extend(["risk.tuesday_stress", "risk.wednesday_pressure"]);
            }
            EatingArchetype::SocialEater => {
                keys.extend(["risk.friday_social", "risk.saturday_social"]);
            }
            _ => {}
        }

        if dna.energy_patterns.evening_comfort_eating > 0.6 {
            keys.push("risk.daily_evenings");
        }

        let mut seen = HashSet::new();
        keys.into_iter()
            .filter(|key| seen.insert(*key))
            .map(|key| self.text.text(key))
            .collect()
    }

    fn opportunity_moments(&self, dna: &NutritionDna) -> Vec<String> {
        let mut moments = Vec::new();

        for pattern in dna.success_patterns.iter().filter(|p| p.correlation > 0.7) {
            let name = pattern.pattern.to_lowercase();
            if name.contains("breakfast") {
                moments.push(self.text.render(
                    "opportunity.morning",
                    &[("pattern", pattern.pattern.clone())],
                ));
            } else if name.contains("consistent") {
                moments.push(self.text.text("opportunity.midweek"));
            }
        }

        match dna.archetype {
            EatingArchetype::EarlyBirdPlanner => {
                moments.push(self.text.text("opportunity.sunday_prep"));
                moments.push(self.text.text("opportunity.early_mornings"));
            }
            EatingArchetype::StructuredBalanced => {
                moments.push(self.text.text("opportunity.any_day"));
            }
            EatingArchetype::SocialEater => {
                moments.push(self.text.text("opportunity.social_meals"));
            }
            _ => {}
        }

        let peak_hour = dna.energy_patterns.peak_hunger_time.hour();
        if (11..=14).contains(&peak_hour) {
            moments.push(self.text.render(
                "opportunity.lunch_peak",
                &[("hour", peak_hour.to_string())],
            ));
        }
        if dna.temporal_patterns.meal_timing_consistency > 0.7 {
            moments.push(self.text.text("opportunity.regular_times"));
        }

        moments.truncate(self.config.max_opportunities);
        moments
    }
}
