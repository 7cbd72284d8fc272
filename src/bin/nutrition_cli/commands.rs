// ABOUTME: Command implementations for nutrition-cli
// ABOUTME: Each command runs the analytics over one input file and returns a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::input::CliInput;
use chrono::{Datelike, Days, NaiveDate};
use nutrition_dna::intelligence::config::IntelligenceConfig;
use nutrition_dna::intelligence::{
    BehaviorPredictor, FoodPlanGenerator, NutritionDnaGenerator, NutritionVisualizer,
    PersonalizedInsightsEngine, PhraseSelector, TextRenderer,
};
use nutrition_dna::models::{FoodLogEntry, NutritionDna};
use nutrition_dna::time::Clock;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared collaborators for every command
pub struct Engines {
    /// Analytics configuration
    pub config: IntelligenceConfig,
    /// Source of "today" and of generation stamps
    pub clock: Arc<dyn Clock>,
    /// Seeded meal-reasoning phrase selection
    pub phrases: PhraseSelector,
}

impl Engines {
    fn generator(&self) -> NutritionDnaGenerator {
        NutritionDnaGenerator::new(self.config.generator.clone())
            .with_time_statistics(self.config.time_statistics)
            .with_clock(Arc::clone(&self.clock))
    }

    fn dna(&self, input: &CliInput) -> NutritionDna {
        self.generator().generate(&input.profile, &input.logs, Some(input.context.as_slice()))
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }
}

/// Monday of the week containing `date`
fn week_of(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(date)
}

fn logs_in_week(logs: &[FoodLogEntry], week_start: NaiveDate) -> Vec<FoodLogEntry> {
    let week_end = week_start
        .checked_add_days(Days::new(7))
        .unwrap_or(NaiveDate::MAX);
    logs.iter()
        .filter(|entry| {
            entry
                .recorded_at()
                .is_some_and(|at| at.date() >= week_start && at.date() < week_end)
        })
        .cloned()
        .collect()
}

/// Nutrition DNA with its text summary
pub fn profile(engines: &Engines, input: &CliInput) -> Value {
    let dna = engines.dna(input);
    let summary = NutritionDnaGenerator::summary(&dna, &TextRenderer::default());
    json!({
        "dna": dna,
        "summary": summary,
    })
}

/// Ranked predictions for a day, with optional goal-success estimate
pub fn predict(
    engines: &Engines,
    input: &CliInput,
    date: Option<NaiveDate>,
    goal: Option<&str>,
    timeframe_days: u32,
) -> Value {
    let dna = engines.dna(input);
    let date = date.unwrap_or_else(|| engines.today());
    let predictor = BehaviorPredictor::new(engines.config.prediction.clone());
    let context = input.context.iter().find(|sample| sample.date == date);

    let predictions = predictor.predict_daily(&dna, date, &input.logs, context);
    let recommendations = predictor.recommendations(&predictions, &dna);
    let goal_success = goal.map(|goal| predictor.predict_goal_success(&dna, goal, timeframe_days));

    json!({
        "date": date,
        "archetype": dna.archetype,
        "predictions": predictions,
        "recommendations": recommendations,
        "goal_success": goal_success,
    })
}

/// Weekly insights and per-day predictions
pub fn weekly(engines: &Engines, input: &CliInput, week_start: Option<NaiveDate>) -> Value {
    let dna = engines.dna(input);
    let week_start = week_start.unwrap_or_else(|| week_of(engines.today()));
    let week_logs = logs_in_week(&input.logs, week_start);

    let insights = PersonalizedInsightsEngine::new(engines.config.insights.clone())
        .weekly_insights(&dna, week_start, &week_logs);
    let predictions = BehaviorPredictor::new(engines.config.prediction.clone())
        .predict_weekly(&dna, week_start, &input.context);

    json!({
        "week_start": week_start,
        "insights": insights,
        "predictions": predictions,
    })
}

/// Multi-day food plan
pub fn plan(
    engines: &Engines,
    input: &CliInput,
    start_date: Option<NaiveDate>,
    days: u32,
) -> Value {
    let start_date = start_date.unwrap_or_else(|| engines.today());
    let mut generator = FoodPlanGenerator::new(&engines.config)
        .with_clock(Arc::clone(&engines.clock))
        .with_phrases(engines.phrases.clone());
    let plan = generator.generate(&input.profile, &input.logs, start_date, days, &input.context);
    json!(plan)
}

/// Full visualization report anchored at the clock's current instant
pub fn report(engines: &Engines, input: &CliInput) -> Value {
    let dna = engines.dna(input);
    let today = engines.today();
    let week_start = week_of(today);

    let weekly = PersonalizedInsightsEngine::new(engines.config.insights.clone()).weekly_insights(
        &dna,
        week_start,
        &logs_in_week(&input.logs, week_start),
    );
    let context = input.context.iter().find(|sample| sample.date == today);
    let predictions = BehaviorPredictor::new(engines.config.prediction.clone())
        .predict_daily(&dna, today, &input.logs, context);

    let report = NutritionVisualizer::new()
        .with_clock(Arc::clone(&engines.clock))
        .report(&dna, &input.logs, Some(&weekly), &predictions);
    json!(report)
}
