// ABOUTME: Multi-day personalized food plan combining DNA, context, predictions, insights, and meals
// ABOUTME: Produces per-day menus with alerts, a categorized shopping list, and a fallback plan on bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Food Plan Generator
//!
//! Orchestrates every analytic engine for one user:
//!
//! 1. Build the Nutrition DNA from history
//! 2. Correlate history with context samples
//! 3. Predict the plan week, day by day
//! 4. Recommend breakfast, lunch and dinner per day, attaching alerts and insights
//! 5. Aggregate weekly insights, the intro summary, the shopping list and a
//!    personalization block
//!
//! Invalid requests produce a simple calorie-split plan instead of an error.

use crate::behavior_predictor::BehaviorPredictor;
use crate::config::intelligence::{IntelligenceConfig, MealPlanConfig};
use crate::contextual_analyzer::{ContextAnalysis, ContextualAnalyzer, Influence};
use crate::dna_generator::NutritionDnaGenerator;
use crate::goal::GoalKind;
use crate::insights::PersonalizedInsightsEngine;
use crate::meal_recommender::{AdaptiveMealRecommender, MealContext};
use crate::text::{percent, PhraseSelector, TextRenderer};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{
    ContextSample, CookingDifficulty, DayOfWeek, EatingArchetype, FoodLogEntry, Ingredient,
    MealRecommendation, MealType, NutritionDna, OptimizationArea, PredictionResult,
    TemporalPattern, UserProfile, WeeklyInsight,
};
use nutrition_core::time::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// Longest plan accepted
pub const MAX_PLAN_DAYS: u32 = 31;

/// Confidence reported for the fallback plan
pub const FALLBACK_PLAN_CONFIDENCE: f64 = 0.3;

/// History entries fed to per-day insights
const DAILY_HISTORY: usize = 7;

/// History entries fed to weekly insights
const WEEKLY_HISTORY: usize = 14;

/// Ceiling on the plan confidence
const MAX_PLAN_CONFIDENCE: f64 = 0.95;

/// Confidence added on top of the DNA confidence
const PLAN_CONFIDENCE_BOOST: f64 = 0.2;

/// Fallback daily calories swing up and down by this much on alternating days
const FALLBACK_SWING: f64 = 100.0;

/// Where a plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Full behavioral personalization
    Personalized,
    /// Calorie-split plan used when the request was invalid
    Fallback,
}

/// Summed nutrients of a planned day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Energy in kcal
    pub calories: u32,
    /// Protein grams
    pub protein: u32,
    /// Fat grams
    pub fats: u32,
    /// Carbohydrate grams
    pub carbs: u32,
}

impl DayTotals {
    fn of(meals: &BTreeMap<MealType, MealRecommendation>) -> Self {
        meals.values().fold(Self::default(), |totals, meal| Self {
            calories: totals.calories + meal.calories,
            protein: totals.protein + meal.protein,
            fats: totals.fats + meal.fats,
            carbs: totals.carbs + meal.carbs,
        })
    }
}

/// One planned day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Day of week
    pub day: DayOfWeek,
    /// Recommended meals
    pub meals: BTreeMap<MealType, MealRecommendation>,
    /// Nutrient totals of the meals
    pub totals: DayTotals,
    /// Warnings for likely behaviors
    pub alerts: Vec<String>,
    /// Short observations for the day
    pub insights: Vec<String>,
}

/// Ingredients grouped by category plus behavior-driven suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Merged ingredients per category
    pub categories: BTreeMap<String, Vec<Ingredient>>,
    /// Extra items suggested from the DNA
    pub suggestions: Vec<ShoppingSuggestion>,
}

/// Extra shopping item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSuggestion {
    /// What to buy
    pub item: String,
    /// Why
    pub reasoning: String,
}

/// Aggregate of the week's predictions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// Predictions across all days
    pub total: usize,
    /// Predictions with probability above 0.7
    pub high_confidence: usize,
    /// Up to three leading event themes with their counts
    pub common_themes: Vec<(String, usize)>,
    /// Days with a prediction above 0.8
    pub risk_days: Vec<DayOfWeek>,
}

/// How the plan was personalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personalization {
    /// Multiline DNA summary
    pub dna_summary: String,
    /// Week prediction aggregate
    pub predictions: PredictionSummary,
    /// Strongest context influences
    pub contextual_influences: Vec<Influence>,
    /// First optimization zone areas
    pub optimization_focus: Vec<OptimizationArea>,
    /// Probability of reaching the profile goal within the plan
    pub success_probability: f64,
}

/// Provenance of a personalized plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Archetype the plan was built for
    pub archetype: EatingArchetype,
    /// Context sensitivity of the history
    pub context_sensitivity: f64,
    /// Engines that contributed
    pub features_used: Vec<String>,
}

/// Complete multi-day plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPlan {
    /// Personalized or fallback
    pub source: PlanSource,
    /// First planned date
    pub start_date: NaiveDate,
    /// Opening paragraph
    pub intro_summary: String,
    /// Planned days in order
    pub days: Vec<PlannedDay>,
    /// Shopping list for all days
    pub shopping_list: ShoppingList,
    /// Engine insights per date
    pub daily_insights: BTreeMap<NaiveDate, Vec<String>>,
    /// Weekly narrative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_insights: Option<WeeklyInsight>,
    /// Personalization details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
    /// Adjustments to the recommended meals
    pub adaptive_suggestions: Vec<String>,
    /// Plan confidence
    pub confidence: f64,
    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GenerationMetadata>,
    /// Creation instant
    pub generated_at: DateTime<Utc>,
}

/// Builds personalized multi-day food plans
#[derive(Debug, Clone)]
pub struct FoodPlanGenerator {
    meal_plan: MealPlanConfig,
    dna: NutritionDnaGenerator,
    context: ContextualAnalyzer,
    predictor: BehaviorPredictor,
    insights: PersonalizedInsightsEngine,
    recommender: AdaptiveMealRecommender,
    text: TextRenderer,
    clock: Arc<dyn Clock>,
}

impl Default for FoodPlanGenerator {
    fn default() -> Self {
        Self::new(&IntelligenceConfig::default())
    }
}

impl FoodPlanGenerator {
    /// Generator wired from `config` with English text and the system clock
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            meal_plan: config.meal_plan.clone(),
            dna: NutritionDnaGenerator::new(config.generator.clone())
                .with_time_statistics(config.time_statistics),
            context: ContextualAnalyzer::new(config.context.clone()),
            predictor: BehaviorPredictor::new(config.prediction.clone()),
            insights: PersonalizedInsightsEngine::new(config.insights.clone()),
            recommender: AdaptiveMealRecommender::new(config.meal_plan.clone()),
            text: TextRenderer::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Render all text through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.dna = self.dna.with_renderer(text.clone());
        self.context = self.context.with_renderer(text.clone());
        self.predictor = self.predictor.with_renderer(text.clone());
        self.insights = self.insights.with_renderer(text.clone());
        self.recommender = self.recommender.with_renderer(text.clone());
        self.text = text;
        self
    }

    /// Stamp plans and profiles with `clock`
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.dna = self.dna.with_clock(Arc::clone(&clock));
        self.clock = clock;
        self
    }

    /// Choose meal reasoning phrases with `phrases`
    #[must_use]
    pub fn with_phrases(mut self, phrases: PhraseSelector) -> Self {
        self.recommender = self.recommender.with_phrases(phrases);
        self
    }

    /// Plan `days` days from `start_date`; an invalid request yields the fallback plan
    pub fn generate(
        &mut self,
        profile: &UserProfile,
        history: &[FoodLogEntry],
        start_date: NaiveDate,
        days: u32,
        context: &[ContextSample],
    ) -> FoodPlan {
        info!(
            plan.days = days,
            logs.count = history.len(),
            "Generating food plan"
        );
        match self.try_generate(profile, history, start_date, days, context) {
            Ok(plan) => plan,
            Err(e) => {
                warn!(error = %e, "Food plan request rejected, using fallback plan");
                self.fallback_plan(profile, start_date, days.clamp(1, MAX_PLAN_DAYS))
            }
        }
    }

    /// Plan `days` days from `start_date`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` is zero or above [`MAX_PLAN_DAYS`]
    pub fn try_generate(
        &mut self,
        profile: &UserProfile,
        history: &[FoodLogEntry],
        start_date: NaiveDate,
        days: u32,
        context: &[ContextSample],
    ) -> AppResult<FoodPlan> {
        if days == 0 || days > MAX_PLAN_DAYS {
            return Err(AppError::invalid_input(format!(
                "Plan length must be between 1 and {MAX_PLAN_DAYS} days, got {days}"
            )));
        }

        let dna = self.dna.generate(profile, history, Some(context));
        let analysis = self.context.analyze(history, context);
        let weekly_predictions = self.predictor.predict_weekly(&dna, start_date, context);
        let goal = GoalKind::from_profile_goal(profile.goal.as_deref());

        let daily_history = tail(history, DAILY_HISTORY);
        let mut planned = Vec::new();
        let mut daily_insights = BTreeMap::new();
        for offset in 0..u64::from(days) {
            let Some(date) = start_date.checked_add_days(Days::new(offset)) else {
                break;
            };
            let day = DayOfWeek::of(date);
            let predictions = weekly_predictions.get(&day).cloned().unwrap_or_default();
            let sample = context.iter().find(|sample| sample.date == date).cloned();

            let meal_context = MealContext::for_goal(goal)
                .with_sample(sample)
                .with_predictions(predictions.clone());
            let meals = self.recommender.daily_plan(&dna, date, &meal_context, profile);

            planned.push(PlannedDay {
                date,
                day,
                totals: DayTotals::of(&meals),
                meals,
                alerts: self.day_alerts(&predictions),
                insights: self.day_insights(&dna, date, &predictions),
            });
            daily_insights.insert(date, self.insights.daily_insights(&dna, date, daily_history));
        }

        let weekly = self
            .insights
            .weekly_insights(&dna, start_date, tail(history, WEEKLY_HISTORY));
        let intro_summary = self.intro_summary(&dna, &analysis, &weekly, profile, days);
        let shopping_list = self.shopping_list(&planned, &dna);
        let recent_plans: Vec<_> = planned.iter().map(|day| day.meals.clone()).collect();
        let adaptive_suggestions = self.recommender.adaptive_suggestions(&dna, &recent_plans);

        let goal_text = profile.goal.clone().unwrap_or_else(|| "maintenance".to_owned());
        let personalization = Personalization {
            dna_summary: NutritionDnaGenerator::summary(&dna, &self.text),
            predictions: summarize_predictions(&weekly_predictions),
            contextual_influences: analysis.strongest_influences.clone(),
            optimization_focus: dna
                .optimization_zones
                .iter()
                .take(3)
                .map(|zone| zone.area)
                .collect(),
            success_probability: self
                .predictor
                .predict_goal_success(&dna, &goal_text, days)
                .probability,
        };

        info!(
            dna.archetype = %dna.archetype,
            plan.days = planned.len(),
            "Generated food plan"
        );

        Ok(FoodPlan {
            source: PlanSource::Personalized,
            start_date,
            intro_summary,
            days: planned,
            shopping_list,
            daily_insights,
            weekly_insights: Some(weekly),
            personalization: Some(personalization),
            adaptive_suggestions,
            confidence: (dna.confidence_score + PLAN_CONFIDENCE_BOOST).min(MAX_PLAN_CONFIDENCE),
            metadata: Some(GenerationMetadata {
                archetype: dna.archetype,
                context_sensitivity: analysis.context_score,
                features_used: [
                    "nutrition_dna",
                    "behavioral_prediction",
                    "contextual_analysis",
                    "adaptive_recommendations",
                    "temporal_patterns",
                    "psychological_profiling",
                ]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            }),
            generated_at: self.clock.now(),
        })
    }

    /// Calorie-split plan without behavioral personalization
    #[must_use]
    pub fn fallback_plan(&self, profile: &UserProfile, start_date: NaiveDate, days: u32) -> FoodPlan {
        let target = profile
            .calorie_target()
            .unwrap_or(self.meal_plan.default_daily_calories);
        let times = TemporalPattern::default();

        let planned: Vec<PlannedDay> = (1..=days)
            .filter_map(|day_number| {
                let date = start_date.checked_add_days(Days::new(u64::from(day_number - 1)))?;
                let swing = if day_number % 2 == 0 {
                    FALLBACK_SWING
                } else {
                    -FALLBACK_SWING
                };
                let daily = target + swing;
                let meals: BTreeMap<MealType, MealRecommendation> = [
                    (MealType::Breakfast, self.meal_plan.breakfast_share, (0.20, 0.30, 0.50)),
                    (MealType::Lunch, self.meal_plan.lunch_share, (0.25, 0.30, 0.45)),
                    (MealType::Dinner, self.meal_plan.dinner_share, (0.30, 0.25, 0.45)),
                ]
                .into_iter()
                .map(|(meal_type, share, ratios)| {
                    let time = match meal_type {
                        MealType::Breakfast => times.preferred_breakfast_time,
                        MealType::Lunch => times.preferred_lunch_time,
                        _ => times.preferred_dinner_time,
                    };
                    (
                        meal_type,
                        self.fallback_meal(meal_type, time, daily * share, ratios),
                    )
                })
                .collect();
                Some(PlannedDay {
                    date,
                    day: DayOfWeek::of(date),
                    totals: DayTotals::of(&meals),
                    meals,
                    alerts: Vec::new(),
                    insights: Vec::new(),
                })
            })
            .collect();

        let goal = profile
            .goal
            .clone()
            .unwrap_or_else(|| self.text.text("plan.goal.default"));
        let mut categories = BTreeMap::new();
        categories.insert(
            self.text.text("plan.fallback.basics"),
            ["vegetables", "proteins", "grains"]
                .into_iter()
                .map(|category| Ingredient {
                    name: self.text.text(&format!("shopping.category.{category}")),
                    grams: 0,
                    category: category.to_owned(),
                })
                .collect(),
        );

        FoodPlan {
            source: PlanSource::Fallback,
            start_date,
            intro_summary: self.text.render(
                "plan.fallback.intro",
                &[("days", days.to_string()), ("goal", goal)],
            ),
            days: planned,
            shopping_list: ShoppingList {
                categories,
                suggestions: Vec::new(),
            },
            daily_insights: BTreeMap::new(),
            weekly_insights: None,
            personalization: None,
            adaptive_suggestions: Vec::new(),
            confidence: FALLBACK_PLAN_CONFIDENCE,
            metadata: None,
            generated_at: self.clock.now(),
        }
    }

    fn fallback_meal(
        &self,
        meal_type: MealType,
        time: NaiveTime,
        calories: f64,
        (protein_ratio, fat_ratio, carb_ratio): (f64, f64, f64),
    ) -> MealRecommendation {
        let key = format!("plan.fallback.{meal_type}");
        MealRecommendation {
            meal_type,
            recommended_time: time,
            matches_energy_level: false,
            addresses_typical_craving: false,
            fits_schedule_pattern: false,
            supports_current_goal: false,
            dish_name: self.text.text(&key),
            description: self.text.text(&format!("{key}.description")),
            reasoning: self.text.text("plan.fallback.reasoning"),
            calories: calories as u32,
            protein: (calories * protein_ratio / 4.0) as u32,
            fats: (calories * fat_ratio / 9.0) as u32,
            carbs: (calories * carb_ratio / 4.0) as u32,
            fiber: None,
            prep_time_minutes: 0,
            difficulty_level: CookingDifficulty::Easy,
            ingredients: Vec::new(),
        }
    }

    fn day_alerts(&self, predictions: &[PredictionResult]) -> Vec<String> {
        predictions
            .iter()
            .filter(|p| p.probability > 0.6)
            .take(self.meal_plan.max_day_alerts)
            .map(|p| {
                self.text.render(
                    "plan.alert",
                    &[
                        ("event", p.prediction_type.clone()),
                        ("action", p.recommended_action.clone()),
                    ],
                )
            })
            .collect()
    }

    fn day_insights(
        &self,
        dna: &NutritionDna,
        date: NaiveDate,
        predictions: &[PredictionResult],
    ) -> Vec<String> {
        let day = DayOfWeek::of(date);
        let day_name = self.text.text(&format!("day.{day}"));
        let mut insights = Vec::new();

        let archetype_line = match dna.archetype {
            EatingArchetype::EarlyBirdPlanner => Some("plan.day.early_bird"),
            EatingArchetype::StressDriven => Some("plan.day.stress_driven"),
            EatingArchetype::SocialEater => Some("plan.day.social_eater"),
            EatingArchetype::WeekendWarrior if day.is_weekend() => {
                Some("plan.day.weekend_warrior.day_off")
            }
            EatingArchetype::WeekendWarrior => Some("plan.day.weekend_warrior.workday"),
            _ => None,
        };
        if let Some(key) = archetype_line {
            insights.push(self.text.render(key, &[("day", day_name)]));
        }

        if let Some(likely) = predictions.iter().find(|p| p.probability > 0.7) {
            insights.push(self.text.render(
                "plan.day.likely_event",
                &[("event", likely.prediction_type.clone())],
            ));
        }

        if day == DayOfWeek::Monday && dna.temporal_patterns.weekend_shift_hours > 1.0 {
            insights.push(self.text.text("plan.day.monday_reset"));
        }

        insights.truncate(self.meal_plan.max_day_insights);
        insights
    }

    fn intro_summary(
        &self,
        dna: &NutritionDna,
        analysis: &ContextAnalysis,
        weekly: &WeeklyInsight,
        profile: &UserProfile,
        days: u32,
    ) -> String {
        let mut parts = Vec::new();

        let greeting = match dna.archetype {
            EatingArchetype::StructuredBalanced => "plan.intro.greeting.default".to_owned(),
            archetype => format!("plan.intro.greeting.{}", archetype.as_str()),
        };
        parts.push(self.text.text(&greeting));

        parts.push(self.text.render(
            "plan.intro.archetype",
            &[
                (
                    "archetype",
                    self.text
                        .text(&format!("archetype.{}.name", dna.archetype.as_str())),
                ),
                ("confidence", percent(dna.confidence_score)),
            ],
        ));

        if let Some(top) = analysis.strongest_influences.first() {
            parts.push(self.text.render(
                "plan.intro.influence",
                &[("influence", top.description.to_lowercase())],
            ));
        }

        let goal = profile
            .goal
            .clone()
            .unwrap_or_else(|| self.text.text("plan.goal.default"));
        let success = self
            .predictor
            .predict_goal_success(dna, &goal, days)
            .probability;
        let key = if success > 0.7 {
            "plan.intro.success.high"
        } else if success > 0.5 {
            "plan.intro.success.good"
        } else {
            "plan.intro.success.tailored"
        };
        parts.push(
            self.text
                .render(key, &[("goal", goal), ("probability", percent(success))]),
        );

        if let Some(focus) = weekly.micro_goals.first() {
            parts.push(
                self.text
                    .render("plan.intro.focus", &[("goal", focus.to_lowercase())]),
            );
        }

        parts.join(" ")
    }

    fn shopping_list(&self, planned: &[PlannedDay], dna: &NutritionDna) -> ShoppingList {
        let mut merged: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for meal in planned.iter().flat_map(|day| day.meals.values()) {
            for ingredient in &meal.ingredients {
                *merged
                    .entry(ingredient.category.clone())
                    .or_default()
                    .entry(ingredient.name.clone())
                    .or_default() += ingredient.grams;
            }
        }
        let categories = merged
            .into_iter()
            .map(|(category, items)| {
                let ingredients = items
                    .into_iter()
                    .map(|(name, grams)| Ingredient {
                        name,
                        grams,
                        category: category.clone(),
                    })
                    .collect();
                (category, ingredients)
            })
            .collect();

        let mut suggestions = Vec::new();
        for zone in dna.optimization_zones.iter().take(2) {
            let key = match zone.area {
                OptimizationArea::FiberIntake => "shopping.suggest.fiber",
                OptimizationArea::ProteinIntake => "shopping.suggest.protein",
                _ => continue,
            };
            suggestions.push(ShoppingSuggestion {
                item: self.text.text(key),
                reasoning: self.text.render(
                    "shopping.reason.zone",
                    &[("area", self.text.text(&format!("area.{}", zone.area)))],
                ),
            });
        }

        let archetype_item = match dna.archetype {
            EatingArchetype::BusyProfessional => Some("shopping.suggest.busy_professional"),
            EatingArchetype::StressDriven => Some("shopping.suggest.stress_driven"),
            EatingArchetype::SocialEater => Some("shopping.suggest.social_eater"),
            _ => None,
        };
        if let Some(key) = archetype_item {
            suggestions.push(ShoppingSuggestion {
                item: self.text.text(key),
                reasoning: self.text.render(
                    "shopping.reason.archetype",
                    &[(
                        "archetype",
                        self.text
                            .text(&format!("archetype.{}.name", dna.archetype.as_str())),
                    )],
                ),
            });
        }

        ShoppingList {
            categories,
            suggestions,
        }
    }
}

/// Aggregate a week of predictions into counts, themes and risk days
#[must_use]
pub fn summarize_predictions(
    weekly: &BTreeMap<DayOfWeek, Vec<PredictionResult>>,
) -> PredictionSummary {
    let all: Vec<&PredictionResult> = weekly.values().flatten().collect();

    let mut themes: HashMap<&str, usize> = HashMap::new();
    for prediction in all.iter().filter(|p| p.probability > 0.6) {
        let theme = prediction
            .prediction_type
            .split('_')
            .next()
            .unwrap_or_default();
        *themes.entry(theme).or_default() += 1;
    }
    let mut common_themes: Vec<(String, usize)> = themes
        .into_iter()
        .map(|(theme, count)| (theme.to_owned(), count))
        .collect();
    common_themes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    common_themes.truncate(3);

    PredictionSummary {
        total: all.len(),
        high_confidence: all.iter().filter(|p| p.probability > 0.7).count(),
        common_themes,
        risk_days: weekly
            .iter()
            .filter(|(_, predictions)| predictions.iter().any(|p| p.probability > 0.8))
            .map(|(day, _)| *day)
            .collect(),
    }
}

fn tail(logs: &[FoodLogEntry], count: usize) -> &[FoodLogEntry] {
    &logs[logs.len().saturating_sub(count)..]
}
