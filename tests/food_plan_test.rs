// ABOUTME: Integration tests for meal recommendation and multi-day food planning
// ABOUTME: Calorie splits, adaptive suggestion rules, fallback plans, seeded determinism and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use chrono::NaiveTime;
use common::{early_bird_logs, fixed_clock, instant, monday, plus_days, weight_loss_profile};
use nutrition_dna::errors::ErrorCode;
use nutrition_dna::intelligence::config::{IntelligenceConfig, MealPlanConfig};
use nutrition_dna::intelligence::food_plan::{PlanSource, FALLBACK_PLAN_CONFIDENCE, MAX_PLAN_DAYS};
use nutrition_dna::intelligence::{
    AdaptiveMealRecommender, FoodPlanGenerator, GoalKind, MealContext, NutritionDnaGenerator,
    PhraseSelector, TextRenderer,
};
use nutrition_dna::models::{
    CookingDifficulty, EatingArchetype, MealRecommendation, MealType, NutritionDna,
    OptimizationArea, OptimizationZone, UserProfile,
};
use std::collections::BTreeMap;

fn planner(seed: u64) -> FoodPlanGenerator {
    FoodPlanGenerator::new(&IntelligenceConfig::default())
        .with_clock(fixed_clock(instant(2025, 3, 2, 18)))
        .with_phrases(PhraseSelector::seeded(seed))
}

#[test]
fn test_recommended_meal_is_scaled_to_budget() {
    let mut recommender = AdaptiveMealRecommender::new(MealPlanConfig::default());
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let context = MealContext {
        calorie_budget: Some(500.0),
        ..MealContext::for_goal(GoalKind::WeightLoss)
    };

    let meal = recommender
        .recommend_meal(&dna, MealType::Breakfast, monday(), &context)
        .unwrap();

    assert_eq!(meal.meal_type, MealType::Breakfast);
    assert_eq!(meal.calories, 500);
    assert!(!meal.reasoning.is_empty());
    assert!(!meal.ingredients.is_empty());
}

#[test]
fn test_daily_plan_splits_the_calorie_target() {
    let mut recommender = AdaptiveMealRecommender::new(MealPlanConfig::default());
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));

    let plan = recommender.daily_plan(
        &dna,
        monday(),
        &MealContext::default(),
        &weight_loss_profile(),
    );

    let types: Vec<MealType> = plan.keys().copied().collect();
    assert_eq!(types, MealType::MAIN.to_vec());
    assert_eq!(plan[&MealType::Breakfast].calories, 450);
    assert_eq!(plan[&MealType::Lunch].calories, 720);
    assert_eq!(plan[&MealType::Dinner].calories, 630);
}

#[test]
fn test_adaptive_suggestions_without_history() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));

    let suggestions = recommender.adaptive_suggestions(&dna, &[]);
    assert_eq!(suggestions[0], text.text("meal.adapt.start"));
    assert!(suggestions.len() <= 5);
}

fn planned(
    meal_type: MealType,
    dish: &str,
    matches_energy_level: bool,
    addresses_typical_craving: bool,
    prep_time_minutes: u32,
) -> MealRecommendation {
    MealRecommendation {
        meal_type,
        recommended_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        matches_energy_level,
        addresses_typical_craving,
        fits_schedule_pattern: true,
        supports_current_goal: true,
        dish_name: dish.to_owned(),
        description: String::new(),
        reasoning: String::new(),
        calories: 500,
        protein: 25,
        fats: 15,
        carbs: 60,
        fiber: None,
        prep_time_minutes,
        difficulty_level: CookingDifficulty::Easy,
        ingredients: Vec::new(),
    }
}

fn day_plan(meals: Vec<MealRecommendation>) -> BTreeMap<MealType, MealRecommendation> {
    meals.into_iter().map(|meal| (meal.meal_type, meal)).collect()
}

#[test]
fn test_adaptive_suggestions_flag_repeats_and_energy_mismatch() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let plans = vec![
        day_plan(vec![
            planned(MealType::Breakfast, "Overnight oats", false, false, 10),
            planned(MealType::Lunch, "Lentil soup", true, false, 25),
        ]),
        day_plan(vec![
            planned(MealType::Breakfast, "Overnight oats", false, false, 10),
            planned(MealType::Lunch, "Lentil soup", true, false, 25),
        ]),
        day_plan(vec![
            planned(MealType::Breakfast, "Overnight oats", false, false, 10),
            planned(MealType::Lunch, "Quinoa bowl", false, false, 20),
        ]),
    ];

    let suggestions = recommender.adaptive_suggestions(&dna, &plans);

    assert_eq!(
        suggestions,
        vec![
            text.render("meal.adapt.variety", &[("dish", "Overnight oats".to_owned())]),
            text.text("meal.adapt.energy"),
        ]
    );
}

#[test]
fn test_adaptive_suggestions_pick_most_repeated_dish_and_need_energy_majority() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    let plans: Vec<_> = (0..4)
        .map(|day| {
            day_plan(vec![
                planned(MealType::Breakfast, "Yogurt parfait", false, false, 5),
                planned(
                    MealType::Lunch,
                    if day < 3 { "Chicken wrap" } else { "Bean salad" },
                    true,
                    false,
                    15,
                ),
            ])
        })
        .collect();

    let suggestions = recommender.adaptive_suggestions(&dna, &plans);

    // Exactly half the meals miss the appetite, which is not a majority
    assert_eq!(
        suggestions,
        vec![text.render("meal.adapt.variety", &[("dish", "Yogurt parfait".to_owned())])]
    );
}

#[test]
fn test_adaptive_suggestions_for_evening_comfort_eaters() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.energy_patterns.evening_comfort_eating = 0.7;

    let plain_dinner = vec![day_plan(vec![planned(
        MealType::Dinner,
        "Steamed fish",
        true,
        false,
        20,
    )])];
    assert_eq!(
        recommender.adaptive_suggestions(&dna, &plain_dinner),
        vec![text.text("meal.adapt.evening_comfort")]
    );

    let comfort_dinner = vec![day_plan(vec![planned(
        MealType::Dinner,
        "Baked mac and cheese",
        true,
        true,
        20,
    )])];
    assert!(recommender
        .adaptive_suggestions(&dna, &comfort_dinner)
        .is_empty());
}

#[test]
fn test_adaptive_suggestions_for_busy_professionals() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::BusyProfessional;

    let slow = vec![day_plan(vec![planned(MealType::Lunch, "Braised beef", true, false, 40)])];
    assert_eq!(
        recommender.adaptive_suggestions(&dna, &slow),
        vec![text.text("meal.adapt.quick_prep")]
    );

    let at_limit = vec![day_plan(vec![planned(MealType::Lunch, "Stir fry", true, false, 30)])];
    assert!(recommender.adaptive_suggestions(&dna, &at_limit).is_empty());
}

#[test]
fn test_adaptive_suggestions_follow_top_zone_and_archetype() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let plans = vec![day_plan(vec![planned(MealType::Lunch, "Stir fry", true, false, 20)])];

    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.optimization_zones = vec![OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.3)];
    assert_eq!(
        recommender.adaptive_suggestions(&dna, &plans),
        vec![text.text("meal.adapt.fiber")]
    );

    // High-impact protein zone outranks the earlier fiber zone
    dna.optimization_zones
        .push(OptimizationZone::for_area(OptimizationArea::ProteinIntake, 0.4));
    dna.archetype = EatingArchetype::WeekendWarrior;
    assert_eq!(
        recommender.adaptive_suggestions(&dna, &plans),
        vec![text.text("meal.adapt.protein"), text.text("meal.adapt.weekend_prep")]
    );

    dna.optimization_zones.clear();
    dna.archetype = EatingArchetype::StressDriven;
    assert_eq!(
        recommender.adaptive_suggestions(&dna, &plans),
        vec![text.text("meal.adapt.stress_snacks")]
    );
}

#[test]
fn test_adaptive_suggestions_are_capped() {
    let recommender = AdaptiveMealRecommender::default();
    let text = TextRenderer::english();
    let mut dna = NutritionDna::fallback(instant(2025, 3, 1, 12));
    dna.archetype = EatingArchetype::StressDriven;
    dna.energy_patterns.evening_comfort_eating = 0.8;
    dna.optimization_zones = vec![OptimizationZone::for_area(OptimizationArea::FiberIntake, 0.2)];
    let plans: Vec<_> = (0..3)
        .map(|_| day_plan(vec![planned(MealType::Dinner, "Pasta bake", false, false, 50)]))
        .collect();

    let suggestions = recommender.adaptive_suggestions(&dna, &plans);

    assert_eq!(suggestions.len(), 5);
    assert_eq!(
        suggestions,
        vec![
            text.render("meal.adapt.variety", &[("dish", "Pasta bake".to_owned())]),
            text.text("meal.adapt.energy"),
            text.text("meal.adapt.evening_comfort"),
            text.text("meal.adapt.fiber"),
            text.text("meal.adapt.stress_snacks"),
        ]
    );
}

#[test]
fn test_personalized_plan_covers_requested_days() {
    let mut generator = planner(42);
    let plan = generator.generate(&weight_loss_profile(), &early_bird_logs(), monday(), 7, &[]);

    assert_eq!(plan.source, PlanSource::Personalized);
    assert_eq!(plan.days.len(), 7);
    for (offset, day) in plan.days.iter().enumerate() {
        assert_eq!(day.date, plus_days(monday(), i64::try_from(offset).unwrap()));
        assert_eq!(day.meals.len(), 3);
        assert!(day.totals.calories.abs_diff(1800) <= 2);
        assert!(day.alerts.len() <= 2);
        assert!(day.insights.len() <= 3);
    }
    assert_eq!(plan.daily_insights.len(), 7);
    assert!(plan.weekly_insights.is_some());
    assert!(plan.personalization.is_some());
    assert!(plan.confidence <= 0.95);
    assert!(!plan.intro_summary.is_empty());
    assert!(!plan.shopping_list.categories.is_empty());
    assert_eq!(plan.generated_at, instant(2025, 3, 2, 18));
}

#[test]
fn test_same_seed_yields_identical_plans() {
    let logs = early_bird_logs();
    let first = planner(7).generate(&weight_loss_profile(), &logs, monday(), 5, &[]);
    let second = planner(7).generate(&weight_loss_profile(), &logs, monday(), 5, &[]);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_length_falls_back() {
    let mut generator = planner(1);

    let err = generator
        .try_generate(&weight_loss_profile(), &early_bird_logs(), monday(), 0, &[])
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let empty = generator.generate(&weight_loss_profile(), &[], monday(), 0, &[]);
    assert_eq!(empty.source, PlanSource::Fallback);
    assert_eq!(empty.days.len(), 1);
    assert!((empty.confidence - FALLBACK_PLAN_CONFIDENCE).abs() < 1e-9);

    let long = generator.generate(&weight_loss_profile(), &[], monday(), 45, &[]);
    assert_eq!(long.days.len(), usize::try_from(MAX_PLAN_DAYS).unwrap());
}

#[test]
fn test_fallback_plan_alternates_daily_calories() {
    let generator = planner(1);
    let plan = generator.fallback_plan(&weight_loss_profile(), monday(), 2);

    let first = &plan.days[0];
    let breakfast = &first.meals[&MealType::Breakfast];
    assert_eq!(breakfast.calories, 425);
    assert_eq!(breakfast.protein, 21);
    assert_eq!(breakfast.fats, 14);
    assert_eq!(breakfast.carbs, 53);
    assert!(first.totals.calories.abs_diff(1700) <= 1);
    assert!(plan.days[1].totals.calories.abs_diff(1900) <= 1);
    assert!(plan.intro_summary.contains("weight loss"));
    assert!(plan.personalization.is_none());
}

#[test]
fn test_plan_without_history_uses_fallback_profile() {
    let mut generator = planner(3);
    let plan = generator.generate(&UserProfile::default(), &[], monday(), 3, &[]);

    assert_eq!(plan.source, PlanSource::Personalized);
    assert_eq!(plan.days.len(), 3);
    let metadata = plan.metadata.unwrap();
    let fallback = NutritionDnaGenerator::default().generate(&UserProfile::default(), &[], None);
    assert_eq!(metadata.archetype, fallback.archetype);
    assert!((plan.confidence - 0.3).abs() < 1e-9);
}
