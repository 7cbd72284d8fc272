// ABOUTME: Adaptive meal recommender choosing dishes from a static catalog by behavioral fit
// ABOUTME: Scores archetype, appetite, craving, schedule, and goal matches and explains the choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Adaptive Meal Recommender
//!
//! Every catalog dish carries behavioral tags. A dish earns one point for each
//! match flag it satisfies (appetite level, typical craving, schedule fit, goal
//! support) plus one for archetype affinity; the best-scoring dish of the
//! requested meal type wins, catalog order breaking ties. Portions are scaled to
//! the caller's calorie budget when one is given.
//!
//! Reasoning sentences are chosen by a seeded [`PhraseSelector`], so a fixed seed
//! yields identical plans.

use crate::config::intelligence::MealPlanConfig;
use crate::goal::GoalKind;
use crate::text::{PhraseSelector, TextRenderer};
use chrono::{Duration, NaiveDate, NaiveTime};
use nutrition_core::models::{
    ContextSample, CookingDifficulty, DayOfWeek, EatingArchetype, Ingredient, MealRecommendation,
    MealType, NutritionDna, OptimizationArea, PredictionResult, UserProfile,
};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Suggestions returned by [`AdaptiveMealRecommender::adaptive_suggestions`]
const MAX_SUGGESTIONS: usize = 5;

/// Prep minutes that still fit a weekday for time-pressed archetypes
const QUICK_PREP_MINUTES: u32 = 15;

/// Prep minutes that fit an ordinary weekday
const WEEKDAY_PREP_MINUTES: u32 = 30;

/// Prep minutes that fit a weekend day
const WEEKEND_PREP_MINUTES: u32 = 45;

/// Times a dish may recur across recent plans before variety is suggested
const REPEAT_LIMIT: usize = 3;

/// How filling a dish is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heaviness {
    /// Small portion, quick to digest
    Light,
    /// Regular portion
    Moderate,
    /// Large, filling portion
    Hearty,
}

/// Static catalog entry
#[derive(Debug)]
pub struct Dish {
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Meal slot the dish is meant for
    pub meal_type: MealType,
    /// How filling the dish is
    pub heaviness: Heaviness,
    /// Satisfies a comfort craving
    pub comfort: bool,
    /// Reference portion energy
    pub calories: u32,
    /// Reference portion protein grams
    pub protein: u32,
    /// Reference portion fat grams
    pub fats: u32,
    /// Reference portion carbohydrate grams
    pub carbs: u32,
    /// Reference portion fiber grams
    pub fiber: Option<u32>,
    /// Preparation minutes
    pub prep_minutes: u32,
    /// Preparation difficulty
    pub difficulty: CookingDifficulty,
    /// Goals the dish supports
    pub goals: &'static [GoalKind],
    /// Archetypes the dish suits
    pub archetypes: &'static [EatingArchetype],
    /// Ingredients as (name, grams, category)
    pub ingredients: &'static [(&'static str, u32, &'static str)],
}

use EatingArchetype as A;
use GoalKind as G;

/// Dish catalog grouped by meal type in preference order
pub const DISHES: &[Dish] = &[
    Dish {
        name: "Greek yogurt with berries and oats",
        description: "Thick yogurt layered with mixed berries, rolled oats and a drizzle of honey",
        meal_type: MealType::Breakfast,
        heaviness: Heaviness::Light,
        comfort: false,
        calories: 380,
        protein: 24,
        fats: 9,
        carbs: 52,
        fiber: Some(7),
        prep_minutes: 5,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::LateStarterImpulsive, A::BusyProfessional, A::IntuitiveGrazer],
        ingredients: &[
            ("greek yogurt", 200, "dairy"),
            ("mixed berries", 100, "fruits"),
            ("rolled oats", 40, "grains"),
            ("honey", 10, "seasonings"),
        ],
    },
    Dish {
        name: "Vegetable omelette with wholegrain toast",
        description: "Three-egg omelette with spinach, tomato and peppers, served with toast",
        meal_type: MealType::Breakfast,
        heaviness: Heaviness::Moderate,
        comfort: false,
        calories: 520,
        protein: 30,
        fats: 26,
        carbs: 38,
        fiber: Some(6),
        prep_minutes: 15,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::MuscleGain, G::WeightLoss, G::Other],
        archetypes: &[A::EarlyBirdPlanner, A::StructuredBalanced],
        ingredients: &[
            ("eggs", 150, "proteins"),
            ("spinach", 50, "vegetables"),
            ("tomato", 80, "vegetables"),
            ("bell pepper", 60, "vegetables"),
            ("wholegrain bread", 60, "grains"),
        ],
    },
    Dish {
        name: "Cottage cheese pancakes with apple",
        description: "Golden cottage cheese pancakes with baked apple and cinnamon",
        meal_type: MealType::Breakfast,
        heaviness: Heaviness::Hearty,
        comfort: true,
        calories: 560,
        protein: 32,
        fats: 18,
        carbs: 66,
        fiber: Some(4),
        prep_minutes: 25,
        difficulty: CookingDifficulty::Medium,
        goals: &[G::MuscleGain, G::Other],
        archetypes: &[A::WeekendWarrior, A::SocialEater, A::StressDriven],
        ingredients: &[
            ("cottage cheese", 200, "dairy"),
            ("eggs", 50, "proteins"),
            ("flour", 40, "grains"),
            ("apple", 150, "fruits"),
            ("cinnamon", 2, "seasonings"),
        ],
    },
    Dish {
        name: "Overnight chia pudding",
        description: "Chia seeds soaked in milk overnight with banana and walnuts",
        meal_type: MealType::Breakfast,
        heaviness: Heaviness::Light,
        comfort: false,
        calories: 410,
        protein: 14,
        fats: 20,
        carbs: 44,
        fiber: Some(12),
        prep_minutes: 5,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::EarlyBirdPlanner, A::BusyProfessional],
        ingredients: &[
            ("chia seeds", 30, "grains"),
            ("milk", 200, "dairy"),
            ("banana", 100, "fruits"),
            ("walnuts", 15, "other"),
        ],
    },
    Dish {
        name: "Chicken and quinoa bowl",
        description: "Grilled chicken breast over quinoa with roasted vegetables and tahini",
        meal_type: MealType::Lunch,
        heaviness: Heaviness::Hearty,
        comfort: false,
        calories: 680,
        protein: 48,
        fats: 20,
        carbs: 72,
        fiber: Some(9),
        prep_minutes: 25,
        difficulty: CookingDifficulty::Medium,
        goals: &[G::MuscleGain, G::Other],
        archetypes: &[A::StructuredBalanced, A::EarlyBirdPlanner, A::WeekendWarrior],
        ingredients: &[
            ("chicken breast", 180, "proteins"),
            ("quinoa", 80, "grains"),
            ("zucchini", 100, "vegetables"),
            ("carrot", 80, "vegetables"),
            ("tahini", 15, "seasonings"),
        ],
    },
    Dish {
        name: "Lentil soup with rye bread",
        description: "Warming red lentil soup with carrots and cumin, served with rye bread",
        meal_type: MealType::Lunch,
        heaviness: Heaviness::Moderate,
        comfort: true,
        calories: 560,
        protein: 28,
        fats: 10,
        carbs: 84,
        fiber: Some(16),
        prep_minutes: 30,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::StressDriven, A::IntuitiveGrazer],
        ingredients: &[
            ("red lentils", 90, "proteins"),
            ("carrot", 80, "vegetables"),
            ("onion", 60, "vegetables"),
            ("rye bread", 60, "grains"),
            ("cumin", 2, "seasonings"),
        ],
    },
    Dish {
        name: "Tuna and bean salad wrap",
        description: "Wholewheat wrap filled with tuna, white beans, cucumber and greens",
        meal_type: MealType::Lunch,
        heaviness: Heaviness::Moderate,
        comfort: false,
        calories: 540,
        protein: 40,
        fats: 14,
        carbs: 60,
        fiber: Some(10),
        prep_minutes: 10,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::MuscleGain, G::Other],
        archetypes: &[A::BusyProfessional, A::LateStarterImpulsive],
        ingredients: &[
            ("canned tuna", 120, "proteins"),
            ("white beans", 100, "proteins"),
            ("cucumber", 80, "vegetables"),
            ("salad greens", 40, "vegetables"),
            ("wholewheat tortilla", 70, "grains"),
        ],
    },
    Dish {
        name: "Shared mezze plate",
        description: "Hummus, falafel, tabbouleh and pita, easy to share at the table",
        meal_type: MealType::Lunch,
        heaviness: Heaviness::Moderate,
        comfort: true,
        calories: 620,
        protein: 22,
        fats: 26,
        carbs: 74,
        fiber: Some(13),
        prep_minutes: 20,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::Other],
        archetypes: &[A::SocialEater, A::IntuitiveGrazer],
        ingredients: &[
            ("hummus", 100, "proteins"),
            ("falafel", 120, "proteins"),
            ("bulgur", 50, "grains"),
            ("parsley", 30, "vegetables"),
            ("pita bread", 60, "grains"),
        ],
    },
    Dish {
        name: "Baked salmon with vegetables",
        description: "Oven-baked salmon fillet with broccoli, green beans and lemon",
        meal_type: MealType::Dinner,
        heaviness: Heaviness::Moderate,
        comfort: false,
        calories: 560,
        protein: 40,
        fats: 28,
        carbs: 30,
        fiber: Some(8),
        prep_minutes: 30,
        difficulty: CookingDifficulty::Medium,
        goals: &[G::WeightLoss, G::MuscleGain, G::Other],
        archetypes: &[A::EarlyBirdPlanner, A::StructuredBalanced],
        ingredients: &[
            ("salmon fillet", 160, "proteins"),
            ("broccoli", 150, "vegetables"),
            ("green beans", 100, "vegetables"),
            ("lemon", 30, "fruits"),
            ("olive oil", 10, "seasonings"),
        ],
    },
    Dish {
        name: "Turkey chili",
        description: "Slow-simmered turkey chili with beans and peppers, topped with yogurt",
        meal_type: MealType::Dinner,
        heaviness: Heaviness::Hearty,
        comfort: true,
        calories: 640,
        protein: 46,
        fats: 18,
        carbs: 66,
        fiber: Some(15),
        prep_minutes: 40,
        difficulty: CookingDifficulty::Medium,
        goals: &[G::MuscleGain, G::Other],
        archetypes: &[A::StressDriven, A::WeekendWarrior, A::SocialEater],
        ingredients: &[
            ("ground turkey", 160, "proteins"),
            ("kidney beans", 120, "proteins"),
            ("bell pepper", 100, "vegetables"),
            ("canned tomatoes", 200, "vegetables"),
            ("greek yogurt", 50, "dairy"),
            ("chili spice", 5, "seasonings"),
        ],
    },
    Dish {
        name: "Tofu and vegetable stir-fry",
        description: "Crispy tofu stir-fried with mixed vegetables over brown rice",
        meal_type: MealType::Dinner,
        heaviness: Heaviness::Moderate,
        comfort: false,
        calories: 520,
        protein: 28,
        fats: 18,
        carbs: 62,
        fiber: Some(9),
        prep_minutes: 15,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::BusyProfessional, A::LateStarterImpulsive, A::IntuitiveGrazer],
        ingredients: &[
            ("firm tofu", 150, "proteins"),
            ("mixed stir-fry vegetables", 200, "vegetables"),
            ("brown rice", 70, "grains"),
            ("soy sauce", 15, "seasonings"),
        ],
    },
    Dish {
        name: "Light vegetable soup with egg",
        description: "Clear vegetable broth with a poached egg, gentle on a late evening",
        meal_type: MealType::Dinner,
        heaviness: Heaviness::Light,
        comfort: true,
        calories: 340,
        protein: 18,
        fats: 12,
        carbs: 36,
        fiber: Some(7),
        prep_minutes: 20,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::LateStarterImpulsive, A::StressDriven],
        ingredients: &[
            ("eggs", 50, "proteins"),
            ("potato", 100, "vegetables"),
            ("carrot", 60, "vegetables"),
            ("celery", 50, "vegetables"),
            ("dill", 5, "seasonings"),
        ],
    },
    Dish {
        name: "Apple with peanut butter",
        description: "Sliced apple with a spoon of peanut butter",
        meal_type: MealType::Snack,
        heaviness: Heaviness::Light,
        comfort: true,
        calories: 220,
        protein: 6,
        fats: 12,
        carbs: 24,
        fiber: Some(5),
        prep_minutes: 2,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::WeightLoss, G::Other],
        archetypes: &[A::StressDriven, A::BusyProfessional, A::IntuitiveGrazer],
        ingredients: &[("apple", 180, "fruits"), ("peanut butter", 20, "other")],
    },
    Dish {
        name: "Kefir with nuts",
        description: "A glass of kefir with a handful of almonds",
        meal_type: MealType::Snack,
        heaviness: Heaviness::Light,
        comfort: false,
        calories: 240,
        protein: 14,
        fats: 14,
        carbs: 14,
        fiber: Some(3),
        prep_minutes: 1,
        difficulty: CookingDifficulty::Easy,
        goals: &[G::MuscleGain, G::WeightLoss, G::Other],
        archetypes: &[A::EarlyBirdPlanner, A::StructuredBalanced, A::LateStarterImpulsive],
        ingredients: &[("kefir", 250, "dairy"), ("almonds", 20, "other")],
    },
];

/// Situation a meal is recommended for
#[derive(Debug, Clone, Default)]
pub struct MealContext {
    /// Goal the meal should support
    pub goal: Option<GoalKind>,
    /// Calorie budget for this meal; reference portion when absent
    pub calorie_budget: Option<f64>,
    /// Context of the target day
    pub sample: Option<ContextSample>,
    /// Predictions for the target day
    pub predictions: Vec<PredictionResult>,
}

impl MealContext {
    /// Context for a goal
    #[must_use]
    pub fn for_goal(goal: GoalKind) -> Self {
        Self {
            goal: Some(goal),
            ..Self::default()
        }
    }

    /// Attach the day's context sample
    #[must_use]
    pub fn with_sample(mut self, sample: Option<ContextSample>) -> Self {
        self.sample = sample;
        self
    }

    /// Attach the day's predictions
    #[must_use]
    pub fn with_predictions(mut self, predictions: Vec<PredictionResult>) -> Self {
        self.predictions = predictions;
        self
    }

    fn cold_weather(&self) -> bool {
        self.sample.as_ref().is_some_and(|sample| {
            let weather = sample.weather_tag();
            ["cold", "rain", "snow"].iter().any(|w| weather.contains(w))
        })
    }

    fn predicts_craving(&self) -> bool {
        self.predictions.iter().any(|p| {
            p.probability > 0.5
                && ["comfort", "craving", "stress"]
                    .iter()
                    .any(|tag| p.prediction_type.contains(tag))
        })
    }
}

/// Match flags of a dish against a user and day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DishFit {
    energy: bool,
    craving: bool,
    schedule: bool,
    goal: bool,
    archetype: bool,
}

impl DishFit {
    fn score(self) -> usize {
        [self.energy, self.craving, self.schedule, self.goal, self.archetype]
            .into_iter()
            .filter(|hit| *hit)
            .count()
    }
}

/// Recommends dishes that fit a user's eating behavior
#[derive(Debug, Clone, Default)]
pub struct AdaptiveMealRecommender {
    config: MealPlanConfig,
    text: TextRenderer,
    phrases: PhraseSelector,
}

impl AdaptiveMealRecommender {
    /// Recommender with the given calorie split, English text and seed 0
    #[must_use]
    pub fn new(config: MealPlanConfig) -> Self {
        Self {
            config,
            text: TextRenderer::default(),
            phrases: PhraseSelector::default(),
        }
    }

    /// Render reasoning through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Choose reasoning phrases with `phrases`
    #[must_use]
    pub fn with_phrases(mut self, phrases: PhraseSelector) -> Self {
        self.phrases = phrases;
        self
    }

    /// Best catalog dish for `meal_type` on `date`
    pub fn recommend_meal(
        &mut self,
        dna: &NutritionDna,
        meal_type: MealType,
        date: NaiveDate,
        context: &MealContext,
    ) -> Option<MealRecommendation> {
        let day = DayOfWeek::of(date);
        let goal = context.goal.unwrap_or(GoalKind::Other);

        let (dish, fit) = DISHES
            .iter()
            .filter(|dish| dish.meal_type == meal_type)
            .map(|dish| (dish, Self::fit(dish, dna, day, goal, context)))
            .fold(None::<(&Dish, DishFit)>, |best, candidate| match best {
                Some(current) if current.1.score() >= candidate.1.score() => Some(current),
                _ => Some(candidate),
            })?;

        debug!(
            meal = %meal_type,
            dish = dish.name,
            score = fit.score(),
            "Selected catalog dish"
        );

        let recommended_time = Self::recommended_time(dna, meal_type, day);
        let reasoning = self.reasoning(fit, dna, recommended_time);
        let factor = context
            .calorie_budget
            .filter(|budget| *budget > 0.0)
            .map_or(1.0, |budget| budget / f64::from(dish.calories));

        Some(MealRecommendation {
            meal_type,
            recommended_time,
            matches_energy_level: fit.energy,
            addresses_typical_craving: fit.craving,
            fits_schedule_pattern: fit.schedule,
            supports_current_goal: fit.goal,
            dish_name: dish.name.to_owned(),
            description: dish.description.to_owned(),
            reasoning,
            calories: scale(dish.calories, factor),
            protein: scale(dish.protein, factor),
            fats: scale(dish.fats, factor),
            carbs: scale(dish.carbs, factor),
            fiber: dish.fiber.map(|fiber| scale(fiber, factor)),
            prep_time_minutes: dish.prep_minutes,
            difficulty_level: dish.difficulty,
            ingredients: dish
                .ingredients
                .iter()
                .map(|(name, grams, category)| Ingredient {
                    name: (*name).to_owned(),
                    grams: scale(*grams, factor),
                    category: (*category).to_owned(),
                })
                .collect(),
        })
    }

    /// Breakfast, lunch and dinner for `date`, splitting the profile's daily target
    pub fn daily_plan(
        &mut self,
        dna: &NutritionDna,
        date: NaiveDate,
        context: &MealContext,
        profile: &UserProfile,
    ) -> BTreeMap<MealType, MealRecommendation> {
        let target = profile
            .calorie_target()
            .unwrap_or(self.config.default_daily_calories);
        let goal = context
            .goal
            .unwrap_or_else(|| GoalKind::from_profile_goal(profile.goal.as_deref()));

        let mut plan = BTreeMap::new();
        for meal_type in MealType::MAIN {
            let meal_context = MealContext {
                goal: Some(goal),
                calorie_budget: Some(target * self.share(meal_type)),
                ..context.clone()
            };
            if let Some(meal) = self.recommend_meal(dna, meal_type, date, &meal_context) {
                plan.insert(meal_type, meal);
            }
        }
        plan
    }

    /// Adjustments suggested after looking at recently generated plans
    #[must_use]
    pub fn adaptive_suggestions(
        &self,
        dna: &NutritionDna,
        recent_plans: &[BTreeMap<MealType, MealRecommendation>],
    ) -> Vec<String> {
        let mut suggestions = Vec::new();
        let meals: Vec<&MealRecommendation> =
            recent_plans.iter().flat_map(BTreeMap::values).collect();

        if meals.is_empty() {
            suggestions.push(self.text.text("meal.adapt.start"));
        }

        let mut repeats: HashMap<&str, usize> = HashMap::new();
        for meal in &meals {
            *repeats.entry(meal.dish_name.as_str()).or_default() += 1;
        }
        let mut repeated: Vec<(&str, usize)> = repeats
            .into_iter()
            .filter(|(_, count)| *count >= REPEAT_LIMIT)
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        if let Some((dish, _)) = repeated.first() {
            suggestions.push(
                self.text
                    .render("meal.adapt.variety", &[("dish", (*dish).to_owned())]),
            );
        }

        let mismatched = meals.iter().filter(|m| !m.matches_energy_level).count();
        if !meals.is_empty() && mismatched * 2 > meals.len() {
            suggestions.push(self.text.text("meal.adapt.energy"));
        }

        let comfort_dinner = meals
            .iter()
            .any(|m| m.meal_type == MealType::Dinner && m.addresses_typical_craving);
        if dna.energy_patterns.evening_comfort_eating > 0.5 && !comfort_dinner {
            suggestions.push(self.text.text("meal.adapt.evening_comfort"));
        }

        let slow = meals
            .iter()
            .filter(|m| m.prep_time_minutes > WEEKDAY_PREP_MINUTES)
            .count();
        if dna.archetype == EatingArchetype::BusyProfessional && slow > 0 {
            suggestions.push(self.text.text("meal.adapt.quick_prep"));
        }

        match dna.top_zone().map(|zone| zone.area) {
            Some(OptimizationArea::FiberIntake) => {
                suggestions.push(self.text.text("meal.adapt.fiber"));
            }
            Some(OptimizationArea::ProteinIntake) => {
                suggestions.push(self.text.text("meal.adapt.protein"));
            }
            _ => {}
        }

        match dna.archetype {
            EatingArchetype::WeekendWarrior => {
                suggestions.push(self.text.text("meal.adapt.weekend_prep"));
            }
            EatingArchetype::StressDriven => {
                suggestions.push(self.text.text("meal.adapt.stress_snacks"));
            }
            _ => {}
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    fn share(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.config.breakfast_share,
            MealType::Lunch => self.config.lunch_share,
            MealType::Dinner => self.config.dinner_share,
            MealType::Snack => 0.0,
        }
    }

    fn fit(
        dish: &Dish,
        dna: &NutritionDna,
        day: DayOfWeek,
        goal: GoalKind,
        context: &MealContext,
    ) -> DishFit {
        let energy = &dna.energy_patterns;
        let craving_expected = energy.evening_comfort_eating > 0.5
            || context.predicts_craving()
            || (context.cold_weather() && dish.heaviness != Heaviness::Light);

        DishFit {
            energy: dish.heaviness == Self::target_heaviness(dna, dish.meal_type),
            craving: dish.comfort && craving_expected,
            schedule: dish.prep_minutes <= Self::prep_budget(dna.archetype, day),
            goal: dish.goals.contains(&goal),
            archetype: dish.archetypes.contains(&dna.archetype),
        }
    }

    fn target_heaviness(dna: &NutritionDna, meal_type: MealType) -> Heaviness {
        let energy = &dna.energy_patterns;
        match meal_type {
            MealType::Breakfast if energy.morning_appetite < 0.3 => Heaviness::Light,
            MealType::Breakfast if energy.morning_appetite > 0.6 => Heaviness::Hearty,
            MealType::Lunch if energy.afternoon_hunger > 0.6 => Heaviness::Hearty,
            MealType::Lunch if energy.afternoon_hunger < 0.3 => Heaviness::Light,
            MealType::Dinner if dna.temporal_patterns.late_night_eating_frequency > 0.3 => {
                Heaviness::Light
            }
            MealType::Snack => Heaviness::Light,
            _ => Heaviness::Moderate,
        }
    }

    const fn prep_budget(archetype: EatingArchetype, day: DayOfWeek) -> u32 {
        if day.is_weekend() {
            WEEKEND_PREP_MINUTES
        } else if matches!(
            archetype,
            EatingArchetype::BusyProfessional | EatingArchetype::LateStarterImpulsive
        ) {
            QUICK_PREP_MINUTES
        } else {
            WEEKDAY_PREP_MINUTES
        }
    }

    fn recommended_time(dna: &NutritionDna, meal_type: MealType, day: DayOfWeek) -> NaiveTime {
        let temporal = &dna.temporal_patterns;
        match meal_type {
            MealType::Breakfast if day.is_weekend() => {
                let shift = (temporal.weekend_shift_hours * 60.0).round() as i64;
                temporal
                    .preferred_breakfast_time
                    .overflowing_add_signed(Duration::minutes(shift))
                    .0
            }
            MealType::Breakfast => temporal.preferred_breakfast_time,
            MealType::Lunch => temporal.preferred_lunch_time,
            MealType::Dinner => temporal.preferred_dinner_time,
            MealType::Snack => dna.energy_patterns.peak_hunger_time,
        }
    }

    fn reasoning(&mut self, fit: DishFit, dna: &NutritionDna, time: NaiveTime) -> String {
        let time = time.format("%H:%M").to_string();
        let archetype = self
            .text
            .text(&format!("archetype.{}.name", dna.archetype.as_str()));

        let mut pools: Vec<&[&str]> = Vec::new();
        if fit.archetype {
            pools.push(&["meal.reason.archetype.0", "meal.reason.archetype.1"]);
        }
        if fit.energy {
            pools.push(&["meal.reason.energy.0", "meal.reason.energy.1"]);
        }
        if fit.craving {
            pools.push(&["meal.reason.craving.0", "meal.reason.craving.1"]);
        }
        if fit.schedule {
            pools.push(&["meal.reason.schedule.0", "meal.reason.schedule.1"]);
        }
        if fit.goal {
            pools.push(&["meal.reason.goal.0", "meal.reason.goal.1"]);
        }
        if pools.is_empty() {
            pools.push(&["meal.reason.balanced.0", "meal.reason.balanced.1"]);
        }

        let args = [("time", time), ("archetype", archetype)];
        pools
            .into_iter()
            .filter_map(|pool| self.phrases.pick(pool))
            .map(|key| self.text.render(key, &args))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round().max(0.0) as u32
}
