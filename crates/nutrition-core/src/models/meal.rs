// ABOUTME: Meal recommendation models: meal type, cooking difficulty, ingredients
// ABOUTME: MealRecommendation is the render-ready output of the adaptive recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::constants::hours;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// The three main meals in day order
    pub const MAIN: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Parse meal type from string, unknown values become `Snack`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Slot of a meal eaten at `hour`
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= hours::BREAKFAST_START && hour < hours::BREAKFAST_END {
            Self::Breakfast
        } else if hour >= hours::BREAKFAST_END && hour < hours::LUNCH_END {
            Self::Lunch
        } else if hour >= hours::DINNER_START && hour < hours::DINNER_END {
            Self::Dinner
        } else {
            Self::Snack
        }
    }

    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preparation difficulty of a dish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CookingDifficulty {
    /// Minimal preparation
    Easy,
    /// Some cooking
    Medium,
    /// Involved cooking
    Hard,
}

/// Ingredient line of a recommended dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Amount in grams
    pub grams: u32,
    /// Shopping-list category (protein, vegetables, grains, ...)
    pub category: String,
}

/// AI-personalized meal suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecommendation {
    /// Meal slot
    pub meal_type: MealType,
    /// Suggested time
    pub recommended_time: NaiveTime,
    /// Matches the user's appetite at that time
    pub matches_energy_level: bool,
    /// Addresses a typical craving or trigger
    pub addresses_typical_craving: bool,
    /// Fits the user's usual schedule
    pub fits_schedule_pattern: bool,
    /// Supports the stated goal
    pub supports_current_goal: bool,
    /// Dish name
    pub dish_name: String,
    /// Short description
    pub description: String,
    /// Why the dish suits this user
    pub reasoning: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein grams
    pub protein: u32,
    /// Fat grams
    pub fats: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fiber grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>,
    /// Preparation time
    pub prep_time_minutes: u32,
    /// Preparation difficulty
    pub difficulty_level: CookingDifficulty,
    /// Ingredient list
    pub ingredients: Vec<Ingredient>,
}
