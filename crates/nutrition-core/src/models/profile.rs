// ABOUTME: Read-only user profile projection consumed by the analytics core
// ABOUTME: Demographics, goal, calorie target, and preference lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use serde::{Deserialize, Serialize};

/// Profile fields considered when scoring profile completeness
const COMPLETENESS_FIELDS: usize = 5;

/// User profile projection, owned by an external profile collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Self-reported gender
    pub gender: Option<String>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level label (sedentary, moderate, active, ...)
    pub activity_level: Option<String>,
    /// Free-text goal, e.g. "weight_loss" or "muscle gain"
    pub goal: Option<String>,
    /// Daily calorie target in kcal
    pub daily_calories_target: Option<f64>,
    /// Dietary preferences (vegetarian, low-carb, ...)
    pub dietary_preferences: Vec<String>,
    /// Known allergies
    pub allergies: Vec<String>,
}

impl UserProfile {
    /// Fraction of the key profile fields that are filled in.
    ///
    /// Key fields are age, gender, weight, goal, and calorie target. Empty strings
    /// and zero values count as missing.
    #[must_use]
    pub fn completeness(&self) -> f64 {
        let present = [
            self.age.is_some_and(|age| age > 0),
            self.gender.as_deref().is_some_and(|g| !g.trim().is_empty()),
            self.weight_kg.is_some_and(|w| w > 0.0),
            self.goal.as_deref().is_some_and(|g| !g.trim().is_empty()),
            self.daily_calories_target.is_some_and(|t| t > 0.0),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count();

        present as f64 / COMPLETENESS_FIELDS as f64
    }

    /// Positive calorie target, if any
    #[must_use]
    pub fn calorie_target(&self) -> Option<f64> {
        self.daily_calories_target.filter(|t| *t > 0.0)
    }
}
