// ABOUTME: Insights engine configuration: output limits and the recent-log window
// ABOUTME: Also carries the meal-plan calorie split used by the recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Insights engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Daily insights returned
    pub max_daily_insights: usize,
    /// Weekly micro-goals returned
    pub max_micro_goals: usize,
    /// Weekly opportunity moments returned
    pub max_opportunities: usize,
    /// Calendar days, ending with the target date, considered "recent"
    pub recent_window_days: i64,
    /// Recent logs needed before deviation checks run
    pub min_recent_logs: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_daily_insights: 5,
            max_micro_goals: 4,
            max_opportunities: 5,
            recent_window_days: 3,
            min_recent_logs: 3,
        }
    }
}

/// Meal plan calorie split and fallback target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Daily calories used when the profile has no target
    pub default_daily_calories: f64,
    /// Breakfast share of the daily target
    pub breakfast_share: f64,
    /// Lunch share of the daily target
    pub lunch_share: f64,
    /// Dinner share of the daily target
    pub dinner_share: f64,
    /// Alerts shown per planned day
    pub max_day_alerts: usize,
    /// Insights shown per planned day
    pub max_day_insights: usize,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            default_daily_calories: 2000.0,
            breakfast_share: 0.25,
            lunch_share: 0.40,
            dinner_share: 0.35,
            max_day_alerts: 2,
            max_day_insights: 3,
        }
    }
}

impl MealPlanConfig {
    /// Validate that the meal shares sum to one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.breakfast_share + self.lunch_share + self.dinner_share;
        if (total - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Meal shares must sum to 1.0",
            ));
        }
        if self.default_daily_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_daily_calories must be positive",
            ));
        }
        Ok(())
    }
}
