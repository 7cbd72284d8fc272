// ABOUTME: Intelligence module configuration for behavioral nutrition analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for every analytics component. All defaults
//! reproduce the reference thresholds; `from_environment` applies
//! `NUTRITION_DNA_*` overrides on top and validates the result.
//!
//! # Module Structure
//!
//! - `generator` - DNA refresh policy, blending and retention
//! - `prediction` - Behavior predictor ranking limits and bounds
//! - `context` - Contextual analyzer sample minimums and output limits
//! - `insights` - Insight limits and the meal-plan calorie split

pub mod context;
pub mod error;
pub mod generator;
pub mod insights;
pub mod prediction;

pub use context::ContextConfig;
pub use error::ConfigError;
pub use generator::{BlendConfig, ConfidenceScaling, GeneratorConfig, UpdatePolicy};
pub use insights::{InsightConfig, MealPlanConfig};
pub use prediction::PredictionConfig;

use nutrition_core::constants::env_config::INTELLIGENCE_PREFIX;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How time-of-day means and deviations are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStatistics {
    /// Arithmetic mean of minutes since midnight
    #[default]
    Linear,
    /// Circular mean on the 24-hour clock; 23:30 and 00:30 average to midnight
    Circular,
}

impl FromStr for TimeStatistics {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "circular" => Ok(Self::Circular),
            other => Err(ConfigError::Parse(format!(
                "Unknown time statistics mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for TimeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Circular => f.write_str("circular"),
        }
    }
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// DNA generation and refresh
    pub generator: GeneratorConfig,
    /// Behavior prediction
    pub prediction: PredictionConfig,
    /// Contextual correlation
    pub context: ContextConfig,
    /// Daily and weekly insights
    pub insights: InsightConfig,
    /// Meal plan calorie split
    pub meal_plan: MealPlanConfig,
    /// Time-of-day statistics mode
    #[serde(default)]
    pub time_statistics: TimeStatistics,
}

impl IntelligenceConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_environment() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let update = &self.generator.update;
        if update.minor_patch_max_days > update.regenerate_after_days {
            return Err(ConfigError::InvalidRange(
                "minor_patch_max_days must be <= regenerate_after_days",
            ));
        }
        if update.regenerate_below_confidence > update.minor_patch_min_confidence {
            return Err(ConfigError::InvalidRange(
                "regenerate_below_confidence must be <= minor_patch_min_confidence",
            ));
        }
        for value in [
            update.minor_patch_min_confidence,
            update.regenerate_below_confidence,
            update.minor_confidence_step,
            self.generator.blend.existing_weight_factor,
            self.generator.blend.archetype_replace_confidence,
            self.prediction.trigger_probability_threshold,
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(
                    "Confidence thresholds and blend factors must be within [0, 1]",
                ));
            }
        }
        if self.generator.blend.retention_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "retention_capacity must be at least 1",
            ));
        }
        if self.generator.confidence.full_log_count == 0
            || self.generator.confidence.full_day_coverage == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Confidence saturation points must be positive",
            ));
        }

        let prediction = &self.prediction;
        if prediction.min_success_probability >= prediction.max_success_probability {
            return Err(ConfigError::InvalidRange(
                "min_success_probability must be < max_success_probability",
            ));
        }
        if prediction.short_timeframe_days >= prediction.long_timeframe_days {
            return Err(ConfigError::InvalidRange(
                "short_timeframe_days must be < long_timeframe_days",
            ));
        }
        if prediction.max_predictions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_predictions must be at least 1",
            ));
        }

        let context = &self.context;
        if context.min_sensitivity >= context.max_sensitivity {
            return Err(ConfigError::InvalidRange(
                "min_sensitivity must be < max_sensitivity",
            ));
        }
        if context.min_weather_samples == 0 || context.min_bucket_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Bucket sample minimums must be at least 1",
            ));
        }

        if self.insights.recent_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_window_days must be positive",
            ));
        }

        self.meal_plan.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(suffix: &str, target: &mut T) -> Result<(), ConfigError> {
        let name = format!("{INTELLIGENCE_PREFIX}{suffix}");
        if let Ok(val) = env::var(&name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Generator overrides
        Self::apply_env_var(
            "MINOR_PATCH_MAX_DAYS",
            &mut self.generator.update.minor_patch_max_days,
        )?;
        Self::apply_env_var(
            "MINOR_PATCH_MIN_CONFIDENCE",
            &mut self.generator.update.minor_patch_min_confidence,
        )?;
        Self::apply_env_var(
            "REGENERATE_AFTER_DAYS",
            &mut self.generator.update.regenerate_after_days,
        )?;
        Self::apply_env_var(
            "REGENERATE_BELOW_CONFIDENCE",
            &mut self.generator.update.regenerate_below_confidence,
        )?;
        Self::apply_env_var(
            "BLEND_WEIGHT_FACTOR",
            &mut self.generator.blend.existing_weight_factor,
        )?;
        Self::apply_env_var(
            "ARCHETYPE_REPLACE_CONFIDENCE",
            &mut self.generator.blend.archetype_replace_confidence,
        )?;
        Self::apply_env_var(
            "RETENTION_CAPACITY",
            &mut self.generator.blend.retention_capacity,
        )?;

        // Prediction overrides
        Self::apply_env_var("MAX_PREDICTIONS", &mut self.prediction.max_predictions)?;
        Self::apply_env_var("MIN_RECENT_LOGS", &mut self.prediction.min_recent_logs)?;
        Self::apply_env_var(
            "TRIGGER_THRESHOLD",
            &mut self.prediction.trigger_probability_threshold,
        )?;

        // Context overrides
        Self::apply_env_var(
            "MIN_WEATHER_SAMPLES",
            &mut self.context.min_weather_samples,
        )?;
        Self::apply_env_var("MIN_BUCKET_SAMPLES", &mut self.context.min_bucket_samples)?;
        Self::apply_env_var(
            "MIN_SENSITIVITY_LOGS",
            &mut self.context.min_sensitivity_logs,
        )?;

        // Insight and plan overrides
        Self::apply_env_var(
            "MAX_DAILY_INSIGHTS",
            &mut self.insights.max_daily_insights,
        )?;
        Self::apply_env_var(
            "DEFAULT_DAILY_CALORIES",
            &mut self.meal_plan.default_daily_calories,
        )?;

        Self::apply_env_var("TIME_STATISTICS", &mut self.time_statistics)?;

        Ok(self)
    }
}
