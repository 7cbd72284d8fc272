// ABOUTME: Configuration module for nutrition-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

/// Intelligence module configuration (generator, prediction, context, insights)
pub mod intelligence;

pub use intelligence::{
    BlendConfig, ConfidenceScaling, ConfigError, ContextConfig, GeneratorConfig, InsightConfig,
    IntelligenceConfig, MealPlanConfig, PredictionConfig, TimeStatistics, UpdatePolicy,
};
