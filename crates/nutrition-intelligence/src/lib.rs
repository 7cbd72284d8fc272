// ABOUTME: Behavioral nutrition analytics engine: Nutrition DNA, predictions, context, insights, plans
// ABOUTME: Synchronous, pure analytics over meal-log batches with injectable text and clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Turns a user's meal-log history into a behavioral profile (Nutrition DNA) and
//! everything derived from it.
//!
//! ## Modules
//!
//! - **temporal_patterns** / **psychological_profile**: pattern extraction and archetype rules
//! - **dna_generator**: profile assembly, scoring, refresh strategy, blending
//! - **behavior_predictor**: ranked near-term predictions and goal success
//! - **contextual_analyzer**: weather, time, social and location correlations
//! - **insights**: daily and weekly narrative insights
//! - **meal_recommender** / **food_plan**: personalized meals and multi-day plans
//! - **visualization**: render-ready chart payloads
//! - **text**: keyed templates behind an injectable translator

/// Configuration for every analytic component
pub mod config;

/// Numeric helpers shared by the analyzers
pub mod statistics;

/// Parsed views over log batches
pub mod log_view;

/// Free-text goal classification
pub mod goal;

/// Keyed templates and seeded phrase selection
pub mod text;

/// Meal timing, weekend shift and energy patterns
pub mod temporal_patterns;

/// Archetype, social pattern, trigger and optimization-zone detection
pub mod psychological_profile;

/// Nutrition DNA generation and refresh
pub mod dna_generator;

/// Context correlation and context-aware advice
pub mod contextual_analyzer;

/// Near-term behavior prediction
pub mod behavior_predictor;

/// Daily and weekly insights
pub mod insights;

/// Dish recommendations from behavioral fit
pub mod meal_recommender;

/// Multi-day personalized food plans
pub mod food_plan;

/// Chart payloads for presentation layers
pub mod visualization;

pub use behavior_predictor::{BehaviorPredictor, GoalSuccess};
pub use config::IntelligenceConfig;
pub use contextual_analyzer::{ContextAnalysis, ContextualAnalyzer};
pub use dna_generator::{NutritionDnaGenerator, UpdateStrategy, UserBatch};
pub use food_plan::{FoodPlan, FoodPlanGenerator};
pub use goal::GoalKind;
pub use insights::PersonalizedInsightsEngine;
pub use meal_recommender::{AdaptiveMealRecommender, MealContext};
pub use psychological_profile::PsychologicalProfileAnalyzer;
pub use temporal_patterns::TemporalPatternAnalyzer;
pub use text::{PhraseSelector, TextRenderer, Translator};
pub use visualization::{NutritionReport, NutritionVisualizer};
