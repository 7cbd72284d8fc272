// ABOUTME: Core data models for the Nutrition DNA analytics workspace
// ABOUTME: Re-exports meal logs, profiles, context samples, the DNA aggregate, predictions, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Data Models
//!
//! - `FoodLogEntry`: one logged meal with already-computed macros
//! - `UserProfile`: read-only profile projection
//! - `ContextSample`: externally supplied context for a date
//! - `NutritionDna`: the behavioral profile aggregate and its sub-patterns
//! - `PredictionResult`: ranked near-term behavior prediction
//! - `WeeklyInsight`: per-week narrative aggregate
//! - `MealRecommendation`: a single suggested dish

mod context;
mod day;
mod dna;
mod food_log;
mod insight;
mod meal;
mod prediction;
mod profile;

pub use context::ContextSample;
pub use day::DayOfWeek;
pub use dna::{
    Difficulty, EatingArchetype, EnergyPattern, Impact, NutritionDna, OptimizationArea,
    OptimizationZone, SocialEatingPattern, SuccessPattern, TemporalPattern, Trigger,
    FALLBACK_CONFIDENCE,
};
pub use food_log::{FoodLogEntry, Macros};
pub use insight::WeeklyInsight;
pub use meal::{CookingDifficulty, Ingredient, MealRecommendation, MealType};
pub use prediction::PredictionResult;
pub use profile::UserProfile;
