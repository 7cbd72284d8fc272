// ABOUTME: Goal classification from free-text profile goals
// ABOUTME: Tagged union replacing nested substring checks; recognises English and Russian stems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use serde::{Deserialize, Serialize};

/// Stems identifying a weight-loss goal
const WEIGHT_LOSS_STEMS: &[&str] = &["weight loss", "lose weight", "fat loss", "похуд", "снижение"];

/// Stems identifying a muscle-gain goal
const MUSCLE_GAIN_STEMS: &[&str] = &["muscle", "bulk", "мышц", "набор"];

/// Broad goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Reduce body weight
    WeightLoss,
    /// Gain muscle mass
    MuscleGain,
    /// Maintenance, general health, or unrecognised
    Other,
}

impl GoalKind {
    /// Classify a free-text goal. `_` and `-` are treated as spaces.
    #[must_use]
    pub fn parse(goal: &str) -> Self {
        let normalized = goal.to_lowercase().replace(['_', '-'], " ");
        if WEIGHT_LOSS_STEMS.iter().any(|stem| normalized.contains(stem)) {
            Self::WeightLoss
        } else if MUSCLE_GAIN_STEMS.iter().any(|stem| normalized.contains(stem)) {
            Self::MuscleGain
        } else {
            Self::Other
        }
    }

    /// Classify an optional goal; a missing goal is `Other`
    #[must_use]
    pub fn from_profile_goal(goal: Option<&str>) -> Self {
        goal.map_or(Self::Other, Self::parse)
    }
}
