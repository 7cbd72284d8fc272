// ABOUTME: Behavior predictor configuration: ranking limits and source thresholds
// ABOUTME: Goal-success bounds and timeframe dampening factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use serde::{Deserialize, Serialize};

/// Behavior predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Predictions kept after ranking
    pub max_predictions: usize,
    /// Recent logs needed before the continuation source runs
    pub min_recent_logs: usize,
    /// Trigger probability needed for a trigger-day prediction
    pub trigger_probability_threshold: f64,
    /// Lower bound of the goal-success probability
    pub min_success_probability: f64,
    /// Upper bound of the goal-success probability
    pub max_success_probability: f64,
    /// Timeframes longer than this many days are dampened
    pub long_timeframe_days: u32,
    /// Timeframes shorter than this many days are boosted
    pub short_timeframe_days: u32,
    /// Recommendations returned by the predictive recommender
    pub max_recommendations: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_predictions: 8,
            min_recent_logs: 5,
            trigger_probability_threshold: 0.5,
            min_success_probability: 0.1,
            max_success_probability: 0.95,
            long_timeframe_days: 60,
            short_timeframe_days: 14,
            max_recommendations: 5,
        }
    }
}
