// ABOUTME: Contextual analyzer configuration: bucket sample minimums and output limits
// ABOUTME: Sensitivity clamp bounds keep the score away from full certainty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use serde::{Deserialize, Serialize};

/// Contextual analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Samples needed for a weather bucket
    pub min_weather_samples: usize,
    /// Samples needed for social and location buckets
    pub min_bucket_samples: usize,
    /// Logs needed before sensitivity is measured
    pub min_sensitivity_logs: usize,
    /// Strongest influences reported
    pub max_influences: usize,
    /// Contextual recommendations returned
    pub max_recommendations: usize,
    /// Contextual insights returned
    pub max_insights: usize,
    /// Lower clamp of the sensitivity score
    pub min_sensitivity: f64,
    /// Upper clamp of the sensitivity score
    pub max_sensitivity: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            min_weather_samples: 3,
            min_bucket_samples: 2,
            min_sensitivity_logs: 10,
            max_influences: 3,
            max_recommendations: 4,
            max_insights: 3,
            min_sensitivity: 0.1,
            max_sensitivity: 0.9,
        }
    }
}
