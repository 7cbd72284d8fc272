// ABOUTME: Ephemeral behavior prediction produced by the predictor
// ABOUTME: Event tag, probability, confidence, recommended action, and optional timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Predicted near-term behavior event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Event tag, e.g. `late_night_eating`
    pub prediction_type: String,
    /// Probability in [0, 1]
    pub probability: f64,
    /// Confidence of the source rule in [0, 1]
    pub confidence: f64,
    /// Suggested countermeasure
    pub recommended_action: String,
    /// Expected time of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_timing: Option<NaiveTime>,
}

impl PredictionResult {
    /// Create a prediction without a timing
    #[must_use]
    pub fn new(
        prediction_type: impl Into<String>,
        probability: f64,
        confidence: f64,
        recommended_action: impl Into<String>,
    ) -> Self {
        Self {
            prediction_type: prediction_type.into(),
            probability: probability.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            recommended_action: recommended_action.into(),
            optimal_timing: None,
        }
    }

    /// Attach an expected time
    #[must_use]
    pub const fn at(mut self, timing: NaiveTime) -> Self {
        self.optimal_timing = Some(timing);
        self
    }

    /// Ranking score: probability times confidence
    #[must_use]
    pub fn score(&self) -> f64 {
        self.probability * self.confidence
    }
}
