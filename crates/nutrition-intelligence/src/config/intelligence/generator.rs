// ABOUTME: DNA generator configuration: refresh policy, blending, retention, confidence scaling
// ABOUTME: Defaults reproduce the reference update thresholds (3 / 14 days, 0.8 / 0.5 confidence)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! DNA Generator Configuration
//!
//! Controls how an existing profile is refreshed: minor patch, weighted blend,
//! or full regeneration, plus the bounded retention of blended triggers and
//! success patterns.

use serde::{Deserialize, Serialize};

/// Generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Refresh path selection
    pub update: UpdatePolicy,
    /// Weighted blend parameters
    pub blend: BlendConfig,
    /// Confidence score scaling
    pub confidence: ConfidenceScaling,
}

/// Thresholds deciding between minor patch, blend, and regeneration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePolicy {
    /// Minor patch when fewer days than this have passed
    pub minor_patch_max_days: i64,
    /// Minor patch only when existing confidence is above this
    pub minor_patch_min_confidence: f64,
    /// Regenerate when more days than this have passed
    pub regenerate_after_days: i64,
    /// Regenerate when existing confidence is below this
    pub regenerate_below_confidence: f64,
    /// Fraction of the data-quality gap applied to confidence in a minor patch
    pub minor_confidence_step: f64,
}

/// Weighted blend parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Existing weight = existing confidence times this factor
    pub existing_weight_factor: f64,
    /// Fresh archetype replaces the existing one only above this confidence
    pub archetype_replace_confidence: f64,
    /// Maximum triggers and success patterns kept after a blend
    pub retention_capacity: usize,
}

/// Saturation points of the confidence components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceScaling {
    /// Log count at which the volume component saturates
    pub full_log_count: usize,
    /// Distinct days at which the coverage component saturates
    pub full_day_coverage: usize,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            minor_patch_max_days: 3,
            minor_patch_min_confidence: 0.8,
            regenerate_after_days: 14,
            regenerate_below_confidence: 0.5,
            minor_confidence_step: 0.1,
        }
    }
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            existing_weight_factor: 0.7,
            archetype_replace_confidence: 0.7,
            retention_capacity: 12,
        }
    }
}

impl Default for ConfidenceScaling {
    fn default() -> Self {
        Self {
            full_log_count: 50,
            full_day_coverage: 14,
        }
    }
}
