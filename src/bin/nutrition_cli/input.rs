// ABOUTME: JSON input file format for nutrition-cli
// ABOUTME: Loads a profile, meal logs and context samples from one document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use anyhow::{Context, Result};
use nutrition_dna::models::{ContextSample, FoodLogEntry, UserProfile};
use serde::Deserialize;
use std::path::Path;

/// One user's data as read from disk
#[derive(Debug, Default, Deserialize)]
pub struct CliInput {
    /// Profile projection, empty when omitted
    #[serde(default)]
    pub profile: UserProfile,
    /// Meal logs in any order
    #[serde(default)]
    pub logs: Vec<FoodLogEntry>,
    /// Context samples keyed by date
    #[serde(default)]
    pub context: Vec<ContextSample>,
}

impl CliInput {
    /// Read and parse `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse input file {}", path.display()))
    }
}
