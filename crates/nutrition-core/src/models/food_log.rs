// ABOUTME: Meal-log entry model with macro quadruple, freeform metadata, and photo reference
// ABOUTME: Provides lenient timestamp access and the lowercased metadata text used by keyword heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::time::{parse_instant, parse_timestamp};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Macro-nutrient quadruple for one logged meal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Energy in kcal
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein: f64,
    /// Fat in grams
    #[serde(default)]
    pub fats: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: f64,
    /// Fiber in grams, when the analysis reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

impl Macros {
    /// Create a macro quadruple without fiber
    #[must_use]
    pub const fn new(calories: f64, protein: f64, fats: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fats,
            carbs,
            fiber: None,
        }
    }

    /// Attach a fiber amount
    #[must_use]
    pub const fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = Some(fiber);
        self
    }

    /// All four primary macros are strictly positive
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.calories > 0.0 && self.protein > 0.0 && self.fats > 0.0 && self.carbs > 0.0
    }

    /// Every present value is finite and non-negative
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.fats, self.carbs]
            .into_iter()
            .chain(self.fiber)
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

/// One historical meal-log record. Immutable input supplied by the log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Raw ISO-8601 timestamp as recorded
    pub timestamp: String,
    /// Computed macros; absent when the analysis produced none
    #[serde(default, alias = "kbzhu", skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    /// Freeform metadata (dish description, location notes, tags)
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Object-storage reference of the analyzed photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,
}

impl FoodLogEntry {
    /// Create an entry with empty metadata
    #[must_use]
    pub fn new(timestamp: impl Into<String>, macros: Option<Macros>) -> Self {
        Self {
            timestamp: timestamp.into(),
            macros,
            metadata: Map::new(),
            photo_ref: None,
        }
    }

    /// Add a metadata field
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach a photo reference
    #[must_use]
    pub fn with_photo(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }

    /// Parsed wall-clock time, `None` when the timestamp is malformed
    #[must_use]
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Absolute UTC instant of the entry, `None` when the timestamp is malformed
    #[must_use]
    pub fn recorded_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.timestamp)
    }

    /// Calories, zero when no macros are present
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.macros.map_or(0.0, |m| m.calories)
    }

    /// Protein grams, zero when no macros are present
    #[must_use]
    pub fn protein(&self) -> f64 {
        self.macros.map_or(0.0, |m| m.protein)
    }

    /// Fiber grams, zero when absent
    #[must_use]
    pub fn fiber(&self) -> f64 {
        self.macros.and_then(|m| m.fiber).unwrap_or(0.0)
    }

    /// Lowercased serialized metadata; empty when there is no metadata
    #[must_use]
    pub fn metadata_text(&self) -> String {
        if self.metadata.is_empty() {
            return String::new();
        }
        Value::Object(self.metadata.clone())
            .to_string()
            .to_lowercase()
    }
}
