// ABOUTME: Externally supplied context tags for a calendar date
// ABOUTME: Weather, work stress level, social plans, social setting, and travel flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Context observed (or forecast) for one day. Read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSample {
    /// Calendar date the context applies to
    pub date: NaiveDate,
    /// Weather tag such as "rainy", "cold", "sunny"
    #[serde(default)]
    pub weather: Option<String>,
    /// Work stress on a 1-10 scale
    #[serde(default)]
    pub work_stress_level: Option<f64>,
    /// Social plans scheduled for the day
    #[serde(default)]
    pub social_plans: bool,
    /// Social setting of the upcoming meal ("restaurant", "work", ...)
    #[serde(default)]
    pub social_context: Option<String>,
    /// The user is travelling
    #[serde(default)]
    pub travel: bool,
}

impl ContextSample {
    /// Create an empty context for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weather: None,
            work_stress_level: None,
            social_plans: false,
            social_context: None,
            travel: false,
        }
    }

    /// Set the weather tag
    #[must_use]
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    /// Set the work stress level
    #[must_use]
    pub const fn with_work_stress(mut self, level: f64) -> Self {
        self.work_stress_level = Some(level);
        self
    }

    /// Mark social plans for the day
    #[must_use]
    pub const fn with_social_plans(mut self, social_plans: bool) -> Self {
        self.social_plans = social_plans;
        self
    }

    /// Set the social setting
    #[must_use]
    pub fn with_social_context(mut self, social_context: impl Into<String>) -> Self {
        self.social_context = Some(social_context.into());
        self
    }

    /// Mark the day as a travel day
    #[must_use]
    pub const fn with_travel(mut self, travel: bool) -> Self {
        self.travel = travel;
        self
    }

    /// Lowercased weather tag, empty when unknown
    #[must_use]
    pub fn weather_tag(&self) -> String {
        self.weather
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase()
    }

    /// All textual tags of this sample, lowercased
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(weather) = &self.weather {
            tags.push(weather.to_lowercase());
        }
        if let Some(setting) = &self.social_context {
            tags.push(setting.to_lowercase());
        }
        if self.social_plans {
            tags.push("social_gathering".to_owned());
        }
        if self.travel {
            tags.push("travel".to_owned());
        }
        if self.work_stress_level.is_some_and(|level| level > 7.0) {
            tags.push("high_stress".to_owned());
            tags.push("work_stress".to_owned());
        }
        tags
    }
}
