// ABOUTME: Weekly narrative aggregate built from a DNA profile
// ABOUTME: Day-keyed insights, observed patterns, micro-goals, risk days, and opportunity moments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use super::DayOfWeek;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Insights for one calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInsight {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Leading insight for each day
    pub day_insights: BTreeMap<DayOfWeek, String>,
    /// Patterns recognised in the profile
    pub observed_patterns: Vec<String>,
    /// Small, achievable goals for the week
    pub micro_goals: Vec<String>,
    /// Days with elevated risk, de-duplicated
    pub risk_days: Vec<String>,
    /// Best moments for positive change
    pub opportunity_moments: Vec<String>,
}
