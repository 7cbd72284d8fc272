// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Keyword heuristics, meal-slot hours, and service identifiers for Nutrition DNA
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Metadata keyword heuristics used as proxies for social, stress, and location signals.
///
/// Matching is a case-insensitive substring search over the serialized metadata of a
/// log entry. A structured category field can replace these without changing any
/// of the `[0, 1]` scoring contracts.
pub mod keywords;

/// Hour boundaries of the day-part classifications
pub mod hours {
    /// Breakfast slot start (inclusive)
    pub const BREAKFAST_START: u32 = 5;
    /// Breakfast slot end / lunch slot start
    pub const BREAKFAST_END: u32 = 11;
    /// Lunch slot end (exclusive)
    pub const LUNCH_END: u32 = 16;
    /// Dinner slot start (inclusive)
    pub const DINNER_START: u32 = 18;
    /// Dinner slot end (exclusive)
    pub const DINNER_END: u32 = 23;
    /// First hour counted as late-night eating
    pub const LATE_NIGHT_START: u32 = 21;
    /// Work-hours window start, used for the work-stress snacking proxy
    pub const WORK_START: u32 = 9;
    /// Work-hours window end (exclusive)
    pub const WORK_END: u32 = 17;
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported by the logging layer
    pub const NUTRITION_DNA: &str = "nutrition-dna";
    /// CLI service name
    pub const NUTRITION_CLI: &str = "nutrition-cli";
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Prefix shared by every intelligence override
    pub const INTELLIGENCE_PREFIX: &str = "NUTRITION_DNA_";
}
