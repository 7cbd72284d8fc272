// ABOUTME: Keyword sets for metadata-substring heuristics
// ABOUTME: Stress, social, comfort, social-setting, and location vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

/// Words suggesting a stressful eating context
pub const STRESS: &[&str] = &["busy", "work", "meeting", "deadline", "stress", "tired"];

/// Words suggesting a social meal; drives the social-eating score
pub const SOCIAL: &[&str] = &["restaurant", "cafe", "party", "dinner", "friends", "family"];

/// Words suggesting the meal was eaten out
pub const RESTAURANT: &[&str] = &["restaurant", "cafe", "dinner out", "eating out", "takeaway"];

/// Typical comfort foods
pub const COMFORT: &[&str] = &["chocolate", "ice cream", "pizza", "cake", "cookies", "chips"];

/// Social-setting buckets, evaluated in order; the first bucket with a hit wins
pub const SOCIAL_SETTINGS: &[(&str, &[&str])] = &[
    ("restaurant", &["restaurant", "cafe", "dinner out", "eating out"]),
    ("work", &["office", "work", "lunch meeting", "desk"]),
    ("home_alone", &["home", "alone", "quick", "simple"]),
    ("social", &["friends", "party", "celebration", "group"]),
];

/// Location buckets, evaluated in order; the first bucket with a hit wins
pub const LOCATIONS: &[(&str, &[&str])] = &[
    ("home", &["home", "kitchen", "house"]),
    ("work", &["office", "work", "workplace"]),
    ("restaurant", &["restaurant", "cafe", "bar"]),
    ("travel", &["airport", "hotel", "trip", "vacation"]),
];

/// Returns true when `text` contains any of `words`
#[must_use]
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Returns the first bucket name whose keywords occur in `text`
#[must_use]
pub fn first_bucket(text: &str, buckets: &[(&'static str, &[&str])]) -> Option<&'static str> {
    buckets
        .iter()
        .find(|(_, words)| contains_any(text, words))
        .map(|(name, _)| *name)
}
