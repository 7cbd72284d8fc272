// ABOUTME: Contextual correlation of eating behavior with weather, time of day, social setting, and location
// ABOUTME: Ranks the strongest influences and scores how sensitive a user is to context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Contextual Analyzer
//!
//! Weather comes from caller-supplied [`ContextSample`]s joined on calendar
//! date. Social setting and location are inferred from metadata keywords
//! (see [`nutrition_core::constants::keywords`]); the first matching bucket
//! wins. Buckets below the configured sample minimum are dropped.

use crate::config::intelligence::ContextConfig;
use crate::log_view;
use crate::statistics::StatisticalAnalyzer;
use crate::text::{percent, TextRenderer};
use chrono::{NaiveDate, NaiveTime, Timelike};
use nutrition_core::constants::{hours, keywords};
use nutrition_core::models::{ContextSample, EatingArchetype, FoodLogEntry, NutritionDna};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Bucket name for entries without a recognised social setting
const UNKNOWN_SETTING: &str = "unknown";
/// Hour assumed for entries with a malformed timestamp in location buckets
const DEFAULT_HOUR: f64 = 12.0;

/// Day periods used by the time-of-day dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    /// `[05:00, 08:00)`
    EarlyMorning,
    /// `[08:00, 12:00)`
    Morning,
    /// `[12:00, 17:00)`
    Afternoon,
    /// `[17:00, 21:00)`
    Evening,
    /// `[21:00, 24:00)`
    LateNight,
}

impl TimePeriod {
    /// All periods in chronological order
    pub const ALL: [Self; 5] = [
        Self::EarlyMorning,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::LateNight,
    ];

    /// Hour bounds `[start, end)`
    #[must_use]
    pub const fn hours(self) -> (u32, u32) {
        match self {
            Self::EarlyMorning => (5, 8),
            Self::Morning => (8, 12),
            Self::Afternoon => (12, 17),
            Self::Evening => (17, 21),
            Self::LateNight => (hours::LATE_NIGHT_START, 24),
        }
    }

    /// Period containing `hour`; hours before 05:00 belong to none
    #[must_use]
    pub fn of_hour(hour: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|period| {
            let (start, end) = period.hours();
            (start..end).contains(&hour)
        })
    }

    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EarlyMorning => "early_morning",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::LateNight => "late_night",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eating under one weather condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBucket {
    /// Mean calories of entries with calories
    pub avg_calories_per_meal: f64,
    /// Mean hour of all entries
    pub avg_eating_hour: f64,
    /// Entries in the bucket
    pub meal_count: usize,
    /// Sample deviation of calories
    pub calorie_variance: f64,
}

/// Eating within one day period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Entries in the period
    pub frequency: usize,
    /// Mean calories of entries with calories
    pub avg_calories: f64,
    /// Entries on Monday-Friday
    pub weekday_frequency: usize,
    /// Entries on Saturday-Sunday
    pub weekend_frequency: usize,
}

/// Eating in one social setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialBucket {
    /// Entries in the setting
    pub frequency: usize,
    /// Mean calories of entries with calories
    pub avg_calories: f64,
    /// Largest meal
    pub max_calories: f64,
    /// Sample deviation of calories
    pub calorie_variance: f64,
}

/// Eating at one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBucket {
    /// Entries at the location
    pub frequency: usize,
    /// Mean calories of entries with calories
    pub avg_calories: f64,
    /// Mean hour
    pub avg_hour: f64,
    /// `1 - sd(hours) / 12`, floored at zero
    pub time_consistency: f64,
}

/// Context dimension an influence refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceKind {
    /// Weather changes meal size
    Weather,
    /// Strong preference for particular day periods
    TimePreference,
    /// Social setting changes meal size
    SocialContext,
    /// Location changes meal size
    Location,
}

impl InfluenceKind {
    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::TimePreference => "time_preference",
            Self::SocialContext => "social_context",
            Self::Location => "location",
        }
    }
}

/// A context dimension with a strong effect on eating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influence {
    /// Dimension
    pub kind: InfluenceKind,
    /// Relative spread `(max - min) / max` across the dimension's buckets
    pub strength: f64,
    /// Plain-language description
    pub description: String,
}

/// Result of a context analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    /// Buckets by weather tag
    pub weather_impact: BTreeMap<String, WeatherBucket>,
    /// Buckets by day period
    pub time_impact: BTreeMap<TimePeriod, TimeBucket>,
    /// Buckets by social setting
    pub social_impact: BTreeMap<String, SocialBucket>,
    /// Buckets by location
    pub location_impact: BTreeMap<String, LocationBucket>,
    /// Strongest influences, strongest first
    pub strongest_influences: Vec<Influence>,
    /// Context sensitivity in `[0.1, 0.9]`
    pub context_score: f64,
}

/// Expected reaction to an upcoming context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextResponse {
    /// Weather bucket calories over the mean of all weather buckets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_calories_change: Option<f64>,
    /// Weather bucket mean hour minus noon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_timing_shift: Option<f64>,
    /// Social bucket calories over the mean of all social buckets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_calorie_multiplier: Option<f64>,
    /// Archetype-specific responses to matching context tags
    pub archetype_responses: BTreeMap<String, f64>,
}

type ResponseTable = &'static [(&'static str, &'static [(&'static str, f64)])];

/// Archetype reactions keyed by context tag fragment
const fn archetype_response_table(archetype: EatingArchetype) -> ResponseTable {
    match archetype {
        EatingArchetype::StressDriven => &[
            ("high_stress", &[("overeating_risk", 0.8), ("comfort_food_craving", 0.9)]),
            ("cold_weather", &[("comfort_eating", 0.7)]),
        ],
        EatingArchetype::SocialEater => &[
            ("social_gathering", &[("portion_increase", 1.4), ("indulgence_risk", 0.8)]),
            ("eating_alone", &[("undereating_risk", 0.6)]),
        ],
        EatingArchetype::BusyProfessional => &[
            ("work_stress", &[("meal_skipping", 0.7), ("fast_food", 0.8)]),
            ("weekend", &[("meal_planning_improvement", 0.6)]),
        ],
        _ => &[],
    }
}

/// Correlates eating behavior with external context
#[derive(Debug, Clone, Default)]
pub struct ContextualAnalyzer {
    config: ContextConfig,
    text: TextRenderer,
}

impl ContextualAnalyzer {
    /// Analyzer with the given limits and English text
    #[must_use]
    pub fn new(config: ContextConfig) -> Self {
        Self {
            config,
            text: TextRenderer::default(),
        }
    }

    /// Render descriptions through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Analyze all context dimensions of a log batch
    #[must_use]
    pub fn analyze(&self, logs: &[FoodLogEntry], context: &[ContextSample]) -> ContextAnalysis {
        let weather_impact = self.weather_impact(logs, context);
        let time_impact = Self::time_impact(logs);
        let social_impact = self.social_impact(logs);
        let location_impact = self.location_impact(logs);
        let strongest_influences = self.strongest_influences(
            &weather_impact,
            &time_impact,
            &social_impact,
            &location_impact,
        );
        let context_score = self.context_sensitivity(logs);

        debug!(
            weather.buckets = weather_impact.len(),
            social.buckets = social_impact.len(),
            location.buckets = location_impact.len(),
            influences = strongest_influences.len(),
            context_score,
            "Analyzed eating context"
        );

        ContextAnalysis {
            weather_impact,
            time_impact,
            social_impact,
            location_impact,
            strongest_influences,
            context_score,
        }
    }

    /// Weather buckets, joined on the calendar date of each entry
    #[must_use]
    pub fn weather_impact(
        &self,
        logs: &[FoodLogEntry],
        context: &[ContextSample],
    ) -> BTreeMap<String, WeatherBucket> {
        let weather_by_date: HashMap<NaiveDate, String> = context
            .iter()
            .map(|sample| (sample.date, sample.weather_tag()))
            .filter(|(_, tag)| !tag.is_empty())
            .collect();

        let mut grouped: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
        for timed in log_view::timed(logs) {
            if let Some(weather) = weather_by_date.get(&timed.date()) {
                grouped
                    .entry(weather.clone())
                    .or_default()
                    .push((timed.calories(), f64::from(timed.hour())));
            }
        }

        grouped
            .into_iter()
            .filter(|(_, samples)| samples.len() >= self.config.min_weather_samples)
            .map(|(weather, samples)| {
                let calories = positive(samples.iter().map(|(c, _)| *c));
                let hours: Vec<f64> = samples.iter().map(|(_, h)| *h).collect();
                let bucket = WeatherBucket {
                    avg_calories_per_meal: StatisticalAnalyzer::mean_or(&calories, 0.0),
                    avg_eating_hour: StatisticalAnalyzer::mean_or(&hours, DEFAULT_HOUR),
                    meal_count: samples.len(),
                    calorie_variance: StatisticalAnalyzer::sample_std_dev(&calories).unwrap_or(0.0),
                };
                (weather, bucket)
            })
            .collect()
    }

    /// Day-period buckets
    #[must_use]
    pub fn time_impact(logs: &[FoodLogEntry]) -> BTreeMap<TimePeriod, TimeBucket> {
        let mut grouped: BTreeMap<TimePeriod, Vec<(f64, bool)>> = BTreeMap::new();
        for timed in log_view::timed(logs) {
            if let Some(period) = TimePeriod::of_hour(timed.hour()) {
                grouped
                    .entry(period)
                    .or_default()
                    .push((timed.calories(), timed.day().is_weekend()));
            }
        }

        grouped
            .into_iter()
            .map(|(period, samples)| {
                let calories = positive(samples.iter().map(|(c, _)| *c));
                let weekend = samples.iter().filter(|(_, weekend)| *weekend).count();
                let bucket = TimeBucket {
                    frequency: samples.len(),
                    avg_calories: StatisticalAnalyzer::mean_or(&calories, 0.0),
                    weekday_frequency: samples.len() - weekend,
                    weekend_frequency: weekend,
                };
                (period, bucket)
            })
            .collect()
    }

    /// Social-setting buckets from metadata keywords
    #[must_use]
    pub fn social_impact(&self, logs: &[FoodLogEntry]) -> BTreeMap<String, SocialBucket> {
        let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for entry in logs {
            let setting = keywords::first_bucket(&entry.metadata_text(), keywords::SOCIAL_SETTINGS)
                .unwrap_or(UNKNOWN_SETTING);
            grouped.entry(setting).or_default().push(entry.calories());
        }

        grouped
            .into_iter()
            .filter(|(_, samples)| samples.len() >= self.config.min_bucket_samples)
            .filter_map(|(setting, samples)| {
                let calories = positive(samples.iter().copied());
                let avg = StatisticalAnalyzer::mean(&calories)?;
                Some((
                    setting.to_owned(),
                    SocialBucket {
                        frequency: samples.len(),
                        avg_calories: avg,
                        max_calories: calories.iter().copied().fold(0.0, f64::max),
                        calorie_variance: StatisticalAnalyzer::sample_std_dev(&calories)
                            .unwrap_or(0.0),
                    },
                ))
            })
            .collect()
    }

    /// Location buckets from metadata keywords
    #[must_use]
    pub fn location_impact(&self, logs: &[FoodLogEntry]) -> BTreeMap<String, LocationBucket> {
        let mut grouped: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
        for entry in logs {
            let Some(location) =
                keywords::first_bucket(&entry.metadata_text(), keywords::LOCATIONS)
            else {
                continue;
            };
            let hour = entry
                .recorded_at()
                .map_or(DEFAULT_HOUR, |at| f64::from(at.hour()));
            grouped
                .entry(location)
                .or_default()
                .push((entry.calories(), hour));
        }

        grouped
            .into_iter()
            .filter(|(_, samples)| samples.len() >= self.config.min_bucket_samples)
            .filter_map(|(location, samples)| {
                let calories = positive(samples.iter().map(|(c, _)| *c));
                let avg = StatisticalAnalyzer::mean(&calories)?;
                let hours: Vec<f64> = samples.iter().map(|(_, h)| *h).collect();
                let consistency = StatisticalAnalyzer::sample_std_dev(&hours)
                    .map_or(1.0, |std| (1.0 - std / 12.0).max(0.0));
                Some((
                    location.to_owned(),
                    LocationBucket {
                        frequency: samples.len(),
                        avg_calories: avg,
                        avg_hour: StatisticalAnalyzer::mean_or(&hours, DEFAULT_HOUR),
                        time_consistency: consistency,
                    },
                ))
            })
            .collect()
    }

    /// Rank the dimensions whose buckets differ most
    #[must_use]
    pub fn strongest_influences(
        &self,
        weather: &BTreeMap<String, WeatherBucket>,
        time: &BTreeMap<TimePeriod, TimeBucket>,
        social: &BTreeMap<String, SocialBucket>,
        location: &BTreeMap<String, LocationBucket>,
    ) -> Vec<Influence> {
        let mut influences = Vec::new();

        if weather.len() >= 2 {
            let calories: Vec<f64> = weather.values().map(|b| b.avg_calories_per_meal).collect();
            let spread = StatisticalAnalyzer::relative_spread(&calories);
            if spread > 0.2 {
                influences.push(Influence {
                    kind: InfluenceKind::Weather,
                    strength: spread,
                    description: self
                        .text
                        .render("context.influence.weather", &[("percent", percent(spread))]),
                });
            }
        }

        if !time.is_empty() {
            let frequencies: Vec<f64> = time.values().map(|b| b.frequency as f64).collect();
            let spread = StatisticalAnalyzer::relative_spread(&frequencies);
            if spread > 0.5 {
                influences.push(Influence {
                    kind: InfluenceKind::TimePreference,
                    strength: spread,
                    description: self.text.text("context.influence.time_preference"),
                });
            }
        }

        if social.len() >= 2 {
            let calories: Vec<f64> = social.values().map(|b| b.avg_calories).collect();
            let spread = StatisticalAnalyzer::relative_spread(&calories);
            if spread > 0.3 {
                influences.push(Influence {
                    kind: InfluenceKind::SocialContext,
                    strength: spread,
                    description: self.text.text("context.influence.social_context"),
                });
            }
        }

        if location.len() >= 2 {
            let calories: Vec<f64> = location.values().map(|b| b.avg_calories).collect();
            let spread = StatisticalAnalyzer::relative_spread(&calories);
            if spread > 0.3 {
                influences.push(Influence {
                    kind: InfluenceKind::Location,
                    strength: spread,
                    description: self.text.text("context.influence.location"),
                });
            }
        }

        influences.sort_by(|a, b| b.strength.partial_cmp(&a.strength).unwrap_or(Ordering::Equal));
        influences.truncate(self.config.max_influences);
        influences
    }

    /// How strongly eating varies across hours and weekdays, in `[0.1, 0.9]`
    #[must_use]
    pub fn context_sensitivity(&self, logs: &[FoodLogEntry]) -> f64 {
        if logs.len() < self.config.min_sensitivity_logs {
            return 0.5;
        }

        let mut by_hour: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        let mut by_day: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
        for timed in log_view::timed(logs) {
            let calories = timed.calories();
            if calories > 0.0 {
                by_hour.entry(timed.hour()).or_default().push(calories);
                by_day.entry(timed.day().index()).or_default().push(calories);
            }
        }

        let mut hourly_consistency = 0.0;
        if by_hour.len() > 1 {
            let deviations: Vec<f64> = by_hour
                .values()
                .filter_map(|values| StatisticalAnalyzer::sample_std_dev(values))
                .collect();
            if let Some(avg) = StatisticalAnalyzer::mean(&deviations) {
                hourly_consistency = (1.0 - avg / 500.0).max(0.0);
            }
        }

        let mut daily_consistency = 0.0;
        if by_day.len() > 1 {
            let averages: Vec<f64> = by_day
                .values()
                .filter_map(|values| StatisticalAnalyzer::mean(values))
                .collect();
            if let Some(std) = StatisticalAnalyzer::sample_std_dev(&averages) {
                daily_consistency = (1.0 - std / 300.0).max(0.0);
            }
        }

        let sensitivity = 1.0 - (hourly_consistency + daily_consistency) / 2.0;
        sensitivity.clamp(self.config.min_sensitivity, self.config.max_sensitivity)
    }

    /// Advice for the current situation
    #[must_use]
    pub fn recommendations(
        &self,
        analysis: &ContextAnalysis,
        current: Option<&ContextSample>,
        now: NaiveTime,
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = analysis
            .strongest_influences
            .iter()
            .map(|influence| {
                self.text
                    .text(&format!("context.rec.{}", influence.kind.as_str()))
            })
            .collect();

        if let Some(current) = current {
            let weather = current.weather_tag();
            if weather.contains("cold") || weather.contains("rain") {
                recommendations.push(self.text.text("context.rec.cold_weather"));
            } else if weather.contains("hot") {
                recommendations.push(self.text.text("context.rec.hot_weather"));
            }

            match current.social_context.as_deref().map(str::to_lowercase).as_deref() {
                Some("restaurant") => recommendations.push(self.text.text("context.rec.restaurant")),
                Some("work") => recommendations.push(self.text.text("context.rec.work")),
                _ => {}
            }
        }

        if now.hour() >= hours::LATE_NIGHT_START {
            recommendations.push(self.text.text("context.rec.late_hour"));
        }

        if analysis.context_score > 0.7 {
            recommendations.push(self.text.text("context.rec.high_sensitivity"));
        } else if analysis.context_score < 0.3 {
            recommendations.push(self.text.text("context.rec.low_sensitivity"));
        }

        recommendations.truncate(self.config.max_recommendations);
        recommendations
    }

    /// Expected reaction to a forecast context
    #[must_use]
    pub fn predict_response(
        dna: &NutritionDna,
        analysis: &ContextAnalysis,
        predicted: &ContextSample,
    ) -> ContextResponse {
        let mut response = ContextResponse::default();

        let weather = predicted.weather_tag();
        if let Some(bucket) = analysis.weather_impact.get(&weather) {
            let all: Vec<f64> = analysis
                .weather_impact
                .values()
                .map(|b| b.avg_calories_per_meal)
                .collect();
            let baseline = StatisticalAnalyzer::mean_or(&all, 0.0);
            response.expected_calories_change = Some(StatisticalAnalyzer::ratio_or_neutral(
                bucket.avg_calories_per_meal,
                baseline,
            ));
            response.expected_timing_shift = Some(bucket.avg_eating_hour - DEFAULT_HOUR);
        }

        if let Some(setting) = &predicted.social_context {
            if let Some(bucket) = analysis.social_impact.get(&setting.to_lowercase()) {
                let all: Vec<f64> = analysis.social_impact.values().map(|b| b.avg_calories).collect();
                let baseline = StatisticalAnalyzer::mean_or(&all, 0.0);
                response.social_calorie_multiplier = Some(StatisticalAnalyzer::ratio_or_neutral(
                    bucket.avg_calories,
                    baseline,
                ));
            }
        }

        let tags = predicted.tags();
        for (context_key, reactions) in archetype_response_table(dna.archetype) {
            if tags.iter().any(|tag| tag.contains(context_key)) {
                for (reaction, value) in *reactions {
                    response.archetype_responses.insert((*reaction).to_owned(), *value);
                }
            }
        }

        response
    }

    /// Observations about how context shapes eating
    #[must_use]
    pub fn insights(&self, analysis: &ContextAnalysis, dna: &NutritionDna) -> Vec<String> {
        let mut insights = Vec::new();

        if analysis.weather_impact.len() >= 2 {
            let by_calories = |a: &&(&String, &WeatherBucket), b: &&(&String, &WeatherBucket)| {
                a.1.avg_calories_per_meal
                    .partial_cmp(&b.1.avg_calories_per_meal)
                    .unwrap_or(Ordering::Equal)
            };
            let buckets: Vec<(&String, &WeatherBucket)> = analysis.weather_impact.iter().collect();
            let high = buckets.iter().max_by(by_calories);
            let low = buckets.iter().min_by(by_calories);
            if let (Some((high, high_bucket)), Some((low, low_bucket))) = (high, low) {
                let low_calories = low_bucket.avg_calories_per_meal;
                if low_calories > 0.0 && high_bucket.avg_calories_per_meal > low_calories * 1.2 {
                    let excess = high_bucket.avg_calories_per_meal / low_calories - 1.0;
                    insights.push(self.text.render(
                        "context.insight.weather",
                        &[
                            ("high", (*high).clone()),
                            ("low", (*low).clone()),
                            ("percent", percent(excess)),
                        ],
                    ));
                }
            }
        }

        if let Some((period, _)) = analysis
            .time_impact
            .iter()
            .max_by_key(|(period, bucket)| (bucket.frequency, std::cmp::Reverse(**period)))
        {
            let name = self.text.text(&format!("period.{period}"));
            insights.push(
                self.text
                    .render("context.insight.active_period", &[("period", name)]),
            );
        }

        if analysis.social_impact.len() >= 2 {
            let calories: Vec<f64> = analysis.social_impact.values().map(|b| b.avg_calories).collect();
            let mean = StatisticalAnalyzer::mean_or(&calories, 0.0);
            let highest = analysis.social_impact.iter().max_by(|a, b| {
                a.1.avg_calories
                    .partial_cmp(&b.1.avg_calories)
                    .unwrap_or(Ordering::Equal)
            });
            if let Some((setting, bucket)) = highest {
                if bucket.avg_calories > mean * 1.3 {
                    insights.push(self.text.render(
                        "context.insight.social_bucket",
                        &[("context", setting.clone())],
                    ));
                }
            }
        }

        if analysis.context_score > 0.7 {
            insights.push(self.text.text("context.insight.high_sensitivity"));
        } else if analysis.context_score < 0.3 {
            insights.push(self.text.text("context.insight.low_sensitivity"));
        }

        if matches!(
            dna.archetype,
            EatingArchetype::StressDriven | EatingArchetype::SocialEater
        ) {
            insights.push(self.text.text("context.insight.sensitive_archetype"));
        }

        insights.truncate(self.config.max_insights);
        insights
    }
}

fn positive(values: impl Iterator<Item = f64>) -> Vec<f64> {
    values.filter(|value| *value > 0.0).collect()
}
