// ABOUTME: Render-ready visualization payloads for DNA, patterns, predictions, zones, and progress
// ABOUTME: Presentation-only: reads profiles and logs, never mutates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Nutrition Visualizer
//!
//! Converts analytic outputs into serializable chart payloads. Each payload is
//! self-describing through its `type` tag when embedded in a [`NutritionReport`].
//!
//! Score bands:
//! - `>= 0.8` excellent
//! - `>= 0.6` good
//! - `>= 0.4` fair
//! - below that, needs improvement

use crate::log_view;
use crate::statistics::StatisticalAnalyzer;
use crate::text::{percent, TextRenderer};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use nutrition_core::models::{
    DayOfWeek, Difficulty, EatingArchetype, FoodLogEntry, Impact, NutritionDna, OptimizationZone,
    PredictionResult, WeeklyInsight,
};
use nutrition_core::time::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Days of history the report timeline looks back over
pub const DEFAULT_TIMELINE_DAYS: i64 = 30;

/// Most recent active days shown on the timeline
const TIMELINE_POINTS: usize = 14;

/// Medium-risk prediction cards shown on the dashboard
const MEDIUM_RISK_CARDS: usize = 3;

/// Qualitative band of a `[0, 1]` score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// At least 0.8
    Excellent,
    /// At least 0.6
    Good,
    /// At least 0.4
    Fair,
    /// Below 0.4
    NeedsImprovement,
}

impl ScoreBand {
    /// Band of `score`
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    /// Display color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#4ECDC4",
            Self::Good => "#45B7D1",
            Self::Fair => "#FFD93D",
            Self::NeedsImprovement => "#FF6B6B",
        }
    }

    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs_improvement",
        }
    }
}

/// Icon for an archetype
#[must_use]
pub const fn archetype_icon(archetype: EatingArchetype) -> &'static str {
    match archetype {
        EatingArchetype::EarlyBirdPlanner => "🌅",
        EatingArchetype::LateStarterImpulsive => "😴",
        EatingArchetype::StructuredBalanced => "⚖️",
        EatingArchetype::StressDriven => "😰",
        EatingArchetype::SocialEater => "👥",
        EatingArchetype::IntuitiveGrazer => "🌿",
        EatingArchetype::BusyProfessional => "💼",
        EatingArchetype::WeekendWarrior => "🏃",
    }
}

/// Icon for a prediction event, matched on fragments of its tag
#[must_use]
pub fn prediction_icon(event: &str) -> &'static str {
    let event = event.to_lowercase();
    [
        (&["stress"][..], "😰"),
        (&["late", "night"][..], "🌙"),
        (&["social"][..], "👥"),
        (&["weekend"][..], "🏖️"),
        (&["comfort"][..], "🍫"),
        (&["skip"][..], "⏰"),
    ]
    .iter()
    .find(|(fragments, _)| fragments.iter().any(|f| event.contains(f)))
    .map_or("🔮", |(_, icon)| *icon)
}

const fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::EasyWins => "#4ECDC4",
        Difficulty::ModerateEffort => "#45B7D1",
        Difficulty::RequiresStrategy => "#FFA07A",
        Difficulty::LongTermGoal => "#DDA0DD",
    }
}

const fn difficulty_weight(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::EasyWins => 1.0,
        Difficulty::ModerateEffort => 0.8,
        Difficulty::RequiresStrategy => 0.6,
        Difficulty::LongTermGoal => 0.4,
    }
}

const fn impact_icon(impact: Impact) -> &'static str {
    match impact {
        Impact::Low => "📈",
        Impact::Medium => "🚀",
        Impact::High => "💥",
    }
}

const fn impact_weight(impact: Impact) -> f64 {
    match impact {
        Impact::Low => 0.3,
        Impact::Medium => 0.6,
        Impact::High => 1.0,
    }
}

/// Priority of a zone: impact weight times difficulty weight times the remaining gap
#[must_use]
pub fn zone_priority(zone: &OptimizationZone) -> f64 {
    impact_weight(zone.impact) * difficulty_weight(zone.difficulty) * zone.gap()
}

/// Mean of `probability * confidence` over all predictions, zero when empty
#[must_use]
pub fn overall_risk_score(predictions: &[PredictionResult]) -> f64 {
    let weighted: Vec<f64> = predictions
        .iter()
        .map(|p| p.probability * p.confidence)
        .collect();
    StatisticalAnalyzer::mean_or(&weighted, 0.0)
}

/// One score on the summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Score in `[0, 1]`
    pub value: f64,
    /// Label
    pub label: String,
    /// Band color
    pub color: String,
    /// Band description
    pub description: String,
}

/// Archetype header of the summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeBadge {
    /// Archetype
    pub archetype: EatingArchetype,
    /// Display name
    pub name: String,
    /// Icon
    pub icon: String,
    /// Profile confidence
    pub confidence: f64,
}

/// Compact DNA overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaSummaryCard {
    /// Archetype header
    pub archetype: ArchetypeBadge,
    /// Diversity score
    pub diversity: ScoreCard,
    /// Consistency score
    pub consistency: ScoreCard,
    /// Goal alignment score
    pub goal_alignment: ScoreCard,
    /// When the DNA was generated
    pub generated_at: DateTime<Utc>,
    /// Data quality
    pub data_quality: f64,
}

/// Priority of a weekly micro-goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    /// First goal of the week
    High,
    /// Remaining goals
    Medium,
}

/// Micro-goal line on the weekly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroGoalItem {
    /// Goal text
    pub text: String,
    /// Priority
    pub priority: GoalPriority,
}

/// Weekly insight chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInsightsChart {
    /// Title
    pub title: String,
    /// Insight per weekday
    pub day_insights: BTreeMap<DayOfWeek, String>,
    /// Observed patterns
    pub observed: Vec<String>,
    /// Risky days
    pub risk_days: Vec<String>,
    /// Opportunities
    pub opportunities: Vec<String>,
    /// Micro-goals, first one high priority
    pub micro_goals: Vec<MicroGoalItem>,
}

/// One hour on the temporal chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    /// Hour of day
    pub hour: u32,
    /// Relative appetite in `[0, 1]`
    pub energy_level: f64,
    /// Within one hour of a preferred meal time
    pub is_meal_time: bool,
}

/// Preferred meal times as `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTimesLabel {
    /// Breakfast
    pub breakfast: String,
    /// Lunch
    pub lunch: String,
    /// Dinner
    pub dinner: String,
}

/// Day-shape chart from 06:00 to 22:00
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalPatternsChart {
    /// Title
    pub title: String,
    /// Hourly points
    pub time_pattern: Vec<HourPoint>,
    /// Preferred meal times
    pub meal_times: MealTimesLabel,
    /// Meal timing consistency
    pub consistency_score: f64,
    /// Weekend shift label
    pub weekend_shift: String,
    /// Late eating frequency label
    pub late_eating_frequency: String,
}

/// Risk level of a prediction card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Probability above 0.7
    High,
    /// Probability in `(0.4, 0.7]`
    Medium,
    /// Probability at most 0.4
    Low,
}

impl RiskLevel {
    /// Level of a probability
    #[must_use]
    pub fn of(probability: f64) -> Self {
        if probability > 0.7 {
            Self::High
        } else if probability > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::High => "#FF6B6B",
            Self::Medium => "#FFD93D",
            Self::Low => "#95A5A6",
        }
    }
}

/// One prediction on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCard {
    /// Risk level
    pub risk_level: RiskLevel,
    /// Event tag
    pub event: String,
    /// Probability
    pub probability: f64,
    /// Recommended action
    pub action: String,
    /// Best time to act
    pub timing: Option<NaiveTime>,
    /// Icon
    pub icon: String,
    /// Color
    pub color: String,
}

/// Prediction counts by level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    /// High risk
    pub high_risk_count: usize,
    /// Medium risk
    pub medium_risk_count: usize,
    /// Low risk
    pub low_risk_count: usize,
}

/// Prediction dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionsDashboard {
    /// Title
    pub title: String,
    /// Counts by level
    pub summary: RiskCounts,
    /// All high-risk cards followed by up to three medium-risk cards
    pub prediction_cards: Vec<PredictionCard>,
    /// Mean weighted probability
    pub overall_risk_score: f64,
}

/// One optimization zone card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCard {
    /// Display name of the area
    pub area: String,
    /// Current score in percent
    pub current_score: f64,
    /// Target score in percent
    pub target_score: f64,
    /// Percentage points to the target
    pub improvement_needed: f64,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Difficulty color
    pub difficulty_color: String,
    /// Impact
    pub impact: Impact,
    /// Impact icon
    pub impact_icon: String,
    /// Ranking priority
    pub priority: f64,
}

/// Optimization zone chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationZonesChart {
    /// Title
    pub title: String,
    /// Cards, highest priority first
    pub optimization_cards: Vec<ZoneCard>,
    /// Number of zones
    pub total_zones: usize,
    /// Number of easy-win zones
    pub easy_wins: usize,
}

/// One day on the progress timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Entries logged
    pub analyses_count: usize,
    /// Calories logged
    pub total_calories: f64,
    /// Distinct metadata share
    pub variety_score: f64,
    /// Day quality in `[0, 1]`
    pub quality_score: f64,
}

/// Timeline totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineSummary {
    /// Entries across the timeline
    pub total_analyses: usize,
    /// Days with at least one entry
    pub active_days: usize,
    /// Mean entries per shown day
    pub avg_daily_analyses: f64,
}

/// Recent progress timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressTimeline {
    /// Title
    pub title: String,
    /// Shown when there is nothing to plot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Points, oldest first
    pub timeline: Vec<TimelinePoint>,
    /// Totals
    pub summary: TimelineSummary,
}

/// One radar axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    /// Axis label
    pub axis: String,
    /// Value in `[0, 1]`, higher is better
    pub value: f64,
    /// Axis maximum
    pub max: f64,
}

/// Social pattern radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPatternsRadar {
    /// Title
    pub title: String,
    /// Axes
    pub radar_data: Vec<RadarAxis>,
    /// Headline percentages
    pub insights: Vec<String>,
}

/// Report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportComponent {
    /// DNA overview
    DnaSummaryCard(DnaSummaryCard),
    /// Day shape
    TemporalPatternsChart(TemporalPatternsChart),
    /// Social radar
    SocialPatternsRadar(SocialPatternsRadar),
    /// Optimization zones
    OptimizationZonesChart(OptimizationZonesChart),
    /// Progress
    ProgressTimeline(ProgressTimeline),
    /// Weekly insights
    WeeklyInsightsChart(WeeklyInsightsChart),
    /// Predictions
    PredictionsDashboard(PredictionsDashboard),
}

/// Report totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Mean of diversity, consistency and goal alignment
    pub overall_score: f64,
    /// Data quality
    pub data_quality: f64,
    /// Profile confidence
    pub confidence: f64,
    /// Sections in the report
    pub total_components: usize,
}

/// Full nutrition report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Title
    pub title: String,
    /// Creation instant
    pub generated_at: DateTime<Utc>,
    /// Archetype of the user
    pub user_archetype: EatingArchetype,
    /// Sections in display order
    pub components: Vec<ReportComponent>,
    /// Totals
    pub summary: ReportSummary,
}

/// Builds visualization payloads
#[derive(Debug, Clone)]
pub struct NutritionVisualizer {
    text: TextRenderer,
    clock: Arc<dyn Clock>,
}

impl Default for NutritionVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionVisualizer {
    /// Visualizer with English labels and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: TextRenderer::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Render labels through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Stamp reports and anchor timelines with `clock`
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// DNA summary card
    #[must_use]
    pub fn dna_summary_card(&self, dna: &NutritionDna) -> DnaSummaryCard {
        DnaSummaryCard {
            archetype: ArchetypeBadge {
                archetype: dna.archetype,
                name: self
                    .text
                    .text(&format!("archetype.{}.name", dna.archetype.as_str())),
                icon: archetype_icon(dna.archetype).to_owned(),
                confidence: dna.confidence_score,
            },
            diversity: self.score_card("diversity", dna.diversity_score),
            consistency: self.score_card("consistency", dna.consistency_score),
            goal_alignment: self.score_card("goal_alignment", dna.goal_alignment_score),
            generated_at: dna.generated_at,
            data_quality: dna.data_quality_score,
        }
    }

    fn score_card(&self, name: &str, value: f64) -> ScoreCard {
        let band = ScoreBand::of(value);
        ScoreCard {
            value,
            label: self.text.text(&format!("viz.score.{name}")),
            color: band.color().to_owned(),
            description: self
                .text
                .text(&format!("viz.score.{name}.{}", band.as_str())),
        }
    }

    /// Weekly insight chart
    #[must_use]
    pub fn weekly_insights_chart(&self, weekly: &WeeklyInsight) -> WeeklyInsightsChart {
        WeeklyInsightsChart {
            title: self.text.text("viz.title.weekly"),
            day_insights: weekly.day_insights.clone(),
            observed: weekly.observed_patterns.clone(),
            risk_days: weekly.risk_days.clone(),
            opportunities: weekly.opportunity_moments.clone(),
            micro_goals: weekly
                .micro_goals
                .iter()
                .enumerate()
                .map(|(i, goal)| MicroGoalItem {
                    text: goal.clone(),
                    priority: if i == 0 {
                        GoalPriority::High
                    } else {
                        GoalPriority::Medium
                    },
                })
                .collect(),
        }
    }

    /// Hourly appetite chart from 06:00 to 22:00
    #[must_use]
    pub fn temporal_patterns_chart(&self, dna: &NutritionDna) -> TemporalPatternsChart {
        let temporal = &dna.temporal_patterns;
        let energy = &dna.energy_patterns;
        let near = |hour: u32, time: NaiveTime| hour.abs_diff(time.hour()) <= 1;

        let time_pattern = (6..23)
            .map(|hour| {
                let mut level = 0.3;
                if near(hour, temporal.preferred_breakfast_time) {
                    level += energy.morning_appetite * 0.7;
                } else if near(hour, temporal.preferred_lunch_time) {
                    level += energy.afternoon_hunger * 0.8;
                } else if near(hour, temporal.preferred_dinner_time) {
                    level += 0.6;
                }
                if hour >= 21 {
                    level += energy.evening_comfort_eating * 0.5;
                }
                HourPoint {
                    hour,
                    energy_level: f64::min(level, 1.0),
                    is_meal_time: near(hour, temporal.preferred_breakfast_time)
                        || near(hour, temporal.preferred_lunch_time)
                        || near(hour, temporal.preferred_dinner_time),
                }
            })
            .collect();

        TemporalPatternsChart {
            title: self.text.text("viz.title.temporal"),
            time_pattern,
            meal_times: MealTimesLabel {
                breakfast: temporal.preferred_breakfast_time.format("%H:%M").to_string(),
                lunch: temporal.preferred_lunch_time.format("%H:%M").to_string(),
                dinner: temporal.preferred_dinner_time.format("%H:%M").to_string(),
            },
            consistency_score: temporal.meal_timing_consistency,
            weekend_shift: self.text.render(
                "viz.weekend_shift",
                &[("hours", format!("{:.1}", temporal.weekend_shift_hours))],
            ),
            late_eating_frequency: percent(temporal.late_night_eating_frequency),
        }
    }

    /// Prediction dashboard
    #[must_use]
    pub fn predictions_dashboard(&self, predictions: &[PredictionResult]) -> PredictionsDashboard {
        let level_of = |p: &&PredictionResult| RiskLevel::of(p.probability);
        let high: Vec<&PredictionResult> = predictions
            .iter()
            .filter(|p| level_of(p) == RiskLevel::High)
            .collect();
        let medium: Vec<&PredictionResult> = predictions
            .iter()
            .filter(|p| level_of(p) == RiskLevel::Medium)
            .collect();

        let prediction_cards = high
            .iter()
            .chain(medium.iter().take(MEDIUM_RISK_CARDS))
            .map(|p| {
                let level = RiskLevel::of(p.probability);
                PredictionCard {
                    risk_level: level,
                    event: p.prediction_type.clone(),
                    probability: p.probability,
                    action: p.recommended_action.clone(),
                    timing: p.optimal_timing,
                    icon: prediction_icon(&p.prediction_type).to_owned(),
                    color: level.color().to_owned(),
                }
            })
            .collect();

        PredictionsDashboard {
            title: self.text.text("viz.title.predictions"),
            summary: RiskCounts {
                high_risk_count: high.len(),
                medium_risk_count: medium.len(),
                low_risk_count: predictions.len() - high.len() - medium.len(),
            },
            prediction_cards,
            overall_risk_score: overall_risk_score(predictions),
        }
    }

    /// Optimization zone chart, highest priority first
    #[must_use]
    pub fn optimization_zones_chart(&self, dna: &NutritionDna) -> OptimizationZonesChart {
        let mut cards: Vec<ZoneCard> = dna
            .optimization_zones
            .iter()
            .map(|zone| {
                let current = zone.current_score * 100.0;
                let target = zone.target_score * 100.0;
                ZoneCard {
                    area: self.text.text(&format!("area.{}", zone.area)),
                    current_score: current,
                    target_score: target,
                    improvement_needed: target - current,
                    difficulty: zone.difficulty,
                    difficulty_color: difficulty_color(zone.difficulty).to_owned(),
                    impact: zone.impact,
                    impact_icon: impact_icon(zone.impact).to_owned(),
                    priority: zone_priority(zone),
                }
            })
            .collect();
        cards.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(Ordering::Equal));

        OptimizationZonesChart {
            title: self.text.text("viz.title.zones"),
            total_zones: cards.len(),
            easy_wins: dna
                .optimization_zones
                .iter()
                .filter(|zone| zone.difficulty == Difficulty::EasyWins)
                .count(),
            optimization_cards: cards,
        }
    }

    /// Last 14 active days within `timeframe_days` before `reference`
    #[must_use]
    pub fn progress_timeline(
        &self,
        logs: &[FoodLogEntry],
        timeframe_days: i64,
        reference: NaiveDateTime,
    ) -> ProgressTimeline {
        let cutoff = reference - Duration::days(timeframe_days);
        let mut by_day: BTreeMap<NaiveDate, Vec<log_view::TimedEntry<'_>>> = BTreeMap::new();
        for entry in log_view::timed(logs) {
            if entry.at >= cutoff && entry.at <= reference {
                by_day.entry(entry.date()).or_default().push(entry);
            }
        }

        if by_day.is_empty() {
            return ProgressTimeline {
                title: self.text.text("viz.title.progress"),
                message: Some(self.text.text("viz.progress.no_data")),
                timeline: Vec::new(),
                summary: TimelineSummary::default(),
            };
        }

        let skip = by_day.len().saturating_sub(TIMELINE_POINTS);
        let timeline: Vec<TimelinePoint> = by_day
            .into_iter()
            .skip(skip)
            .map(|(date, entries)| TimelinePoint {
                date,
                analyses_count: entries.len(),
                total_calories: entries.iter().map(log_view::TimedEntry::calories).sum(),
                variety_score: metadata_variety(&entries, 50),
                quality_score: day_quality_score(&entries),
            })
            .collect();

        let counts: Vec<f64> = timeline
            .iter()
            .map(|point| point.analyses_count as f64)
            .collect();
        ProgressTimeline {
            title: self.text.text("viz.title.progress"),
            message: None,
            summary: TimelineSummary {
                total_analyses: timeline.iter().map(|point| point.analyses_count).sum(),
                active_days: timeline
                    .iter()
                    .filter(|point| point.analyses_count > 0)
                    .count(),
                avg_daily_analyses: StatisticalAnalyzer::mean_or(&counts, 0.0),
            },
            timeline,
        }
    }

    /// Social radar; indulgence, stress snacking, eating out and social impact are inverted
    #[must_use]
    pub fn social_patterns_radar(&self, dna: &NutritionDna) -> SocialPatternsRadar {
        let social = &dna.social_patterns;
        let axes = [
            ("planning", social.planning_score),
            ("weekends", 1.0 - social.weekend_indulgence_score),
            ("stress_control", 1.0 - social.work_stress_snacking),
            ("home_cooking", 1.0 - social.restaurant_frequency),
            ("independence", 1.0 - social.social_meal_impact),
        ];

        SocialPatternsRadar {
            title: self.text.text("viz.title.social"),
            radar_data: axes
                .iter()
                .map(|(axis, value)| RadarAxis {
                    axis: self.text.text(&format!("viz.radar.{axis}")),
                    value: *value,
                    max: 1.0,
                })
                .collect(),
            insights: axes
                .iter()
                .take(3)
                .map(|(axis, value)| {
                    self.text.render(
                        &format!("viz.radar.{axis}.insight"),
                        &[("value", percent(*value))],
                    )
                })
                .collect(),
        }
    }

    /// Every chart in display order; weekly and prediction sections only when supplied
    #[must_use]
    pub fn report(
        &self,
        dna: &NutritionDna,
        logs: &[FoodLogEntry],
        weekly: Option<&WeeklyInsight>,
        predictions: &[PredictionResult],
    ) -> NutritionReport {
        let now = self.clock.now();
        let mut components = vec![
            ReportComponent::DnaSummaryCard(self.dna_summary_card(dna)),
            ReportComponent::TemporalPatternsChart(self.temporal_patterns_chart(dna)),
            ReportComponent::SocialPatternsRadar(self.social_patterns_radar(dna)),
            ReportComponent::OptimizationZonesChart(self.optimization_zones_chart(dna)),
            ReportComponent::ProgressTimeline(self.progress_timeline(
                logs,
                DEFAULT_TIMELINE_DAYS,
                now.naive_utc(),
            )),
        ];
        if let Some(weekly) = weekly {
            components.push(ReportComponent::WeeklyInsightsChart(
                self.weekly_insights_chart(weekly),
            ));
        }
        if !predictions.is_empty() {
            components.push(ReportComponent::PredictionsDashboard(
                self.predictions_dashboard(predictions),
            ));
        }

        NutritionReport {
            title: self.text.text("viz.title.report"),
            generated_at: now,
            user_archetype: dna.archetype,
            summary: ReportSummary {
                overall_score: (dna.diversity_score
                    + dna.consistency_score
                    + dna.goal_alignment_score)
                    / 3.0,
                data_quality: dna.data_quality_score,
                confidence: dna.confidence_score,
                total_components: components.len(),
            },
            components,
        }
    }
}

/// Share of distinct metadata prefixes among `entries`
fn metadata_variety(entries: &[log_view::TimedEntry<'_>], prefix: usize) -> f64 {
    let distinct: HashSet<String> = entries
        .iter()
        .map(|e| e.entry.metadata_text().chars().take(prefix).collect())
        .collect();
    distinct.len() as f64 / entries.len().max(1) as f64
}

/// Day quality: meal coverage, variety, and a late-eating penalty, capped at 1
#[must_use]
pub fn day_quality_score(entries: &[log_view::TimedEntry<'_>]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let has = |start: u32, end: u32| entries.iter().any(|e| (start..=end).contains(&e.hour()));
    let covered = [has(5, 11), has(11, 16), has(17, 22)]
        .into_iter()
        .filter(|hit| *hit)
        .count();
    let distribution = covered as f64 / 3.0;
    let variety = metadata_variety(entries, 30);
    let late = entries.iter().filter(|e| e.hour() >= 22).count() as f64;

    f64::min(
        distribution * 0.5 + variety * 0.3 + f64::max(0.0, 0.2 - 0.1 * late),
        1.0,
    )
}
