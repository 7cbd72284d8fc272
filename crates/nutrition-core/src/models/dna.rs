// ABOUTME: Nutrition DNA aggregate: archetype, behavioral sub-patterns, triggers, and scores
// ABOUTME: Includes the fixed fallback profile and the static optimization-area lookup table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::time::time_of_day;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence at or below which a DNA is not a real profile yet
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Eating-personality archetype. Exactly one is assigned to every DNA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EatingArchetype {
    /// Eats early and on a regular schedule
    EarlyBirdPlanner,
    /// Skips mornings, eats late and on impulse
    LateStarterImpulsive,
    /// Regular timing with stable weekday and weekend intake
    StructuredBalanced,
    /// Late eating or weekend spikes linked to stress
    StressDriven,
    /// Eating strongly shaped by social situations
    SocialEater,
    /// No dominant pattern; default classification
    IntuitiveGrazer,
    /// Irregular meal timing driven by schedule
    BusyProfessional,
    /// Substantially higher intake on weekends
    WeekendWarrior,
}

impl EatingArchetype {
    /// All archetypes in declaration order
    pub const ALL: [Self; 8] = [
        Self::EarlyBirdPlanner,
        Self::LateStarterImpulsive,
        Self::StructuredBalanced,
        Self::StressDriven,
        Self::SocialEater,
        Self::IntuitiveGrazer,
        Self::BusyProfessional,
        Self::WeekendWarrior,
    ];

    /// Stable machine key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EarlyBirdPlanner => "EARLY_BIRD_PLANNER",
            Self::LateStarterImpulsive => "LATE_STARTER_IMPULSIVE",
            Self::StructuredBalanced => "STRUCTURED_BALANCED",
            Self::StressDriven => "STRESS_DRIVEN",
            Self::SocialEater => "SOCIAL_EATER",
            Self::IntuitiveGrazer => "INTUITIVE_GRAZER",
            Self::BusyProfessional => "BUSY_PROFESSIONAL",
            Self::WeekendWarrior => "WEEKEND_WARRIOR",
        }
    }

    /// Parse a machine key, case-insensitive
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.as_str().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for EatingArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appetite distribution over the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPattern {
    /// Share of intake between 06:00 and 12:00
    pub morning_appetite: f64,
    /// Share of intake between 12:00 and 18:00
    pub afternoon_hunger: f64,
    /// Share of intake between 18:00 and 22:00
    pub evening_comfort_eating: f64,
    /// Hour with the highest mean intake
    pub peak_hunger_time: NaiveTime,
    /// Hour with the lowest mean intake
    pub lowest_energy_time: NaiveTime,
}

/// Social and contextual eating scores, all in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialEatingPattern {
    /// Relative weekend calorie excess
    pub weekend_indulgence_score: f64,
    /// Work-hours snacking proxy
    pub work_stress_snacking: f64,
    /// Share of entries mentioning restaurants or cafes
    pub restaurant_frequency: f64,
    /// Share of entries with social keywords
    pub social_meal_impact: f64,
    /// Regularity of meal hours
    pub planning_score: f64,
}

/// Meal-time distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalPattern {
    /// Average breakfast time
    pub preferred_breakfast_time: NaiveTime,
    /// Average lunch time
    pub preferred_lunch_time: NaiveTime,
    /// Average dinner time
    pub preferred_dinner_time: NaiveTime,
    /// Mean per-slot timing consistency in [0, 1]
    pub meal_timing_consistency: f64,
    /// Absolute difference between weekend and weekday mean meal hour
    pub weekend_shift_hours: f64,
    /// Fraction of entries at or after 21:00
    pub late_night_eating_frequency: f64,
}

impl Default for TemporalPattern {
    fn default() -> Self {
        Self {
            preferred_breakfast_time: time_of_day(8, 0),
            preferred_lunch_time: time_of_day(13, 0),
            preferred_dinner_time: time_of_day(19, 0),
            meal_timing_consistency: 1.0,
            weekend_shift_hours: 0.0,
            late_night_eating_frequency: 0.0,
        }
    }
}

/// Situational cue associated with a food response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Cue name, e.g. `monday_compensation`
    pub trigger: String,
    /// Typical food response
    pub food_response: String,
    /// Heuristic probability in [0, 1]
    pub probability: f64,
    /// When the response typically happens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<NaiveTime>,
}

/// Behavior that correlates with a positive outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPattern {
    /// Pattern name
    pub pattern: String,
    /// Observed positive outcome
    pub outcome: String,
    /// Strength of the correlation in [0, 1]
    pub correlation: f64,
}

/// Effort required to close an optimization gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Small habit changes
    EasyWins,
    /// Needs some planning
    ModerateEffort,
    /// Needs a deliberate strategy
    RequiresStrategy,
    /// Long horizon change
    LongTermGoal,
}

impl Difficulty {
    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EasyWins => "easy_wins",
            Self::ModerateEffort => "moderate_effort",
            Self::RequiresStrategy => "requires_strategy",
            Self::LongTermGoal => "long_term_goal",
        }
    }
}

/// Expected impact of closing an optimization gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Low impact
    Low,
    /// Medium impact
    Medium,
    /// High impact
    High,
}

impl Impact {
    /// Lowercase key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Behavior area an optimization zone refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationArea {
    /// Daily protein relative to 1.2 g/kg
    ProteinIntake,
    /// Daily fiber relative to 25 g
    FiberIntake,
    /// Late-night eating share
    MealTiming,
    /// Weekday versus weekend calorie gap
    WeekendConsistency,
}

impl OptimizationArea {
    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProteinIntake => "protein_intake",
            Self::FiberIntake => "fiber_intake",
            Self::MealTiming => "meal_timing",
            Self::WeekendConsistency => "weekend_consistency",
        }
    }

    /// Static difficulty tag
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        match self {
            Self::ProteinIntake => Difficulty::ModerateEffort,
            Self::FiberIntake => Difficulty::EasyWins,
            Self::MealTiming | Self::WeekendConsistency => Difficulty::RequiresStrategy,
        }
    }

    /// Static impact tag
    #[must_use]
    pub const fn impact(self) -> Impact {
        match self {
            Self::ProteinIntake => Impact::High,
            Self::FiberIntake | Self::MealTiming | Self::WeekendConsistency => Impact::Medium,
        }
    }

    /// Target score the zone aims for
    #[must_use]
    pub const fn target_score(self) -> f64 {
        match self {
            Self::ProteinIntake | Self::MealTiming => 0.9,
            Self::FiberIntake | Self::WeekendConsistency => 0.8,
        }
    }
}

impl fmt::Display for OptimizationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identified behavior gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationZone {
    /// Area of the gap
    pub area: OptimizationArea,
    /// Effort tag
    pub difficulty: Difficulty,
    /// Impact tag
    pub impact: Impact,
    /// Current performance in [0, 1]
    pub current_score: f64,
    /// Target performance in [0, 1]
    pub target_score: f64,
}

impl OptimizationZone {
    /// Build a zone for `area` using its static tags
    #[must_use]
    pub const fn for_area(area: OptimizationArea, current_score: f64) -> Self {
        Self {
            area,
            difficulty: area.difficulty(),
            impact: area.impact(),
            current_score,
            target_score: area.target_score(),
        }
    }

    /// Distance between target and current score, never negative
    #[must_use]
    pub fn gap(&self) -> f64 {
        (self.target_score - self.current_score).max(0.0)
    }
}

/// Behavioral profile of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionDna {
    /// Assigned archetype
    pub archetype: EatingArchetype,
    /// Trust in this profile
    pub confidence_score: f64,
    /// Appetite distribution
    pub energy_patterns: EnergyPattern,
    /// Social eating scores
    pub social_patterns: SocialEatingPattern,
    /// Meal-time distribution
    pub temporal_patterns: TemporalPattern,
    /// Detected triggers
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    /// Detected success patterns
    #[serde(default)]
    pub success_patterns: Vec<SuccessPattern>,
    /// Behavior gaps
    #[serde(default)]
    pub optimization_zones: Vec<OptimizationZone>,
    /// Diet diversity proxy
    pub diversity_score: f64,
    /// Meal-timing consistency
    pub consistency_score: f64,
    /// Alignment of intake with the stated goal
    pub goal_alignment_score: f64,
    /// Quality of the data the profile was built from
    pub data_quality_score: f64,
    /// Generation instant
    pub generated_at: DateTime<Utc>,
}

impl NutritionDna {
    /// Fixed low-confidence profile returned when generation is not possible
    #[must_use]
    pub fn fallback(generated_at: DateTime<Utc>) -> Self {
        Self {
            archetype: EatingArchetype::IntuitiveGrazer,
            confidence_score: FALLBACK_CONFIDENCE,
            energy_patterns: EnergyPattern {
                morning_appetite: 0.3,
                afternoon_hunger: 0.5,
                evening_comfort_eating: 0.4,
                peak_hunger_time: time_of_day(13, 0),
                lowest_energy_time: time_of_day(6, 0),
            },
            social_patterns: SocialEatingPattern {
                weekend_indulgence_score: 0.3,
                work_stress_snacking: 0.3,
                restaurant_frequency: 0.2,
                social_meal_impact: 0.3,
                planning_score: 0.4,
            },
            temporal_patterns: TemporalPattern {
                meal_timing_consistency: 0.5,
                weekend_shift_hours: 1.0,
                late_night_eating_frequency: 0.2,
                ..TemporalPattern::default()
            },
            triggers: Vec::new(),
            success_patterns: Vec::new(),
            optimization_zones: Vec::new(),
            diversity_score: 0.5,
            consistency_score: 0.5,
            goal_alignment_score: 0.5,
            data_quality_score: FALLBACK_CONFIDENCE,
            generated_at,
        }
    }

    /// Whether this DNA carries no real profile yet
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.confidence_score <= FALLBACK_CONFIDENCE
    }

    /// The four scalar scores plus confidence
    #[must_use]
    pub const fn scores(&self) -> [f64; 5] {
        [
            self.confidence_score,
            self.diversity_score,
            self.consistency_score,
            self.goal_alignment_score,
            self.data_quality_score,
        ]
    }

    /// First high-impact zone, or the first zone of any impact
    #[must_use]
    pub fn top_zone(&self) -> Option<&OptimizationZone> {
        self.optimization_zones
            .iter()
            .find(|zone| zone.impact == Impact::High)
            .or_else(|| self.optimization_zones.first())
    }
}
