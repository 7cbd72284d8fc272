// ABOUTME: Nutrition DNA orchestration: generation from log batches, scores, and the update lifecycle
// ABOUTME: Chooses minor patch, full regeneration, or weighted blend with bounded signal retention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # DNA Generator
//!
//! [`NutritionDnaGenerator::generate`] never fails: any error raised while
//! building a profile is logged and replaced by [`NutritionDna::fallback`].
//! Callers treat a confidence at or below [`FALLBACK_CONFIDENCE`] as
//! "no real profile yet".
//!
//! ## Update lifecycle
//!
//! | Condition | Strategy |
//! |-----------|----------|
//! | fewer than 3 days and confidence above 0.8 | minor patch |
//! | more than 14 days or confidence below 0.5 | regenerate from the new logs |
//! | otherwise | weighted blend |

use crate::config::intelligence::{GeneratorConfig, TimeStatistics};
use crate::goal::GoalKind;
use crate::log_view;
use crate::psychological_profile::PsychologicalProfileAnalyzer;
use crate::temporal_patterns::TemporalPatternAnalyzer;
use crate::text::{percent, TextRenderer};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{
    ContextSample, FoodLogEntry, NutritionDna, SuccessPattern, Trigger, UserProfile,
    FALLBACK_CONFIDENCE,
};
use nutrition_core::time::{Clock, SystemClock};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Characters of metadata text used as a food identity
const FOOD_IDENTITY_CHARS: usize = 50;
/// Unique-food ratio that maps to full diversity
const FULL_DIVERSITY_RATIO: f64 = 0.5;
/// Daily calories a muscle-gain goal counts as adequate
const MUSCLE_GAIN_CALORIES: f64 = 2000.0;
/// Protein grams per kcal counted as fully aligned for muscle gain
const MUSCLE_GAIN_PROTEIN_RATIO: f64 = 0.15;
/// Calorie band considered moderate for weight loss without a target
const WEIGHT_LOSS_BAND: (f64, f64) = (1200.0, 1800.0);

/// How an existing DNA is refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Nudge confidence only
    MinorPatch,
    /// Discard the existing DNA and generate from the new logs
    Regenerate,
    /// Blend the existing DNA with one generated from the new logs
    Blend,
}

impl fmt::Display for UpdateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinorPatch => f.write_str("minor_patch"),
            Self::Regenerate => f.write_str("regenerate"),
            Self::Blend => f.write_str("blend"),
        }
    }
}

/// One user's input for batch generation
#[derive(Debug, Clone)]
pub struct UserBatch {
    /// User identifier
    pub user_id: String,
    /// Profile projection
    pub profile: UserProfile,
    /// Meal logs
    pub logs: Vec<FoodLogEntry>,
}

/// Builds and maintains Nutrition DNA profiles
#[derive(Debug, Clone)]
pub struct NutritionDnaGenerator {
    config: GeneratorConfig,
    temporal: TemporalPatternAnalyzer,
    psychological: PsychologicalProfileAnalyzer,
    clock: Arc<dyn Clock>,
}

impl Default for NutritionDnaGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl NutritionDnaGenerator {
    /// Generator using the system clock and linear time statistics
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            temporal: TemporalPatternAnalyzer::new(),
            psychological: PsychologicalProfileAnalyzer::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Stamp generated profiles with `clock`
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use the given time-of-day statistics mode
    #[must_use]
    pub fn with_time_statistics(mut self, mode: TimeStatistics) -> Self {
        self.temporal = self.temporal.with_time_statistics(mode);
        self
    }

    /// Render narrative text through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.temporal = self.temporal.with_renderer(text.clone());
        self.psychological = self.psychological.with_renderer(text);
        self
    }

    /// Generator configuration
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a profile; any failure yields the fallback DNA
    #[must_use]
    pub fn generate(
        &self,
        profile: &UserProfile,
        logs: &[FoodLogEntry],
        context: Option<&[ContextSample]>,
    ) -> NutritionDna {
        info!(
            logs.count = logs.len(),
            context.count = context.map_or(0, <[ContextSample]>::len),
            "Generating Nutrition DNA"
        );
        match self.try_generate(profile, logs) {
            Ok(dna) => {
                info!(
                    dna.archetype = %dna.archetype,
                    dna.confidence = dna.confidence_score,
                    "Generated Nutrition DNA"
                );
                dna
            }
            Err(e) => {
                error!(error = %e, "Failed to generate Nutrition DNA, using fallback profile");
                NutritionDna::fallback(self.clock.now())
            }
        }
    }

    /// Build a profile, reporting why generation was not possible
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for an empty batch and `InvalidInput` when an
    /// entry carries negative or non-finite macros
    pub fn try_generate(
        &self,
        profile: &UserProfile,
        logs: &[FoodLogEntry],
    ) -> AppResult<NutritionDna> {
        if logs.is_empty() {
            return Err(AppError::insufficient_data(
                "No meal logs to build a profile from",
            ));
        }
        if let Some(entry) = logs
            .iter()
            .find(|entry| entry.macros.is_some_and(|m| !m.is_valid()))
        {
            return Err(AppError::invalid_input(format!(
                "Entry at {} has negative or non-finite macros",
                entry.timestamp
            )));
        }

        let temporal_patterns = self.temporal.analyze(logs);
        let energy_patterns = TemporalPatternAnalyzer::analyze_energy(logs);
        let archetype = PsychologicalProfileAnalyzer::detect_archetype(
            logs,
            temporal_patterns.meal_timing_consistency,
        );

        Ok(NutritionDna {
            archetype,
            confidence_score: self.confidence_score(logs, profile),
            energy_patterns,
            social_patterns: PsychologicalProfileAnalyzer::analyze_social(logs),
            triggers: PsychologicalProfileAnalyzer::identify_triggers(logs),
            success_patterns: PsychologicalProfileAnalyzer::identify_success_patterns(logs),
            optimization_zones: PsychologicalProfileAnalyzer::identify_optimization_zones(
                logs, profile,
            ),
            diversity_score: Self::diversity_score(logs),
            consistency_score: temporal_patterns.meal_timing_consistency,
            goal_alignment_score: Self::goal_alignment(logs, profile),
            data_quality_score: Self::data_quality_score(logs),
            temporal_patterns,
            generated_at: self.clock.now(),
        })
    }

    /// Generate profiles for many users in parallel
    #[must_use]
    pub fn generate_many(&self, batches: &[UserBatch]) -> Vec<(String, NutritionDna)> {
        batches
            .par_iter()
            .map(|batch| {
                debug!(user.id = %batch.user_id, "Generating batch profile");
                (
                    batch.user_id.clone(),
                    self.generate(&batch.profile, &batch.logs, None),
                )
            })
            .collect()
    }

    /// Which strategy `update` applies
    #[must_use]
    pub fn update_strategy(&self, existing: &NutritionDna, days_since_update: i64) -> UpdateStrategy {
        let policy = &self.config.update;
        if days_since_update < policy.minor_patch_max_days
            && existing.confidence_score > policy.minor_patch_min_confidence
        {
            UpdateStrategy::MinorPatch
        } else if days_since_update > policy.regenerate_after_days
            || existing.confidence_score < policy.regenerate_below_confidence
        {
            UpdateStrategy::Regenerate
        } else {
            UpdateStrategy::Blend
        }
    }

    /// Refresh an existing profile with new logs
    #[must_use]
    pub fn update(
        &self,
        existing: &NutritionDna,
        new_logs: &[FoodLogEntry],
        profile: &UserProfile,
        days_since_update: i64,
    ) -> NutritionDna {
        let strategy = self.update_strategy(existing, days_since_update);
        info!(
            strategy = %strategy,
            days_since_update,
            dna.confidence = existing.confidence_score,
            logs.count = new_logs.len(),
            "Updating Nutrition DNA"
        );
        match strategy {
            UpdateStrategy::MinorPatch => self.minor_patch(existing, new_logs),
            UpdateStrategy::Regenerate => self.generate(profile, new_logs, None),
            UpdateStrategy::Blend => self.blend(existing, new_logs, profile),
        }
    }

    fn minor_patch(&self, existing: &NutritionDna, new_logs: &[FoodLogEntry]) -> NutritionDna {
        let mut patched = existing.clone();
        patched.generated_at = self.clock.now();
        if !new_logs.is_empty() {
            let adjustment = (Self::data_quality_score(new_logs) - existing.data_quality_score)
                * self.config.update.minor_confidence_step;
            patched.confidence_score = (existing.confidence_score + adjustment).clamp(0.0, 1.0);
        }
        patched
    }

    fn blend(
        &self,
        existing: &NutritionDna,
        new_logs: &[FoodLogEntry],
        profile: &UserProfile,
    ) -> NutritionDna {
        let fresh = self.generate(profile, new_logs, None);
        let blend = &self.config.blend;

        let existing_weight = existing.confidence_score * blend.existing_weight_factor;
        let fresh_weight = 1.0 - existing_weight;
        let mix = |old: f64, new: f64| (old * existing_weight + new * fresh_weight).clamp(0.0, 1.0);

        let mut blended = existing.clone();
        blended.diversity_score = mix(existing.diversity_score, fresh.diversity_score);
        blended.goal_alignment_score = mix(existing.goal_alignment_score, fresh.goal_alignment_score);
        blended.confidence_score = mix(existing.confidence_score, fresh.confidence_score);

        if fresh.archetype != existing.archetype
            && fresh.confidence_score > blend.archetype_replace_confidence
        {
            debug!(
                from = %existing.archetype,
                to = %fresh.archetype,
                "Replacing archetype during blend"
            );
            blended.archetype = fresh.archetype;
        }

        blended.triggers = retain_recent(
            existing.triggers.iter().chain(&fresh.triggers).cloned().collect(),
            blend.retention_capacity,
            |t: &Trigger| t.trigger.clone(),
            |t: &Trigger| t.probability,
        );
        blended.success_patterns = retain_recent(
            existing
                .success_patterns
                .iter()
                .chain(&fresh.success_patterns)
                .cloned()
                .collect(),
            blend.retention_capacity,
            |p: &SuccessPattern| p.pattern.clone(),
            |p: &SuccessPattern| p.correlation,
        );
        blended.generated_at = self.clock.now();
        blended
    }

    /// Mean of volume, coverage, profile completeness and macro completeness
    #[must_use]
    pub fn confidence_score(&self, logs: &[FoodLogEntry], profile: &UserProfile) -> f64 {
        let scaling = &self.config.confidence;
        let dates: HashSet<_> = log_view::timed(logs).iter().map(|t| t.date()).collect();

        let volume = (logs.len() as f64 / scaling.full_log_count as f64).min(1.0);
        let coverage = (dates.len() as f64 / scaling.full_day_coverage as f64).min(1.0);
        let complete = Self::complete_macro_share(logs);

        round3((volume + coverage + profile.completeness() + complete) / 4.0)
    }

    /// Mean of macro completeness, metadata presence and timestamp validity
    #[must_use]
    pub fn data_quality_score(logs: &[FoodLogEntry]) -> f64 {
        if logs.is_empty() {
            return 0.0;
        }
        let n = logs.len() as f64;
        let with_metadata = logs.iter().filter(|e| !e.metadata.is_empty()).count() as f64 / n;
        let parseable = log_view::timed(logs).len() as f64 / n;
        (Self::complete_macro_share(logs) + with_metadata + parseable) / 3.0
    }

    /// Distinct truncated-metadata identities per entry, rescaled so 0.5 maps to 1.0
    #[must_use]
    pub fn diversity_score(logs: &[FoodLogEntry]) -> f64 {
        if logs.is_empty() {
            return 0.0;
        }
        let identities: HashSet<String> = logs
            .iter()
            .map(|entry| entry.metadata_text().chars().take(FOOD_IDENTITY_CHARS).collect())
            .collect();
        let ratio = identities.len() as f64 / logs.len() as f64;
        round3((ratio / FULL_DIVERSITY_RATIO).min(1.0))
    }

    /// Goal-specific alignment of average daily intake
    #[must_use]
    pub fn goal_alignment(logs: &[FoodLogEntry], profile: &UserProfile) -> f64 {
        let has_goal = profile.goal.as_deref().is_some_and(|g| !g.trim().is_empty());
        if !has_goal || logs.is_empty() {
            return 0.5;
        }

        let total_calories: f64 = logs.iter().map(FoodLogEntry::calories).sum();
        let avg_daily = total_calories / log_view::distinct_days(logs) as f64;
        let target = profile.calorie_target();

        let alignment = match GoalKind::from_profile_goal(profile.goal.as_deref()) {
            GoalKind::WeightLoss => match target {
                Some(t) if avg_daily <= t => (t / avg_daily.max(1.0) - 0.9).min(1.0),
                Some(t) => (1.0 - (avg_daily - t) / t).max(0.2),
                None if (WEIGHT_LOSS_BAND.0..=WEIGHT_LOSS_BAND.1).contains(&avg_daily) => 0.8,
                None => 0.4,
            },
            GoalKind::MuscleGain => {
                let total_protein: f64 = logs.iter().map(FoodLogEntry::protein).sum();
                let calorie_alignment = if avg_daily >= MUSCLE_GAIN_CALORIES {
                    0.8
                } else {
                    avg_daily / MUSCLE_GAIN_CALORIES
                };
                let protein_ratio = total_protein / total_calories.max(1.0);
                let protein_alignment = (protein_ratio / MUSCLE_GAIN_PROTEIN_RATIO).min(1.0);
                (calorie_alignment + protein_alignment) / 2.0
            }
            GoalKind::Other => target.map_or(0.7, |t| (1.0 - (avg_daily - t).abs() / t).max(0.3)),
        };

        round3(alignment.clamp(0.0, 1.0))
    }

    /// Multiline description of a profile
    #[must_use]
    pub fn summary(dna: &NutritionDna, text: &TextRenderer) -> String {
        let archetype = text.text(&format!("archetype.{}.description", dna.archetype));
        let mut lines = vec![
            text.render("dna.summary.archetype", &[("archetype", archetype)]),
            text.render(
                "dna.summary.confidence",
                &[("value", percent(dna.confidence_score))],
            ),
            text.render(
                "dna.summary.diversity",
                &[("value", percent(dna.diversity_score))],
            ),
            text.render(
                "dna.summary.consistency",
                &[("value", percent(dna.consistency_score))],
            ),
            text.render(
                "dna.summary.goal_alignment",
                &[("value", percent(dna.goal_alignment_score))],
            ),
        ];

        if let Some(trigger) = dna.triggers.first() {
            lines.push(text.render(
                "dna.summary.main_trigger",
                &[
                    ("response", trigger.food_response.clone()),
                    ("trigger", trigger.trigger.clone()),
                ],
            ));
        }
        if let Some(zone) = dna.top_zone() {
            lines.push(text.render(
                "dna.summary.growth_zone",
                &[("area", zone.area.to_string())],
            ));
        }
        if dna.confidence_score <= FALLBACK_CONFIDENCE {
            lines.push(text.text("dna.summary.needs_more_data"));
        }

        lines.join("\n")
    }

    fn complete_macro_share(logs: &[FoodLogEntry]) -> f64 {
        let complete = logs
            .iter()
            .filter(|entry| entry.macros.is_some_and(|m| m.is_complete()))
            .count();
        complete as f64 / logs.len().max(1) as f64
    }
}

/// Keep the newest entry per name, then evict the lowest-scored entries
/// (oldest first among ties) until at most `capacity` remain
fn retain_recent<T>(
    items: Vec<T>,
    capacity: usize,
    name: impl Fn(&T) -> String,
    score: impl Fn(&T) -> f64,
) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut kept: Vec<T> = items
        .into_iter()
        .rev()
        .filter(|item| seen.insert(name(item)))
        .collect();
    kept.reverse();

    while kept.len() > capacity {
        let weakest = kept
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |weakest, (index, item)| {
                let value = score(item);
                match weakest {
                    Some((_, lowest)) if value >= lowest => weakest,
                    _ => Some((index, value)),
                }
            })
            .map(|(index, _)| index);
        match weakest {
            Some(index) => {
                kept.remove(index);
            }
            None => break,
        }
    }
    kept
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
