// ABOUTME: Per-user Nutrition DNA refresh service over the storage collaborators
// ABOUTME: Loads inputs, generates or updates the profile, upserts it versioned, and persists weekly insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # DNA Refresh Service
//!
//! Async shell around the synchronous analytics. All log retrieval completes
//! before the generator runs, and only one refresh per user is in flight at a
//! time; a concurrent request fails fast with `ResourceLocked`.

use crate::logging::AppLogger;
use crate::storage::{
    DnaStore, FoodLogStore, ProfileStore, StoredDna, StoredWeeklyInsight, WeeklyInsightStore,
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::time::{Clock, SystemClock};
use nutrition_intelligence::config::IntelligenceConfig;
use nutrition_intelligence::{
    NutritionDnaGenerator, PersonalizedInsightsEngine, TextRenderer, UpdateStrategy,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Removes the user's in-flight marker when the refresh ends, however it ends
struct InFlightGuard<'a> {
    in_flight: &'a DashMap<String, DateTime<Utc>>,
    user_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.user_id);
    }
}

/// Refreshes and persists Nutrition DNA for individual users
pub struct DnaRefreshService<S> {
    store: Arc<S>,
    generator: NutritionDnaGenerator,
    insights: PersonalizedInsightsEngine,
    clock: Arc<dyn Clock>,
    in_flight: DashMap<String, DateTime<Utc>>,
}

impl<S> DnaRefreshService<S>
where
    S: DnaStore + FoodLogStore + ProfileStore + WeeklyInsightStore + 'static,
{
    /// Service over `store` using the system clock
    #[must_use]
    pub fn new(store: Arc<S>, config: &IntelligenceConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            store,
            generator: NutritionDnaGenerator::new(config.generator.clone())
                .with_time_statistics(config.time_statistics)
                .with_clock(clock.clone()),
            insights: PersonalizedInsightsEngine::new(config.insights.clone()),
            clock,
            in_flight: DashMap::new(),
        }
    }

    /// Use `clock` for ages and stamps
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.generator = self.generator.with_clock(clock.clone());
        self.clock = clock;
        self
    }

    /// Render narrative text through `text`
    #[must_use]
    pub fn with_renderer(mut self, text: TextRenderer) -> Self {
        self.generator = self.generator.with_renderer(text.clone());
        self.insights = self.insights.with_renderer(text);
        self
    }

    /// Whether a refresh for `user_id` is currently running
    #[must_use]
    pub fn is_refreshing(&self, user_id: &str) -> bool {
        self.in_flight.contains_key(user_id)
    }

    fn acquire(&self, user_id: &str) -> AppResult<InFlightGuard<'_>> {
        match self.in_flight.entry(user_id.to_owned()) {
            Entry::Occupied(_) => {
                AppLogger::log_refresh_rejected(user_id);
                Err(AppError::locked(format!("nutrition_dna:{user_id}")).with_user_id(user_id))
            }
            Entry::Vacant(slot) => {
                slot.insert(self.clock.now());
                Ok(InFlightGuard {
                    in_flight: &self.in_flight,
                    user_id: user_id.to_owned(),
                })
            }
        }
    }

    /// Generate or update the user's DNA and store it
    ///
    /// Without a stored row the profile is generated from every log. With one,
    /// the logs appended since its last refresh feed the update lifecycle,
    /// whatever their timestamps; a regeneration reads the whole history so
    /// backfilled meals are never lost.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` while another refresh for the user runs,
    /// `VersionConflict` if the row changed underneath, and storage errors
    pub async fn refresh(&self, user_id: &str) -> AppResult<StoredDna> {
        let _guard = self.acquire(user_id)?;
        let started = Instant::now();
        let now = self.clock.now();

        let profile = self.store.get_profile(user_id).await?.unwrap_or_default();
        let existing = self.store.get_dna(user_id).await?;

        let (dna, strategy, expected_version, log_sequence) = match &existing {
            None => {
                let batch = self.store.list_logs_after(user_id, 0).await?;
                debug!(user.id = %user_id, logs.count = batch.entries.len(), "No stored DNA, generating");
                (
                    self.generator.generate(&profile, &batch.entries, None),
                    "generate".to_owned(),
                    0,
                    batch.last_sequence,
                )
            }
            Some(record) => {
                let days_since_update = record.days_since_update(now);
                let strategy = self.generator.update_strategy(&record.dna, days_since_update);
                let after = if strategy == UpdateStrategy::Regenerate {
                    0
                } else {
                    record.log_sequence
                };
                let batch = self.store.list_logs_after(user_id, after).await?;
                debug!(
                    user.id = %user_id,
                    logs.count = batch.entries.len(),
                    logs.after = after,
                    "Loaded logs for update"
                );
                (
                    self.generator
                        .update(&record.dna, &batch.entries, &profile, days_since_update),
                    strategy.to_string(),
                    record.version,
                    batch.last_sequence,
                )
            }
        };

        let stored = self
            .store
            .upsert_dna(user_id, dna, expected_version, log_sequence, now)
            .await?;
        AppLogger::log_dna_refresh(
            user_id,
            &strategy,
            stored.dna.archetype.as_str(),
            stored.dna.confidence_score,
            stored.version,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(stored)
    }

    /// Generate the week's insights from the stored DNA and persist them
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no stored DNA, and storage errors
    pub async fn weekly_insights(
        &self,
        user_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<StoredWeeklyInsight> {
        let record = self
            .store
            .get_dna(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("nutrition_dna:{user_id}")))?;

        let week_end = week_start
            .checked_add_days(Days::new(7))
            .ok_or_else(|| AppError::invalid_input(format!("Week {week_start} is out of range")))?;
        let week_logs: Vec<_> = self
            .store
            .list_logs(user_id, None)
            .await?
            .into_iter()
            .filter(|entry| {
                entry
                    .recorded_at()
                    .is_some_and(|at| at.date() >= week_start && at.date() < week_end)
            })
            .collect();

        let insight = self
            .insights
            .weekly_insights(&record.dna, week_start, &week_logs);
        let stored = self
            .store
            .save_weekly_insight(user_id, insight, self.clock.now())
            .await?;
        info!(
            user.id = %user_id,
            %week_start,
            logs.count = week_logs.len(),
            expires_at = %stored.expires_at,
            "Saved weekly insights"
        );
        Ok(stored)
    }

    /// Previously saved, unexpired insights for the week
    ///
    /// # Errors
    ///
    /// Returns storage errors
    pub async fn cached_weekly_insights(
        &self,
        user_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<Option<StoredWeeklyInsight>> {
        self.store
            .get_weekly_insight(user_id, week_start, self.clock.now())
            .await
    }
}
