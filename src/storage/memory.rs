// ABOUTME: In-memory storage backend implementing every storage collaborator trait
// ABOUTME: Sharded dashmap tables with append sequences, atomic versioned upserts and insight expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use super::{
    DnaStore, FoodLogStore, LogBatch, ProfileStore, StoredDna, StoredWeeklyInsight,
    WeeklyInsightStore,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{FoodLogEntry, NutritionDna, UserProfile, WeeklyInsight};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// In-memory store shared by clones
///
/// Each table is an `Arc<DashMap>` so the service and tests can hold the same
/// store. Upserts run inside a single shard entry, so the version check and
/// the write are atomic per user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: Arc<DashMap<String, UserProfile>>,
    logs: Arc<DashMap<String, Vec<FoodLogEntry>>>,
    dna: Arc<DashMap<String, StoredDna>>,
    insights: Arc<DashMap<(String, NaiveDate), StoredWeeklyInsight>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored DNA row
    #[must_use]
    pub fn dna_count(&self) -> usize {
        self.dna.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).map(|profile| profile.clone()))
    }

    async fn put_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()> {
        self.profiles.insert(user_id.to_owned(), profile);
        Ok(())
    }
}

#[async_trait]
impl FoodLogStore for InMemoryStore {
    async fn append_log(&self, user_id: &str, entry: FoodLogEntry) -> AppResult<u64> {
        let mut entries = self.logs.entry(user_id.to_owned()).or_default();
        entries.push(entry);
        Ok(entries.len() as u64)
    }

    async fn list_logs(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<FoodLogEntry>> {
        let Some(entries) = self.logs.get(user_id) else {
            return Ok(Vec::new());
        };
        Ok(match since {
            None => entries.clone(),
            Some(since) => entries
                .iter()
                .filter(|entry| entry.recorded_instant().is_some_and(|at| at >= since))
                .cloned()
                .collect(),
        })
    }

    async fn list_logs_after(&self, user_id: &str, after: u64) -> AppResult<LogBatch> {
        let Some(entries) = self.logs.get(user_id) else {
            return Ok(LogBatch::default());
        };
        let skip = usize::try_from(after).unwrap_or(usize::MAX);
        Ok(LogBatch {
            entries: entries.iter().skip(skip).cloned().collect(),
            last_sequence: entries.len() as u64,
        })
    }
}

#[async_trait]
impl DnaStore for InMemoryStore {
    async fn get_dna(&self, user_id: &str) -> AppResult<Option<StoredDna>> {
        Ok(self.dna.get(user_id).map(|record| record.clone()))
    }

    async fn upsert_dna(
        &self,
        user_id: &str,
        dna: NutritionDna,
        expected_version: u64,
        log_sequence: u64,
        now: DateTime<Utc>,
    ) -> AppResult<StoredDna> {
        let stored = match self.dna.entry(user_id.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get_mut();
                if current.version != expected_version {
                    return Err(AppError::version_conflict(
                        format!("nutrition_dna:{user_id}"),
                        expected_version,
                        current.version,
                    )
                    .with_user_id(user_id));
                }
                current.dna = dna;
                current.version += 1;
                current.updated_at = now;
                current.log_sequence = log_sequence;
                current.clone()
            }
            Entry::Vacant(vacant) => {
                if expected_version != 0 {
                    return Err(AppError::version_conflict(
                        format!("nutrition_dna:{user_id}"),
                        expected_version,
                        0,
                    )
                    .with_user_id(user_id));
                }
                let record = StoredDna {
                    id: Uuid::new_v4(),
                    user_id: user_id.to_owned(),
                    dna,
                    version: 1,
                    created_at: now,
                    updated_at: now,
                    log_sequence,
                };
                vacant.insert(record.clone());
                record
            }
        };
        debug!(user.id = %user_id, dna.version = stored.version, "Stored Nutrition DNA");
        Ok(stored)
    }
}

#[async_trait]
impl WeeklyInsightStore for InMemoryStore {
    async fn save_weekly_insight(
        &self,
        user_id: &str,
        insight: WeeklyInsight,
        saved_at: DateTime<Utc>,
    ) -> AppResult<StoredWeeklyInsight> {
        let key = (user_id.to_owned(), insight.week_start);
        let record = StoredWeeklyInsight::new(user_id, insight, saved_at);
        self.insights.insert(key, record.clone());
        Ok(record)
    }

    async fn get_weekly_insight(
        &self,
        user_id: &str,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Option<StoredWeeklyInsight>> {
        Ok(self
            .insights
            .get(&(user_id.to_owned(), week_start))
            .filter(|record| !record.is_expired(now))
            .map(|record| record.clone()))
    }

    async fn purge_expired_insights(&self, now: DateTime<Utc>) -> AppResult<usize> {
        let before = self.insights.len();
        self.insights.retain(|_, record| !record.is_expired(now));
        let removed = before.saturating_sub(self.insights.len());
        if removed > 0 {
            debug!(removed, "Purged expired weekly insights");
        }
        Ok(removed)
    }
}
