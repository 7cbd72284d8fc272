// ABOUTME: Storage collaborator traits for profiles, meal logs, Nutrition DNA records and weekly insights
// ABOUTME: Pluggable async backends; the refresh service depends only on these traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Storage Collaborators
//!
//! The analytics core performs no I/O. Everything it reads or produces is
//! persisted through the traits in this module:
//!
//! - [`ProfileStore`]: one [`UserProfile`] per user
//! - [`FoodLogStore`]: append-only meal logs per user
//! - [`DnaStore`]: one versioned [`NutritionDna`] row per user, upserted by user id
//! - [`WeeklyInsightStore`]: weekly insights kept for [`WEEKLY_INSIGHT_TTL_DAYS`] days
//!
//! Stores never read a clock; callers pass the instant an operation happens at.
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use nutrition_dna::storage::memory::InMemoryStore;
//! use nutrition_dna::storage::DnaStore;
//! use nutrition_core::models::NutritionDna;
//! # async fn example() -> nutrition_core::errors::AppResult<()> {
//! let store = InMemoryStore::new();
//! let now = Utc::now();
//! let first = store.upsert_dna("user-1", NutritionDna::fallback(now), 0, 0, now).await?;
//! assert_eq!(first.version, 1);
//! let second = store
//!     .upsert_dna("user-1", NutritionDna::fallback(now), first.version, 0, now)
//!     .await?;
//! assert_eq!(second.version, 2);
//! # Ok(())
//! # }
//! ```

/// In-memory implementation of every store
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use nutrition_core::errors::AppResult;
use nutrition_core::models::{FoodLogEntry, NutritionDna, UserProfile, WeeklyInsight};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days a saved weekly insight stays readable
pub const WEEKLY_INSIGHT_TTL_DAYS: i64 = 7;

/// Persisted Nutrition DNA row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDna {
    /// Row identifier, stable across upserts
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// The profile itself
    pub dna: NutritionDna,
    /// Incremented on every successful upsert, starting at 1
    pub version: u64,
    /// First insert
    pub created_at: DateTime<Utc>,
    /// Last successful upsert
    pub updated_at: DateTime<Utc>,
    /// Sequence number of the last log entry this DNA has seen, `0` for none
    #[serde(default)]
    pub log_sequence: u64,
}

impl StoredDna {
    /// Whole days between the last upsert and `now`, never negative
    #[must_use]
    pub fn days_since_update(&self, now: DateTime<Utc>) -> i64 {
        (now - self.updated_at).num_days().max(0)
    }
}

/// Log entries appended after a sequence number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogBatch {
    /// Entries in insertion order
    pub entries: Vec<FoodLogEntry>,
    /// Sequence number of the newest entry in the user's log, `0` when empty
    pub last_sequence: u64,
}

/// Persisted weekly insight with its expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWeeklyInsight {
    /// Row identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// The insight
    pub insight: WeeklyInsight,
    /// When it was saved
    pub saved_at: DateTime<Utc>,
    /// `saved_at` plus the insight time-to-live
    pub expires_at: DateTime<Utc>,
}

impl StoredWeeklyInsight {
    /// Wrap `insight` saved at `saved_at`
    #[must_use]
    pub fn new(user_id: &str, insight: WeeklyInsight, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_owned(),
            insight,
            saved_at,
            expires_at: saved_at + Duration::days(WEEKLY_INSIGHT_TTL_DAYS),
        }
    }

    /// Whether the insight is no longer readable at `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Profile projection storage
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Profile for `user_id`, if one was saved
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Insert or replace the profile for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn put_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()>;
}

/// Meal log storage
#[async_trait]
pub trait FoodLogStore: Send + Sync {
    /// Append one entry to the user's log, returning its sequence number
    ///
    /// Sequence numbers start at 1 and increase by one per appended entry,
    /// whatever the entry's own timestamp says.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn append_log(&self, user_id: &str, entry: FoodLogEntry) -> AppResult<u64>;

    /// The user's entries in insertion order
    ///
    /// With `since`, only entries whose timestamp is at or after that UTC
    /// instant are returned; entries with unparsable timestamps are then
    /// excluded. Timestamps without an offset are read as UTC.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn list_logs(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<FoodLogEntry>>;

    /// Entries appended after sequence number `after`, backfilled ones included
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn list_logs_after(&self, user_id: &str, after: u64) -> AppResult<LogBatch>;
}

/// Versioned Nutrition DNA storage
#[async_trait]
pub trait DnaStore: Send + Sync {
    /// Current row for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn get_dna(&self, user_id: &str) -> AppResult<Option<StoredDna>>;

    /// Insert or replace the user's DNA
    ///
    /// `expected_version` is the version the caller read, `0` when no row
    /// existed. The stored version becomes `expected_version + 1`.
    /// `log_sequence` is the last log sequence number folded into `dna`.
    ///
    /// # Errors
    ///
    /// Returns `VersionConflict` when the stored version differs from
    /// `expected_version`, `StorageError` if the backend fails
    async fn upsert_dna(
        &self,
        user_id: &str,
        dna: NutritionDna,
        expected_version: u64,
        log_sequence: u64,
        now: DateTime<Utc>,
    ) -> AppResult<StoredDna>;
}

/// Weekly insight storage with expiry
#[async_trait]
pub trait WeeklyInsightStore: Send + Sync {
    /// Save an insight, replacing any earlier one for the same week
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn save_weekly_insight(
        &self,
        user_id: &str,
        insight: WeeklyInsight,
        saved_at: DateTime<Utc>,
    ) -> AppResult<StoredWeeklyInsight>;

    /// Unexpired insight for the week starting at `week_start`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn get_weekly_insight(
        &self,
        user_id: &str,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Option<StoredWeeklyInsight>>;

    /// Drop every insight expired at `now`, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    async fn purge_expired_insights(&self, now: DateTime<Utc>) -> AppResult<usize>;
}
