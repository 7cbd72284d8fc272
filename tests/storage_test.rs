// ABOUTME: Integration tests for the in-memory storage backend
// ABOUTME: Versioned DNA upserts, UTC and sequence log listing, weekly insight expiry and purge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use chrono::Duration;
use common::{date, instant, meal, monday, plus_days, weight_loss_profile};
use nutrition_dna::errors::ErrorCode;
use nutrition_dna::intelligence::PersonalizedInsightsEngine;
use nutrition_dna::models::{FoodLogEntry, NutritionDna, UserProfile};
use nutrition_dna::storage::memory::InMemoryStore;
use nutrition_dna::storage::{
    DnaStore, FoodLogStore, LogBatch, ProfileStore, WeeklyInsightStore,
};

#[tokio::test]
async fn test_dna_upsert_is_versioned() {
    let store = InMemoryStore::new();
    let t0 = instant(2025, 3, 1, 12);
    let t1 = instant(2025, 3, 5, 12);

    let first = store
        .upsert_dna("alice", NutritionDna::fallback(t0), 0, 0, t0)
        .await
        .unwrap();
    assert_eq!(first.version, 1);
    assert_eq!(first.created_at, t0);

    let stale = store
        .upsert_dna("alice", NutritionDna::fallback(t1), 0, 0, t1)
        .await
        .unwrap_err();
    assert_eq!(stale.code, ErrorCode::VersionConflict);

    let second = store
        .upsert_dna("alice", NutritionDna::fallback(t1), first.version, 4, t1)
        .await
        .unwrap();
    assert_eq!(second.version, 2);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, t0);
    assert_eq!(second.updated_at, t1);
    assert_eq!(first.log_sequence, 0);
    assert_eq!(second.log_sequence, 4);
    assert_eq!(second.days_since_update(t1 + Duration::days(3)), 3);
    assert_eq!(second.days_since_update(t0), 0);
    assert_eq!(store.dna_count(), 1);
}

#[tokio::test]
async fn test_upsert_without_row_requires_version_zero() {
    let store = InMemoryStore::new();
    let now = instant(2025, 3, 1, 12);

    let err = store
        .upsert_dna("bob", NutritionDna::fallback(now), 3, 0, now)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::VersionConflict);
    assert!(store.get_dna("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_logs_since_filters_by_timestamp() {
    let store = InMemoryStore::new();
    store.append_log("alice", meal(monday(), 8, 0, 400.0)).await.unwrap();
    store
        .append_log("alice", meal(plus_days(monday(), 2), 13, 0, 600.0))
        .await
        .unwrap();
    store
        .append_log("alice", FoodLogEntry::new("yesterday-ish", None))
        .await
        .unwrap();

    assert_eq!(store.list_logs("alice", None).await.unwrap().len(), 3);

    let since = plus_days(monday(), 1).and_hms_opt(0, 0, 0).unwrap().and_utc();
    let recent = store.list_logs("alice", Some(since)).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0], meal(plus_days(monday(), 2), 13, 0, 600.0));

    assert!(store.list_logs("nobody", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_logs_since_compares_utc_instants() {
    let store = InMemoryStore::new();
    // 04:00 UTC
    store
        .append_log("carol", FoodLogEntry::new("2025-03-10T09:00:00+05:00", None))
        .await
        .unwrap();
    // 07:00 UTC
    store
        .append_log("carol", FoodLogEntry::new("2025-03-10T02:00:00-05:00", None))
        .await
        .unwrap();

    let cutoff = date(2025, 3, 10).and_hms_opt(6, 0, 0).unwrap().and_utc();
    let after_cutoff = store.list_logs("carol", Some(cutoff)).await.unwrap();
    assert_eq!(after_cutoff.len(), 1);
    assert_eq!(after_cutoff[0].timestamp, "2025-03-10T02:00:00-05:00");

    let early = date(2025, 3, 10).and_hms_opt(3, 59, 0).unwrap().and_utc();
    assert_eq!(store.list_logs("carol", Some(early)).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_append_sequences_follow_insertion_order() {
    let store = InMemoryStore::new();
    assert_eq!(
        store.append_log("dave", meal(monday(), 8, 0, 400.0)).await.unwrap(),
        1
    );
    // Backfilled entry dated a month earlier still gets the next sequence number
    let backfilled = meal(plus_days(monday(), -30), 12, 0, 650.0);
    assert_eq!(store.append_log("dave", backfilled.clone()).await.unwrap(), 2);

    let batch = store.list_logs_after("dave", 1).await.unwrap();
    assert_eq!(batch.entries, vec![backfilled]);
    assert_eq!(batch.last_sequence, 2);

    let everything = store.list_logs_after("dave", 0).await.unwrap();
    assert_eq!(everything.entries.len(), 2);
    assert!(store.list_logs_after("dave", 2).await.unwrap().entries.is_empty());
    assert_eq!(
        store.list_logs_after("nobody", 0).await.unwrap(),
        LogBatch::default()
    );
}

#[tokio::test]
async fn test_profiles_are_replaced() {
    let store = InMemoryStore::new();
    assert!(store.get_profile("alice").await.unwrap().is_none());

    store.put_profile("alice", UserProfile::default()).await.unwrap();
    store.put_profile("alice", weight_loss_profile()).await.unwrap();

    assert_eq!(
        store.get_profile("alice").await.unwrap(),
        Some(weight_loss_profile())
    );
}

#[tokio::test]
async fn test_weekly_insights_expire_after_a_week() {
    let store = InMemoryStore::new();
    let saved_at = instant(2025, 3, 3, 9);
    let dna = NutritionDna::fallback(saved_at);
    let insight = PersonalizedInsightsEngine::default().weekly_insights(&dna, monday(), &[]);

    let stored = store
        .save_weekly_insight("alice", insight.clone(), saved_at)
        .await
        .unwrap();
    assert_eq!(stored.expires_at, saved_at + Duration::days(7));

    let fresh = store
        .get_weekly_insight("alice", monday(), saved_at + Duration::days(6))
        .await
        .unwrap();
    assert_eq!(fresh.map(|record| record.insight), Some(insight));

    let expired_at = saved_at + Duration::days(7);
    assert!(store
        .get_weekly_insight("alice", monday(), expired_at)
        .await
        .unwrap()
        .is_none());
    assert!(store
        .get_weekly_insight("alice", plus_days(monday(), 7), saved_at)
        .await
        .unwrap()
        .is_none());

    assert_eq!(store.purge_expired_insights(saved_at).await.unwrap(), 0);
    assert_eq!(store.purge_expired_insights(expired_at).await.unwrap(), 1);
    assert_eq!(store.purge_expired_insights(expired_at).await.unwrap(), 0);
}
