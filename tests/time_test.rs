// ABOUTME: Tests for log timestamp parsing
// ABOUTME: Wall-clock versus UTC readings, date-only input and malformed strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::date;
use nutrition_dna::models::FoodLogEntry;
use nutrition_dna::time::{parse_instant, parse_timestamp};

#[test]
fn test_date_only_is_midnight() {
    assert_eq!(
        parse_timestamp("2025-03-10"),
        Some(date(2025, 3, 10).and_hms_opt(0, 0, 0).unwrap())
    );
    assert_eq!(
        parse_instant("2025-03-10"),
        Some(Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_offsets_keep_wall_clock_but_convert_instants() {
    let raw = "2025-03-10T09:00:00+05:00";

    assert_eq!(
        parse_timestamp(raw),
        Some(date(2025, 3, 10).and_hms_opt(9, 0, 0).unwrap())
    );
    assert_eq!(
        parse_instant(raw),
        Some(Utc.with_ymd_and_hms(2025, 3, 10, 4, 0, 0).unwrap())
    );
}

#[test]
fn test_naive_forms_read_as_utc() {
    assert_eq!(
        parse_instant("2025-03-10 18:45"),
        Some(Utc.with_ymd_and_hms(2025, 3, 10, 18, 45, 0).unwrap())
    );
    assert_eq!(
        parse_instant("2025-03-10T18:45:30.250")
            .map(|at| at.timestamp_millis() % 1000),
        Some(250)
    );
}

#[test]
fn test_malformed_timestamps_are_rejected() {
    for raw in ["", "   ", "yesterday", "2025-13-01", "10/03/2025"] {
        assert_eq!(parse_timestamp(raw), None, "{raw}");
        assert_eq!(parse_instant(raw), None, "{raw}");
    }
    let entry = FoodLogEntry::new("not a time", None);
    assert!(entry.recorded_at().is_none());
    assert!(entry.recorded_instant().is_none());
}
