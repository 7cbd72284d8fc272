// ABOUTME: Timestamp parsing for meal logs and the injectable clock abstraction
// ABOUTME: Accepts RFC 3339, naive and date-only ISO-8601 forms; SystemClock and FixedClock implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt::Debug;

/// Naive timestamp layouts accepted after RFC 3339 fails
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layout, read as midnight
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a log timestamp into the wall-clock time it was recorded at.
///
/// Offsets are honoured by keeping the local time of the given offset, so
/// `2025-03-03T08:15:00+03:00` yields 08:15 on March 3rd. A bare date such as
/// `2025-03-10` is midnight of that day. Returns `None` for anything that is
/// not a recognizable ISO-8601 instant.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }

    parse_naive(trimmed)
}

/// Parse a log timestamp into an absolute UTC instant.
///
/// Offset-bearing timestamps are converted to UTC; naive and date-only forms
/// are taken as UTC. Use this for ordering and cutoffs, and
/// [`parse_timestamp`] for time-of-day analysis.
#[must_use]
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&Utc));
    }

    parse_naive(trimmed).map(|naive| naive.and_utc())
}

fn parse_naive(trimmed: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Build a time of day from an hour and minute, saturating invalid values to midnight
#[must_use]
pub fn time_of_day(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Source of "now" for components that stamp or age records
pub trait Clock: Send + Sync + Debug {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
