// ABOUTME: Statistical helpers shared by the analyzers: mean, sample deviation, time-of-day statistics
// ABOUTME: Time-of-day helpers support linear minutes-since-midnight and circular 24-hour statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use crate::config::intelligence::TimeStatistics;
use std::f64::consts::TAU;

/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Statistical helpers
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, `None` for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Arithmetic mean, `default` for an empty slice
    #[must_use]
    pub fn mean_or(values: &[f64], default: f64) -> f64 {
        Self::mean(values).unwrap_or(default)
    }

    /// Sample standard deviation (n - 1), `None` with fewer than two values
    #[must_use]
    pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (values.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Divide with a neutral result of 1.0 for a zero denominator
    #[must_use]
    pub fn ratio_or_neutral(numerator: f64, denominator: f64) -> f64 {
        if denominator > 0.0 {
            numerator / denominator
        } else {
            1.0
        }
    }

    /// Relative spread `(max - min) / max`, zero when `max` is not positive
    #[must_use]
    pub fn relative_spread(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        if values.is_empty() || max <= 0.0 {
            return 0.0;
        }
        (max - min) / max
    }

    /// Mean time of day in minutes since midnight
    #[must_use]
    pub fn time_mean(minutes: &[f64], mode: TimeStatistics) -> Option<f64> {
        match mode {
            TimeStatistics::Linear => Self::mean(minutes),
            TimeStatistics::Circular => {
                let (sin, cos) = Self::angle_sums(minutes)?;
                let angle = sin.atan2(cos).rem_euclid(TAU);
                Some(angle / TAU * MINUTES_PER_DAY)
            }
        }
    }

    /// Deviation of times of day in minutes, `None` with fewer than two values
    #[must_use]
    pub fn time_std_dev(minutes: &[f64], mode: TimeStatistics) -> Option<f64> {
        match mode {
            TimeStatistics::Linear => Self::sample_std_dev(minutes),
            TimeStatistics::Circular => {
                if minutes.len() < 2 {
                    return None;
                }
                let (sin, cos) = Self::angle_sums(minutes)?;
                let n = minutes.len() as f64;
                let resultant = (sin.hypot(cos) / n).clamp(f64::MIN_POSITIVE, 1.0);
                let radians = (-2.0 * resultant.ln()).sqrt();
                Some(radians / TAU * MINUTES_PER_DAY)
            }
        }
    }

    /// Sums of sines and cosines of the 24-hour angles
    fn angle_sums(minutes: &[f64]) -> Option<(f64, f64)> {
        if minutes.is_empty() {
            return None;
        }
        Some(minutes.iter().fold((0.0, 0.0), |(sin, cos), m| {
            let angle = m / MINUTES_PER_DAY * TAU;
            (sin + angle.sin(), cos + angle.cos())
        }))
    }
}
