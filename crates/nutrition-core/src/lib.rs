// ABOUTME: Core types and constants for the Nutrition DNA analytics workspace
// ABOUTME: Foundation crate with error handling, meal-log data model, time parsing, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the Nutrition DNA
//! analytics workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorContext`
//! - **constants**: Keyword sets and service identifiers organized by domain
//! - **models**: Meal logs, user profiles, the Nutrition DNA aggregate, predictions, insights
//! - **time**: Timestamp parsing and the injectable `Clock`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodLogEntry`, `UserProfile`, `NutritionDna`, etc.)
pub mod models;

/// Timestamp parsing and clock abstraction
pub mod time;
