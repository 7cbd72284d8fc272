// ABOUTME: Main library entry point for the Nutrition DNA behavioral analytics workspace
// ABOUTME: Wires logging, storage collaborators and the refresh service around the analytics crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![deny(unsafe_code)]

//! # Nutrition DNA
//!
//! Turns a user's meal-log history into a behavioral eating profile and the
//! predictions, insights, meal plans and chart payloads derived from it.
//!
//! ## Architecture
//!
//! - **`nutrition_core`**: errors, the meal-log and profile data model, time parsing
//! - **`nutrition_intelligence`**: the synchronous analytics engines
//! - **storage**: async collaborator traits with an in-memory backend
//! - **services**: per-user DNA refresh over the storage collaborators
//! - **logging**: `tracing` subscriber setup for binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_dna::intelligence::NutritionDnaGenerator;
//! use nutrition_dna::models::{FoodLogEntry, Macros, UserProfile};
//!
//! let logs = vec![
//!     FoodLogEntry::new("2025-03-03T08:00:00", Some(Macros::new(420.0, 25.0, 12.0, 50.0))),
//!     FoodLogEntry::new("2025-03-03T13:00:00", Some(Macros::new(650.0, 35.0, 20.0, 70.0))),
//! ];
//! let dna = NutritionDnaGenerator::default().generate(&UserProfile::default(), &logs, None);
//! println!("{} ({:.0}%)", dna.archetype, dna.confidence_score * 100.0);
//! ```

/// Structured logging setup
pub mod logging;

/// Storage collaborator traits and the in-memory backend
pub mod storage;

/// Async services over the analytics and storage
pub mod services;

pub use nutrition_core::{constants, errors, models, time};
pub use nutrition_intelligence as intelligence;
