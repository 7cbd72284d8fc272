// ABOUTME: Domain service layer orchestrating analytics and storage collaborators
// ABOUTME: Hosts the per-user Nutrition DNA refresh service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! Domain service layer
//!
//! Services perform the caller-side I/O the analytics never do: they load
//! inputs from storage, run the synchronous engines, and persist the results.

/// Per-user DNA refresh and weekly insight persistence
pub mod dna_refresh;

pub use dna_refresh::DnaRefreshService;
