// ABOUTME: Tests for the unified error type
// ABOUTME: Error codes, wire names, retryability, context attachment and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

use nutrition_dna::errors::{AppError, ErrorCode};

#[test]
fn test_error_code_wire_names() {
    assert_eq!(
        serde_json::to_string(&ErrorCode::VersionConflict).unwrap(),
        "\"VERSION_CONFLICT\""
    );
    assert_eq!(
        serde_json::from_str::<ErrorCode>("\"RESOURCE_LOCKED\"").unwrap(),
        ErrorCode::ResourceLocked
    );
}

#[test]
fn test_retryable_codes() {
    assert!(ErrorCode::ResourceLocked.is_retryable());
    assert!(ErrorCode::VersionConflict.is_retryable());
    assert!(ErrorCode::StorageError.is_retryable());
    assert!(!ErrorCode::InvalidInput.is_retryable());
    assert!(!ErrorCode::InsufficientData.is_retryable());
}

#[test]
fn test_version_conflict_carries_both_versions() {
    let error = AppError::version_conflict("nutrition_dna:alice", 2, 3).with_user_id("alice");

    assert_eq!(error.code, ErrorCode::VersionConflict);
    assert_eq!(error.context.user_id.as_deref(), Some("alice"));
    assert_eq!(
        error.context.resource_id.as_deref(),
        Some("nutrition_dna:alice")
    );
    assert_eq!(error.context.details["expected_version"], 2);
    assert_eq!(error.context.details["actual_version"], 3);
    assert_eq!(
        error.to_string(),
        "The resource was modified concurrently: expected version 2, found 3"
    );
}

#[test]
fn test_locked_and_not_found_messages() {
    let locked = AppError::locked("nutrition_dna:bob");
    assert_eq!(locked.code, ErrorCode::ResourceLocked);
    assert!(locked.message.contains("already being processed"));

    let missing = AppError::not_found("nutrition_dna:bob");
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
    assert_eq!(missing.message, "nutrition_dna:bob not found");
}

#[test]
fn test_conversions() {
    let parse_failure = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = parse_failure.into();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(std::error::Error::source(&error).is_some());

    let error: AppError = anyhow::anyhow!("backend unavailable").into();
    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(error.message, "backend unavailable");

    assert_eq!(AppError::storage("disk full").code, ErrorCode::StorageError);
    assert_eq!(AppError::config("bad split").code, ErrorCode::ConfigInvalid);
}
