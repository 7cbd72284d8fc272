// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates defaults, environment handling, CLI settings and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

#![allow(clippy::unwrap_used, missing_docs)]

use nutrition_dna::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_vars() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_vars();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);
    assert!(config.include_spans);
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_logging_vars();
    env::set_var("LOG_FORMAT", "yaml");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "nutrition-dna");
    assert!(!config.include_thread);
}

#[test]
fn test_cli_logging_is_quiet_unless_verbose() {
    let quiet = LoggingConfig::for_cli(false);
    let verbose = LoggingConfig::for_cli(true);

    assert_eq!(quiet.level, "warn");
    assert_eq!(verbose.level, "debug");
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(quiet.service_name, "nutrition-cli");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!(" compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::Pretty.to_string(), "pretty");
}
