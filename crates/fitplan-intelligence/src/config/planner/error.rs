// ABOUTME: Configuration error types for planner table validation
// ABOUTME: Defines error variants for invalid ranges, weights, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Configuration error types for planner validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g. a ratio not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}
