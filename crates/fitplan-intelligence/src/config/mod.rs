// ABOUTME: Configuration module for fitplan-intelligence crate
// ABOUTME: Re-exports planner configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

/// Planner tables (targets, ranking, allocation, progression, costs, recommendations)
pub mod planner;

pub use planner::{ConfigError, PlannerConfig};
