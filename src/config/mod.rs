// ABOUTME: Configuration module for process start-up settings
// ABOUTME: Environment-driven catalog paths, scorer deadline and planner overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Configuration module for the fitplan service
//!
//! - **Environment**: catalog locations, learned-scorer deadline and planner
//!   table overrides, resolved once from environment variables
//! - **Planner**: the engine tables themselves, re-exported from
//!   `fitplan-intelligence`

/// Environment and service configuration
pub mod environment;

pub use environment::ServerConfig;
pub use fitplan_intelligence::config::{ConfigError, PlannerConfig};
