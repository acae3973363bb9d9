// ABOUTME: Process-level constants for the fitplan binary and service
// ABOUTME: Environment variable names and start-up defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants read once at start-up. Engine tables live in
//! [`fitplan_intelligence::PlannerConfig`]; domain constants live in
//! [`fitplan_core::constants`].

pub use fitplan_core::constants::{limits, service_names, tags};

/// Environment variable names
pub mod env_vars {
    /// Path to the food catalog JSON array
    pub const FOOD_CATALOG: &str = "FITPLAN_FOOD_CATALOG";
    /// Path to the exercise catalog JSON array
    pub const EXERCISE_CATALOG: &str = "FITPLAN_EXERCISE_CATALOG";
    /// Learned-scorer deadline in milliseconds
    pub const SCORER_TIMEOUT_MS: &str = "FITPLAN_SCORER_TIMEOUT_MS";
    /// General top-N candidate limit
    pub const TOP_N: &str = "FITPLAN_TOP_N";
    /// Foods kept per meal
    pub const FOODS_PER_MEAL: &str = "FITPLAN_FOODS_PER_MEAL";
    /// Deload period in weeks
    pub const DELOAD_WEEK: &str = "FITPLAN_DELOAD_WEEK";
    /// Currency code reported with shopping costs
    pub const CURRENCY: &str = "FITPLAN_CURRENCY";
}

/// Start-up defaults
pub mod defaults {
    /// Learned-scorer deadline when none is configured
    pub const SCORER_TIMEOUT_MS: u64 = 250;
}
