// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, validation limits, catalog tags, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable tables (ratios, thresholds,
//! cost rates) live in the engine configuration instead.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Validation limits applied at the request boundary
pub mod limits {
    /// Minimum accepted age in years
    pub const MIN_AGE: u32 = 1;
    /// Maximum accepted age in years
    pub const MAX_AGE: u32 = 120;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Longest meal plan that can be requested (days)
    pub const MAX_PLAN_DAYS: u32 = 366;
    /// Longest workout program that can be requested (weeks)
    pub const MAX_PLAN_WEEKS: u32 = 104;
    /// Most sessions that can be scheduled in one week
    pub const MAX_WORKOUTS_PER_WEEK: u32 = 14;
    /// Longest single session (minutes)
    pub const MAX_SESSION_MINUTES: u32 = 600;
    /// Default number of results returned by catalog searches
    pub const SEARCH_RESULT_LIMIT: usize = 20;
}

/// Well-known catalog tags
pub mod tags {
    /// Muscle-group tag for whole-body movements
    pub const FULL_BODY: &str = "full_body";
    /// Muscle-group tag for trunk work
    pub const CORE: &str = "core";
    /// Equipment tag meaning "no equipment required"
    pub const NO_EQUIPMENT: &str = "none";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const FITPLAN: &str = "fitplan";
}
