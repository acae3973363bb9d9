// ABOUTME: Planner configuration root grouping every fixed table the engine reads
// ABOUTME: PlannerConfig with defaults and whole-tree validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

/// Meal and phase ratio tables
pub mod allocation;
/// Cost table and recommendation thresholds
pub mod artifacts;
/// Configuration errors
pub mod error;
/// Weekly progression curve
pub mod progression;
/// Candidate ranker limits and keywords
pub mod ranking;
/// Target calculator tables
pub mod targets;

use serde::{Deserialize, Serialize};

pub use allocation::{AllocationConfig, MealRatioConfig, PhaseRatioConfig, PhaseRatios};
pub use artifacts::{CostConfig, CostRate, RecommendationConfig};
pub use error::ConfigError;
pub use progression::ProgressionConfig;
pub use ranking::{MealKeywordTables, MealKeywords, RankingConfig};
pub use targets::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalAdjustmentConfig,
    IntensityConfig, MacroSplit, MacroSplitConfig, TargetsConfig,
};

/// Every table used by the plan generation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Target calculator tables
    pub targets: TargetsConfig,
    /// Candidate ranker settings
    pub ranking: RankingConfig,
    /// Time-budget ratios
    pub allocation: AllocationConfig,
    /// Progression curve
    pub progression: ProgressionConfig,
    /// Shopping cost table
    pub costs: CostConfig,
    /// Recommendation thresholds and text
    pub recommendations: RecommendationConfig,
}

impl PlannerConfig {
    /// Validate the whole configuration tree
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.targets.validate()?;
        self.ranking.validate()?;
        self.allocation.validate()?;
        self.progression.validate()?;
        self.costs.validate()?;
        self.recommendations.validate()
    }
}
