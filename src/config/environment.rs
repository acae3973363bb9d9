// ABOUTME: Environment configuration for the plan service
// ABOUTME: Resolves catalog paths, scorer timeout and planner overrides once at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Environment-based configuration
//!
//! Every variable is optional. A malformed value is reported with `warn!` and
//! replaced by its default; only an inconsistent merged planner configuration
//! is fatal.

use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use fitplan_intelligence::PlannerConfig;
use tracing::{info, warn};

use crate::constants::{defaults, env_vars};
use crate::scoring::{BoundedScorer, LearnedScorer};

/// Service configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Food catalog location; `None` leaves the catalog unavailable
    pub food_catalog_path: Option<PathBuf>,
    /// Exercise catalog location; `None` leaves the catalog unavailable
    pub exercise_catalog_path: Option<PathBuf>,
    /// Deadline for one learned-scorer pass over a catalog
    pub scorer_timeout: Duration,
    /// Engine tables with environment overrides applied
    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            food_catalog_path: None,
            exercise_catalog_path: None,
            scorer_timeout: Duration::from_millis(defaults::SCORER_TIMEOUT_MS),
            planner: PlannerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the merged planner configuration is inconsistent
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut planner = PlannerConfig::default();
        if let Some(top_n) = parse_env::<usize>(env_vars::TOP_N) {
            planner.ranking.top_n = top_n;
        }
        if let Some(foods_per_meal) = parse_env::<usize>(env_vars::FOODS_PER_MEAL) {
            planner.ranking.foods_per_meal = foods_per_meal;
        }
        if let Some(deload_week) = parse_env::<u32>(env_vars::DELOAD_WEEK) {
            planner.progression.deload_week = deload_week;
        }
        if let Some(currency) = non_empty_env(env_vars::CURRENCY) {
            planner.costs.currency = currency;
        }

        let config = Self {
            food_catalog_path: non_empty_env(env_vars::FOOD_CATALOG).map(PathBuf::from),
            exercise_catalog_path: non_empty_env(env_vars::EXERCISE_CATALOG).map(PathBuf::from),
            scorer_timeout: Duration::from_millis(
                parse_env(env_vars::SCORER_TIMEOUT_MS).unwrap_or(defaults::SCORER_TIMEOUT_MS),
            ),
            planner,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the planner tables are inconsistent
    pub fn validate(&self) -> Result<()> {
        self.planner
            .validate()
            .context("Invalid planner configuration")
    }

    /// Bound a learned scorer by the configured per-pass deadline
    #[must_use]
    pub fn bounded_scorer(&self, scorer: Arc<dyn LearnedScorer>) -> BoundedScorer {
        BoundedScorer::new(scorer, self.scorer_timeout)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitplan Configuration:\n\
             - Food catalog: {}\n\
             - Exercise catalog: {}\n\
             - Scorer timeout: {} ms\n\
             - Top N: {}\n\
             - Foods per meal: {}\n\
             - Deload week: {}\n\
             - Currency: {}",
            display_path(self.food_catalog_path.as_deref()),
            display_path(self.exercise_catalog_path.as_deref()),
            self.scorer_timeout.as_millis(),
            self.planner.ranking.top_n,
            self.planner.ranking.foods_per_meal,
            self.planner.progression.deload_week,
            self.planner.costs.currency,
        )
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "not configured".to_owned(), |p| p.display().to_string())
}

/// Trimmed value of a set, non-blank variable
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parsed value of a variable; malformed values are logged and ignored
fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = non_empty_env(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = key, value = %raw, "Ignoring malformed value: {e}");
            None
        }
    }
}
