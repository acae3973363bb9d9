// ABOUTME: Optional learned-scorer collaborator bounded by a deadline
// ABOUTME: Scores whole catalogs into tie-break hints; failures and timeouts yield no hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Learned scoring
//!
//! A [`LearnedScorer`] turns one [`FeatureVector`] into a scalar. The
//! [`BoundedScorer`] runs it over a catalog under a single deadline. The
//! pass is all-or-nothing: one failed item or a missed deadline discards the
//! whole pass. The `score_*` methods report that as an [`AppError`]; the
//! `*_hints` methods log it and fall back to the rule-based order.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{Exercise, FoodItem, UserProfile, WorkoutProfile};
use fitplan_intelligence::{FeatureVector, ScoreHints};
use futures_util::future::try_join_all;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Service name reported in scorer errors
const SCORER_SERVICE: &str = "learned_scorer";

/// Model that scores a (profile, item) pair; higher is better
#[async_trait]
pub trait LearnedScorer: Send + Sync {
    /// Score one feature vector
    async fn score(&self, features: &FeatureVector) -> Result<f64>;
}

/// Optional scorer plus the deadline for one catalog pass
#[derive(Clone)]
pub struct BoundedScorer {
    scorer: Option<Arc<dyn LearnedScorer>>,
    deadline: Duration,
}

impl std::fmt::Debug for BoundedScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedScorer")
            .field("enabled", &self.scorer.is_some())
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl BoundedScorer {
    /// Wrap a scorer with a per-pass deadline
    #[must_use]
    pub fn new(scorer: Arc<dyn LearnedScorer>, deadline: Duration) -> Self {
        Self {
            scorer: Some(scorer),
            deadline,
        }
    }

    /// No scorer; every pass returns empty hints immediately
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            scorer: None,
            deadline: Duration::ZERO,
        }
    }

    /// Whether a scorer is attached
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.scorer.is_some()
    }

    /// Score every food in the catalog
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the scorer fails on any item, or
    /// a timeout error when the pass misses the deadline
    pub async fn score_foods(
        &self,
        person: &UserProfile,
        foods: &[FoodItem],
    ) -> AppResult<ScoreHints> {
        if !self.is_enabled() {
            return Ok(ScoreHints::none());
        }
        let vectors = foods
            .iter()
            .map(|food| FeatureVector::for_food(person, food))
            .collect();
        self.score_all("foods", vectors).await
    }

    /// Score every exercise in the catalog against the plan's target groups
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the scorer fails on any item, or
    /// a timeout error when the pass misses the deadline
    pub async fn score_exercises(
        &self,
        profile: &WorkoutProfile,
        exercises: &[Exercise],
        groups: &[String],
    ) -> AppResult<ScoreHints> {
        if !self.is_enabled() {
            return Ok(ScoreHints::none());
        }
        let vectors = exercises
            .iter()
            .map(|exercise| FeatureVector::for_exercise(profile, exercise, groups))
            .collect();
        self.score_all("exercises", vectors).await
    }

    /// Hints for every food; empty when scoring fails or times out
    pub async fn food_hints(&self, person: &UserProfile, foods: &[FoodItem]) -> ScoreHints {
        self.score_foods(person, foods)
            .await
            .unwrap_or_else(|e| rule_based_fallback("foods", &e))
    }

    /// Hints for every exercise; empty when scoring fails or times out
    pub async fn exercise_hints(
        &self,
        profile: &WorkoutProfile,
        exercises: &[Exercise],
        groups: &[String],
    ) -> ScoreHints {
        self.score_exercises(profile, exercises, groups)
            .await
            .unwrap_or_else(|e| rule_based_fallback("exercises", &e))
    }

    async fn score_all(&self, catalog: &str, vectors: Vec<FeatureVector>) -> AppResult<ScoreHints> {
        let Some(scorer) = &self.scorer else {
            return Ok(ScoreHints::none());
        };

        let pass = try_join_all(vectors.iter().map(|features| scorer.score(features)));
        let outcome = timeout(self.deadline, pass).await;
        match outcome {
            Ok(Ok(scores)) => {
                let hints: ScoreHints = vectors
                    .into_iter()
                    .map(|features| features.item_id)
                    .zip(scores)
                    .collect();
                debug!(catalog, scored = hints.len(), "Learned scores applied");
                Ok(hints)
            }
            Ok(Err(e)) => Err(AppError::external_service(SCORER_SERVICE, e.to_string())),
            Err(_) => Err(AppError::external_timeout(
                SCORER_SERVICE,
                self.deadline.as_millis() as u64,
            )),
        }
    }
}

fn rule_based_fallback(catalog: &str, error: &AppError) -> ScoreHints {
    warn!(
        catalog,
        code = ?error.code,
        error = %error,
        "Learned scoring unavailable, using rule-based ranking"
    );
    ScoreHints::none()
}

impl Default for BoundedScorer {
    fn default() -> Self {
        Self::disabled()
    }
}
