// ABOUTME: Learned-scorer integration tests
// ABOUTME: Hints only break ties; slow or failing scorers fall back to rule-based plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use fitplan::config::ServerConfig;
use fitplan::errors::ErrorCode;
use fitplan::models::{MealPlanRequest, MealType};
use fitplan::scoring::{BoundedScorer, LearnedScorer};
use fitplan_intelligence::FeatureVector;

mod common;

/// Prefers one item and scores everything else at zero
struct FavoriteScorer(&'static str);

#[async_trait]
impl LearnedScorer for FavoriteScorer {
    async fn score(&self, features: &FeatureVector) -> Result<f64> {
        Ok(if features.item_id == self.0 { 1.0 } else { 0.0 })
    }
}

struct SlowScorer;

#[async_trait]
impl LearnedScorer for SlowScorer {
    async fn score(&self, _features: &FeatureVector) -> Result<f64> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(1.0)
    }
}

struct FailingScorer;

#[async_trait]
impl LearnedScorer for FailingScorer {
    async fn score(&self, _features: &FeatureVector) -> Result<f64> {
        bail!("model unavailable")
    }
}

fn request() -> MealPlanRequest {
    MealPlanRequest {
        days: 1,
        start_date: Some(common::start_date()),
        ..MealPlanRequest::default()
    }
}

fn first_food(plan: &fitplan::models::MealPlan, meal_type: MealType) -> String {
    plan.meals
        .iter()
        .find(|meal| meal.meal_type == meal_type)
        .and_then(|meal| meal.foods.first())
        .map(|food| food.food_id.clone())
        .unwrap()
}

#[tokio::test]
async fn test_hints_break_ties_only() {
    let profile = common::nutrition_profile();
    let baseline = common::service().meal_plan(&profile, &request()).await.unwrap();

    let scorer = BoundedScorer::new(
        Arc::new(FavoriteScorer("salade_legumes")),
        Duration::from_secs(5),
    );
    let scored = common::service()
        .with_scorer(scorer)
        .meal_plan(&profile, &request())
        .await
        .unwrap();

    // snack keywords match nothing local, so every candidate ties
    assert_eq!(first_food(&baseline, MealType::Snack), "thieboudienne");
    assert_eq!(first_food(&scored, MealType::Snack), "salade_legumes");

    // lunch keywords still decide lunch
    assert_eq!(first_food(&scored, MealType::Lunch), "thieboudienne");
}

#[tokio::test]
async fn test_slow_scorer_falls_back_to_rules() {
    let profile = common::nutrition_profile();
    let baseline = common::service().meal_plan(&profile, &request()).await.unwrap();

    let scorer = BoundedScorer::new(Arc::new(SlowScorer), Duration::from_millis(20));
    let plan = common::service()
        .with_scorer(scorer)
        .meal_plan(&profile, &request())
        .await
        .unwrap();

    assert_eq!(plan, baseline);
}

#[tokio::test]
async fn test_failing_scorer_yields_no_hints() {
    let scorer = BoundedScorer::new(Arc::new(FailingScorer), Duration::from_secs(1));
    let catalogs = common::catalogs();
    let hints = scorer
        .food_hints(&common::nutrition_profile().person, catalogs.foods.items())
        .await;
    assert!(hints.is_empty());
}

#[tokio::test]
async fn test_strict_pass_reports_failure_and_timeout_codes() {
    let catalogs = common::catalogs();
    let person = common::nutrition_profile().person;

    let failing = BoundedScorer::new(Arc::new(FailingScorer), Duration::from_secs(1));
    let err = failing
        .score_foods(&person, catalogs.foods.items())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("model unavailable"));

    let slow = BoundedScorer::new(Arc::new(SlowScorer), Duration::from_millis(20));
    let err = slow
        .score_exercises(&common::workout_profile(), catalogs.exercises.items(), &[])
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceTimeout);
    assert!(!err.is_validation());
}

#[tokio::test]
async fn test_exercise_hints_cover_catalog() {
    let scorer = BoundedScorer::new(
        Arc::new(FavoriteScorer("goblet_squat")),
        Duration::from_secs(1),
    );
    let catalogs = common::catalogs();
    let groups = vec!["legs".to_owned()];
    let hints = scorer
        .exercise_hints(&common::workout_profile(), catalogs.exercises.items(), &groups)
        .await;

    assert_eq!(hints.len(), catalogs.exercises.len());
    assert!((hints.score("goblet_squat") - 1.0).abs() < f64::EPSILON);
    assert!(hints.score("etirements").abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_disabled_scorer_returns_immediately() {
    let scorer = BoundedScorer::disabled();
    assert!(!scorer.is_enabled());
    let catalogs = common::catalogs();
    let hints = scorer
        .food_hints(&common::nutrition_profile().person, catalogs.foods.items())
        .await;
    assert!(hints.is_empty());
}

#[tokio::test]
async fn test_configured_deadline_bounds_scorer() {
    let config = ServerConfig {
        scorer_timeout: Duration::from_millis(10),
        ..ServerConfig::default()
    };
    let scorer = config.bounded_scorer(Arc::new(SlowScorer));
    assert!(scorer.is_enabled());

    let catalogs = common::catalogs();
    let hints = scorer
        .food_hints(&common::nutrition_profile().person, catalogs.foods.items())
        .await;
    assert!(hints.is_empty());
}
