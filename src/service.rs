// ABOUTME: Plan service facade: validates requests, gathers learned hints, runs the engine
// ABOUTME: Owns the shared catalogs and engine; one tracing span per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Service
//!
//! The boundary between callers and the pure engine. Validation happens here,
//! before the engine runs, and so does the only non-deterministic input: the
//! start date defaults to today when a request leaves it out.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use fitplan_core::constants::limits;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    Exercise, FoodItem, MealPlan, MealPlanRequest, NutritionInsights, NutritionProfile,
    WorkoutInsights, WorkoutPlan, WorkoutPlanRequest, WorkoutProfile,
};
use fitplan_intelligence::schedule::resolve_focus_areas;
use fitplan_intelligence::search::{
    filter_exercises, local_foods, search_exercises, search_foods, ExerciseFilter,
};
use fitplan_intelligence::PlanEngine;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::catalog::Catalogs;
use crate::config::ServerConfig;
use crate::scoring::BoundedScorer;

/// Shared entry point for plan generation and catalog browsing
#[derive(Debug, Clone)]
pub struct PlanService {
    engine: Arc<PlanEngine>,
    catalogs: Catalogs,
    scorer: BoundedScorer,
}

impl PlanService {
    /// Service over already-loaded catalogs, without a learned scorer
    #[must_use]
    pub fn new(engine: PlanEngine, catalogs: Catalogs) -> Self {
        Self {
            engine: Arc::new(engine),
            catalogs,
            scorer: BoundedScorer::disabled(),
        }
    }

    /// Attach a learned scorer
    #[must_use]
    pub fn with_scorer(mut self, scorer: BoundedScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Build the engine and load both catalogs from start-up configuration
    ///
    /// # Errors
    ///
    /// Returns a config error for inconsistent planner tables, or the catalog
    /// loader's error for a catalog file that cannot be parsed
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let engine = PlanEngine::new(config.planner.clone())
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;
        let catalogs = Catalogs::load(
            config.food_catalog_path.as_deref(),
            config.exercise_catalog_path.as_deref(),
        )?;
        Ok(Self::new(engine, catalogs))
    }

    /// Engine in use
    #[must_use]
    pub fn engine(&self) -> &PlanEngine {
        &self.engine
    }

    /// Catalogs in use
    #[must_use]
    pub const fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Validate and generate a meal plan
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range profile or request
    pub async fn meal_plan(
        &self,
        profile: &NutritionProfile,
        request: &MealPlanRequest,
    ) -> AppResult<MealPlan> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "meal_plan",
            request_id = %request_id,
            user_id = %profile.person.user_id
        );

        async {
            profile
                .validate()
                .and_then(|()| request.validate())
                .map_err(|e| tag(e, &request_id, &profile.person.user_id))?;

            let foods = &self.catalogs.foods;
            let hints = self.scorer.food_hints(&profile.person, foods.items()).await;
            Ok(self
                .engine
                .meal_plan(profile, request, foods, &hints, start_or_today(request.start_date)))
        }
        .instrument(span)
        .await
    }

    /// Validate and generate a workout programme
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range profile or request
    pub async fn workout_plan(
        &self,
        profile: &WorkoutProfile,
        request: &WorkoutPlanRequest,
    ) -> AppResult<WorkoutPlan> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "workout_plan",
            request_id = %request_id,
            user_id = %profile.person.user_id
        );

        async {
            profile
                .validate()
                .and_then(|()| request.validate())
                .map_err(|e| tag(e, &request_id, &profile.person.user_id))?;

            let exercises = &self.catalogs.exercises;
            let groups = resolve_focus_areas(&request.focus_areas, &profile.person.goals);
            let hints = self
                .scorer
                .exercise_hints(profile, exercises.items(), &groups)
                .await;
            Ok(self.engine.workout_plan(
                profile,
                request,
                exercises,
                &hints,
                start_or_today(request.start_date),
            ))
        }
        .instrument(span)
        .await
    }

    /// Validate and compute nutrition insights
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range profile
    pub fn nutrition_insights(&self, profile: &NutritionProfile) -> AppResult<NutritionInsights> {
        profile.validate()?;
        Ok(self.engine.nutrition_insights(profile))
    }

    /// Validate and compute workout insights
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range profile
    pub fn workout_insights(&self, profile: &WorkoutProfile) -> AppResult<WorkoutInsights> {
        profile.validate()?;
        Ok(self.engine.workout_insights(profile))
    }

    /// Foods matching `query`, at most `limit` (default 20)
    #[must_use]
    pub fn search_foods(&self, query: &str, limit: Option<usize>) -> Vec<FoodItem> {
        search_foods(
            &self.catalogs.foods,
            query,
            limit.unwrap_or(limits::SEARCH_RESULT_LIMIT),
        )
    }

    /// Local foods, optionally of one category
    #[must_use]
    pub fn local_foods(&self, category: Option<&str>) -> Vec<FoodItem> {
        local_foods(&self.catalogs.foods, category)
    }

    /// Exercises matching `query`, at most `limit` (default 20)
    #[must_use]
    pub fn search_exercises(&self, query: &str, limit: Option<usize>) -> Vec<Exercise> {
        search_exercises(
            &self.catalogs.exercises,
            query,
            limit.unwrap_or(limits::SEARCH_RESULT_LIMIT),
        )
    }

    /// Exercises passing `filter`
    #[must_use]
    pub fn filter_exercises(&self, filter: &ExerciseFilter) -> Vec<Exercise> {
        filter_exercises(&self.catalogs.exercises, filter)
    }
}

fn start_or_today(start: Option<NaiveDate>) -> NaiveDate {
    start.unwrap_or_else(|| Local::now().date_naive())
}

fn tag(error: AppError, request_id: &str, user_id: &str) -> AppError {
    error.with_request_id(request_id).with_user_id(user_id)
}
