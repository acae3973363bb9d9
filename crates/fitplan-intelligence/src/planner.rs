// ABOUTME: Plan engine facade running targets, ranking, allocation, scheduling and artifacts in order
// ABOUTME: Holds only immutable configuration; safe to share across concurrent requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::NaiveDate;
use fitplan_core::models::{
    CatalogSnapshot, Exercise, FoodItem, MealPlan, MealPlanRequest, NutritionInsights,
    NutritionProfile, WorkoutInsights, WorkoutPlan, WorkoutPlanRequest, WorkoutProfile,
};
use tracing::{info, warn};

use crate::artifacts::{
    equipment_requirements, nutrition_summary, progression_plan, shopping_list, total_cost,
};
use crate::config::{ConfigError, PlannerConfig};
use crate::features::ScoreHints;
use crate::recommendations::{
    nutrition_insights, workout_insights, workout_nutrition_recommendations,
};
use crate::schedule::{add_days, assemble_meals, assemble_sessions};
use crate::targets::{nutrition_targets, workout_intensity};

/// Deterministic plan generator
///
/// Inputs are expected to be validated already. Missing catalogs and empty
/// candidate sets produce empty meals or sessions, never errors.
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    config: PlannerConfig,
}

impl PlanEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a meal plan of `request.days` days starting at `start`
    #[must_use]
    pub fn meal_plan(
        &self,
        profile: &NutritionProfile,
        request: &MealPlanRequest,
        foods: &CatalogSnapshot<FoodItem>,
        hints: &ScoreHints,
        start: NaiveDate,
    ) -> MealPlan {
        if !foods.is_available() {
            warn!(user_id = %profile.person.user_id, "Food catalog unavailable, meals will be empty");
        }
        let config = &self.config;
        let targets = nutrition_targets(profile, request, &config.targets);
        let meals = assemble_meals(profile, request, &targets, foods.items(), config, hints, start);
        let shopping = shopping_list(&meals, &config.costs);
        let cost = total_cost(&shopping);
        let summary = nutrition_summary(
            &meals,
            targets.macros,
            &config.targets.energy_density,
            &config.recommendations,
        );
        let end_date = add_days(start, u64::from(request.days.saturating_sub(1)));

        info!(
            user_id = %profile.person.user_id,
            days = request.days,
            meals = meals.len(),
            shopping_items = shopping.len(),
            total_cost = cost,
            "Meal plan generated"
        );

        MealPlan {
            user_id: profile.person.user_id.clone(),
            start_date: start,
            end_date,
            targets,
            meals,
            shopping_list: shopping,
            total_cost: cost,
            currency: config.costs.currency.clone(),
            summary,
        }
    }

    /// Build a workout programme of `request.duration_weeks` weeks starting at `start`
    #[must_use]
    pub fn workout_plan(
        &self,
        profile: &WorkoutProfile,
        request: &WorkoutPlanRequest,
        exercises: &CatalogSnapshot<Exercise>,
        hints: &ScoreHints,
        start: NaiveDate,
    ) -> WorkoutPlan {
        if !exercises.is_available() {
            warn!(user_id = %profile.person.user_id, "Exercise catalog unavailable, sessions will be empty");
        }
        let config = &self.config;
        let intensity = workout_intensity(
            profile.fitness_level,
            &profile.person.goals,
            &config.targets.intensity,
        );
        let sessions = assemble_sessions(profile, request, exercises.items(), config, hints);
        let progression = progression_plan(request.duration_weeks, &config.progression);
        let equipment = equipment_requirements(&sessions);
        let nutrition = workout_nutrition_recommendations(&sessions, &config.recommendations);
        let end_date = add_days(start, 7 * u64::from(request.duration_weeks));

        info!(
            user_id = %profile.person.user_id,
            weeks = request.duration_weeks,
            sessions = sessions.len(),
            overall_intensity = intensity.overall,
            "Workout plan generated"
        );

        WorkoutPlan {
            user_id: profile.person.user_id.clone(),
            start_date: start,
            end_date,
            total_weeks: request.duration_weeks,
            workouts_per_week: request.workouts_per_week,
            total_workouts: sessions.len(),
            intensity,
            sessions,
            progression_plan: progression,
            equipment_requirements: equipment,
            nutrition_recommendations: nutrition,
        }
    }

    /// Profile-level nutrition advice
    #[must_use]
    pub fn nutrition_insights(&self, profile: &NutritionProfile) -> NutritionInsights {
        nutrition_insights(profile, &self.config.targets)
    }

    /// Profile-level workout advice
    #[must_use]
    pub fn workout_insights(&self, profile: &WorkoutProfile) -> WorkoutInsights {
        workout_insights(profile, &self.config.ranking)
    }
}
