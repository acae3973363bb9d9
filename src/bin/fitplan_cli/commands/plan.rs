// ABOUTME: Plan generation commands for fitplan-cli
// ABOUTME: meal-plan and workout-plan: read a profile file, apply flags, print the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use fitplan::models::{
    MealPlanRequest, MealType, NutritionProfile, WorkoutPlanRequest, WorkoutProfile,
};
use fitplan::service::PlanService;
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::{parse_meal_type, read_json};

/// Flags for `meal-plan`
#[derive(Args)]
pub struct MealPlanArgs {
    /// Nutrition profile (JSON file)
    #[arg(long)]
    profile: PathBuf,

    /// Number of days to plan
    #[arg(long)]
    days: Option<u32>,

    /// Meal slots per day, comma-separated (breakfast,lunch,dinner,snack)
    #[arg(long, value_delimiter = ',', value_parser = parse_meal_type)]
    meal_types: Vec<MealType>,

    /// Allow foods that are not locally produced
    #[arg(long)]
    no_local: bool,

    /// First day of the plan (YYYY-MM-DD, default today)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Daily calorie target override
    #[arg(long)]
    calories: Option<f64>,
}

impl MealPlanArgs {
    fn request(&self) -> MealPlanRequest {
        let defaults = MealPlanRequest::default();
        MealPlanRequest {
            target_calories: self.calories,
            days: self.days.unwrap_or(defaults.days),
            include_local: !self.no_local,
            meal_types: if self.meal_types.is_empty() {
                defaults.meal_types
            } else {
                self.meal_types.clone()
            },
            start_date: self.start_date,
            ..defaults
        }
    }
}

/// Flags for `workout-plan`
#[derive(Args)]
pub struct WorkoutPlanArgs {
    /// Workout profile (JSON file)
    #[arg(long)]
    profile: PathBuf,

    /// Programme length in weeks
    #[arg(long)]
    weeks: Option<u32>,

    /// Sessions per week
    #[arg(long)]
    per_week: Option<u32>,

    /// Muscle groups for strength sessions, comma-separated
    #[arg(long, value_delimiter = ',')]
    focus: Vec<String>,

    /// First day of the programme (YYYY-MM-DD, default today)
    #[arg(long)]
    start_date: Option<NaiveDate>,
}

impl WorkoutPlanArgs {
    fn request(&self) -> WorkoutPlanRequest {
        let defaults = WorkoutPlanRequest::default();
        WorkoutPlanRequest {
            duration_weeks: self.weeks.unwrap_or(defaults.duration_weeks),
            workouts_per_week: self.per_week.unwrap_or(defaults.workouts_per_week),
            focus_areas: self.focus.clone(),
            start_date: self.start_date,
        }
    }
}

/// Generate and print a meal plan
pub async fn meal_plan(service: &PlanService, args: &MealPlanArgs) -> Result<()> {
    let profile: NutritionProfile = read_json(&args.profile)?;
    let plan = service.meal_plan(&profile, &args.request()).await?;
    info!(
        meals = plan.meals.len(),
        total_cost = plan.total_cost,
        currency = %plan.currency,
        "Meal plan ready"
    );
    print_json(&plan)
}

/// Generate and print a workout programme
pub async fn workout_plan(service: &PlanService, args: &WorkoutPlanArgs) -> Result<()> {
    let profile: WorkoutProfile = read_json(&args.profile)?;
    let plan = service.workout_plan(&profile, &args.request()).await?;
    info!(
        sessions = plan.total_workouts,
        weeks = plan.total_weeks,
        "Workout plan ready"
    );
    print_json(&plan)
}
