// ABOUTME: Domain models for plan generation inputs and outputs
// ABOUTME: Profiles, catalog items, requests, plans and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Data Models
//!
//! Inputs (profiles, requests, catalog items) and outputs (plans, insights) are
//! distinct types. Outputs are built once per request and never mutated by a
//! later pipeline stage.

/// Read-only catalog snapshot
pub mod catalog;
/// Advice records
pub mod insights;
/// Foods, meal requests and meal plans
pub mod nutrition;
/// Body metrics, levels, goals and locale
pub mod profile;
/// Exercises, program requests and workout plans
pub mod workout;

pub use catalog::CatalogSnapshot;
pub use insights::{
    NutritionInsights, NutritionMetrics, Recommendation, WorkoutInsights, WorkoutMetrics,
};
pub use nutrition::{
    FoodItem, FoodSuggestion, MacroTargets, Meal, MealPlan, MealPlanRequest, MealType,
    NutritionSummary, NutritionTargets, ShoppingListEntry,
};
pub use profile::{
    ActivityLevel, FitnessGoal, FitnessLevel, Locale, NutritionProfile, Sex, UserProfile,
    WorkoutProfile,
};
pub use workout::{
    Exercise, ExerciseSuggestion, IntensityProfile, PhaseBudget, ProgressionPlan,
    ProgressionWeek, RepRange, SessionType, WorkoutPlan, WorkoutPlanRequest, WorkoutSession,
};
