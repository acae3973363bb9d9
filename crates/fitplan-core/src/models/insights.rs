// ABOUTME: Profile-level advice records returned alongside plans
// ABOUTME: Recommendation, NutritionInsights and WorkoutInsights with calculated metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

/// Goal-driven strategy recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Goal this recommendation addresses (e.g. `weight_loss`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title
    pub title: String,
    /// One-paragraph explanation
    pub description: String,
    /// Confidence in [0, 1]
    pub confidence_score: f64,
    /// Concrete steps
    pub actionable_items: Vec<String>,
    /// Advice specific to local foods or practices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_context: Option<String>,
}

/// Metrics computed for nutrition advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionMetrics {
    /// Basal metabolic rate
    pub bmr: f64,
    /// Total daily energy expenditure
    pub tdee: f64,
    /// Body mass index
    pub bmi: f64,
}

/// Nutrition advice for a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionInsights {
    /// Owner of the profile
    pub user_id: String,
    /// Strategy recommendations, one per recognized goal
    pub recommendations: Vec<Recommendation>,
    /// Calculated metrics
    pub calculated_metrics: NutritionMetrics,
}

/// Metrics computed for workout advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutMetrics {
    /// Suggested sessions per week
    pub recommended_workouts_per_week: u32,
    /// Suggested session length
    pub recommended_session_minutes: u32,
    /// Rough weekly energy expenditure from training
    pub estimated_weekly_calories: f64,
}

/// Workout advice for a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutInsights {
    /// Owner of the profile
    pub user_id: String,
    /// Strategy recommendations, one per recognized goal
    pub recommendations: Vec<Recommendation>,
    /// Calculated metrics
    pub calculated_metrics: WorkoutMetrics,
}
