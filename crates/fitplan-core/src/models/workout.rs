// ABOUTME: Workout programming models: exercises, program requests, sessions, progression
// ABOUTME: Exercise, RepRange, SessionType, WorkoutPlanRequest, WorkoutSession, WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::profile::FitnessLevel;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Inclusive `[min, max]` range of sets or reps, serialized as a two-element array
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepRange(pub u32, pub u32);

impl RepRange {
    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (f64::from(self.0) + f64::from(self.1)) / 2.0
    }
}

/// Exercise entry from the reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Catalog identifier
    pub id: String,
    /// Default (English) name
    pub name: String,
    /// French name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    /// Wolof name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_wo: Option<String>,
    /// Exercise category (strength, cardio, flexibility, ...)
    pub category: String,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Equipment required; empty or "none" means bodyweight
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    /// Level the exercise is suited to
    pub difficulty_level: FitnessLevel,
    /// Traditional or locally practised movement
    #[serde(default, alias = "is_senegalese")]
    pub is_local: bool,
    /// Energy burned per minute of work
    #[serde(default)]
    pub estimated_calories_per_minute: Option<f64>,
    /// Rest between sets
    #[serde(default)]
    pub rest_time_seconds: Option<u32>,
    /// Recommended sets keyed by level
    #[serde(default)]
    pub sets_recommended: BTreeMap<FitnessLevel, RepRange>,
    /// Recommended reps keyed by level
    #[serde(default)]
    pub reps_recommended: BTreeMap<FitnessLevel, RepRange>,
}

/// Kind of training session in a weekly split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Resistance training on one focus area
    Strength,
    /// Conditioning work
    Cardio,
    /// Mobility and stretching
    Flexibility,
}

impl SessionType {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
        }
    }
}

/// Request for a multi-week workout program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanRequest {
    /// Program length in weeks
    #[serde(default = "default_weeks")]
    pub duration_weeks: u32,
    /// Sessions per week; selects the weekly split
    #[serde(default = "default_per_week")]
    pub workouts_per_week: u32,
    /// Muscle groups strength sessions rotate through; derived from goals when empty
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// First day of the program; filled with today's date by the service when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

const fn default_weeks() -> u32 {
    4
}

const fn default_per_week() -> u32 {
    3
}

impl Default for WorkoutPlanRequest {
    fn default() -> Self {
        Self {
            duration_weeks: default_weeks(),
            workouts_per_week: default_per_week(),
            focus_areas: Vec::new(),
            start_date: None,
        }
    }
}

impl WorkoutPlanRequest {
    /// Validate program length and weekly frequency
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.duration_weeks > limits::MAX_PLAN_WEEKS {
            return Err(AppError::value_out_of_range(
                "duration_weeks",
                format!("A program covers at most {} weeks", limits::MAX_PLAN_WEEKS),
            ));
        }
        if self.workouts_per_week > limits::MAX_WORKOUTS_PER_WEEK {
            return Err(AppError::value_out_of_range(
                "workouts_per_week",
                format!(
                    "At most {} sessions per week can be scheduled",
                    limits::MAX_WORKOUTS_PER_WEEK
                ),
            ));
        }
        Ok(())
    }
}

/// Intensity multipliers derived from level and goals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntensityProfile {
    /// Overall session intensity
    pub overall: f64,
    /// Strength channel
    pub strength: f64,
    /// Cardio channel
    pub cardio: f64,
    /// Flexibility channel (fixed)
    pub flexibility: f64,
}

/// An exercise placed into a session phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSuggestion {
    /// Catalog identifier
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Equipment required
    pub equipment_needed: Vec<String>,
    /// Sets range used for the time estimate
    pub recommended_sets: RepRange,
    /// Reps range used for the time estimate
    pub recommended_reps: RepRange,
    /// Work plus rest time at the range midpoints
    pub estimated_time_minutes: f64,
    /// Energy burned over the estimated time
    pub estimated_calories: f64,
    /// Number of requested groups this exercise hits
    pub group_overlap: usize,
}

/// Minutes allocated to each phase of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseBudget {
    /// Warm-up minutes
    pub warm_up_minutes: u32,
    /// Main block minutes
    pub main_minutes: u32,
    /// Cool-down minutes
    pub cool_down_minutes: u32,
}

impl PhaseBudget {
    /// Total allocated minutes
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.warm_up_minutes + self.main_minutes + self.cool_down_minutes
    }
}

/// One scheduled session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Stable identifier `w{week}-s{slot}` (1-indexed)
    pub id: String,
    /// Week number (1-indexed)
    pub week: u32,
    /// Slot within the week (1-indexed)
    pub slot: u32,
    /// Display name
    pub name: String,
    /// Session type from the weekly split
    pub session_type: SessionType,
    /// Difficulty of the main block
    pub difficulty: FitnessLevel,
    /// Minutes available for the session
    pub duration_minutes: u32,
    /// Phase allocation
    pub budget: PhaseBudget,
    /// Warm-up exercises
    pub warm_up: Vec<ExerciseSuggestion>,
    /// Main-block exercises
    pub exercises: Vec<ExerciseSuggestion>,
    /// Cool-down exercises
    pub cool_down: Vec<ExerciseSuggestion>,
    /// Energy across all three phases
    pub total_calories: f64,
    /// Groups the main block targets
    pub target_muscle_groups: Vec<String>,
    /// Sorted union of main-block equipment
    pub equipment_needed: Vec<String>,
}

/// One week of the progression curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionWeek {
    /// Week number (1-indexed)
    pub week_number: u32,
    /// Intensity multiplier for the week
    pub intensity_multiplier: f64,
    /// Volume multiplier for the week
    pub volume_multiplier: f64,
    /// Reduced-load recovery week
    pub is_deload: bool,
    /// Short label for the week's emphasis
    pub focus: String,
}

/// Progression plan over the whole program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionPlan {
    /// Weekly intensity increment
    pub intensity_increase: f64,
    /// Weekly volume increment
    pub volume_increase: f64,
    /// Every Nth week is a deload week
    pub deload_week: u32,
    /// Per-week multipliers
    pub weeks: Vec<ProgressionWeek>,
}

/// Complete workout program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Owner of the plan
    pub user_id: String,
    /// First day of the program
    pub start_date: NaiveDate,
    /// `start_date` plus the program length in weeks
    pub end_date: NaiveDate,
    /// Program length
    pub total_weeks: u32,
    /// Sessions per week
    pub workouts_per_week: u32,
    /// Number of scheduled sessions
    pub total_workouts: usize,
    /// Derived intensity channels
    pub intensity: IntensityProfile,
    /// Sessions ordered by week, then slot
    pub sessions: Vec<WorkoutSession>,
    /// Week-by-week progression
    pub progression_plan: ProgressionPlan,
    /// Sorted union of every session's equipment
    pub equipment_requirements: Vec<String>,
    /// Threshold-driven nutrition advice followed by fixed boilerplate
    pub nutrition_recommendations: Vec<String>,
}
