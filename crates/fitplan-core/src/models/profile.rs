// ABOUTME: User profile models for plan generation (body metrics, levels, goals)
// ABOUTME: Sex, ActivityLevel, FitnessLevel, FitnessGoal, Locale and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Sex {
    /// Male branch of the BMR formula
    Male,
    /// Female branch of the BMR formula
    Female,
}

impl Sex {
    /// Parse from a free-form label; anything other than "male"/"m" uses the female branch
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            _ => Self::Female,
        }
    }
}

impl From<String> for Sex {
    fn from(label: String) -> Self {
        Self::from_str_lossy(&label)
    }
}

/// Daily activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse from a free-form label; unknown labels resolve to the lowest bucket
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" | "lightly_active" => Self::Light,
            "moderate" | "moderately_active" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "extra_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        Self::from_str_lossy(&label)
    }
}

/// Training experience level; doubles as exercise difficulty tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to training
    Beginner,
    /// Regular training for some months
    Intermediate,
    /// Years of structured training
    Advanced,
}

impl FitnessLevel {
    /// Parse from a free-form label; `None` for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Ordinal used in feature vectors (1-3)
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// A declared training or nutrition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Lose body fat
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Keep current body composition
    Maintenance,
    /// Improve aerobic endurance
    Endurance,
    /// Improve maximal strength
    Strength,
    /// Any goal the engine has no rule for
    #[serde(other)]
    Other,
}

/// Language used for localized catalog names and meal keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Locale {
    /// French
    #[default]
    Fr,
    /// English
    En,
    /// Wolof
    Wo,
}

impl Locale {
    /// Parse a locale tag such as "fr", "en-US" or "wo"; unknown tags resolve to French
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.trim().to_lowercase().as_str() {
            "en" => Self::En,
            "wo" => Self::Wo,
            _ => Self::Fr,
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::from_str_lossy(&tag)
    }
}

/// Physical attributes and goals shared by nutrition and workout profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Caller-supplied user identifier
    pub user_id: String,
    /// Age in whole years
    pub age: u32,
    /// Sex used by the BMR formula
    #[serde(alias = "gender")]
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Declared goals, in the caller's order
    #[serde(alias = "fitness_goals")]
    pub goals: Vec<FitnessGoal>,
    /// Preferred language
    #[serde(default, alias = "language")]
    pub locale: Locale,
}

impl UserProfile {
    /// Whether the profile declares `goal`
    #[must_use]
    pub fn has_goal(&self, goal: FitnessGoal) -> bool {
        self.goals.contains(&goal)
    }

    /// Body mass index (kg/m²)
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Check the physical invariants every engine component relies on
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::missing_field("user_id"));
        }
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age",
                format!(
                    "Age must be between {} and {} years",
                    limits::MIN_AGE,
                    limits::MAX_AGE
                ),
            ));
        }
        if !(self.height_cm > 0.0 && self.height_cm <= limits::MAX_HEIGHT_CM) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                "Height must be positive and at most 300 cm",
            ));
        }
        if !(self.weight_kg > 0.0 && self.weight_kg <= limits::MAX_WEIGHT_KG) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                "Weight must be positive and at most 500 kg",
            ));
        }
        if self.goals.is_empty() {
            return Err(AppError::missing_field("goals"));
        }
        Ok(())
    }
}

/// Profile used for meal planning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionProfile {
    /// Shared physical attributes and goals
    #[serde(flatten)]
    pub person: UserProfile,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Free-form dietary restrictions (informational)
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Allergens that must never appear in suggestions
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl NutritionProfile {
    /// Validate the profile
    ///
    /// # Errors
    ///
    /// Returns a validation error when a physical attribute is out of range
    pub fn validate(&self) -> AppResult<()> {
        self.person.validate()
    }
}

/// Profile used for workout programming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutProfile {
    /// Shared physical attributes and goals
    #[serde(flatten)]
    pub person: UserProfile,
    /// Training level; `None` when missing or unrecognized
    #[serde(default, deserialize_with = "lossy_fitness_level")]
    pub fitness_level: Option<FitnessLevel>,
    /// Years of training experience
    #[serde(default)]
    pub experience_years: u32,
    /// Equipment the user has access to
    #[serde(default)]
    pub available_equipment: Vec<String>,
    /// Minutes available per session
    #[serde(alias = "time_availability")]
    pub session_minutes: u32,
    /// Injured body areas; exercises loading them are excluded
    #[serde(default)]
    pub injuries: Vec<String>,
}

impl WorkoutProfile {
    /// Difficulty of main-phase exercises; an unrated profile trains at the middle level
    #[must_use]
    pub fn training_level(&self) -> FitnessLevel {
        self.fitness_level.unwrap_or(FitnessLevel::Intermediate)
    }

    /// Validate the profile
    ///
    /// # Errors
    ///
    /// Returns a validation error when a physical attribute or the time budget is out of range
    pub fn validate(&self) -> AppResult<()> {
        self.person.validate()?;
        if !(1..=limits::MAX_SESSION_MINUTES).contains(&self.session_minutes) {
            return Err(AppError::value_out_of_range(
                "session_minutes",
                format!(
                    "Session time must be between 1 and {} minutes",
                    limits::MAX_SESSION_MINUTES
                ),
            ));
        }
        Ok(())
    }
}

fn lossy_fitness_level<'de, D>(deserializer: D) -> Result<Option<FitnessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(FitnessLevel::from_str_lossy))
}
