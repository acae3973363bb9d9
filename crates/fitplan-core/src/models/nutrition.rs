// ABOUTME: Nutrition planning models: foods, meal plan requests, and meal plan output
// ABOUTME: MealType, FoodItem, MealPlanRequest, NutritionTargets, Meal, ShoppingListEntry, MealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::profile::Locale;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[serde(other)]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }

    /// Meals planned when the request does not name any
    #[must_use]
    pub fn default_day() -> Vec<Self> {
        vec![Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }
}

/// Food entry from the reference catalog (values per 100 g)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
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
    /// Food category (cereal, fish, vegetable, ...)
    pub category: String,
    /// Locally produced food
    #[serde(default, alias = "is_senegalese")]
    pub is_local: bool,
    /// Energy per 100 g
    pub calories_per_100g: f64,
    /// Protein per 100 g
    #[serde(default)]
    pub protein_per_100g: f64,
    /// Carbohydrates per 100 g
    #[serde(default)]
    pub carbs_per_100g: f64,
    /// Fat per 100 g
    #[serde(default)]
    pub fat_per_100g: f64,
    /// Fiber per 100 g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_per_100g: Option<f64>,
    /// Declared allergens
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl FoodItem {
    /// Name in the requested language, falling back towards the default name
    #[must_use]
    pub fn localized_name(&self, locale: Locale) -> &str {
        let localized = match locale {
            Locale::Fr => self.name_fr.as_deref(),
            Locale::Wo => self.name_wo.as_deref().or(self.name_fr.as_deref()),
            Locale::En => None,
        };
        localized.unwrap_or(&self.name)
    }
}

/// Request for a multi-day meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Explicit daily calorie target (overrides the derived one)
    #[serde(default)]
    pub target_calories: Option<f64>,
    /// Explicit protein target in grams
    #[serde(default)]
    pub target_protein: Option<u32>,
    /// Explicit carbohydrate target in grams
    #[serde(default)]
    pub target_carbs: Option<u32>,
    /// Explicit fat target in grams
    #[serde(default)]
    pub target_fat: Option<u32>,
    /// Number of days to plan
    #[serde(default = "default_days")]
    pub days: u32,
    /// Restrict suggestions to locally produced foods
    #[serde(default = "default_true", alias = "include_senegalese")]
    pub include_local: bool,
    /// Meal slots per day, in order
    #[serde(default = "MealType::default_day")]
    pub meal_types: Vec<MealType>,
    /// First day of the plan; filled with today's date by the service when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

const fn default_days() -> u32 {
    7
}

const fn default_true() -> bool {
    true
}

impl Default for MealPlanRequest {
    fn default() -> Self {
        Self {
            target_calories: None,
            target_protein: None,
            target_carbs: None,
            target_fat: None,
            days: default_days(),
            include_local: true,
            meal_types: MealType::default_day(),
            start_date: None,
        }
    }
}

impl MealPlanRequest {
    /// Validate overrides, plan length and meal slots
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.days > limits::MAX_PLAN_DAYS {
            return Err(AppError::value_out_of_range(
                "days",
                format!("A meal plan covers at most {} days", limits::MAX_PLAN_DAYS),
            ));
        }
        if let Some(calories) = self.target_calories {
            if !(calories.is_finite() && calories > 0.0) {
                return Err(AppError::value_out_of_range(
                    "target_calories",
                    "Target calories must be positive",
                ));
            }
        }
        for (field, value) in [
            ("target_protein", self.target_protein),
            ("target_carbs", self.target_carbs),
            ("target_fat", self.target_fat),
        ] {
            if value == Some(0) {
                return Err(AppError::value_out_of_range(
                    field,
                    format!("{field} must be positive when supplied"),
                ));
            }
        }
        let mut seen = HashSet::new();
        if !self.meal_types.iter().all(|meal| seen.insert(*meal)) {
            return Err(AppError::invalid_input("meal_types must not repeat a meal")
                .with_field("meal_types"));
        }
        Ok(())
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fat_g: u32,
}

/// Output of the target calculator for nutrition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Activity-adjusted expenditure (kcal/day)
    pub tdee: f64,
    /// Daily energy target after goal adjustment and overrides
    pub target_calories: f64,
    /// Macro gram targets after overrides
    pub macros: MacroTargets,
}

/// A food placed into a meal, with its computed portion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodSuggestion {
    /// Catalog identifier
    pub food_id: String,
    /// Localized display name, also the shopping-list key
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Portion in grams (capped)
    pub suggested_portion_g: f64,
    /// Energy of the portion
    pub estimated_calories: f64,
    /// Keyword relevance for the meal type
    pub relevance_score: u32,
}

/// One meal-type-on-a-day slot of a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Calendar date
    pub date: NaiveDate,
    /// Meal slot
    pub meal_type: MealType,
    /// Calories allocated to this slot
    pub target_calories: f64,
    /// Selected foods, best first
    pub foods: Vec<FoodSuggestion>,
    /// Sum of the selected foods' estimated calories; may differ from the allocation
    pub total_calories: f64,
}

/// Aggregated shopping-list line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListEntry {
    /// Food name (aggregation key)
    pub name: String,
    /// Category of the first food seen under this name
    pub category: String,
    /// Grams needed over the whole plan
    pub total_grams: f64,
    /// Estimated cost in the configured currency
    pub estimated_cost: f64,
}

/// Nutrition summary for a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionSummary {
    /// Realized calories per distinct date
    pub average_daily_calories: f64,
    /// Calories implied by the macro gram targets
    pub target_calories: f64,
    /// `target_calories - average_daily_calories`
    pub calorie_deficit: f64,
    /// Macro gram targets
    pub macro_targets: MacroTargets,
    /// Threshold-driven advice followed by fixed boilerplate
    pub recommendations: Vec<String>,
}

/// Complete meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Owner of the plan
    pub user_id: String,
    /// First planned day
    pub start_date: NaiveDate,
    /// Last planned day
    pub end_date: NaiveDate,
    /// Derived targets
    pub targets: NutritionTargets,
    /// Meals ordered by day, then by requested meal order
    pub meals: Vec<Meal>,
    /// Aggregated ingredients
    pub shopping_list: Vec<ShoppingListEntry>,
    /// Sum of the shopping list costs
    pub total_cost: f64,
    /// ISO currency code of the costs
    pub currency: String,
    /// Summary and recommendations
    pub summary: NutritionSummary,
}
