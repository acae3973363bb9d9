// ABOUTME: Derived-artifact configuration: shopping cost table and recommendation thresholds
// ABOUTME: Static per-kilogram prices plus the text templates gated by numeric thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Price per kilogram for foods whose name contains `keyword`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostRate {
    /// Case-insensitive substring matched against the food name
    pub keyword: String,
    /// Price per kilogram in the configured currency
    pub per_kg: f64,
}

impl CostRate {
    fn new(keyword: &str, per_kg: f64) -> Self {
        Self {
            keyword: keyword.to_owned(),
            per_kg,
        }
    }
}

/// Static cost lookup; the first matching rate wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostConfig {
    /// Ordered rate table
    pub rates: Vec<CostRate>,
    /// Rate when nothing matches
    pub default_per_kg: f64,
    /// ISO currency code
    pub currency: String,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            rates: vec![
                CostRate::new("riz", 500.0),
                CostRate::new("poisson", 2000.0),
                CostRate::new("poulet", 1500.0),
                CostRate::new("légumes", 800.0),
                CostRate::new("fruits", 1000.0),
                CostRate::new("rice", 500.0),
                CostRate::new("fish", 2000.0),
                CostRate::new("chicken", 1500.0),
                CostRate::new("vegetable", 800.0),
                CostRate::new("fruit", 1000.0),
            ],
            default_per_kg: 1000.0,
            currency: "XOF".to_owned(),
        }
    }
}

impl CostConfig {
    /// Price per kilogram for a food name
    #[must_use]
    pub fn rate_for(&self, name: &str) -> f64 {
        let lowered = name.to_lowercase();
        self.rates
            .iter()
            .find(|rate| lowered.contains(&rate.keyword.to_lowercase()))
            .map_or(self.default_per_kg, |rate| rate.per_kg)
    }

    /// Validate prices and currency
    ///
    /// # Errors
    ///
    /// Returns an error for a negative price or an empty currency code
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_per_kg < 0.0 || self.rates.iter().any(|rate| rate.per_kg < 0.0) {
            return Err(ConfigError::InvalidRange("costs must not be negative"));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::MissingField("costs.currency"));
        }
        Ok(())
    }
}

/// Thresholds and text for plan recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Average daily calories below this trigger the low-intake line
    pub low_calorie_threshold: f64,
    /// Protein target (g) below this triggers the protein line
    pub low_protein_threshold_g: u32,
    /// Programme-wide burned calories above this trigger the fuelling lines
    pub high_burn_kcal: f64,
    /// Meal plan messages
    pub nutrition: NutritionMessages,
    /// Workout plan messages
    pub workout: WorkoutMessages,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            low_calorie_threshold: 1200.0,
            low_protein_threshold_g: 80,
            high_burn_kcal: 2000.0,
            nutrition: NutritionMessages::default(),
            workout: WorkoutMessages::default(),
        }
    }
}

/// Meal plan recommendation text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionMessages {
    /// Average intake below the floor
    pub low_calories: String,
    /// Protein target below the floor
    pub low_protein: String,
    /// Always appended
    pub hydration: String,
    /// Always appended last
    pub local_foods: String,
}

impl Default for NutritionMessages {
    fn default() -> Self {
        Self {
            low_calories: "Consider raising your calorie intake slightly to support your metabolism."
                .to_owned(),
            low_protein: "Increase your protein intake to support muscle recovery.".to_owned(),
            hydration: "Drink at least 2 liters of water per day.".to_owned(),
            local_foods: "Favor local, seasonal foods.".to_owned(),
        }
    }
}

/// Workout plan nutrition text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutMessages {
    /// High training load: protein
    pub high_burn_protein: String,
    /// High training load: carbohydrates
    pub high_burn_carbs: String,
    /// Any cardio session scheduled
    pub cardio_hydration: String,
    /// Any strength session scheduled
    pub strength_protein: String,
    /// Always appended last
    pub local_foods: String,
}

impl Default for WorkoutMessages {
    fn default() -> Self {
        Self {
            high_burn_protein: "Increase your protein intake to support muscle recovery."
                .to_owned(),
            high_burn_carbs: "Eat complex carbohydrates before your workouts.".to_owned(),
            cardio_hydration: "Hydrate well before, during and after cardio sessions.".to_owned(),
            strength_protein: "Eat protein within 30 minutes after strength sessions.".to_owned(),
            local_foods: "Favor local, seasonal foods for better recovery.".to_owned(),
        }
    }
}

impl RecommendationConfig {
    /// Validate thresholds
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_calorie_threshold < 0.0 || self.high_burn_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(
                "recommendation thresholds must not be negative",
            ));
        }
        Ok(())
    }
}
