// ABOUTME: Time-budget allocator configuration: meal calorie ratios and session phase ratios
// ABOUTME: Fixed tables keyed by meal type and session type with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{MealType, SessionType};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Allocation tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Share of daily calories per meal slot
    pub meals: MealRatioConfig,
    /// Warm-up/main/cool-down shares per session type
    pub phases: PhaseRatioConfig,
}

impl AllocationConfig {
    /// Validate every ratio
    ///
    /// # Errors
    ///
    /// Returns an error when a ratio is outside [0, 1] or a phase table exceeds 1 in total
    pub fn validate(&self) -> Result<(), ConfigError> {
        let meal_ratios = [
            self.meals.breakfast,
            self.meals.lunch,
            self.meals.dinner,
            self.meals.snack,
            self.meals.default,
        ];
        if meal_ratios.iter().any(|ratio| !(0.0..=1.0).contains(ratio)) {
            return Err(ConfigError::InvalidRange("meal ratios must be within [0, 1]"));
        }
        for (name, table) in [
            ("phases.strength", &self.phases.strength),
            ("phases.cardio", &self.phases.cardio),
            ("phases.flexibility", &self.phases.flexibility),
        ] {
            let parts = [table.warm_up, table.main, table.cool_down];
            if parts.iter().any(|ratio| !(0.0..=1.0).contains(ratio))
                || parts.iter().sum::<f64>() > 1.0 + 1e-9
            {
                return Err(ConfigError::InvalidWeights(name));
            }
        }
        Ok(())
    }
}

/// Daily calorie share per meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRatioConfig {
    /// Breakfast (0.25)
    pub breakfast: f64,
    /// Lunch (0.35)
    pub lunch: f64,
    /// Dinner (0.30)
    pub dinner: f64,
    /// Snack (0.10)
    pub snack: f64,
    /// Any other slot (0.25)
    pub default: f64,
}

impl Default for MealRatioConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
            default: 0.25,
        }
    }
}

impl MealRatioConfig {
    /// Ratio for a meal slot
    #[must_use]
    pub const fn ratio(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
            MealType::Other => self.default,
        }
    }
}

/// Warm-up/main/cool-down shares of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhaseRatios {
    /// Warm-up share
    pub warm_up: f64,
    /// Main block share
    pub main: f64,
    /// Cool-down share
    pub cool_down: f64,
}

/// Phase shares per session type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseRatioConfig {
    /// Strength (0.15/0.75/0.10), also the fallback table
    pub strength: PhaseRatios,
    /// Cardio (0.20/0.70/0.10)
    pub cardio: PhaseRatios,
    /// Flexibility (0.10/0.80/0.10)
    pub flexibility: PhaseRatios,
}

impl Default for PhaseRatioConfig {
    fn default() -> Self {
        Self {
            strength: PhaseRatios {
                warm_up: 0.15,
                main: 0.75,
                cool_down: 0.10,
            },
            cardio: PhaseRatios {
                warm_up: 0.20,
                main: 0.70,
                cool_down: 0.10,
            },
            flexibility: PhaseRatios {
                warm_up: 0.10,
                main: 0.80,
                cool_down: 0.10,
            },
        }
    }
}

impl PhaseRatioConfig {
    /// Table for a session type
    #[must_use]
    pub const fn ratios(&self, session_type: SessionType) -> PhaseRatios {
        match session_type {
            SessionType::Strength => self.strength,
            SessionType::Cardio => self.cardio,
            SessionType::Flexibility => self.flexibility,
        }
    }

    /// Table for a free-form session label; unknown labels use the strength table
    #[must_use]
    pub fn ratios_for_label(&self, label: &str) -> PhaseRatios {
        match label.trim().to_lowercase().as_str() {
            "cardio" => self.cardio,
            "flexibility" => self.flexibility,
            _ => self.strength,
        }
    }
}
