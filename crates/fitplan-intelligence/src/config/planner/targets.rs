// ABOUTME: Target calculator configuration: BMR coefficients, activity factors, macro splits
// ABOUTME: Also holds goal adjustments and workout intensity tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Target Calculator Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use fitplan_core::constants::energy;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// All tables used by the target calculator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Additive calorie adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein/fat/carb splits per goal
    pub macro_splits: MacroSplitConfig,
    /// Macronutrient energy densities
    pub energy_density: EnergyDensityConfig,
    /// Workout intensity tables
    pub intensity: IntensityConfig,
}

impl TargetsConfig {
    /// Validate the macro splits and intensity tables
    ///
    /// # Errors
    ///
    /// Returns an error when a split does not sum to 1 or a factor is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.macro_splits.validate()?;
        let factors = [
            self.activity_factors.sedentary,
            self.activity_factors.light,
            self.activity_factors.moderate,
            self.activity_factors.active,
            self.activity_factors.very_active,
        ];
        if factors.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::InvalidRange("activity factors must be positive"));
        }
        if self.energy_density.protein <= 0.0
            || self.energy_density.carbs <= 0.0
            || self.energy_density.fat <= 0.0
        {
            return Err(ConfigError::InvalidRange("energy densities must be positive"));
        }
        Ok(())
    }
}

/// Mifflin-St Jeor coefficients: `weight·w + height·h + age·a + sex constant`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Additive daily calorie adjustment applied for the first matching goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss deficit (-500 kcal)
    pub weight_loss_kcal: f64,
    /// Muscle gain surplus (+300 kcal)
    pub muscle_gain_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_kcal: -500.0,
            muscle_gain_kcal: 300.0,
        }
    }
}

/// Share of daily energy from each macronutrient (fractions summing to 1)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein fraction
    pub protein: f64,
    /// Fat fraction
    pub fat: f64,
    /// Carbohydrate fraction
    pub carbs: f64,
}

impl MacroSplit {
    /// Build a split from protein/fat/carb fractions
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    fn sums_to_one(&self) -> bool {
        (self.protein + self.fat + self.carbs - 1.0).abs() < 1e-9
    }
}

/// Macro split selected by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Weight loss: protein-high for satiety (35/30/35)
    pub weight_loss: MacroSplit,
    /// Muscle gain: carb-high for training energy (30/25/45)
    pub muscle_gain: MacroSplit,
    /// Everything else (25/30/45)
    pub balanced: MacroSplit,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroSplit::new(0.35, 0.30, 0.35),
            muscle_gain: MacroSplit::new(0.30, 0.25, 0.45),
            balanced: MacroSplit::new(0.25, 0.30, 0.45),
        }
    }
}

impl MacroSplitConfig {
    /// Validate that every split sums to 1
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first bad split
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("macro_splits.weight_loss", &self.weight_loss),
            ("macro_splits.muscle_gain", &self.muscle_gain),
            ("macro_splits.balanced", &self.balanced),
        ];
        for (name, split) in splits {
            if !split.sums_to_one() {
                return Err(ConfigError::InvalidWeights(name));
            }
        }
        Ok(())
    }
}

/// kcal per gram of each macronutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyDensityConfig {
    /// Protein (4 kcal/g)
    pub protein: f64,
    /// Carbohydrates (4 kcal/g)
    pub carbs: f64,
    /// Fat (9 kcal/g)
    pub fat: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            protein: energy::PROTEIN_KCAL_PER_G,
            carbs: energy::CARBS_KCAL_PER_G,
            fat: energy::FAT_KCAL_PER_G,
        }
    }
}

/// Workout intensity tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Base for beginners (0.6)
    pub beginner: f64,
    /// Base for intermediates (0.75)
    pub intermediate: f64,
    /// Base for advanced trainees (0.9)
    pub advanced: f64,
    /// Base when the level is unknown (0.7)
    pub unrated: f64,
    /// Overall multiplier for muscle gain (1.1)
    pub muscle_gain_multiplier: f64,
    /// Overall multiplier for weight loss (1.05)
    pub weight_loss_multiplier: f64,
    /// Overall multiplier for endurance (0.95)
    pub endurance_multiplier: f64,
    /// Strength-channel bonus for a strength goal (1.1)
    pub strength_goal_bonus: f64,
    /// Cardio-channel bonus for an endurance goal (1.05)
    pub cardio_endurance_bonus: f64,
    /// Cardio-channel factor otherwise (0.9)
    pub cardio_default_factor: f64,
    /// Flexibility channel, independent of goals (0.8)
    pub flexibility: f64,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            beginner: 0.6,
            intermediate: 0.75,
            advanced: 0.9,
            unrated: 0.7,
            muscle_gain_multiplier: 1.1,
            weight_loss_multiplier: 1.05,
            endurance_multiplier: 0.95,
            strength_goal_bonus: 1.1,
            cardio_endurance_bonus: 1.05,
            cardio_default_factor: 0.9,
            flexibility: 0.8,
        }
    }
}
