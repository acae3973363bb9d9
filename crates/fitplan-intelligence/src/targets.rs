// ABOUTME: Target calculator deriving energy, macro and intensity targets from a profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment, macro grams, intensity channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Target Calculator
//!
//! Every function here is pure arithmetic over the profile and the
//! configured tables.
//!
//! # Goal precedence
//!
//! Profiles may carry conflicting goals. The calculator resolves them with
//! fixed priority lists rather than the order the caller listed them in:
//!
//! - energy adjustment and macro split: [`ENERGY_GOAL_PRIORITY`] (weight loss before muscle gain)
//! - overall intensity multiplier: [`INTENSITY_GOAL_PRIORITY`] (muscle gain, weight loss, endurance)
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use fitplan_core::models::{
    ActivityLevel, FitnessGoal, FitnessLevel, IntensityProfile, MacroTargets, MealPlanRequest,
    NutritionProfile, NutritionTargets, Sex, UserProfile,
};
use tracing::debug;

use crate::config::planner::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalAdjustmentConfig,
    IntensityConfig, MacroSplit, MacroSplitConfig, TargetsConfig,
};

/// Goals that change the energy target and macro split, highest priority first
pub const ENERGY_GOAL_PRIORITY: [FitnessGoal; 2] = [FitnessGoal::WeightLoss, FitnessGoal::MuscleGain];

/// Goals that change the overall workout intensity, highest priority first
pub const INTENSITY_GOAL_PRIORITY: [FitnessGoal; 3] = [
    FitnessGoal::MuscleGain,
    FitnessGoal::WeightLoss,
    FitnessGoal::Endurance,
];

/// First goal of `priority` present in `goals`
#[must_use]
pub fn first_matching_goal(goals: &[FitnessGoal], priority: &[FitnessGoal]) -> Option<FitnessGoal> {
    priority.iter().copied().find(|goal| goals.contains(goal))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(person: &UserProfile, config: &BmrConfig) -> f64 {
    let sex_constant = match person.sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };
    config.weight_coef.mul_add(
        person.weight_kg,
        config
            .height_coef
            .mul_add(person.height_cm, config.age_coef * f64::from(person.age)),
    ) + sex_constant
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure (BMR x activity factor)
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(level, config)
}

/// Additive calorie adjustment for the highest-priority energy goal
#[must_use]
pub fn goal_adjustment(goals: &[FitnessGoal], config: &GoalAdjustmentConfig) -> f64 {
    match first_matching_goal(goals, &ENERGY_GOAL_PRIORITY) {
        Some(FitnessGoal::WeightLoss) => config.weight_loss_kcal,
        Some(FitnessGoal::MuscleGain) => config.muscle_gain_kcal,
        _ => 0.0,
    }
}

/// Macro split for the highest-priority energy goal
#[must_use]
pub fn select_macro_split(goals: &[FitnessGoal], config: &MacroSplitConfig) -> MacroSplit {
    match first_matching_goal(goals, &ENERGY_GOAL_PRIORITY) {
        Some(FitnessGoal::WeightLoss) => config.weight_loss,
        Some(FitnessGoal::MuscleGain) => config.muscle_gain,
        _ => config.balanced,
    }
}

/// Convert a calorie target into whole macro grams (truncated)
#[must_use]
pub fn macro_grams(calories: f64, split: MacroSplit, density: &EnergyDensityConfig) -> MacroTargets {
    MacroTargets {
        protein_g: (calories * split.protein / density.protein) as u32,
        carbs_g: (calories * split.carbs / density.carbs) as u32,
        fat_g: (calories * split.fat / density.fat) as u32,
    }
}

/// Calories implied by macro gram targets
#[must_use]
pub fn macro_calories(macros: &MacroTargets, density: &EnergyDensityConfig) -> f64 {
    f64::from(macros.protein_g).mul_add(
        density.protein,
        f64::from(macros.carbs_g).mul_add(density.carbs, f64::from(macros.fat_g) * density.fat),
    )
}

/// Derive the nutrition targets for a meal plan request
///
/// Explicit overrides in `request` replace the derived value field by field.
/// Macro grams are derived from the final calorie target, then individually
/// overridden.
#[must_use]
pub fn nutrition_targets(
    profile: &NutritionProfile,
    request: &MealPlanRequest,
    config: &TargetsConfig,
) -> NutritionTargets {
    let goals = &profile.person.goals;
    let bmr = calculate_bmr(&profile.person, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target_calories = request
        .target_calories
        .unwrap_or_else(|| tdee + goal_adjustment(goals, &config.goal_adjustments));

    let split = select_macro_split(goals, &config.macro_splits);
    let derived = macro_grams(target_calories, split, &config.energy_density);
    let macros = MacroTargets {
        protein_g: request.target_protein.unwrap_or(derived.protein_g),
        carbs_g: request.target_carbs.unwrap_or(derived.carbs_g),
        fat_g: request.target_fat.unwrap_or(derived.fat_g),
    };

    debug!(
        user_id = %profile.person.user_id,
        bmr,
        tdee,
        target_calories,
        protein_g = macros.protein_g,
        carbs_g = macros.carbs_g,
        fat_g = macros.fat_g,
        "Derived nutrition targets"
    );

    NutritionTargets {
        bmr,
        tdee,
        target_calories,
        macros,
    }
}

/// Base intensity for a fitness level; `None` uses the unrated value
#[must_use]
pub const fn base_intensity(level: Option<FitnessLevel>, config: &IntensityConfig) -> f64 {
    match level {
        Some(FitnessLevel::Beginner) => config.beginner,
        Some(FitnessLevel::Intermediate) => config.intermediate,
        Some(FitnessLevel::Advanced) => config.advanced,
        None => config.unrated,
    }
}

/// Derive the four intensity channels from level and goals
///
/// The overall multiplier comes from the highest-priority intensity goal.
/// Strength and cardio are scaled from the overall value independently;
/// flexibility is fixed.
#[must_use]
pub fn workout_intensity(
    level: Option<FitnessLevel>,
    goals: &[FitnessGoal],
    config: &IntensityConfig,
) -> IntensityProfile {
    let multiplier = match first_matching_goal(goals, &INTENSITY_GOAL_PRIORITY) {
        Some(FitnessGoal::MuscleGain) => config.muscle_gain_multiplier,
        Some(FitnessGoal::WeightLoss) => config.weight_loss_multiplier,
        Some(FitnessGoal::Endurance) => config.endurance_multiplier,
        _ => 1.0,
    };
    let overall = base_intensity(level, config) * multiplier;

    let strength = if goals.contains(&FitnessGoal::Strength) {
        overall * config.strength_goal_bonus
    } else {
        overall
    };
    let cardio = if goals.contains(&FitnessGoal::Endurance) {
        overall * config.cardio_endurance_bonus
    } else {
        overall * config.cardio_default_factor
    };

    IntensityProfile {
        overall,
        strength,
        cardio,
        flexibility: config.flexibility,
    }
}
