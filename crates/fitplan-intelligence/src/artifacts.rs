// ABOUTME: Derived-artifact generator for assembled schedules
// ABOUTME: Shopping list and cost, nutrition summary, progression plan, equipment union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::{BTreeSet, HashMap};

use fitplan_core::models::{
    MacroTargets, Meal, NutritionSummary, ProgressionPlan, ProgressionWeek, ShoppingListEntry,
    WorkoutSession,
};

use crate::config::planner::{CostConfig, EnergyDensityConfig, ProgressionConfig, RecommendationConfig};
use crate::recommendations::nutrition_plan_recommendations;
use crate::targets::macro_calories;

/// Aggregate every selected food by name, in order of first appearance
///
/// Cost is priced once, from the portion that first introduced the name;
/// later portions only add grams.
#[must_use]
pub fn shopping_list(meals: &[Meal], costs: &CostConfig) -> Vec<ShoppingListEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<ShoppingListEntry> = Vec::new();

    for food in meals.iter().flat_map(|meal| &meal.foods) {
        if let Some(&position) = index.get(food.name.as_str()) {
            entries[position].total_grams += food.suggested_portion_g;
        } else {
            index.insert(food.name.as_str(), entries.len());
            entries.push(ShoppingListEntry {
                name: food.name.clone(),
                category: food.category.clone(),
                total_grams: food.suggested_portion_g,
                estimated_cost: food.suggested_portion_g / 1000.0 * costs.rate_for(&food.name),
            });
        }
    }
    entries
}

/// Sum of the entry costs
#[must_use]
pub fn total_cost(entries: &[ShoppingListEntry]) -> f64 {
    entries.iter().map(|entry| entry.estimated_cost).sum()
}

/// Realized calories per distinct date; 0.0 when there are no meals
#[must_use]
pub fn average_daily_calories(meals: &[Meal]) -> f64 {
    let dates: BTreeSet<_> = meals.iter().map(|meal| meal.date).collect();
    if dates.is_empty() {
        return 0.0;
    }
    let total: f64 = meals.iter().map(|meal| meal.total_calories).sum();
    total / dates.len() as f64
}

/// Summarize a meal schedule against its macro targets
///
/// `target_calories` is recomputed from the macro grams, so it differs from the
/// derived energy target when macros were overridden; the deficit is taken
/// against that recomputed value.
#[must_use]
pub fn nutrition_summary(
    meals: &[Meal],
    macros: MacroTargets,
    density: &EnergyDensityConfig,
    recommendations: &RecommendationConfig,
) -> NutritionSummary {
    let average = average_daily_calories(meals);
    let target = macro_calories(&macros, density);
    NutritionSummary {
        average_daily_calories: average,
        target_calories: target,
        calorie_deficit: target - average,
        macro_targets: macros,
        recommendations: nutrition_plan_recommendations(average, &macros, recommendations),
    }
}

/// Week-by-week intensity and volume multipliers
///
/// Week `n` (1-indexed) grows linearly from 1.0; every `deload_week`-th week is
/// additionally scaled down by the deload factors.
#[must_use]
pub fn progression_plan(weeks: u32, config: &ProgressionConfig) -> ProgressionPlan {
    let weeks = (0..weeks)
        .map(|index| {
            let week_number = index + 1;
            let is_deload = config.deload_week > 0 && week_number % config.deload_week == 0;
            let mut intensity = f64::from(index).mul_add(config.intensity_increase, 1.0);
            let mut volume = f64::from(index).mul_add(config.volume_increase, 1.0);
            if is_deload {
                intensity *= config.deload_intensity_factor;
                volume *= config.deload_volume_factor;
            }
            ProgressionWeek {
                week_number,
                intensity_multiplier: intensity,
                volume_multiplier: volume,
                is_deload,
                focus: if is_deload {
                    config.deload_focus.clone()
                } else {
                    config.progression_focus.clone()
                },
            }
        })
        .collect();

    ProgressionPlan {
        intensity_increase: config.intensity_increase,
        volume_increase: config.volume_increase,
        deload_week: config.deload_week,
        weeks,
    }
}

/// Sorted union of the equipment every session needs
#[must_use]
pub fn equipment_requirements(sessions: &[WorkoutSession]) -> Vec<String> {
    sessions
        .iter()
        .flat_map(|session| session.equipment_needed.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
