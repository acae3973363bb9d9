// ABOUTME: Time-budget allocator splitting daily calories and session minutes by fixed ratios
// ABOUTME: Pure arithmetic, re-derivable from (total, unit type)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{MealType, PhaseBudget, SessionType};

use crate::config::planner::{MealRatioConfig, PhaseRatioConfig, PhaseRatios};

/// Calories allocated to one meal slot
#[must_use]
pub fn meal_budget(daily_calories: f64, meal_type: MealType, config: &MealRatioConfig) -> f64 {
    daily_calories * config.ratio(meal_type)
}

/// Split session minutes into whole-minute phases (each share floored)
#[must_use]
pub fn split_minutes(total_minutes: u32, ratios: PhaseRatios) -> PhaseBudget {
    let total = f64::from(total_minutes);
    let share = |ratio: f64| (total * ratio).floor() as u32;
    PhaseBudget {
        warm_up_minutes: share(ratios.warm_up),
        main_minutes: share(ratios.main),
        cool_down_minutes: share(ratios.cool_down),
    }
}

/// Phase budget for a session type
#[must_use]
pub fn session_budget(
    total_minutes: u32,
    session_type: SessionType,
    config: &PhaseRatioConfig,
) -> PhaseBudget {
    split_minutes(total_minutes, config.ratios(session_type))
}
