// ABOUTME: Schedule assembler composing ranked candidates and budgets into dated meals and sessions
// ABOUTME: Days x meal types for nutrition; weeks x weekly split for workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Schedule Assembler
//!
//! Both assemblers iterate a fixed count and call the ranker once per unit
//! (or per phase). Given the same profile, targets and catalog they produce
//! the same schedule.

use std::collections::{BTreeSet, HashSet};

use chrono::{Days, NaiveDate};
use fitplan_core::constants::tags;
use fitplan_core::models::{
    Exercise, ExerciseSuggestion, FitnessGoal, FitnessLevel, FoodItem, Meal, MealPlanRequest,
    NutritionProfile, NutritionTargets, SessionType, WorkoutPlanRequest, WorkoutProfile,
    WorkoutSession,
};
use tracing::debug;

use crate::allocation::{meal_budget, session_budget};
use crate::config::PlannerConfig;
use crate::features::ScoreHints;
use crate::ranking::{rank_exercises, rank_foods, ExerciseQuery, FoodQuery};
use crate::targets::first_matching_goal;

/// Focus areas used for muscle gain when the request names none
pub const MUSCLE_GAIN_FOCUS: [&str; 5] = ["chest", "back", "legs", "shoulders", "arms"];

/// Weekly session pattern for a weekly frequency
///
/// 3, 4 and 5 sessions have dedicated splits; any other count repeats
/// strength for every slot.
#[must_use]
pub fn weekly_split(workouts_per_week: u32) -> Vec<SessionType> {
    use SessionType::{Cardio, Flexibility, Strength};
    match workouts_per_week {
        3 => vec![Strength, Cardio, Strength],
        4 => vec![Strength, Cardio, Strength, Flexibility],
        5 => vec![Strength, Cardio, Strength, Cardio, Strength],
        n => vec![Strength; n as usize],
    }
}

/// Focus areas for strength sessions; derived from goals when none were requested
#[must_use]
pub fn resolve_focus_areas(requested: &[String], goals: &[FitnessGoal]) -> Vec<String> {
    if !requested.is_empty() {
        return requested.to_vec();
    }
    let areas: &[&str] = match first_matching_goal(
        goals,
        &[FitnessGoal::MuscleGain, FitnessGoal::WeightLoss],
    ) {
        Some(FitnessGoal::MuscleGain) => &MUSCLE_GAIN_FOCUS,
        Some(FitnessGoal::WeightLoss) => &[tags::FULL_BODY, tags::CORE],
        _ => &[tags::FULL_BODY],
    };
    areas.iter().map(|area| (*area).to_owned()).collect()
}

/// `start + offset` days, saturating at the calendar maximum
pub(crate) fn add_days(start: NaiveDate, offset: u64) -> NaiveDate {
    start.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX)
}

/// Assemble `days × meal_types` meals starting at `start`
#[must_use]
pub fn assemble_meals(
    profile: &NutritionProfile,
    request: &MealPlanRequest,
    targets: &NutritionTargets,
    foods: &[FoodItem],
    config: &PlannerConfig,
    hints: &ScoreHints,
    start: NaiveDate,
) -> Vec<Meal> {
    let ranking = &config.ranking;
    let mut meals = Vec::with_capacity(request.days as usize * request.meal_types.len());

    for day in 0..request.days {
        let date = add_days(start, u64::from(day));
        for &meal_type in &request.meal_types {
            let budget = meal_budget(targets.target_calories, meal_type, &config.allocation.meals);
            let query = FoodQuery {
                meal_type,
                budget_kcal: budget,
                locale: profile.person.locale,
                local_only: request.include_local,
                allergies: &profile.allergies,
            };
            let mut selected = rank_foods(foods, &query, ranking, hints, ranking.top_n);
            selected.truncate(ranking.foods_per_meal);
            let total_calories = selected.iter().map(|food| food.estimated_calories).sum();

            meals.push(Meal {
                date,
                meal_type,
                target_calories: budget,
                foods: selected,
                total_calories,
            });
        }
    }

    debug!(
        user_id = %profile.person.user_id,
        days = request.days,
        meals = meals.len(),
        "Assembled meal schedule"
    );
    meals
}

fn session_name(session_type: SessionType, groups: &[String]) -> String {
    match session_type {
        SessionType::Strength => format!("Strength Training - {}", groups.join(", ")),
        SessionType::Cardio => "Cardio Training".to_owned(),
        SessionType::Flexibility => "Flexibility Training".to_owned(),
    }
}

fn collect_ids(exercises: &[ExerciseSuggestion], into: &mut HashSet<String>) {
    into.extend(exercises.iter().map(|exercise| exercise.exercise_id.clone()));
}

/// Fixed scope for warm-up and cool-down picks
struct LightScope {
    groups: [String; 1],
    equipment: [String; 1],
}

impl Default for LightScope {
    fn default() -> Self {
        Self {
            groups: [tags::FULL_BODY.to_owned()],
            equipment: [tags::NO_EQUIPMENT.to_owned()],
        }
    }
}

impl LightScope {
    fn query<'a>(&'a self, minutes: u32, exclude: &'a HashSet<String>) -> ExerciseQuery<'a> {
        ExerciseQuery {
            groups: &self.groups,
            difficulty: FitnessLevel::Beginner,
            equipment: &self.equipment,
            budget_minutes: f64::from(minutes),
            exclude,
            avoid_groups: &[],
        }
    }
}

/// Where a session sits in the plan
#[derive(Debug, Clone, Copy)]
pub struct SessionSlot {
    /// Week number (1-indexed)
    pub week: u32,
    /// Slot within the week (1-indexed)
    pub slot: u32,
    /// Session type from the weekly split
    pub session_type: SessionType,
}

/// Build one session: budget the phases, then rank main, warm-up and cool-down
///
/// Warm-up and cool-down always use a full-body, beginner, no-equipment scope.
/// Warm-up excludes the main picks and cool-down excludes both earlier phases.
#[must_use]
pub fn build_session(
    profile: &WorkoutProfile,
    slot: SessionSlot,
    groups: Vec<String>,
    exercises: &[Exercise],
    config: &PlannerConfig,
    hints: &ScoreHints,
) -> WorkoutSession {
    let ranking = &config.ranking;
    let limit = ranking.exercises_per_phase;
    let budget = session_budget(
        profile.session_minutes,
        slot.session_type,
        &config.allocation.phases,
    );
    let mut used = HashSet::new();

    let main = rank_exercises(
        exercises,
        &ExerciseQuery {
            groups: &groups,
            difficulty: profile.training_level(),
            equipment: &profile.available_equipment,
            budget_minutes: f64::from(budget.main_minutes),
            exclude: &used,
            avoid_groups: &profile.injuries,
        },
        ranking,
        hints,
        limit,
    );
    collect_ids(&main, &mut used);

    let scope = LightScope::default();
    let warm_up = rank_exercises(
        exercises,
        &scope.query(budget.warm_up_minutes, &used),
        ranking,
        hints,
        limit,
    );
    collect_ids(&warm_up, &mut used);
    let cool_down = rank_exercises(
        exercises,
        &scope.query(budget.cool_down_minutes, &used),
        ranking,
        hints,
        limit,
    );

    let total_calories = main
        .iter()
        .chain(&warm_up)
        .chain(&cool_down)
        .map(|exercise| exercise.estimated_calories)
        .sum();
    let equipment_needed: BTreeSet<String> = main
        .iter()
        .flat_map(|exercise| exercise.equipment_needed.iter())
        .filter(|item| !item.trim().eq_ignore_ascii_case(tags::NO_EQUIPMENT))
        .cloned()
        .collect();

    WorkoutSession {
        id: format!("w{}-s{}", slot.week, slot.slot),
        week: slot.week,
        slot: slot.slot,
        name: session_name(slot.session_type, &groups),
        session_type: slot.session_type,
        difficulty: profile.training_level(),
        duration_minutes: profile.session_minutes,
        budget,
        warm_up,
        exercises: main,
        cool_down,
        total_calories,
        target_muscle_groups: groups,
        equipment_needed: equipment_needed.into_iter().collect(),
    }
}

/// Assemble `weeks × workouts_per_week` sessions
///
/// Slot `i` of every week takes `split[i mod split.len()]`. Strength sessions
/// rotate through the focus areas by the plan-wide session index; cardio and
/// flexibility target the full body.
#[must_use]
pub fn assemble_sessions(
    profile: &WorkoutProfile,
    request: &WorkoutPlanRequest,
    exercises: &[Exercise],
    config: &PlannerConfig,
    hints: &ScoreHints,
) -> Vec<WorkoutSession> {
    let split = weekly_split(request.workouts_per_week);
    let focus = resolve_focus_areas(&request.focus_areas, &profile.person.goals);
    let mut sessions =
        Vec::with_capacity(request.duration_weeks as usize * request.workouts_per_week as usize);

    if split.is_empty() {
        return sessions;
    }

    for week in 0..request.duration_weeks {
        for slot in 0..request.workouts_per_week {
            let session_type = split[slot as usize % split.len()];
            let groups = match session_type {
                SessionType::Strength => vec![focus[sessions.len() % focus.len()].clone()],
                SessionType::Cardio | SessionType::Flexibility => vec![tags::FULL_BODY.to_owned()],
            };
            let slot = SessionSlot {
                week: week + 1,
                slot: slot + 1,
                session_type,
            };
            sessions.push(build_session(profile, slot, groups, exercises, config, hints));
        }
    }

    debug!(
        user_id = %profile.person.user_id,
        weeks = request.duration_weeks,
        sessions = sessions.len(),
        "Assembled workout schedule"
    );
    sessions
}
