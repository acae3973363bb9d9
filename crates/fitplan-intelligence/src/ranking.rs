// ABOUTME: Candidate ranker filtering and ordering catalog foods and exercises
// ABOUTME: Hard constraints first, then a stable sort on rule-based keys with learned hints last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Candidate Ranker
//!
//! Filtering removes items that violate a hard constraint; the survivors are
//! ordered with a stable sort so ties keep catalog order. Learned score hints
//! only ever break ties left by the rule-based keys.
//!
//! An empty catalog, or one where nothing passes the filters, yields an empty
//! list.

use std::cmp::Ordering;
use std::collections::HashSet;

use fitplan_core::constants::tags;
use fitplan_core::models::{
    Exercise, ExerciseSuggestion, FitnessLevel, FoodItem, FoodSuggestion, Locale, MealType, RepRange,
};
use rayon::prelude::*;

use crate::config::planner::RankingConfig;
use crate::features::ScoreHints;

/// What a meal slot needs from the food catalog
#[derive(Debug, Clone, Copy)]
pub struct FoodQuery<'a> {
    /// Slot the foods are for; selects the keyword list
    pub meal_type: MealType,
    /// Calories allocated to the slot
    pub budget_kcal: f64,
    /// Language of names and keywords
    pub locale: Locale,
    /// Keep only locally produced foods
    pub local_only: bool,
    /// Allergens to exclude
    pub allergies: &'a [String],
}

/// What a session phase needs from the exercise catalog
#[derive(Debug, Clone, Copy)]
pub struct ExerciseQuery<'a> {
    /// Muscle groups to target; candidates must hit at least one
    pub groups: &'a [String],
    /// Required difficulty
    pub difficulty: FitnessLevel,
    /// Equipment available
    pub equipment: &'a [String],
    /// Minutes available to a single exercise
    pub budget_minutes: f64,
    /// Exercise ids already used in the session
    pub exclude: &'a HashSet<String>,
    /// Injured areas; candidates working any of them are dropped
    pub avoid_groups: &'a [String],
}

/// Time and energy estimate of an exercise at a difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseEstimate {
    /// Sets range used
    pub sets: RepRange,
    /// Reps range used
    pub reps: RepRange,
    /// Minutes of work and rest
    pub minutes: f64,
    /// Energy over those minutes
    pub calories: f64,
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    haystack
        .iter()
        .any(|item| item.trim().eq_ignore_ascii_case(needle.trim()))
}

/// Number of meal keywords found in `name` (case-insensitive)
#[must_use]
pub fn keyword_score(name: &str, keywords: &[String]) -> u32 {
    let name = name.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| name.contains(&keyword.to_lowercase()))
        .count() as u32
}

fn food_allowed(food: &FoodItem, query: &FoodQuery<'_>) -> bool {
    food.calories_per_100g > 0.0
        && (!query.local_only || food.is_local)
        && !food
            .allergens
            .iter()
            .any(|allergen| contains_ignore_case(query.allergies, allergen))
}

/// Rank foods for a meal slot
///
/// Portions are sized from the slot budget and capped rather than filtered,
/// so every food that passes the hard constraints is a candidate.
#[must_use]
pub fn rank_foods(
    catalog: &[FoodItem],
    query: &FoodQuery<'_>,
    config: &RankingConfig,
    hints: &ScoreHints,
    limit: usize,
) -> Vec<FoodSuggestion> {
    let keywords = config
        .meal_keywords
        .for_locale(query.locale)
        .for_meal(query.meal_type);

    let mut candidates: Vec<(FoodSuggestion, f64)> = catalog
        .iter()
        .filter(|food| food_allowed(food, query))
        .map(|food| {
            let portion = (query.budget_kcal / food.calories_per_100g * 100.0)
                .min(config.max_portion_g)
                .max(0.0);
            let name = food.localized_name(query.locale);
            let suggestion = FoodSuggestion {
                food_id: food.id.clone(),
                name: name.to_owned(),
                category: food.category.clone(),
                suggested_portion_g: portion,
                estimated_calories: portion / 100.0 * food.calories_per_100g,
                relevance_score: keyword_score(name, keywords),
            };
            (suggestion, hints.score(&food.id))
        })
        .collect();

    candidates.sort_by(|(a, hint_a), (b, hint_b)| {
        b.relevance_score
            .cmp(&a.relevance_score)
            .then_with(|| hint_b.total_cmp(hint_a))
    });
    candidates.truncate(limit);
    candidates.into_iter().map(|(suggestion, _)| suggestion).collect()
}

/// Estimate work plus rest time for an exercise at `difficulty`
///
/// Time = `sets·reps·seconds_per_rep + rest·(sets − 1)` at the range midpoints,
/// converted to minutes. Missing per-level ranges, rest or burn rate fall back
/// to the configured defaults.
#[must_use]
pub fn estimate_exercise(
    exercise: &Exercise,
    difficulty: FitnessLevel,
    config: &RankingConfig,
) -> ExerciseEstimate {
    let sets = exercise
        .sets_recommended
        .get(&difficulty)
        .copied()
        .unwrap_or(config.default_sets);
    let reps = exercise
        .reps_recommended
        .get(&difficulty)
        .copied()
        .unwrap_or(config.default_reps);
    let rest = f64::from(
        exercise
            .rest_time_seconds
            .unwrap_or(config.default_rest_seconds),
    );
    let avg_sets = sets.midpoint();
    let avg_reps = reps.midpoint();
    let seconds = (avg_sets * avg_reps).mul_add(config.seconds_per_rep, rest * (avg_sets - 1.0));
    let minutes = seconds / 60.0;
    let per_minute = exercise
        .estimated_calories_per_minute
        .unwrap_or(config.default_calories_per_minute);

    ExerciseEstimate {
        sets,
        reps,
        minutes,
        calories: per_minute * minutes,
    }
}

/// Equipment check; an empty requirement or "none" always passes
fn equipment_available(required: &[String], available: &[String]) -> bool {
    required
        .iter()
        .filter(|item| !item.trim().eq_ignore_ascii_case(tags::NO_EQUIPMENT))
        .all(|item| contains_ignore_case(available, item))
}

fn evaluate_exercise(
    exercise: &Exercise,
    query: &ExerciseQuery<'_>,
    config: &RankingConfig,
) -> Option<ExerciseSuggestion> {
    if query.exclude.contains(&exercise.id) || exercise.difficulty_level != query.difficulty {
        return None;
    }
    let overlap = query
        .groups
        .iter()
        .filter(|group| exercise.muscle_groups.contains(group))
        .count();
    if overlap == 0 {
        return None;
    }
    if exercise
        .muscle_groups
        .iter()
        .any(|group| contains_ignore_case(query.avoid_groups, group))
    {
        return None;
    }
    if !equipment_available(&exercise.equipment_needed, query.equipment) {
        return None;
    }

    let estimate = estimate_exercise(exercise, query.difficulty, config);
    (estimate.minutes <= query.budget_minutes).then(|| ExerciseSuggestion {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        category: exercise.category.clone(),
        muscle_groups: exercise.muscle_groups.clone(),
        equipment_needed: exercise.equipment_needed.clone(),
        recommended_sets: estimate.sets,
        recommended_reps: estimate.reps,
        estimated_time_minutes: estimate.minutes,
        estimated_calories: estimate.calories,
        group_overlap: overlap,
    })
}

fn compare_exercises(a: &ExerciseSuggestion, b: &ExerciseSuggestion) -> Ordering {
    b.group_overlap
        .cmp(&a.group_overlap)
        .then_with(|| b.estimated_time_minutes.total_cmp(&a.estimated_time_minutes))
}

/// Rank exercises for a session phase
///
/// Ordered by group overlap, then estimated time, both descending. Candidates
/// are evaluated in parallel; collection keeps catalog order so the stable
/// sort stays deterministic.
#[must_use]
pub fn rank_exercises(
    catalog: &[Exercise],
    query: &ExerciseQuery<'_>,
    config: &RankingConfig,
    hints: &ScoreHints,
    limit: usize,
) -> Vec<ExerciseSuggestion> {
    let mut candidates: Vec<ExerciseSuggestion> = catalog
        .par_iter()
        .filter_map(|exercise| evaluate_exercise(exercise, query, config))
        .collect();

    candidates.sort_by(|a, b| {
        compare_exercises(a, b)
            .then_with(|| hints.score(&b.exercise_id).total_cmp(&hints.score(&a.exercise_id)))
    });
    candidates.truncate(limit);
    candidates
}
