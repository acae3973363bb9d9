// ABOUTME: Catalog browsing: substring search over foods and exercises, attribute filters
// ABOUTME: Works on snapshots; an unavailable catalog yields no results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{CatalogSnapshot, Exercise, FitnessLevel, FoodItem};
use serde::{Deserialize, Serialize};

fn matches(query: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(query))
}

/// Foods whose names or category contain `query` (case-insensitive)
#[must_use]
pub fn search_foods(catalog: &CatalogSnapshot<FoodItem>, query: &str, limit: usize) -> Vec<FoodItem> {
    let query = query.trim().to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|food| {
            matches(
                &query,
                &[
                    Some(food.name.as_str()),
                    food.name_fr.as_deref(),
                    food.name_wo.as_deref(),
                    Some(food.category.as_str()),
                ],
            )
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Local foods, optionally restricted to one category
#[must_use]
pub fn local_foods(catalog: &CatalogSnapshot<FoodItem>, category: Option<&str>) -> Vec<FoodItem> {
    catalog
        .items()
        .iter()
        .filter(|food| food.is_local)
        .filter(|food| category.is_none_or(|wanted| food.category.eq_ignore_ascii_case(wanted)))
        .cloned()
        .collect()
}

/// Exercise attribute filter; unset fields match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseFilter {
    /// Exact category
    pub category: Option<String>,
    /// Exact difficulty
    pub difficulty: Option<FitnessLevel>,
    /// Muscle group the exercise must work
    pub muscle_group: Option<String>,
}

impl ExerciseFilter {
    /// Whether `exercise` passes every set field
    #[must_use]
    pub fn accepts(&self, exercise: &Exercise) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| exercise.category.eq_ignore_ascii_case(category))
            && self
                .difficulty
                .is_none_or(|difficulty| exercise.difficulty_level == difficulty)
            && self.muscle_group.as_deref().is_none_or(|group| {
                exercise
                    .muscle_groups
                    .iter()
                    .any(|worked| worked.eq_ignore_ascii_case(group))
            })
    }
}

/// Exercises passing `filter`, in catalog order
#[must_use]
pub fn filter_exercises(catalog: &CatalogSnapshot<Exercise>, filter: &ExerciseFilter) -> Vec<Exercise> {
    catalog
        .items()
        .iter()
        .filter(|exercise| filter.accepts(exercise))
        .cloned()
        .collect()
}

/// Exercises whose names, category or muscle groups contain `query`
#[must_use]
pub fn search_exercises(
    catalog: &CatalogSnapshot<Exercise>,
    query: &str,
    limit: usize,
) -> Vec<Exercise> {
    let query = query.trim().to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|exercise| {
            let groups = exercise.muscle_groups.join(" ");
            matches(
                &query,
                &[
                    Some(exercise.name.as_str()),
                    exercise.name_fr.as_deref(),
                    exercise.name_wo.as_deref(),
                    Some(exercise.category.as_str()),
                    Some(groups.as_str()),
                ],
            )
        })
        .take(limit)
        .cloned()
        .collect()
}
