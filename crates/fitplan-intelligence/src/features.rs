// ABOUTME: Feature vectors handed to an optional learned scorer, and the hints it returns
// ABOUTME: FeatureVector built from (profile, catalog item); ScoreHints keyed by item id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::HashMap;

use fitplan_core::models::{Exercise, FitnessGoal, FoodItem, Sex, UserProfile, WorkoutProfile};
use serde::{Deserialize, Serialize};

/// Number of numeric features in [`FeatureVector::values`]
pub const FEATURE_COUNT: usize = 11;

/// Numeric description of one (profile, item) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    /// Catalog id of the item
    pub item_id: String,
    /// Age in years
    pub age: f64,
    /// 1.0 for male, 0.0 otherwise
    pub is_male: f64,
    /// Body mass index
    pub bmi: f64,
    /// Fitness level ordinal (0 when not applicable)
    pub level: f64,
    /// Weight loss goal flag
    pub goal_weight_loss: f64,
    /// Muscle gain goal flag
    pub goal_muscle_gain: f64,
    /// Endurance goal flag
    pub goal_endurance: f64,
    /// kcal per 100 g (foods) or per minute (exercises)
    pub item_energy: f64,
    /// Difficulty ordinal of the item (0 for foods)
    pub item_difficulty: f64,
    /// Local item flag
    pub item_is_local: f64,
    /// Requested groups the item hits (0 for foods)
    pub group_overlap: f64,
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl FeatureVector {
    fn person(item_id: &str, person: &UserProfile, level: f64) -> Self {
        Self {
            item_id: item_id.to_owned(),
            age: f64::from(person.age),
            is_male: flag(person.sex == Sex::Male),
            bmi: person.bmi(),
            level,
            goal_weight_loss: flag(person.has_goal(FitnessGoal::WeightLoss)),
            goal_muscle_gain: flag(person.has_goal(FitnessGoal::MuscleGain)),
            goal_endurance: flag(person.has_goal(FitnessGoal::Endurance)),
            item_energy: 0.0,
            item_difficulty: 0.0,
            item_is_local: 0.0,
            group_overlap: 0.0,
        }
    }

    /// Features for a food
    #[must_use]
    pub fn for_food(person: &UserProfile, food: &FoodItem) -> Self {
        Self {
            item_energy: food.calories_per_100g,
            item_is_local: flag(food.is_local),
            ..Self::person(&food.id, person, 0.0)
        }
    }

    /// Features for an exercise against the groups the plan targets
    #[must_use]
    pub fn for_exercise(profile: &WorkoutProfile, exercise: &Exercise, groups: &[String]) -> Self {
        let overlap = exercise
            .muscle_groups
            .iter()
            .filter(|group| groups.contains(group))
            .count();
        Self {
            item_energy: exercise.estimated_calories_per_minute.unwrap_or_default(),
            item_difficulty: f64::from(exercise.difficulty_level.ordinal()),
            item_is_local: flag(exercise.is_local),
            group_overlap: overlap as f64,
            ..Self::person(
                &exercise.id,
                &profile.person,
                profile.fitness_level.map_or(0.0, |level| f64::from(level.ordinal())),
            )
        }
    }

    /// Features in a fixed order, for model input
    #[must_use]
    pub const fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.is_male,
            self.bmi,
            self.level,
            self.goal_weight_loss,
            self.goal_muscle_gain,
            self.goal_endurance,
            self.item_energy,
            self.item_difficulty,
            self.item_is_local,
            self.group_overlap,
        ]
    }
}

/// Learned scores keyed by item id, used only to break ranking ties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreHints {
    scores: HashMap<String, f64>,
}

impl ScoreHints {
    /// No hints; ranking is purely rule-based
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Record a score; non-finite scores are dropped
    pub fn insert(&mut self, item_id: impl Into<String>, score: f64) {
        if score.is_finite() {
            self.scores.insert(item_id.into(), score);
        }
    }

    /// Score for an item, lowest possible when unscored
    #[must_use]
    pub fn score(&self, item_id: &str) -> f64 {
        self.scores.get(item_id).copied().unwrap_or(f64::MIN)
    }

    /// Number of scored items
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when nothing was scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(String, f64)> for ScoreHints {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut hints = Self::default();
        for (item_id, score) in iter {
            hints.insert(item_id, score);
        }
        hints
    }
}
