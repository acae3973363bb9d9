// ABOUTME: Benchmark fixtures generating synthetic food and exercise catalogs
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Benchmark fixtures for generating synthetic catalogs and profiles.

use std::collections::BTreeMap;

use fitplan::models::{
    ActivityLevel, Exercise, FitnessGoal, FitnessLevel, FoodItem, Locale, NutritionProfile,
    RepRange, Sex, UserProfile, WorkoutProfile,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Hand-curated regional catalog
    Small,
    /// Typical national food table
    Medium,
    /// Stress test
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }
}

const FOOD_NAMES: [&str; 8] = [
    "Riz au poisson",
    "Bouillie de mil",
    "Soupe de légumes",
    "Poulet yassa",
    "Salade de fruits",
    "Pain de singe",
    "Lait caillé",
    "Viande grillée",
];

const MUSCLE_GROUPS: [&str; 7] = ["chest", "back", "legs", "shoulders", "arms", "core", "full_body"];

const CATEGORIES: [&str; 3] = ["strength", "cardio", "flexibility"];

fn person(goals: Vec<FitnessGoal>) -> UserProfile {
    UserProfile {
        user_id: "bench-user".to_owned(),
        age: 32,
        sex: Sex::Female,
        height_cm: 168.0,
        weight_kg: 64.0,
        goals,
        locale: Locale::Fr,
    }
}

#[must_use]
pub fn nutrition_profile() -> NutritionProfile {
    NutritionProfile {
        person: person(vec![FitnessGoal::WeightLoss]),
        activity_level: ActivityLevel::Moderate,
        dietary_restrictions: Vec::new(),
        allergies: vec!["arachide".to_owned()],
    }
}

#[must_use]
pub fn workout_profile() -> WorkoutProfile {
    WorkoutProfile {
        person: person(vec![FitnessGoal::MuscleGain]),
        fitness_level: Some(FitnessLevel::Intermediate),
        experience_years: 3,
        available_equipment: vec!["dumbbells".to_owned(), "bench".to_owned()],
        session_minutes: 60,
        injuries: Vec::new(),
    }
}

/// Generate `size` foods cycling through regional names
#[must_use]
pub fn generate_foods(size: CatalogSize) -> Vec<FoodItem> {
    (0..size.count())
        .map(|index| {
            let base = FOOD_NAMES[index % FOOD_NAMES.len()];
            FoodItem {
                id: format!("food_{index}"),
                name: format!("Food {index}"),
                name_fr: Some(format!("{base} {index}")),
                name_wo: None,
                category: "plat".to_owned(),
                is_local: index % 5 != 0,
                calories_per_100g: 40.0 + ((index * 37) % 300) as f64,
                protein_per_100g: ((index * 7) % 25) as f64,
                carbs_per_100g: ((index * 11) % 60) as f64,
                fat_per_100g: ((index * 3) % 20) as f64,
                fiber_per_100g: None,
                allergens: if index % 13 == 0 {
                    vec!["arachide".to_owned()]
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

/// Generate `size` exercises spread over groups, levels and categories
#[must_use]
pub fn generate_exercises(size: CatalogSize) -> Vec<Exercise> {
    let levels = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];
    (0..size.count())
        .map(|index| {
            let level = levels[index % levels.len()];
            let first = MUSCLE_GROUPS[index % MUSCLE_GROUPS.len()];
            let second = MUSCLE_GROUPS[(index / 7) % MUSCLE_GROUPS.len()];
            let sets = RepRange(2 + (index % 3) as u32, 3 + (index % 3) as u32);
            let reps = RepRange(8 + (index % 5) as u32, 12 + (index % 5) as u32);
            Exercise {
                id: format!("exercise_{index}"),
                name: format!("Exercise {index}"),
                name_fr: None,
                name_wo: None,
                category: CATEGORIES[index % CATEGORIES.len()].to_owned(),
                muscle_groups: vec![first.to_owned(), second.to_owned()],
                equipment_needed: match index % 4 {
                    0 => vec!["dumbbells".to_owned()],
                    1 => vec!["barbell".to_owned()],
                    2 => vec!["none".to_owned()],
                    _ => Vec::new(),
                },
                difficulty_level: level,
                estimated_calories_per_minute: Some(3.0 + (index % 8) as f64),
                rest_time_seconds: Some(30 + ((index % 4) as u32) * 15),
                sets_recommended: BTreeMap::from([(level, sets)]),
                reps_recommended: BTreeMap::from([(level, reps)]),
                is_local: false,
            }
        })
        .collect()
}
