// ABOUTME: Shared fixtures for engine integration tests
// ABOUTME: Small food and exercise catalogs plus reference profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]

use std::sync::Once;

use chrono::NaiveDate;
use fitplan_core::models::{
    ActivityLevel, CatalogSnapshot, Exercise, FitnessGoal, FitnessLevel, FoodItem, Locale,
    NutritionProfile, Sex, UserProfile, WorkoutProfile,
};
use serde_json::json;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date")
}

pub fn person(goals: Vec<FitnessGoal>) -> UserProfile {
    UserProfile {
        user_id: "user-1".to_owned(),
        age: 30,
        sex: Sex::Male,
        height_cm: 175.0,
        weight_kg: 70.0,
        goals,
        locale: Locale::Fr,
    }
}

pub fn nutrition_profile(goals: Vec<FitnessGoal>) -> NutritionProfile {
    NutritionProfile {
        person: person(goals),
        activity_level: ActivityLevel::Moderate,
        dietary_restrictions: Vec::new(),
        allergies: Vec::new(),
    }
}

pub fn workout_profile(goals: Vec<FitnessGoal>) -> WorkoutProfile {
    WorkoutProfile {
        person: person(goals),
        fitness_level: Some(FitnessLevel::Intermediate),
        experience_years: 2,
        available_equipment: vec!["dumbbells".to_owned()],
        session_minutes: 60,
        injuries: Vec::new(),
    }
}

pub fn food_items() -> Vec<FoodItem> {
    serde_json::from_value(json!([
        {
            "id": "riz_poisson", "name": "Rice with fish", "name_fr": "Riz au poisson",
            "category": "plat", "is_senegalese": true, "calories_per_100g": 150.0,
            "protein_per_100g": 9.0, "carbs_per_100g": 20.0, "fat_per_100g": 4.0
        },
        {
            "id": "lait_caille", "name": "Curdled milk", "name_fr": "Lait caillé",
            "category": "laitier", "is_local": true, "calories_per_100g": 60.0,
            "allergens": ["lactose"]
        },
        {
            "id": "pain", "name": "Bread", "name_fr": "Pain",
            "category": "cereal", "is_local": false, "calories_per_100g": 265.0
        },
        {
            "id": "mangue", "name": "Mango", "name_fr": "Mangue",
            "category": "fruit", "is_local": true, "calories_per_100g": 60.0
        },
        {
            "id": "soupe_legumes", "name": "Vegetable soup", "name_fr": "Soupe de légumes",
            "category": "plat", "is_local": true, "calories_per_100g": 40.0
        },
        {
            "id": "eau", "name": "Water", "name_fr": "Eau",
            "category": "boisson", "is_local": true, "calories_per_100g": 0.0
        }
    ]))
    .expect("food fixture parses")
}

pub fn exercises() -> Vec<Exercise> {
    serde_json::from_value(json!([
        {
            "id": "pushup", "name": "Push-up", "category": "strength",
            "muscle_groups": ["chest", "arms"], "equipment_needed": [],
            "difficulty_level": "intermediate", "estimated_calories_per_minute": 7.0,
            "rest_time_seconds": 60,
            "sets_recommended": {"intermediate": [3, 4]},
            "reps_recommended": {"intermediate": [10, 15]}
        },
        {
            "id": "bench_press", "name": "Bench press", "category": "strength",
            "muscle_groups": ["chest"], "equipment_needed": ["barbell", "bench"],
            "difficulty_level": "intermediate", "estimated_calories_per_minute": 6.0,
            "rest_time_seconds": 120,
            "sets_recommended": {"intermediate": [3, 5]},
            "reps_recommended": {"intermediate": [6, 10]}
        },
        {
            "id": "squat", "name": "Squat", "category": "strength",
            "muscle_groups": ["legs"], "difficulty_level": "intermediate"
        },
        {
            "id": "burpee", "name": "Burpee", "category": "cardio",
            "muscle_groups": ["full_body"], "difficulty_level": "intermediate",
            "estimated_calories_per_minute": 10.0, "rest_time_seconds": 30,
            "sets_recommended": {"intermediate": [3, 3]},
            "reps_recommended": {"intermediate": [10, 10]}
        },
        {
            "id": "jumping_jacks", "name": "Jumping jacks", "category": "cardio",
            "muscle_groups": ["full_body"], "equipment_needed": ["none"],
            "difficulty_level": "beginner", "estimated_calories_per_minute": 8.0,
            "rest_time_seconds": 30,
            "sets_recommended": {"beginner": [2, 2]},
            "reps_recommended": {"beginner": [20, 20]}
        },
        {
            "id": "arm_circles", "name": "Arm circles", "category": "flexibility",
            "muscle_groups": ["full_body", "shoulders"], "difficulty_level": "beginner",
            "estimated_calories_per_minute": 3.0, "rest_time_seconds": 15,
            "sets_recommended": {"beginner": [1, 1]},
            "reps_recommended": {"beginner": [20, 20]}
        },
        {
            "id": "child_pose", "name": "Child's pose", "category": "flexibility",
            "muscle_groups": ["full_body"], "difficulty_level": "beginner",
            "estimated_calories_per_minute": 2.0, "rest_time_seconds": 0,
            "sets_recommended": {"beginner": [1, 1]},
            "reps_recommended": {"beginner": [10, 10]}
        },
        {
            "id": "plank", "name": "Plank", "category": "strength",
            "muscle_groups": ["core", "full_body"], "difficulty_level": "intermediate",
            "rest_time_seconds": 60,
            "sets_recommended": {"intermediate": [3, 3]},
            "reps_recommended": {"intermediate": [1, 1]}
        }
    ]))
    .expect("exercise fixture parses")
}

pub fn food_catalog() -> CatalogSnapshot<FoodItem> {
    CatalogSnapshot::new(food_items())
}

pub fn exercise_catalog() -> CatalogSnapshot<Exercise> {
    CatalogSnapshot::new(exercises())
}
