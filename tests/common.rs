// ABOUTME: Shared test utilities for service-level integration tests
// ABOUTME: Logging setup, profiles, catalog fixtures and temporary catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]

use std::io::Write;
use std::sync::Once;

use chrono::NaiveDate;
use fitplan::catalog::Catalogs;
use fitplan::models::{CatalogSnapshot, Exercise, FoodItem, NutritionProfile, WorkoutProfile};
use fitplan::service::PlanService;
use fitplan_intelligence::PlanEngine;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

pub fn nutrition_profile_json() -> Value {
    json!({
        "user_id": "awa",
        "age": 28,
        "gender": "female",
        "height_cm": 165.0,
        "weight_kg": 62.0,
        "fitness_goals": ["weight_loss"],
        "language": "fr",
        "activity_level": "lightly_active",
        "allergies": ["arachide"]
    })
}

pub fn nutrition_profile() -> NutritionProfile {
    serde_json::from_value(nutrition_profile_json()).expect("nutrition profile parses")
}

pub fn workout_profile() -> WorkoutProfile {
    serde_json::from_value(json!({
        "user_id": "moussa",
        "age": 35,
        "sex": "male",
        "height_cm": 180.0,
        "weight_kg": 82.0,
        "goals": ["muscle_gain"],
        "fitness_level": "beginner",
        "available_equipment": ["dumbbells"],
        "time_availability": 45
    }))
    .expect("workout profile parses")
}

pub fn foods_json() -> Value {
    json!([
        {
            "id": "thieboudienne", "name": "Rice with fish", "name_fr": "Riz au poisson",
            "name_wo": "Thiébou dieune", "category": "plat", "is_senegalese": true,
            "calories_per_100g": 160.0, "protein_per_100g": 9.0
        },
        {
            "id": "bouillie_mil", "name": "Millet porridge", "name_fr": "Bouillie de mil",
            "name_wo": "Lakh", "category": "cereale", "is_senegalese": true,
            "calories_per_100g": 90.0
        },
        {
            "id": "mafe", "name": "Peanut stew", "name_fr": "Mafé",
            "category": "plat", "is_senegalese": true, "calories_per_100g": 210.0,
            "allergens": ["arachide"]
        },
        {
            "id": "croissant", "name": "Croissant", "name_fr": "Croissant",
            "category": "viennoiserie", "is_senegalese": false, "calories_per_100g": 406.0
        },
        {
            "id": "bissap", "name": "Hibiscus juice", "name_fr": "Jus de bissap",
            "category": "boisson", "is_senegalese": true, "calories_per_100g": 45.0
        },
        {
            "id": "salade_legumes", "name": "Vegetable salad", "name_fr": "Salade de légumes",
            "category": "legume", "is_senegalese": true, "calories_per_100g": 35.0
        }
    ])
}

pub fn exercises_json() -> Value {
    json!([
        {
            "id": "goblet_squat", "name": "Goblet squat", "name_fr": "Squat gobelet",
            "category": "strength", "muscle_groups": ["legs"],
            "equipment_needed": ["dumbbells"], "difficulty_level": "beginner",
            "estimated_calories_per_minute": 6.0, "rest_time_seconds": 60,
            "sets_recommended": {"beginner": [2, 3]},
            "reps_recommended": {"beginner": [10, 12]}
        },
        {
            "id": "knee_pushup", "name": "Knee push-up", "name_fr": "Pompes sur genoux",
            "category": "strength", "muscle_groups": ["chest", "arms"],
            "difficulty_level": "beginner", "estimated_calories_per_minute": 5.0,
            "rest_time_seconds": 45,
            "sets_recommended": {"beginner": [2, 3]},
            "reps_recommended": {"beginner": [8, 10]}
        },
        {
            "id": "dumbbell_row", "name": "Dumbbell row", "name_fr": "Rowing haltère",
            "category": "strength", "muscle_groups": ["back", "arms"],
            "equipment_needed": ["dumbbells"], "difficulty_level": "beginner",
            "rest_time_seconds": 60
        },
        {
            "id": "barbell_press", "name": "Barbell press", "category": "strength",
            "muscle_groups": ["shoulders"], "equipment_needed": ["barbell"],
            "difficulty_level": "beginner"
        },
        {
            "id": "marche_rapide", "name": "Brisk walk", "name_fr": "Marche rapide",
            "category": "cardio", "muscle_groups": ["full_body", "legs"],
            "equipment_needed": ["none"], "difficulty_level": "beginner",
            "estimated_calories_per_minute": 5.0, "rest_time_seconds": 0,
            "sets_recommended": {"beginner": [1, 1]},
            "reps_recommended": {"beginner": [60, 60]}
        },
        {
            "id": "etirements", "name": "Full body stretch", "name_fr": "Étirements",
            "category": "flexibility", "muscle_groups": ["full_body"],
            "difficulty_level": "beginner", "estimated_calories_per_minute": 2.0,
            "rest_time_seconds": 10,
            "sets_recommended": {"beginner": [1, 2]},
            "reps_recommended": {"beginner": [5, 5]}
        }
    ])
}

pub fn catalogs() -> Catalogs {
    let foods: Vec<FoodItem> = serde_json::from_value(foods_json()).expect("foods parse");
    let exercises: Vec<Exercise> =
        serde_json::from_value(exercises_json()).expect("exercises parse");
    Catalogs {
        foods: CatalogSnapshot::new(foods),
        exercises: CatalogSnapshot::new(exercises),
    }
}

pub fn service() -> PlanService {
    init_test_logging();
    PlanService::new(PlanEngine::default(), catalogs())
}

/// Write `contents` to a temporary file that lives as long as the handle
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
