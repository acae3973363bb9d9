// ABOUTME: Plan service integration tests
// ABOUTME: Validation at the boundary, start-date defaulting, filters, search and parallel runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Local;
use fitplan::catalog::Catalogs;
use fitplan::models::{
    ActivityLevel, FitnessLevel, MealPlanRequest, MealType, NutritionProfile, WorkoutPlanRequest,
    WorkoutProfile,
};
use fitplan::service::PlanService;
use fitplan_core::errors::ErrorCode;
use fitplan_intelligence::{ExerciseFilter, PlanEngine};
use serde_json::json;

mod common;

fn request(days: u32) -> MealPlanRequest {
    MealPlanRequest {
        days,
        start_date: Some(common::start_date()),
        ..MealPlanRequest::default()
    }
}

#[tokio::test]
async fn test_meal_plan_respects_allergies_and_locality() {
    let service = common::service();
    let plan = service
        .meal_plan(&common::nutrition_profile(), &request(3))
        .await
        .unwrap();

    assert_eq!(plan.meals.len(), 12);
    assert_eq!(plan.start_date, common::start_date());
    let picked: Vec<&str> = plan
        .meals
        .iter()
        .flat_map(|meal| meal.foods.iter().map(|food| food.food_id.as_str()))
        .collect();
    assert!(!picked.is_empty());
    assert!(!picked.contains(&"mafe"));
    assert!(!picked.contains(&"croissant"));

    let lunch = plan
        .meals
        .iter()
        .find(|meal| meal.meal_type == MealType::Lunch)
        .unwrap();
    assert_eq!(lunch.foods[0].food_id, "thieboudienne");
    assert_eq!(lunch.foods[0].name, "Riz au poisson");
}

#[tokio::test]
async fn test_meal_plan_without_locality_filter() {
    let service = common::service();
    let request = MealPlanRequest {
        include_local: false,
        meal_types: vec![MealType::Breakfast],
        ..request(1)
    };
    let plan = service
        .meal_plan(&common::nutrition_profile(), &request)
        .await
        .unwrap();

    let ids: Vec<&str> = plan.meals[0]
        .foods
        .iter()
        .map(|food| food.food_id.as_str())
        .collect();
    assert_eq!(ids, vec!["thieboudienne", "bouillie_mil", "croissant"]);
}

#[tokio::test]
async fn test_missing_start_date_defaults_to_today() {
    let service = common::service();
    let before = Local::now().date_naive();
    let plan = service
        .meal_plan(
            &common::nutrition_profile(),
            &MealPlanRequest {
                days: 1,
                ..MealPlanRequest::default()
            },
        )
        .await
        .unwrap();
    let after = Local::now().date_naive();

    assert!(plan.start_date == before || plan.start_date == after);
    assert_eq!(plan.end_date, plan.start_date);
}

#[tokio::test]
async fn test_invalid_inputs_rejected_before_engine() {
    let service = common::service();

    let mut profile = common::nutrition_profile();
    profile.person.age = 0;
    let err = service.meal_plan(&profile, &request(3)).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = service
        .meal_plan(&common::nutrition_profile(), &request(400))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let duplicated = MealPlanRequest {
        meal_types: vec![MealType::Lunch, MealType::Lunch],
        ..request(1)
    };
    assert!(service
        .meal_plan(&common::nutrition_profile(), &duplicated)
        .await
        .is_err());

    let mut athlete = common::workout_profile();
    athlete.session_minutes = 0;
    assert!(service
        .workout_plan(&athlete, &WorkoutPlanRequest::default())
        .await
        .is_err());

    let mut goalless = common::nutrition_profile();
    goalless.person.goals.clear();
    let err = service.nutrition_insights(&goalless).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_workout_plan_rotates_default_focus() {
    let service = common::service();
    let request = WorkoutPlanRequest {
        duration_weeks: 2,
        workouts_per_week: 3,
        start_date: Some(common::start_date()),
        ..WorkoutPlanRequest::default()
    };
    let plan = service
        .workout_plan(&common::workout_profile(), &request)
        .await
        .unwrap();

    assert_eq!(plan.sessions.len(), 6);
    let targets: Vec<&str> = plan
        .sessions
        .iter()
        .map(|session| session.target_muscle_groups[0].as_str())
        .collect();
    assert_eq!(
        targets,
        vec!["chest", "full_body", "legs", "shoulders", "full_body", "chest"]
    );

    let legs = &plan.sessions[2];
    assert_eq!(legs.id, "w1-s3");
    assert!(legs
        .exercises
        .iter()
        .any(|exercise| exercise.exercise_id == "goblet_squat"));
    assert_eq!(legs.equipment_needed, vec!["dumbbells".to_owned()]);

    // barbell work is out of reach with dumbbells only
    assert!(plan.sessions[3].exercises.is_empty());
    assert_eq!(plan.equipment_requirements, vec!["dumbbells".to_owned()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_requests_share_catalogs() {
    let service = common::service();
    let profile = common::nutrition_profile();
    let expected = service.meal_plan(&profile, &request(7)).await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let profile = profile.clone();
            tokio::spawn(async move { service.meal_plan(&profile, &request(7)).await })
        })
        .collect();

    for handle in handles {
        let plan = handle.await.unwrap().unwrap();
        assert_eq!(plan, expected);
    }
}

#[tokio::test]
async fn test_unavailable_catalogs_degrade_gracefully() {
    common::init_test_logging();
    let service = PlanService::new(PlanEngine::default(), Catalogs::default());

    let plan = service
        .meal_plan(&common::nutrition_profile(), &request(2))
        .await
        .unwrap();
    assert_eq!(plan.meals.len(), 8);
    assert!(plan.shopping_list.is_empty());

    let programme = service
        .workout_plan(&common::workout_profile(), &WorkoutPlanRequest::default())
        .await
        .unwrap();
    assert_eq!(programme.sessions.len(), 12);
    assert!(programme.equipment_requirements.is_empty());

    assert!(service.search_foods("riz", None).is_empty());
    assert!(service
        .filter_exercises(&ExerciseFilter::default())
        .is_empty());
}

#[test]
fn test_catalog_browsing() {
    let service = common::service();

    let bissap = service.search_foods("BISSAP", None);
    assert_eq!(bissap.len(), 1);
    assert_eq!(bissap[0].id, "bissap");
    assert_eq!(service.search_foods("dieune", None)[0].id, "thieboudienne");
    assert_eq!(service.search_foods("plat", Some(1)).len(), 1);

    assert_eq!(service.local_foods(None).len(), 5);
    assert_eq!(service.local_foods(Some("plat")).len(), 2);

    assert_eq!(service.search_exercises("marche", None)[0].id, "marche_rapide");
    let legs = service.filter_exercises(&ExerciseFilter {
        muscle_group: Some("legs".to_owned()),
        ..ExerciseFilter::default()
    });
    let ids: Vec<&str> = legs.iter().map(|exercise| exercise.id.as_str()).collect();
    assert_eq!(ids, vec!["goblet_squat", "marche_rapide"]);
}

#[test]
fn test_insights_through_service() {
    let service = common::service();
    let nutrition = service
        .nutrition_insights(&common::nutrition_profile())
        .unwrap();
    assert_eq!(nutrition.user_id, "awa");
    assert_eq!(nutrition.recommendations[0].kind, "weight_loss");

    let workout = service.workout_insights(&common::workout_profile()).unwrap();
    assert_eq!(workout.calculated_metrics.recommended_workouts_per_week, 3);
    assert_eq!(workout.calculated_metrics.recommended_session_minutes, 45);
}

#[tokio::test]
async fn test_free_form_profile_labels_reach_defaults() {
    let service = common::service();

    let mut nutrition = common::nutrition_profile_json();
    nutrition["gender"] = json!("Female");
    nutrition["activity_level"] = json!("couch");
    let nutrition: NutritionProfile = serde_json::from_value(nutrition).unwrap();
    assert_eq!(nutrition.activity_level, ActivityLevel::Sedentary);
    let insights = service.nutrition_insights(&nutrition).unwrap();
    let metrics = insights.calculated_metrics;
    assert!((metrics.tdee - metrics.bmr * 1.2).abs() < 1e-9);

    let workout: WorkoutProfile = serde_json::from_value(json!({
        "user_id": "moussa",
        "age": 35,
        "sex": "MALE",
        "height_cm": 180.0,
        "weight_kg": 82.0,
        "goals": ["muscle_gain"],
        "fitness_level": "elite",
        "available_equipment": ["dumbbells"],
        "time_availability": 45
    }))
    .unwrap();
    assert_eq!(workout.fitness_level, None);

    let request = WorkoutPlanRequest {
        start_date: Some(common::start_date()),
        ..WorkoutPlanRequest::default()
    };
    let plan = service.workout_plan(&workout, &request).await.unwrap();

    // unrated base 0.7, muscle gain multiplier 1.1
    assert!((plan.intensity.overall - 0.77).abs() < 1e-9);
    assert!(plan
        .sessions
        .iter()
        .all(|session| session.difficulty == FitnessLevel::Intermediate));
}
