// ABOUTME: Derived-artifact tests: shopping aggregation and cost, summary arithmetic, progression
// ABOUTME: Exercises deficit reconversion, zero-day guards and deload scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitplan_core::models::{FoodSuggestion, MacroTargets, Meal, MealType};
use fitplan_intelligence::artifacts::{
    average_daily_calories, nutrition_summary, progression_plan, shopping_list, total_cost,
};
use fitplan_intelligence::config::planner::{
    CostConfig, EnergyDensityConfig, ProgressionConfig, RecommendationConfig,
};

mod common;

fn food(name: &str, grams: f64, calories: f64) -> FoodSuggestion {
    FoodSuggestion {
        food_id: name.to_lowercase(),
        name: name.to_owned(),
        category: "plat".to_owned(),
        suggested_portion_g: grams,
        estimated_calories: calories,
        relevance_score: 0,
    }
}

fn meal(date: NaiveDate, meal_type: MealType, foods: Vec<FoodSuggestion>) -> Meal {
    let total_calories = foods.iter().map(|food| food.estimated_calories).sum();
    Meal {
        date,
        meal_type,
        target_calories: 500.0,
        foods,
        total_calories,
    }
}

fn sample_meals() -> Vec<Meal> {
    let day_one = common::start_date();
    let day_two = day_one.succ_opt().unwrap();
    vec![
        meal(
            day_one,
            MealType::Lunch,
            vec![food("Riz au poisson", 300.0, 450.0), food("Mangue", 150.0, 150.0)],
        ),
        meal(day_one, MealType::Dinner, vec![food("Poisson grillé", 200.0, 400.0)]),
        meal(day_two, MealType::Lunch, vec![food("Riz au poisson", 300.0, 800.0)]),
    ]
}

#[test]
fn test_shopping_list_aggregates_by_name_in_first_seen_order() {
    let list = shopping_list(&sample_meals(), &CostConfig::default());

    let names: Vec<&str> = list.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Riz au poisson", "Mangue", "Poisson grillé"]);
    assert!((list[0].total_grams - 600.0).abs() < 1e-9);
}

#[test]
fn test_cost_uses_first_matching_rate_on_first_portion() {
    let list = shopping_list(&sample_meals(), &CostConfig::default());

    // "riz" is listed before "poisson"; only the first 0.3 kg is priced at 500
    assert!((list[0].total_grams - 600.0).abs() < 1e-9);
    assert!((list[0].estimated_cost - 150.0).abs() < 1e-9);
    // no match: default 1000 per kg
    assert!((list[1].estimated_cost - 150.0).abs() < 1e-9);
    // "poisson": 0.2 kg at 2000
    assert!((list[2].estimated_cost - 400.0).abs() < 1e-9);
    assert!((total_cost(&list) - 700.0).abs() < 1e-9);
}

#[test]
fn test_repeated_food_adds_grams_but_not_cost() {
    let day_one = common::start_date();
    let day_two = day_one.succ_opt().unwrap();
    let meals = vec![
        meal(day_one, MealType::Lunch, vec![food("Riz", 200.0, 260.0)]),
        meal(day_two, MealType::Lunch, vec![food("Riz", 200.0, 260.0)]),
    ];
    let list = shopping_list(&meals, &CostConfig::default());

    assert_eq!(list.len(), 1);
    assert!((list[0].total_grams - 400.0).abs() < 1e-9);
    assert!((list[0].estimated_cost - 100.0).abs() < 1e-9);
}

#[test]
fn test_average_divides_by_distinct_dates() {
    // 1000 + 800 realized over two dates
    assert!((average_daily_calories(&sample_meals()) - 900.0).abs() < 1e-9);
    assert!(average_daily_calories(&[]).abs() < f64::EPSILON);
}

#[test]
fn test_summary_deficit_against_reconverted_macros() {
    let macros = MacroTargets {
        protein_g: 100,
        carbs_g: 200,
        fat_g: 50,
    };
    let config = RecommendationConfig::default();
    let summary = nutrition_summary(
        &sample_meals(),
        macros,
        &EnergyDensityConfig::default(),
        &config,
    );

    assert!((summary.target_calories - 1650.0).abs() < 1e-9);
    assert!((summary.calorie_deficit - 750.0).abs() < 1e-9);
    assert_eq!(
        summary.recommendations,
        vec![
            config.nutrition.low_calories.clone(),
            config.nutrition.hydration.clone(),
            config.nutrition.local_foods.clone(),
        ]
    );
}

#[test]
fn test_summary_for_empty_schedule() {
    let macros = MacroTargets {
        protein_g: 60,
        carbs_g: 100,
        fat_g: 20,
    };
    let config = RecommendationConfig::default();
    let summary = nutrition_summary(&[], macros, &EnergyDensityConfig::default(), &config);

    assert!(summary.average_daily_calories.abs() < f64::EPSILON);
    assert!((summary.calorie_deficit - summary.target_calories).abs() < 1e-9);
    // low intake and low protein lines, then boilerplate
    assert_eq!(summary.recommendations.len(), 4);
    assert_eq!(summary.recommendations[1], config.nutrition.low_protein);
    assert_eq!(
        summary.recommendations.last(),
        Some(&config.nutrition.local_foods)
    );
}

#[test]
fn test_deload_every_fourth_week() {
    let plan = progression_plan(12, &ProgressionConfig::default());

    let deloads: Vec<u32> = plan
        .weeks
        .iter()
        .filter(|week| week.is_deload)
        .map(|week| week.week_number)
        .collect();
    assert_eq!(deloads, vec![4, 8, 12]);
    assert_eq!(plan.weeks[3].focus, "Recovery");
    assert_eq!(plan.weeks[0].focus, "Progressive overload");
}

#[test]
fn test_progression_multipliers() {
    let plan = progression_plan(5, &ProgressionConfig::default());

    assert!((plan.weeks[0].intensity_multiplier - 1.0).abs() < 1e-9);
    assert!((plan.weeks[1].intensity_multiplier - 1.05).abs() < 1e-9);
    assert!((plan.weeks[1].volume_multiplier - 1.1).abs() < 1e-9);
    // week 4: linear growth then deload reduction
    assert!((plan.weeks[3].intensity_multiplier - 1.15 * 0.8).abs() < 1e-9);
    assert!((plan.weeks[3].volume_multiplier - 1.3 * 0.7).abs() < 1e-9);
    assert!((plan.weeks[4].intensity_multiplier - 1.2).abs() < 1e-9);
    assert!(progression_plan(0, &ProgressionConfig::default()).weeks.is_empty());
}
