// ABOUTME: Threshold-driven recommendation text for plans, and goal-driven profile insights
// ABOUTME: Plan lines are gated by numeric aggregates; boilerplate lines always come last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{
    FitnessGoal, FitnessLevel, MacroTargets, NutritionInsights, NutritionMetrics,
    NutritionProfile, Recommendation, SessionType, WorkoutInsights, WorkoutMetrics,
    WorkoutProfile, WorkoutSession,
};

use crate::config::planner::{RankingConfig, RecommendationConfig, TargetsConfig};
use crate::targets::{calculate_bmr, calculate_tdee};

/// Sessions per week suggested to beginners
const BEGINNER_WORKOUTS_PER_WEEK: u32 = 3;
/// Sessions per week suggested to everyone else
const TRAINED_WORKOUTS_PER_WEEK: u32 = 4;
/// Sessions per week assumed by the weekly estimate
const INSIGHT_SESSIONS_PER_WEEK: f64 = 3.0;

/// Recommendation lines for a meal plan summary
#[must_use]
pub fn nutrition_plan_recommendations(
    average_daily_calories: f64,
    macros: &MacroTargets,
    config: &RecommendationConfig,
) -> Vec<String> {
    let messages = &config.nutrition;
    let mut lines = Vec::new();
    if average_daily_calories < config.low_calorie_threshold {
        lines.push(messages.low_calories.clone());
    }
    if macros.protein_g < config.low_protein_threshold_g {
        lines.push(messages.low_protein.clone());
    }
    lines.push(messages.hydration.clone());
    lines.push(messages.local_foods.clone());
    lines
}

/// Calories burned over the whole programme
#[must_use]
pub fn total_burn(sessions: &[WorkoutSession]) -> f64 {
    sessions.iter().map(|session| session.total_calories).sum()
}

/// Nutrition lines attached to a workout plan
#[must_use]
pub fn workout_nutrition_recommendations(
    sessions: &[WorkoutSession],
    config: &RecommendationConfig,
) -> Vec<String> {
    let messages = &config.workout;
    let has = |kind: SessionType| sessions.iter().any(|session| session.session_type == kind);
    let mut lines = Vec::new();

    if total_burn(sessions) > config.high_burn_kcal {
        lines.push(messages.high_burn_protein.clone());
        lines.push(messages.high_burn_carbs.clone());
    }
    if has(SessionType::Cardio) {
        lines.push(messages.cardio_hydration.clone());
    }
    if has(SessionType::Strength) {
        lines.push(messages.strength_protein.clone());
    }
    lines.push(messages.local_foods.clone());
    lines
}

fn recommendation(
    kind: &str,
    title: &str,
    description: &str,
    confidence_score: f64,
    actionable_items: &[&str],
    local_context: &str,
) -> Recommendation {
    Recommendation {
        kind: kind.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        confidence_score,
        actionable_items: actionable_items.iter().map(|item| (*item).to_owned()).collect(),
        local_context: Some(local_context.to_owned()),
    }
}

/// Goal-driven nutrition strategy plus BMR, TDEE and BMI
#[must_use]
pub fn nutrition_insights(profile: &NutritionProfile, targets: &TargetsConfig) -> NutritionInsights {
    let person = &profile.person;
    let bmr = calculate_bmr(person, &targets.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &targets.activity_factors);

    let mut recommendations = Vec::new();
    if person.has_goal(FitnessGoal::WeightLoss) {
        recommendations.push(recommendation(
            "weight_loss",
            "Weight loss strategy",
            "Lose weight safely with a daily deficit of 300-500 calories.",
            0.85,
            &[
                "Reduce your calorie intake gradually",
                "Eat more protein",
                "Favor local vegetables",
                "Avoid sugary drinks",
            ],
            "Cook traditional dishes such as thieboudienne with less rice and more vegetables.",
        ));
    }
    if person.has_goal(FitnessGoal::MuscleGain) {
        recommendations.push(recommendation(
            "muscle_gain",
            "Muscle gain strategy",
            "Build muscle by raising your protein and calorie intake.",
            0.80,
            &[
                "Eat 1.6-2.2 g of protein per kg of body weight",
                "Add 200-300 calories per day",
                "Eat balanced meals every 3-4 hours",
                "Include complex carbohydrates",
            ],
            "Local fish such as thiof or capitaine is an excellent protein source.",
        ));
    }

    NutritionInsights {
        user_id: person.user_id.clone(),
        recommendations,
        calculated_metrics: NutritionMetrics {
            bmr,
            tdee,
            bmi: person.bmi(),
        },
    }
}

/// Goal-driven training strategy plus frequency and weekly burn estimates
///
/// The weekly estimate assumes three sessions at the default burn rate.
#[must_use]
pub fn workout_insights(profile: &WorkoutProfile, ranking: &RankingConfig) -> WorkoutInsights {
    let person = &profile.person;
    let mut recommendations = Vec::new();

    if person.has_goal(FitnessGoal::MuscleGain) {
        recommendations.push(recommendation(
            "muscle_gain",
            "Muscle gain programme",
            "Favor compound lifts and increase loads progressively.",
            0.85,
            &[
                "Train strength 3-4 times per week",
                "Prioritize compound exercises (squats, deadlifts, bench press)",
                "Increase loads progressively",
                "Rest 48-72h between sessions for the same muscle group",
            ],
            "Bodyweight exercises such as push-ups and pull-ups need no expensive equipment.",
        ));
    }
    if person.has_goal(FitnessGoal::WeightLoss) {
        recommendations.push(recommendation(
            "weight_loss",
            "Weight loss programme",
            "Combine cardio and strength work to maximize fat loss.",
            0.80,
            &[
                "Train 3-5 times per week",
                "Combine cardio and strength",
                "Keep a moderate to high intensity",
                "Watch your diet",
            ],
            "Brisk walking and running are free. Take the stairs instead of the lift.",
        ));
    }
    if person.has_goal(FitnessGoal::Endurance) {
        recommendations.push(recommendation(
            "endurance",
            "Endurance programme",
            "Build cardiovascular endurance with progressive sessions.",
            0.75,
            &[
                "Start with 20-30 minutes of cardio",
                "Increase the duration progressively",
                "Vary the activities",
                "Include recovery sessions",
            ],
            "Swimming builds endurance and keeps you cool in hot weather.",
        ));
    }

    let beginner = profile.fitness_level == Some(FitnessLevel::Beginner);
    let recommended_workouts_per_week = if beginner {
        BEGINNER_WORKOUTS_PER_WEEK
    } else {
        TRAINED_WORKOUTS_PER_WEEK
    };

    WorkoutInsights {
        user_id: person.user_id.clone(),
        recommendations,
        calculated_metrics: WorkoutMetrics {
            recommended_workouts_per_week,
            recommended_session_minutes: profile.session_minutes,
            estimated_weekly_calories: f64::from(profile.session_minutes)
                * ranking.default_calories_per_minute
                * INSIGHT_SESSIONS_PER_WEEK,
        },
    }
}
