// ABOUTME: Catalog browsing commands for fitplan-cli
// ABOUTME: Food search and local listing; exercise search and attribute filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use clap::Subcommand;
use fitplan::models::FitnessLevel;
use fitplan::service::PlanService;
use fitplan_intelligence::ExerciseFilter;
use tracing::warn;

use crate::helpers::display::print_json;
use crate::helpers::input::parse_level;

#[non_exhaustive]
#[derive(Subcommand)]
pub enum FoodsCommand {
    /// Foods whose names or category contain the query
    Search {
        /// Text to look for (any language)
        query: String,

        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Locally produced foods
    Local {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
pub enum ExercisesCommand {
    /// Exercises whose names, category or muscle groups contain the query
    Search {
        /// Text to look for (any language)
        query: String,

        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Exercises matching every given attribute
    List {
        /// Exact category (strength, cardio, flexibility)
        #[arg(long)]
        category: Option<String>,

        /// Exact difficulty
        #[arg(long, value_parser = parse_level)]
        difficulty: Option<FitnessLevel>,

        /// Muscle group worked
        #[arg(long)]
        muscle_group: Option<String>,
    },
}

/// Run a food catalog command
pub fn foods(service: &PlanService, action: &FoodsCommand) -> Result<()> {
    if !service.catalogs().foods.is_available() {
        warn!("Food catalog unavailable; set FITPLAN_FOOD_CATALOG or --food-catalog");
    }
    match action {
        FoodsCommand::Search { query, limit } => print_json(&service.search_foods(query, *limit)),
        FoodsCommand::Local { category } => {
            print_json(&service.local_foods(category.as_deref()))
        }
    }
}

/// Run an exercise catalog command
pub fn exercises(service: &PlanService, action: &ExercisesCommand) -> Result<()> {
    if !service.catalogs().exercises.is_available() {
        warn!("Exercise catalog unavailable; set FITPLAN_EXERCISE_CATALOG or --exercise-catalog");
    }
    match action {
        ExercisesCommand::Search { query, limit } => {
            print_json(&service.search_exercises(query, *limit))
        }
        ExercisesCommand::List {
            category,
            difficulty,
            muscle_group,
        } => print_json(&service.filter_exercises(&ExerciseFilter {
            category: category.clone(),
            difficulty: *difficulty,
            muscle_group: muscle_group.clone(),
        })),
    }
}
