// ABOUTME: Fitplan CLI - command-line front end for plan generation and catalog browsing
// ABOUTME: Reads profile JSON files, prints plans, insights and catalog results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//!
//! Usage:
//! ```bash
//! # Seven-day meal plan from a nutrition profile
//! fitplan-cli meal-plan --profile profile.json --days 7
//!
//! # Lunch and dinner only, any origin
//! fitplan-cli meal-plan --profile profile.json --meal-types lunch,dinner --no-local
//!
//! # Eight-week programme, four sessions per week
//! fitplan-cli workout-plan --profile athlete.json --weeks 8 --per-week 4
//!
//! # Goal-driven advice
//! fitplan-cli insights nutrition --profile profile.json
//!
//! # Browse the catalogs
//! fitplan-cli foods search poisson
//! fitplan-cli exercises list --difficulty beginner --muscle-group legs
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitplan::config::ServerConfig;
use fitplan::logging::LoggingConfig;
use fitplan::service::PlanService;
use tracing::{debug, info};

use commands::catalog::{ExercisesCommand, FoodsCommand};
use commands::insights::InsightsCommand;
use commands::plan::{MealPlanArgs, WorkoutPlanArgs};

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan meal and workout plan generator",
    long_about = "Generates personalized meal plans and workout programmes from a profile file and the configured food and exercise catalogs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Food catalog override (JSON array)
    #[arg(long, global = true)]
    food_catalog: Option<PathBuf>,

    /// Exercise catalog override (JSON array)
    #[arg(long, global = true)]
    exercise_catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a multi-day meal plan
    MealPlan(MealPlanArgs),

    /// Generate a multi-week workout programme
    WorkoutPlan(WorkoutPlanArgs),

    /// Goal-driven advice and body metrics
    Insights {
        #[command(subcommand)]
        kind: InsightsCommand,
    },

    /// Browse the food catalog
    Foods {
        #[command(subcommand)]
        action: FoodsCommand,
    },

    /// Browse the exercise catalog
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = ServerConfig::from_env()?;
    if cli.food_catalog.is_some() {
        config.food_catalog_path = cli.food_catalog;
    }
    if cli.exercise_catalog.is_some() {
        config.exercise_catalog_path = cli.exercise_catalog;
    }
    debug!("{}", config.summary());

    let service = PlanService::from_config(&config)?;
    info!(
        foods = service.catalogs().foods.len(),
        exercises = service.catalogs().exercises.len(),
        "Plan service ready"
    );

    match cli.command {
        Command::MealPlan(args) => commands::plan::meal_plan(&service, &args).await?,
        Command::WorkoutPlan(args) => commands::plan::workout_plan(&service, &args).await?,
        Command::Insights { kind } => commands::insights::run(&service, &kind)?,
        Command::Foods { action } => commands::catalog::foods(&service, &action)?,
        Command::Exercises { action } => commands::catalog::exercises(&service, &action)?,
    }

    Ok(())
}
