// ABOUTME: Insight commands for fitplan-cli
// ABOUTME: Goal-driven nutrition or training advice for a profile file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use fitplan::models::{NutritionProfile, WorkoutProfile};
use fitplan::service::PlanService;

use crate::helpers::display::print_json;
use crate::helpers::input::read_json;

#[non_exhaustive]
#[derive(Subcommand)]
pub enum InsightsCommand {
    /// Nutrition strategy with BMR, TDEE and BMI
    Nutrition {
        /// Nutrition profile (JSON file)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Training strategy with frequency and weekly burn estimates
    Workout {
        /// Workout profile (JSON file)
        #[arg(long)]
        profile: PathBuf,
    },
}

/// Print insights for the selected profile kind
pub fn run(service: &PlanService, kind: &InsightsCommand) -> Result<()> {
    match kind {
        InsightsCommand::Nutrition { profile } => {
            let profile: NutritionProfile = read_json(profile)?;
            print_json(&service.nutrition_insights(&profile)?)
        }
        InsightsCommand::Workout { profile } => {
            let profile: WorkoutProfile = read_json(profile)?;
            print_json(&service.workout_insights(&profile)?)
        }
    }
}
