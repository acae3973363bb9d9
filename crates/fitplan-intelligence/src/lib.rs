// ABOUTME: Plan generation engine for personalized meal plans and workout programmes
// ABOUTME: Target calculation, candidate ranking, budget allocation, scheduling and derived artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! The pipeline runs strictly in one direction:
//!
//! 1. [`targets`] derives energy, macro and intensity targets from the profile
//! 2. [`ranking`] filters and orders catalog candidates
//! 3. [`allocation`] splits daily calories and session minutes by fixed ratios
//! 4. [`schedule`] assembles dated meals and numbered sessions
//! 5. [`artifacts`] and [`recommendations`] derive shopping lists, progression and advice
//!
//! Everything is synchronous and free of I/O. The engine reads a shared
//! [`fitplan_core::models::CatalogSnapshot`] and allocates its own output, so
//! any number of requests may run against the same snapshot in parallel.

/// Time-budget allocator
pub mod allocation;
/// Derived-artifact generator
pub mod artifacts;
/// Planner configuration tables
pub mod config;
/// Learned-scorer feature vectors and hints
pub mod features;
/// Plan engine facade
pub mod planner;
/// Candidate ranker
pub mod ranking;
/// Recommendation text and profile insights
pub mod recommendations;
/// Schedule assembler
pub mod schedule;
/// Catalog search and filters
pub mod search;
/// Target calculator
pub mod targets;

pub use config::{ConfigError, PlannerConfig};
pub use features::{FeatureVector, ScoreHints};
pub use planner::PlanEngine;
pub use search::ExerciseFilter;
