// ABOUTME: Main library entry point for the fitplan service
// ABOUTME: Start-up configuration, logging, catalog loading, learned scoring and the plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Personalized meal plans and workout programmes generated from a user
//! profile and two read-only reference catalogs.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: errors, constants and every input/output record
//! - **`fitplan-intelligence`**: the synchronous, deterministic plan engine
//! - **this crate**: the process around the engine, i.e. environment
//!   configuration, logging, catalog files, the optional learned scorer and
//!   the async [`service::PlanService`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::config::ServerConfig;
//! use fitplan::service::PlanService;
//! use fitplan_core::models::{MealPlanRequest, NutritionProfile};
//!
//! # async fn run(profile: NutritionProfile) -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let service = PlanService::from_config(&config)?;
//! let plan = service.meal_plan(&profile, &MealPlanRequest::default()).await?;
//! println!("{} meals, {:.0} {}", plan.meals.len(), plan.total_cost, plan.currency);
//! # Ok(())
//! # }
//! ```

/// Catalog loading boundary
pub mod catalog;

/// Start-up configuration
pub mod config;

/// Process-level constants
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Optional learned scorer with a deadline
pub mod scoring;

/// Plan service facade
pub mod service;

pub use fitplan_core::errors;
pub use fitplan_core::models;
