// ABOUTME: Input helpers for fitplan-cli
// ABOUTME: Profile file loading and strict parsers for enum-valued flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fitplan::models::{FitnessLevel, MealType};
use serde::de::DeserializeOwned;

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Meal type flag value; unknown names are rejected
pub fn parse_meal_type(value: &str) -> Result<MealType, String> {
    match MealType::from_str_lossy(value) {
        MealType::Other => Err(format!(
            "unknown meal type '{value}' (expected breakfast, lunch, dinner or snack)"
        )),
        meal => Ok(meal),
    }
}

/// Difficulty flag value; unknown names are rejected
pub fn parse_level(value: &str) -> Result<FitnessLevel, String> {
    FitnessLevel::from_str_lossy(value).ok_or_else(|| {
        format!("unknown difficulty '{value}' (expected beginner, intermediate or advanced)")
    })
}
