// ABOUTME: Progression plan configuration: weekly increments and deload scheduling
// ABOUTME: Linear intensity/volume growth with a periodic reduced-load week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Progression curve settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Intensity increase per week (5%)
    pub intensity_increase: f64,
    /// Volume increase per week (10%)
    pub volume_increase: f64,
    /// Every Nth week is a deload week
    pub deload_week: u32,
    /// Intensity factor applied on deload weeks
    pub deload_intensity_factor: f64,
    /// Volume factor applied on deload weeks
    pub deload_volume_factor: f64,
    /// Label for regular weeks
    pub progression_focus: String,
    /// Label for deload weeks
    pub deload_focus: String,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            intensity_increase: 0.05,
            volume_increase: 0.10,
            deload_week: 4,
            deload_intensity_factor: 0.8,
            deload_volume_factor: 0.7,
            progression_focus: "Progressive overload".to_owned(),
            deload_focus: "Recovery".to_owned(),
        }
    }
}

impl ProgressionConfig {
    /// Validate the deload period and factors
    ///
    /// # Errors
    ///
    /// Returns an error when the deload period is zero or a factor is outside (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deload_week == 0 {
            return Err(ConfigError::InvalidRange("progression.deload_week must be at least 1"));
        }
        let factors = [self.deload_intensity_factor, self.deload_volume_factor];
        if factors.iter().any(|factor| !(*factor > 0.0 && *factor <= 1.0)) {
            return Err(ConfigError::InvalidRange(
                "deload factors must be within (0, 1]",
            ));
        }
        Ok(())
    }
}
