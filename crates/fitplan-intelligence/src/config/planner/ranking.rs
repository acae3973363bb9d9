// ABOUTME: Candidate ranker configuration: result limits, portion cap, exercise defaults
// ABOUTME: Per-locale meal keyword tables used for food relevance scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{Locale, MealType, RepRange};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Candidate ranker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Candidates returned by a general ranking query
    pub top_n: usize,
    /// Foods kept when placing candidates into a meal
    pub foods_per_meal: usize,
    /// Exercises kept per session phase
    pub exercises_per_phase: usize,
    /// Largest portion ever suggested (grams)
    pub max_portion_g: f64,
    /// Sets range when an exercise has none for the level
    pub default_sets: RepRange,
    /// Reps range when an exercise has none for the level
    pub default_reps: RepRange,
    /// Rest between sets when the exercise declares none
    pub default_rest_seconds: u32,
    /// Time under tension per rep
    pub seconds_per_rep: f64,
    /// Burn rate when the exercise declares none
    pub default_calories_per_minute: f64,
    /// Meal keywords per locale
    pub meal_keywords: MealKeywordTables,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            foods_per_meal: 3,
            exercises_per_phase: 10,
            max_portion_g: 300.0,
            default_sets: RepRange(3, 4),
            default_reps: RepRange(8, 12),
            default_rest_seconds: 90,
            seconds_per_rep: 3.0,
            default_calories_per_minute: 5.0,
            meal_keywords: MealKeywordTables::default(),
        }
    }
}

impl RankingConfig {
    /// Validate limits and defaults
    ///
    /// # Errors
    ///
    /// Returns an error when a limit is zero or a default range is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidRange("ranking.top_n must be at least 1"));
        }
        if self.max_portion_g <= 0.0 {
            return Err(ConfigError::InvalidRange("ranking.max_portion_g must be positive"));
        }
        if self.default_sets.0 > self.default_sets.1 || self.default_reps.0 > self.default_reps.1
        {
            return Err(ConfigError::InvalidRange(
                "ranking default ranges must be [min, max]",
            ));
        }
        Ok(())
    }
}

/// Keywords that make a food relevant to each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealKeywords {
    /// Breakfast keywords
    pub breakfast: Vec<String>,
    /// Lunch keywords
    pub lunch: Vec<String>,
    /// Dinner keywords
    pub dinner: Vec<String>,
    /// Snack keywords
    pub snack: Vec<String>,
}

impl MealKeywords {
    fn from_lists(lists: [&[&str]; 4]) -> Self {
        let owned = |list: &[&str]| list.iter().map(|kw| (*kw).to_owned()).collect();
        Self {
            breakfast: owned(lists[0]),
            lunch: owned(lists[1]),
            dinner: owned(lists[2]),
            snack: owned(lists[3]),
        }
    }

    /// Keywords for a meal slot; `Other` has none
    #[must_use]
    pub fn for_meal(&self, meal_type: MealType) -> &[String] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
            MealType::Other => &[],
        }
    }
}

/// Keyword tables for every supported locale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealKeywordTables {
    /// French keywords
    pub fr: MealKeywords,
    /// English keywords
    pub en: MealKeywords,
    /// Wolof keywords (Wolof names fall back to French)
    pub wo: MealKeywords,
}

impl MealKeywordTables {
    /// Table for `locale`
    #[must_use]
    pub const fn for_locale(&self, locale: Locale) -> &MealKeywords {
        match locale {
            Locale::Fr => &self.fr,
            Locale::En => &self.en,
            Locale::Wo => &self.wo,
        }
    }
}

impl Default for MealKeywordTables {
    fn default() -> Self {
        let french = [
            &["céréale", "lait", "pain", "œuf", "fruit"][..],
            &["riz", "poisson", "viande", "légume", "sauce"][..],
            &["poisson", "viande", "légume", "soupe"][..],
            &["fruit", "noix", "yogourt", "pain"][..],
        ];
        Self {
            fr: MealKeywords::from_lists(french),
            en: MealKeywords::from_lists([
                &["cereal", "milk", "bread", "egg", "fruit"],
                &["rice", "fish", "meat", "vegetable", "sauce"],
                &["fish", "meat", "vegetable", "soup"],
                &["fruit", "nut", "yogurt", "bread"],
            ]),
            wo: MealKeywords::from_lists(french),
        }
    }
}
