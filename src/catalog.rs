// ABOUTME: Catalog loading boundary: reads JSON catalogs into shared read-only snapshots
// ABOUTME: Missing files degrade to an unavailable catalog; unparsable files are start-up errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{CatalogSnapshot, Exercise, FoodItem};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// Load a catalog stored as a JSON array
///
/// No path, or a path that does not exist, yields an unavailable catalog.
///
/// # Errors
///
/// Returns a storage error if the file exists but cannot be read, or a
/// serialization error if it is not a JSON array of `T`
pub fn load_catalog<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<CatalogSnapshot<T>> {
    let Some(path) = path else {
        warn!("No catalog path configured, catalog unavailable");
        return Ok(CatalogSnapshot::unavailable());
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Catalog file not found, catalog unavailable");
            return Ok(CatalogSnapshot::unavailable());
        }
        Err(e) => {
            return Err(
                AppError::storage(format!("Cannot read catalog {}", path.display())).with_source(e),
            );
        }
    };

    let items: Vec<T> = serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid catalog {}: {e}", path.display())).with_source(e)
    })?;

    info!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(CatalogSnapshot::new(items))
}

/// Both reference catalogs used by the planner
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    /// Food reference catalog
    pub foods: CatalogSnapshot<FoodItem>,
    /// Exercise reference catalog
    pub exercises: CatalogSnapshot<Exercise>,
}

impl Catalogs {
    /// Load both catalogs
    ///
    /// # Errors
    ///
    /// Returns the first catalog that exists but cannot be parsed
    pub fn load(foods: Option<&Path>, exercises: Option<&Path>) -> AppResult<Self> {
        Ok(Self {
            foods: load_catalog(foods)?,
            exercises: load_catalog(exercises)?,
        })
    }
}
