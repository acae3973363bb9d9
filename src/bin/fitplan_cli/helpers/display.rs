// ABOUTME: Output formatting helpers for fitplan-cli
// ABOUTME: Every command prints one pretty JSON document on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}
