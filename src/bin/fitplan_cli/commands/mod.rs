// ABOUTME: Re-exports command modules for fitplan-cli
// ABOUTME: Plan generation, insights and catalog browsing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

pub mod catalog;
pub mod insights;
pub mod plan;
