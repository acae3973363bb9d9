// ABOUTME: Helper modules for fitplan-cli
// ABOUTME: Input parsing and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

pub mod display;
pub mod input;
