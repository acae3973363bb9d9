// ABOUTME: Common benchmark utilities and fixtures for plan generation
// ABOUTME: Provides synthetic catalogs and reference profiles for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
