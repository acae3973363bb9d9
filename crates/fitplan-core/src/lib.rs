// ABOUTME: Core types and constants for the Fitplan plan generation engine
// ABOUTME: Foundation crate with error handling, constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the Fitplan
//! engine. It changes infrequently, which keeps incremental builds of the
//! engine and binary crates fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, validation limits, catalog tags
//! - **models**: Profiles, catalog items, requests, plans, insights

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Input and output records
pub mod models;
