// ABOUTME: Core types and constants for the personalised meal planner
// ABOUTME: Foundation crate with error handling, the meal data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Planner Core
//!
//! Foundation crate providing shared types and constants for the meal planner.
//! Both the recommendation engine and the HTTP server depend on it, so it is kept
//! free of I/O and async code.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Request field names, response messages, and ranking limits
//! - **models**: Meal records, the in-memory meal table, and recommendation output

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MealRecord`, `MealTable`, `DietCategory`, `MealRecommendation`)
pub mod models;
