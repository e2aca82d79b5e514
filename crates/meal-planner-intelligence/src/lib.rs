// ABOUTME: Meal recommendation engine for the personalised meal planner
// ABOUTME: Normalizes raw client input and ranks meals through fallback tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Planner Intelligence
//!
//! Control flow for one request:
//!
//! ```text
//! raw JSON fields -> normalizer -> MealQuery -> RecommendationEngine (reads MealTable)
//!                                            -> Recommendations + FiltersApplied
//! ```
//!
//! Nothing here performs I/O. The meal table is borrowed immutably, so any number of
//! requests may run the engine concurrently over one shared table.

/// BMI computation from the validated weight and height
pub mod body_metrics;

/// Raw request field normalization into a canonical `MealQuery`
pub mod normalizer;

/// Tiered filter, fallback, and ranking pipeline
pub mod recommendation_engine;

/// Title casing and substring disjunction matching
pub mod text;

pub use body_metrics::{BmiCategory, BodyMetrics};
pub use normalizer::{normalize_diet_preference, MealQuery, ValidationError};
pub use recommendation_engine::{
    FiltersApplied, RecommendationEngine, RecommendationError, RecommendationTier,
    Recommendations, REQUIRED_COLUMNS,
};
