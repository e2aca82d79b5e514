// ABOUTME: Core data models for meal records, the meal table, and recommendations
// ABOUTME: Shared by the dataset loader, the recommendation engine, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Everything here is immutable once built: the meal table is loaded a single time
//! at startup and then only read.

mod diet;
mod meal;
mod recommendation;
mod table;

pub use diet::DietCategory;
pub use meal::{MacroNutrients, MealColumn, MealRecord};
pub use recommendation::MealRecommendation;
pub use table::MealTable;
