// ABOUTME: Display-ready projection of a matched meal record
// ABOUTME: Serialized as one entry of the meal plan response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recommended meal as returned to clients
///
/// `meal` and `diet_type` are title cased; numeric fields are copied from the
/// dataset unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecommendation {
    /// Meal name
    pub meal: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fats in grams
    pub fats: f64,
    /// Diet category label
    pub diet_type: String,
}
