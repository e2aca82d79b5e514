// ABOUTME: Constants for request fields, response messages, and ranking limits
// ABOUTME: Pure data constants shared by the recommendation engine and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Request body field names for the meal plan endpoint
pub mod request_fields {
    /// Body weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Height in centimetres
    pub const HEIGHT: &str = "height";
    /// Diet preference (vegetarian, vegan, non-vegetarian, ...)
    pub const DIETARY_RESTRICTIONS: &str = "dietary_restrictions";
    /// Calorie ceiling per meal
    pub const MAX_CALORIES: &str = "max_calories";
    /// Health conditions to match against
    pub const DISEASES: &str = "diseases";
    /// Current medications
    pub const MEDICATIONS: &str = "medications";
    /// Food allergies to exclude
    pub const ALLERGIES: &str = "allergies";

    /// Alternate key accepted for `diseases`
    pub const DISEASES_ALIAS: &str = "Health Conditions";
    /// Alternate key accepted for `medications`
    pub const MEDICATIONS_ALIAS: &str = "Current Medications";
    /// Alternate key accepted for `allergies`
    pub const ALLERGIES_ALIAS: &str = "Food allergies";

    /// Fields that must be present and non-empty, in the order they are checked
    pub const REQUIRED: [&str; 7] = [
        WEIGHT,
        HEIGHT,
        DIETARY_RESTRICTIONS,
        MAX_CALORIES,
        DISEASES,
        MEDICATIONS,
        ALLERGIES,
    ];

    /// Alternate key for a canonical field name, if it has one
    #[must_use]
    pub fn alias_for(field: &str) -> Option<&'static str> {
        match field {
            DISEASES => Some(DISEASES_ALIAS),
            MEDICATIONS => Some(MEDICATIONS_ALIAS),
            ALLERGIES => Some(ALLERGIES_ALIAS),
            _ => None,
        }
    }
}

/// Messages returned to clients
pub mod messages {
    /// Returned when any of weight, height or `max_calories` is not numeric
    pub const INVALID_NUMERIC_INPUT: &str = "Invalid input for weight, height, or max_calories";
    /// Returned when the request body is not a JSON object
    pub const INVALID_BODY: &str = "Request body must be a JSON object";
    /// Returned when the dataset lacks a required column
    pub const DATA_CONFIGURATION_ERROR: &str = "Data configuration error";
    /// Returned when every tier comes back empty
    pub const NO_RECOMMENDATIONS: &str = "No recommendations available based on your inputs.";
    /// Status value of a successful meal plan response
    pub const STATUS_SUCCESS: &str = "success";
}

/// Ranking limits
pub mod ranking {
    /// Maximum number of meals returned by any tier
    pub const MAX_RECOMMENDATIONS: usize = 5;
}

/// Body mass index category thresholds (kg/m²)
pub mod bmi {
    /// Upper bound (exclusive) of the underweight band
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound (exclusive) of the normal band
    pub const NORMAL_BELOW: f64 = 24.9;
    /// Upper bound (exclusive) of the overweight band
    pub const OVERWEIGHT_BELOW: f64 = 29.9;
}
