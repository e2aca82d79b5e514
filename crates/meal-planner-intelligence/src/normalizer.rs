// ABOUTME: Converts loosely typed meal plan request fields into a canonical query
// ABOUTME: Validates required fields, parses numbers, and maps diet preferences to tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input normalization
//!
//! Clients send numbers as JSON numbers or strings and term lists with arbitrary
//! casing and padding. Everything is canonicalised here, before the meal table is
//! touched, so the engine only ever sees lowercase trimmed terms and a diet token.

use crate::body_metrics::BodyMetrics;
use meal_planner_core::constants::{messages, request_fields};
use meal_planner_core::errors::{AppError, ErrorCode};
use meal_planner_core::models::DietCategory;
use serde_json::{Map, Value};
use std::num::FpCategory;
use thiserror::Error;

/// Human-readable names for the known diet preferences, keyed by compacted input
const DIET_MAPPING: [(&str, &str); 3] = [
    ("nonvegetarian", "non vegetarian"),
    ("vegetarian", "vegetarian"),
    ("vegan", "vegan"),
];

/// Errors raised while normalizing client input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body was not a JSON object
    #[error("Request body must be a JSON object")]
    InvalidBody,
    /// A required field was absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Weight, height or calorie ceiling could not be parsed as a number
    #[error("Invalid input for weight, height, or max_calories")]
    InvalidNumericInput,
    /// A field had a type that cannot be interpreted
    #[error("Invalid input for {0}")]
    InvalidField(&'static str),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingField(_) => Self::missing_field(error.to_string()),
            ValidationError::InvalidNumericInput => {
                Self::new(ErrorCode::InvalidFormat, messages::INVALID_NUMERIC_INPUT)
            }
            ValidationError::InvalidField(_) => {
                Self::new(ErrorCode::InvalidFormat, error.to_string())
            }
            ValidationError::InvalidBody => Self::invalid_input(messages::INVALID_BODY),
        }
    }
}

/// Canonical, validated meal plan query
#[derive(Debug, Clone, PartialEq)]
pub struct MealQuery {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    /// Calorie ceiling per meal
    pub max_calories: f64,
    /// Lowercase disease terms, blanks removed
    pub diseases: Vec<String>,
    /// Lowercase medication terms, blanks removed
    pub medications: Vec<String>,
    /// Lowercase allergy terms, blanks removed
    pub allergies: Vec<String>,
    /// Diet preference token
    pub diet_preference: DietCategory,
}

impl MealQuery {
    /// Normalize a raw JSON request body
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBody` when the body is not an object, and
    /// any error of [`MealQuery::from_fields`] otherwise.
    pub fn from_request_body(body: &Value) -> Result<Self, ValidationError> {
        body.as_object()
            .ok_or(ValidationError::InvalidBody)
            .and_then(Self::from_fields)
    }

    /// Normalize a map of raw request fields
    ///
    /// Required fields are checked in a fixed order and the first one that is absent
    /// or empty is reported. Numeric parsing happens only after every required field
    /// is present.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for absent or empty fields, `InvalidNumericInput` when
    /// weight, height or `max_calories` is not a number, and `InvalidField` for list or
    /// diet fields of an unusable type.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        for field in request_fields::REQUIRED {
            // Alias keys satisfy the check too, unlike the legacy service which only
            // accepted canonical keys here
            let present = lookup(fields, field).is_some_and(|value| !is_empty_value(value));
            if !present {
                return Err(ValidationError::MissingField(field));
            }
        }

        let weight = parse_number(fields, request_fields::WEIGHT)?;
        let height = parse_number(fields, request_fields::HEIGHT)?;
        let max_calories = parse_number(fields, request_fields::MAX_CALORIES)?;

        let diseases = normalize_terms(fields, request_fields::DISEASES)?;
        let medications = normalize_terms(fields, request_fields::MEDICATIONS)?;
        let allergies = normalize_terms(fields, request_fields::ALLERGIES)?;

        let raw_diet = match lookup(fields, request_fields::DIETARY_RESTRICTIONS) {
            Some(Value::String(diet)) => diet.clone(),
            Some(Value::Number(diet)) => diet.to_string(),
            _ => {
                return Err(ValidationError::InvalidField(
                    request_fields::DIETARY_RESTRICTIONS,
                ))
            }
        };

        Ok(Self {
            weight,
            height,
            max_calories,
            diseases,
            medications,
            allergies,
            diet_preference: normalize_diet_preference(&raw_diet),
        })
    }

    /// BMI and weight category derived from the query, if the measurements allow it
    #[must_use]
    pub fn body_metrics(&self) -> Option<BodyMetrics> {
        BodyMetrics::from_measurements(self.weight, self.height)
    }
}

/// Map a raw diet preference to its matching token
///
/// The input is trimmed, lowercased and stripped of hyphens and underscores. Known
/// preferences are mapped to their readable name (`nonvegetarian` to
/// `non vegetarian`); unknown ones pass through. Spaces are then removed, giving the
/// token used against the dataset.
#[must_use]
pub fn normalize_diet_preference(raw: &str) -> DietCategory {
    let stripped: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect();

    let mapped = DIET_MAPPING
        .iter()
        .find(|(key, _)| *key == stripped)
        .map_or(stripped.as_str(), |(_, name)| *name);

    let token: String = mapped.chars().filter(|c| *c != ' ').collect();
    DietCategory::from_token(&token)
}

fn lookup<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).or_else(|| {
        request_fields::alias_for(field).and_then(|alias| fields.get(alias))
    })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn parse_number(fields: &Map<String, Value>, field: &str) -> Result<f64, ValidationError> {
    let parsed = match lookup(fields, field) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or(ValidationError::InvalidNumericInput)
}

fn normalize_terms(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ValidationError> {
    let items = match lookup(fields, field) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(single @ Value::String(_)) => std::slice::from_ref(single),
        _ => return Err(ValidationError::InvalidField(field)),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(term) => {
                let term = term.trim().to_lowercase();
                (!term.is_empty()).then_some(Ok(term))
            }
            Value::Null => None,
            _ => Some(Err(ValidationError::InvalidField(field))),
        })
        .collect()
}
