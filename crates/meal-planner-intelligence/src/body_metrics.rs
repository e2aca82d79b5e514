// ABOUTME: Body mass index calculation and weight category classification
// ABOUTME: Derived from request weight and height for logging and client parity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use meal_planner_core::constants::bmi::{NORMAL_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};
use serde::Serialize;
use std::fmt;

/// Weight category for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 24.9
    Normal,
    /// BMI from 24.9 up to 29.9
    Overweight,
    /// BMI of 29.9 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// BMI and weight category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMetrics {
    /// Body mass index in kg/m²
    pub bmi: f64,
    /// Weight category
    pub category: BmiCategory,
}

impl BodyMetrics {
    /// Compute metrics from weight in kilograms and height in centimetres
    ///
    /// Returns `None` unless both measurements are finite and positive.
    #[must_use]
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Option<Self> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(weight_kg) || !valid(height_cm) {
            return None;
        }

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);
        Some(Self {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        })
    }
}
