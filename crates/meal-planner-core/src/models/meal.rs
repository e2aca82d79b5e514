// ABOUTME: Meal record model mirroring one row of the meal dataset
// ABOUTME: Defines MealRecord, MacroNutrients, and the MealColumn header catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DietCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the meal dataset
///
/// Header names are matched after trimming surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealColumn {
    /// Diet category label
    Diet,
    /// Calories per serving
    Calories,
    /// Protein in grams
    Protein,
    /// Carbohydrates in grams
    Carbs,
    /// Fats in grams
    Fats,
    /// Conditions the meal is suited for
    Diseases,
    /// Medications the meal is compatible with
    Medications,
    /// Allergens present in the meal
    Allergies,
    /// Dietary restriction tags
    DietaryRestrictions,
    /// Display name of the meal
    FoodRecommendations,
}

impl MealColumn {
    /// Every known column, in dataset order
    pub const ALL: [Self; 10] = [
        Self::Diet,
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fats,
        Self::Diseases,
        Self::Medications,
        Self::Allergies,
        Self::DietaryRestrictions,
        Self::FoodRecommendations,
    ];

    /// Header name used in the dataset file
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Diet => "Diet",
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fats => "Fats",
            Self::Diseases => "Diseases",
            Self::Medications => "Medications",
            Self::Allergies => "Allergies",
            Self::DietaryRestrictions => "Dietary Restrictions",
            Self::FoodRecommendations => "Food Recommendations",
        }
    }

    /// Resolve a header name, ignoring surrounding whitespace
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|column| column.header() == header)
    }

    /// Whether the column holds numeric values
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Calories | Self::Protein | Self::Carbs | Self::Fats
        )
    }
}

impl fmt::Display for MealColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Macronutrient profile of a meal
///
/// Missing values are stored as NaN: they never satisfy a calorie ceiling and
/// sort after every real value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    /// Calories per serving
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fats in grams
    pub fats: f64,
}

impl MacroNutrients {
    /// Create a macronutrient profile
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

impl Default for MacroNutrients {
    fn default() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }
}

/// One row of the meal dataset
///
/// Free-text tag fields are stored trimmed and lowercased. They may hold several
/// terms in one string; matching against them is substring based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Meal name, lowercased
    pub food_recommendation: String,
    /// Diet category of the meal
    pub diet: DietCategory,
    /// Nutritional values
    pub nutrients: MacroNutrients,
    /// Conditions the meal is suited for
    pub diseases: String,
    /// Medications the meal is compatible with
    pub medications: String,
    /// Allergens present in the meal
    pub allergies: String,
    /// Dietary restriction tags
    pub dietary_restrictions: String,
}

impl MealRecord {
    /// Create a record with empty tag fields
    #[must_use]
    pub fn new(food_recommendation: &str, diet_label: &str, nutrients: MacroNutrients) -> Self {
        Self {
            food_recommendation: normalize_text(food_recommendation),
            diet: DietCategory::from_dataset_label(diet_label),
            nutrients,
            diseases: String::new(),
            medications: String::new(),
            allergies: String::new(),
            dietary_restrictions: String::new(),
        }
    }

    /// Set the diseases tag text
    #[must_use]
    pub fn with_diseases(mut self, diseases: &str) -> Self {
        self.diseases = normalize_text(diseases);
        self
    }

    /// Set the medications tag text
    #[must_use]
    pub fn with_medications(mut self, medications: &str) -> Self {
        self.medications = normalize_text(medications);
        self
    }

    /// Set the allergies tag text
    #[must_use]
    pub fn with_allergies(mut self, allergies: &str) -> Self {
        self.allergies = normalize_text(allergies);
        self
    }

    /// Set the dietary restrictions tag text
    #[must_use]
    pub fn with_dietary_restrictions(mut self, restrictions: &str) -> Self {
        self.dietary_restrictions = normalize_text(restrictions);
        self
    }
}

fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}
