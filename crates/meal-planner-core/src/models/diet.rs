// ABOUTME: Diet category model with canonical space-free matching tokens
// ABOUTME: Converts dataset diet labels into tokens comparable with user preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

const VEGETARIAN: &str = "vegetarian";
const VEGAN: &str = "vegan";
const NON_VEGETARIAN: &str = "nonvegetarian";

/// Dietary category of a meal or of a user's preference
///
/// Every category is identified by a lowercase token without spaces or hyphens,
/// e.g. `Non-Vegetarian` and `non vegetarian` both become `nonvegetarian`.
/// Tokens outside the three known categories are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DietCategory {
    /// Vegetarian meals
    Vegetarian,
    /// Vegan meals
    Vegan,
    /// Meals containing meat or fish
    NonVegetarian,
    /// Any other token found in the data or supplied by a client
    Other(String),
}

impl DietCategory {
    /// Build a category from an already compacted token
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            VEGETARIAN => Self::Vegetarian,
            VEGAN => Self::Vegan,
            NON_VEGETARIAN => Self::NonVegetarian,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Build a category from a raw dataset label
    ///
    /// The label is lowercased and stripped of hyphens and spaces.
    #[must_use]
    pub fn from_dataset_label(label: &str) -> Self {
        let token: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect();
        Self::from_token(&token)
    }

    /// Matching token for this category
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Vegetarian => VEGETARIAN,
            Self::Vegan => VEGAN,
            Self::NonVegetarian => NON_VEGETARIAN,
            Self::Other(token) => token,
        }
    }

    /// Exact, case-insensitive token equality
    #[must_use]
    pub fn matches(&self, preference: &Self) -> bool {
        self.token().to_lowercase() == preference.token().to_lowercase()
    }

    /// Whether this category's token contains the preference token as a substring
    ///
    /// `nonvegetarian` contains `vegetarian`, so the relaxed match lets vegetarian
    /// preferences reach non-vegetarian meals. This mirrors the dataset semantics.
    #[must_use]
    pub fn contains(&self, preference: &Self) -> bool {
        self.token()
            .to_lowercase()
            .contains(&preference.token().to_lowercase())
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<DietCategory> for String {
    fn from(category: DietCategory) -> Self {
        category.token().to_owned()
    }
}

impl From<String> for DietCategory {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}
