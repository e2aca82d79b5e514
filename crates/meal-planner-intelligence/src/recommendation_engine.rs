// ABOUTME: Tiered meal recommendation pipeline with filter, fallback, and ranking stages
// ABOUTME: Degrades from strict diet matching to relaxed matching to lowest-calorie meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal recommendation engine
//!
//! The engine walks a fixed sequence of tiers and stops at the first one that
//! selects at least one meal:
//!
//! | Tier                    | Selection                                                    | Order                          |
//! |-------------------------|--------------------------------------------------------------|--------------------------------|
//! | `Strict`                | calories within cap, exact diet, no allergens, has a disease | protein desc, calories asc     |
//! | `FallbackRelaxedDiet`   | calories within cap, diet contains preference, no allergens  | protein desc, calories asc     |
//! | `FallbackLowestCalorie` | whole table                                                  | calories asc                   |
//!
//! Every tier is capped at [`MAX_RECOMMENDATIONS`]. When all three are empty (only
//! possible for an empty table) the pipeline ends in `Done` with no meals.

use crate::normalizer::MealQuery;
use crate::text::{contains_any, title_case};
use meal_planner_core::constants::messages;
use meal_planner_core::constants::ranking::MAX_RECOMMENDATIONS;
use meal_planner_core::errors::AppError;
use meal_planner_core::models::{
    DietCategory, MealColumn, MealRecommendation, MealRecord, MealTable,
};
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

/// Dataset columns the engine reads
pub const REQUIRED_COLUMNS: [MealColumn; 8] = [
    MealColumn::Calories,
    MealColumn::Diet,
    MealColumn::Allergies,
    MealColumn::Diseases,
    MealColumn::Protein,
    MealColumn::FoodRecommendations,
    MealColumn::Carbs,
    MealColumn::Fats,
];

/// Errors raised while running the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// The meal table lacks a column the engine reads
    #[error("meal dataset is missing required column '{column}'")]
    DataConfiguration {
        /// The first missing column
        column: MealColumn,
    },
}

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        Self::data_configuration(messages::DATA_CONFIGURATION_ERROR).with_source(error)
    }
}

/// Stages of the recommendation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Exact diet match with allergy exclusion and disease inclusion
    Strict,
    /// Substring diet match with allergy exclusion only
    FallbackRelaxedDiet,
    /// The lowest-calorie meals of the whole table
    FallbackLowestCalorie,
    /// Terminal state
    Done,
}

impl RecommendationTier {
    /// The tier entered when this one selects nothing
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Strict => Self::FallbackRelaxedDiet,
            Self::FallbackRelaxedDiet => Self::FallbackLowestCalorie,
            Self::FallbackLowestCalorie | Self::Done => Self::Done,
        }
    }

    /// Whether results of this tier are ordered by protein
    #[must_use]
    pub const fn ranks_by_protein(self) -> bool {
        matches!(self, Self::Strict | Self::FallbackRelaxedDiet)
    }
}

/// Filters that were used for matching, echoed back to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiltersApplied {
    /// Compacted diet token
    pub diet: DietCategory,
    /// Calorie ceiling
    pub max_calories: f64,
    /// Allergy terms excluded
    pub allergies: Vec<String>,
    /// Disease terms required
    pub diseases: Vec<String>,
}

impl From<&MealQuery> for FiltersApplied {
    fn from(query: &MealQuery) -> Self {
        Self {
            diet: query.diet_preference.clone(),
            max_calories: query.max_calories,
            allergies: query.allergies.clone(),
            diseases: query.diseases.clone(),
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// Tier that produced the meals, or `Done` when nothing matched
    pub tier: RecommendationTier,
    /// Ranked meals, at most [`MAX_RECOMMENDATIONS`]
    pub meals: Vec<MealRecommendation>,
    /// Filters used for matching
    pub filters_applied: FiltersApplied,
}

impl Recommendations {
    /// Whether every tier came back empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Recommendation engine over a borrowed meal table
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    table: &'a MealTable,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine returning at most [`MAX_RECOMMENDATIONS`] meals
    #[must_use]
    pub const fn new(table: &'a MealTable) -> Self {
        Self { table }
    }

    /// Run the pipeline for a normalized query
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::DataConfiguration` when the table lacks one of
    /// [`REQUIRED_COLUMNS`]. No meals are selected in that case.
    pub fn recommend(&self, query: &MealQuery) -> Result<Recommendations, RecommendationError> {
        if let Some(column) = self.table.first_missing(&REQUIRED_COLUMNS) {
            return Err(RecommendationError::DataConfiguration { column });
        }

        let mut tier = RecommendationTier::Strict;
        while tier != RecommendationTier::Done {
            let selected = self.select(tier, query);
            if !selected.is_empty() {
                debug!(?tier, selected = selected.len(), "recommendation tier matched");
                return Ok(Recommendations {
                    tier,
                    meals: selected.into_iter().map(to_recommendation).collect(),
                    filters_applied: FiltersApplied::from(query),
                });
            }
            debug!(?tier, "recommendation tier empty, falling back");
            tier = tier.next();
        }

        Ok(Recommendations {
            tier,
            meals: Vec::new(),
            filters_applied: FiltersApplied::from(query),
        })
    }

    fn select(&self, tier: RecommendationTier, query: &MealQuery) -> Vec<&'a MealRecord> {
        let mut selected = match tier {
            RecommendationTier::Strict => self.strict_matches(query),
            RecommendationTier::FallbackRelaxedDiet => self.relaxed_diet_matches(query),
            RecommendationTier::FallbackLowestCalorie => self.table.records().iter().collect(),
            RecommendationTier::Done => Vec::new(),
        };

        if tier.ranks_by_protein() {
            selected.sort_by(|a, b| by_protein_then_calories(a, b));
        } else {
            selected.sort_by(|a, b| {
                ascending_nan_last(a.nutrients.calories, b.nutrients.calories)
            });
        }
        selected.truncate(MAX_RECOMMENDATIONS);
        selected
    }

    fn strict_matches(&self, query: &MealQuery) -> Vec<&'a MealRecord> {
        self.table
            .records()
            .iter()
            .filter(|record| within_calories(record, query))
            .filter(|record| record.diet.matches(&query.diet_preference))
            .filter(|record| free_of_allergens(record, query))
            .filter(|record| suits_conditions(record, query))
            .collect()
    }

    fn relaxed_diet_matches(&self, query: &MealQuery) -> Vec<&'a MealRecord> {
        self.table
            .records()
            .iter()
            .filter(|record| within_calories(record, query))
            .filter(|record| record.diet.contains(&query.diet_preference))
            .filter(|record| free_of_allergens(record, query))
            .collect()
    }
}

/// Project a record into its display form
#[must_use]
pub fn to_recommendation(record: &MealRecord) -> MealRecommendation {
    MealRecommendation {
        meal: title_case(&record.food_recommendation),
        calories: record.nutrients.calories,
        protein: record.nutrients.protein,
        carbs: record.nutrients.carbs,
        fats: record.nutrients.fats,
        diet_type: title_case(record.diet.token()),
    }
}

fn within_calories(record: &MealRecord, query: &MealQuery) -> bool {
    record.nutrients.calories <= query.max_calories
}

fn free_of_allergens(record: &MealRecord, query: &MealQuery) -> bool {
    query.allergies.is_empty() || !contains_any(&record.allergies, &query.allergies)
}

fn suits_conditions(record: &MealRecord, query: &MealQuery) -> bool {
    query.diseases.is_empty() || contains_any(&record.diseases, &query.diseases)
}

fn by_protein_then_calories(a: &MealRecord, b: &MealRecord) -> Ordering {
    descending_nan_last(a.nutrients.protein, b.nutrients.protein)
        .then_with(|| ascending_nan_last(a.nutrients.calories, b.nutrients.calories))
}

fn ascending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
