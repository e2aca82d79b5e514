// ABOUTME: Meal plan route handler turning a client profile into ranked meal recommendations
// ABOUTME: Normalizes the request body, runs the tier pipeline, and shapes the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personalised meal plan route
//!
//! Request handling is normalize, then filter, then respond. Validation failures
//! answer 400 before the meal table is touched; a misconfigured table answers 500.
//! A valid query that yields nothing is a 200 with a message, not an error.

use crate::constants::{endpoints, messages};
use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use meal_planner_core::errors::AppError;
use meal_planner_core::models::MealRecommendation;
use meal_planner_intelligence::{FiltersApplied, MealQuery, RecommendationEngine};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Successful meal plan response body
#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    /// Always `"success"`
    pub status: &'static str,
    /// Ranked meals, at most five
    pub recommendations: Vec<MealRecommendation>,
    /// Filters used for matching
    pub filters_applied: FiltersApplied,
}

/// Body returned when no tier produced a meal
#[derive(Debug, Serialize)]
pub struct MealPlanMessage {
    /// Explanation for the client
    pub message: &'static str,
}

/// Meal plan routes
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create the meal plan route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::PERSONALISED_MEAL_PLAN,
                post(Self::handle_personalised_meal_plan),
            )
            .with_state(resources)
    }

    /// Handle `POST /personalised_meal_plan`
    async fn handle_personalised_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(body) = payload.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Rejected meal plan request body");
            AppError::invalid_input(messages::INVALID_BODY)
        })?;

        let query = MealQuery::from_request_body(&body)?;
        let metrics = query.body_metrics();
        debug!(
            diet = %query.diet_preference,
            max_calories = query.max_calories,
            diseases = query.diseases.len(),
            medications = query.medications.len(),
            allergies = query.allergies.len(),
            bmi = ?metrics.map(|m| m.bmi),
            bmi_category = ?metrics.map(|m| m.category),
            "Normalized meal plan query"
        );

        let recommendations = RecommendationEngine::new(&resources.meal_table).recommend(&query)?;
        info!(
            tier = ?recommendations.tier,
            meals = recommendations.meals.len(),
            "Meal plan resolved"
        );

        if recommendations.is_empty() {
            return Ok(Json(MealPlanMessage {
                message: messages::NO_RECOMMENDATIONS,
            })
            .into_response());
        }

        Ok(Json(MealPlanResponse {
            status: messages::STATUS_SUCCESS,
            recommendations: recommendations.meals,
            filters_applied: recommendations.filters_applied,
        })
        .into_response())
    }
}
