// ABOUTME: Route module organization for the meal planner HTTP API
// ABOUTME: Each submodule owns one route group and returns an axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Liveness and readiness probes
pub mod health;

/// Personalised meal plan endpoint
pub mod meal_plan;

pub use health::HealthRoutes;
pub use meal_plan::{MealPlanMessage, MealPlanResponse, MealPlanRoutes};
