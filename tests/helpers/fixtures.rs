// ABOUTME: Meal dataset fixtures and router builders for integration tests
// ABOUTME: Injects tables directly into server resources instead of loading from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use axum::Router;
use meal_planner_server::config::ServerConfig;
use meal_planner_server::dataset::load_meal_table_from_reader;
use meal_planner_server::models::MealTable;
use meal_planner_server::server::{build_router, ServerResources};
use serde_json::{json, Value};
use std::sync::Arc;

/// Eleven meals covering every recommendation tier
pub const MEALS_CSV: &str = include_str!("../fixtures/meals.csv");

/// Parse a CSV string into a meal table
pub fn table_from_csv(csv: &str) -> MealTable {
    load_meal_table_from_reader(csv.as_bytes()).expect("fixture CSV should load")
}

/// The standard fixture table
pub fn fixture_table() -> MealTable {
    table_from_csv(MEALS_CSV)
}

/// Full application router over the given table with default configuration
pub fn router_with_table(table: MealTable) -> Router {
    let resources = Arc::new(ServerResources::new(table, ServerConfig::default()));
    build_router(&resources)
}

/// Full application router over the fixture table
pub fn fixture_router() -> Router {
    router_with_table(fixture_table())
}

/// Non-vegetarian diabetic profile with a peanut allergy and a 600 kcal ceiling
pub fn diabetic_request() -> Value {
    json!({
        "weight": 70,
        "height": 175,
        "dietary_restrictions": "non-vegetarian",
        "max_calories": 600,
        "diseases": ["diabetes"],
        "medications": ["metformin"],
        "allergies": ["peanut"]
    })
}
