// ABOUTME: HTTP integration tests for the personalised meal plan route
// ABOUTME: Covers validation errors, every recommendation tier, and the response wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{diabetic_request, fixture_router, router_with_table, table_from_csv};
use serde_json::{json, Value};

const MEAL_PLAN: &str = "/personalised_meal_plan";

fn meal_names(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["meal"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// Successful recommendations
// ============================================================================

#[tokio::test]
async fn test_strict_tier_ranks_by_protein_then_calories() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(
        meal_names(&body),
        vec![
            "Baked Salmon Bowl",
            "Grilled Chicken Salad",
            "Shrimp And Egg Scramble",
            "Egg White Omelette",
        ]
    );
}

#[tokio::test]
async fn test_strict_tier_excludes_allergens_and_calorie_overruns() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await;

    let body: Value = response.json();
    let names = meal_names(&body);
    assert!(!names.contains(&"Peanut Chicken Stir Fry".to_owned()));
    assert!(!names.contains(&"Steak And Potatoes".to_owned()));
    for item in body["recommendations"].as_array().unwrap() {
        assert!(item["calories"].as_f64().unwrap() <= 600.0);
    }
}

#[tokio::test]
async fn test_success_response_wire_shape() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await;

    let body: Value = response.json();
    let first = &body["recommendations"][0];
    assert_eq!(
        first,
        &json!({
            "meal": "Baked Salmon Bowl",
            "calories": 480.0,
            "protein": 45.0,
            "carbs": 20.0,
            "fats": 15.0,
            "diet_type": "Nonvegetarian"
        })
    );
    assert_eq!(
        body["filters_applied"],
        json!({
            "diet": "nonvegetarian",
            "max_calories": 600.0,
            "allergies": ["peanut"],
            "diseases": ["diabetes"]
        })
    );
}

#[tokio::test]
async fn test_relaxed_tier_uses_substring_diet_match() {
    let request = json!({
        "weight": "62.5",
        "height": "168",
        "dietary_restrictions": "Vegetarian",
        "max_calories": "600",
        "diseases": ["cancer"],
        "medications": ["none"],
        "allergies": ["dairy"]
    });

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    // "nonvegetarian" contains "vegetarian", so meat dishes qualify here
    assert_eq!(
        meal_names(&body),
        vec![
            "Peanut Chicken Stir Fry",
            "Baked Salmon Bowl",
            "Grilled Chicken Salad",
            "Shrimp And Egg Scramble",
            "Egg White Omelette",
        ]
    );
}

#[tokio::test]
async fn test_lowest_calorie_tier_when_nothing_matches_diet() {
    let mut request = diabetic_request();
    request["dietary_restrictions"] = json!("keto");

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        meal_names(&body),
        vec![
            "Fruit Salad",
            "Greek Yogurt Parfait",
            "Tofu Buddha Bowl",
            "Lentil Soup",
            "Turkey Wrap",
        ]
    );
    assert_eq!(body["filters_applied"]["diet"], "keto");
}

#[tokio::test]
async fn test_alias_keys_are_accepted() {
    let request = json!({
        "weight": 70,
        "height": 175,
        "dietary_restrictions": "Non Vegetarian",
        "max_calories": 600,
        "Health Conditions": ["Diabetes"],
        "Current Medications": ["Metformin"],
        "Food allergies": ["Peanut"]
    });

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_identical_requests_yield_identical_results() {
    let first: Value = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await
        .json();
    let second: Value = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_table_returns_message() {
    let table = table_from_csv(
        "Diet,Calories,Protein,Carbs,Fats,Diseases,Medications,Allergies,Dietary Restrictions,Food Recommendations\n",
    );

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(router_with_table(table))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"message": "No recommendations available based on your inputs."})
    );
}

// ============================================================================
// Validation errors
// ============================================================================

#[tokio::test]
async fn test_missing_field_is_reported() {
    let mut request = diabetic_request();
    request.as_object_mut().unwrap().remove("weight");

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "weight is required"}));
}

#[tokio::test]
async fn test_empty_list_counts_as_missing() {
    let mut request = diabetic_request();
    request["allergies"] = json!([]);

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "allergies is required");
}

#[tokio::test]
async fn test_non_numeric_calories_are_rejected() {
    let mut request = diabetic_request();
    request["max_calories"] = json!("abc");

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid input for weight, height, or max_calories"
    );
}

#[tokio::test]
async fn test_validation_runs_before_dataset_checks() {
    // The table lacks Protein, but invalid input must still be a 400
    let table = table_from_csv("Diet,Calories\nVegan,100\n");
    let mut request = diabetic_request();
    request["height"] = json!("tall");

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&request)
        .send(router_with_table(table))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .raw_json("{\"weight\": 70,")
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Request body must be a JSON object");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&json!(["weight", 70]))
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Request body must be a JSON object");
}

// ============================================================================
// Dataset configuration errors
// ============================================================================

#[tokio::test]
async fn test_missing_column_is_server_error() {
    let table = table_from_csv(
        "Diet,Calories,Carbs,Fats,Diseases,Medications,Allergies,Dietary Restrictions,Food Recommendations\n\
         Vegan,150,30,2,None,None,None,None,Fruit Salad\n",
    );

    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(router_with_table(table))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Data configuration error"}));
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let response = AxumTestRequest::post(MEAL_PLAN)
        .json(&diabetic_request())
        .send(fixture_router())
        .await;
    assert!(response.header("x-request-id").is_some());

    let response = AxumTestRequest::post(MEAL_PLAN)
        .header("x-request-id", "client-supplied-id")
        .json(&diabetic_request())
        .send(fixture_router())
        .await;
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-supplied-id")
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_client_origin() {
    let response = AxumTestRequest::options(MEAL_PLAN)
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut request = diabetic_request();
    request["padding"] = json!("x".repeat(70 * 1024));
    let body = request.to_string();

    let response = AxumTestRequest::post(MEAL_PLAN)
        .header("content-length", &body.len().to_string())
        .raw_json(&body)
        .send(fixture_router())
        .await;

    assert_eq!(response.status(), 413);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let response = AxumTestRequest::get("/meal_plan").send(fixture_router()).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Route /meal_plan not found");
}
