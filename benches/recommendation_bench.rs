// ABOUTME: Criterion benchmarks for the meal recommendation pipeline
// ABOUTME: Measures normalization and each recommendation tier over synthetic meal tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation engine.
//!
//! Tables are synthetic so tier selection is predictable: strict queries match a
//! slice of the table, while an unknown diet falls through to the lowest-calorie tier.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meal_planner_intelligence::{MealQuery, RecommendationEngine};
use meal_planner_server::models::{MacroNutrients, MealRecord, MealTable};
use serde_json::{json, Value};

const DIETS: [&str; 3] = ["Vegetarian", "Vegan", "Non-Vegetarian"];
const DISEASES: [&str; 4] = ["Diabetes", "Hypertension", "Heart Disease", "None"];
const ALLERGENS: [&str; 4] = ["Peanut", "Dairy", "Shellfish", "None"];

fn generate_table(count: usize) -> MealTable {
    let records = (0..count)
        .map(|index| {
            let calories = 150.0 + ((index * 37) % 700) as f64;
            let protein = 5.0 + ((index * 13) % 55) as f64;
            MealRecord::new(
                &format!("Benchmark Meal {index}"),
                DIETS[index % DIETS.len()],
                MacroNutrients::new(calories, protein, 30.0, 10.0),
            )
            .with_diseases(DISEASES[index % DISEASES.len()])
            .with_allergies(ALLERGENS[(index / 3) % ALLERGENS.len()])
        })
        .collect();
    MealTable::new(records)
}

fn request(diet: &str) -> Value {
    json!({
        "weight": 70,
        "height": 175,
        "dietary_restrictions": diet,
        "max_calories": 600,
        "diseases": ["diabetes"],
        "medications": ["metformin"],
        "allergies": ["peanut"]
    })
}

fn bench_normalization(c: &mut Criterion) {
    let body = request("non-vegetarian");
    c.bench_function("normalize_request", |b| {
        b.iter(|| MealQuery::from_request_body(black_box(&body)));
    });
}

fn bench_recommendation_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100_usize, 1_000, 10_000] {
        let table = generate_table(size);
        let engine = RecommendationEngine::new(&table);
        let strict = MealQuery::from_request_body(&request("non-vegetarian")).unwrap_or_else(|e| {
            panic!("benchmark query should normalize: {e}");
        });
        let fallback = MealQuery::from_request_body(&request("keto")).unwrap_or_else(|e| {
            panic!("benchmark query should normalize: {e}");
        });

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("strict", size), &strict, |b, query| {
            b.iter(|| engine.recommend(black_box(query)));
        });
        group.bench_with_input(
            BenchmarkId::new("lowest_calorie", size),
            &fallback,
            |b, query| {
                b.iter(|| engine.recommend(black_box(query)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_recommendation_tiers);
criterion_main!(benches);
