// ABOUTME: Main library entry point for the meal planner HTTP API
// ABOUTME: Wires configuration, logging, dataset loading, and routes into an axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Planner Server
//!
//! Recommends up to five meals from a nutrition dataset for a client profile of
//! weight, height, diet preference, calorie ceiling, conditions, medications and
//! allergies.
//!
//! ## Architecture
//!
//! - **`meal_planner_core`**: data model, error type, shared constants
//! - **`meal_planner_intelligence`**: input normalization and the tiered recommendation engine
//! - **this crate**: configuration, logging, dataset loading, HTTP routes and middleware
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meal_planner_server::config::ServerConfig;
//! use meal_planner_server::dataset::load_meal_table;
//! use meal_planner_server::server::{run, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let table = load_meal_table(&config.dataset.path)?;
//!     run(Arc::new(ServerResources::new(table, config))).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Server constants
pub mod constants;

/// Meal dataset loading
pub mod dataset;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use meal_planner_core::errors;
pub use meal_planner_core::models;
