// ABOUTME: Server-level constants for service identity, environment variables, and defaults
// ABOUTME: Domain constants (request fields, messages, ranking) live in meal-planner-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Server constants grouped by domain. Request and response constants shared with
//! the recommendation engine are re-exported from the core crate.

pub use meal_planner_core::constants::{messages, ranking, request_fields};

/// Service identity used in logs
pub mod service_names {
    /// Name of the HTTP server
    pub const MEAL_PLANNER_SERVER: &str = "meal-planner-server";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Path of the meal dataset file
    pub const MEAL_DATASET_PATH: &str = "MEAL_DATASET_PATH";
    /// Comma-separated CORS origins, `*` for any
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Service name reported in logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Any value adds source file and line to log events
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Any value adds thread ids and names to log events
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Any value logs span open and close events
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Request body size limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5555;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default dataset file, relative to the working directory
    pub const MEAL_DATASET_PATH: &str = "intelligent_health_meal_dataset.csv";
    /// Default CORS origin (the web client dev server)
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173";
    /// Default request body limit
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// HTTP endpoint paths
pub mod endpoints {
    /// Meal plan recommendation endpoint
    pub const PERSONALISED_MEAL_PLAN: &str = "/personalised_meal_plan";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
