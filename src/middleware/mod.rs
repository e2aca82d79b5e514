// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Layers applied around every route by the server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration for the web client
pub mod cors;

/// Request span and response logging
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{log_failure, log_response, request_span};
