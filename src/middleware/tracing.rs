// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Builds per-request spans carrying the request ID and logs status and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers;
use axum::extract::MatchedPath;
use http::{Request, StatusCode};
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tracing::{info_span, Span};

/// Create the `http_request` span for an incoming request
///
/// The request ID is read from the `x-request-id` header, which the request-id
/// layer sets before this span is created.
pub fn request_span<B>(request: &Request<B>) -> Span {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    let request_id = request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %path,
        request_id = %request_id,
    )
}

/// Log the outcome of a request; server errors log at error level
pub fn log_response(status: StatusCode, latency: Duration) {
    if status.is_server_error() {
        tracing::error!(
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "request failed with server error"
        );
    } else {
        tracing::info!(
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "request completed"
        );
    }
}

/// Log a failure classified by the trace layer
pub fn log_failure(error: &ServerErrorsFailureClass, latency: Duration) {
    tracing::error!(
        error = %error,
        latency_ms = %latency.as_millis(),
        "request failed"
    );
}
