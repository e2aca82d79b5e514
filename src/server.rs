// ABOUTME: HTTP server assembly with shared resources, middleware stack, and graceful shutdown
// ABOUTME: Merges route groups, applies CORS, body limit, and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server assembly
//!
//! The meal table is loaded before the server starts and is never mutated
//! afterwards, so handlers share it through an `Arc` without locking.

use crate::config::ServerConfig;
use crate::middleware::{log_failure, log_response, request_span, setup_cors};
use crate::routes::{HealthRoutes, MealPlanRoutes};
use anyhow::{Context, Result};
use axum::{http::Request, response::Response, Router};
use meal_planner_core::errors::AppError;
use meal_planner_core::models::MealTable;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    classify::ServerErrorsFailureClass,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, Span};

/// State shared by every request handler
#[derive(Debug)]
pub struct ServerResources {
    /// Read-only meal dataset
    pub meal_table: Arc<MealTable>,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a loaded table and configuration
    #[must_use]
    pub fn new(meal_table: MealTable, config: ServerConfig) -> Self {
        Self {
            meal_table: Arc::new(meal_table),
            config: Arc::new(config),
        }
    }
}

/// Build the application router with all middleware applied
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(MealPlanRoutes::routes(Arc::clone(resources)))
        .fallback(handle_not_found)
        .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes))
        .layer(setup_cors(&config.cors))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<_>| request_span(request))
                        .on_request(|_request: &Request<_>, _span: &Span| {})
                        .on_response(|response: &Response<_>, latency: Duration, _span: &Span| {
                            log_response(response.status(), latency);
                        })
                        .on_failure(
                            |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                                log_failure(&error, latency);
                            },
                        ),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

async fn handle_not_found(request: Request<axum::body::Body>) -> AppError {
    AppError::not_found(format!("Route {}", request.uri().path()))
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C"),
        () = terminate => info!("Received SIGTERM"),
    }
}
