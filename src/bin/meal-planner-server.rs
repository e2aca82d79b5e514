// ABOUTME: Server binary loading the meal dataset and serving the meal plan API
// ABOUTME: Parses CLI overrides, initializes logging, and runs until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Planner Server Binary
//!
//! Loads the meal dataset once and serves `POST /personalised_meal_plan`.

use anyhow::{Context, Result};
use clap::Parser;
use meal_planner_server::{
    config::ServerConfig,
    constants::endpoints,
    dataset::load_meal_table,
    logging,
    server::{self, ServerResources},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "meal-planner-server")]
#[command(about = "Meal Planner API - personalised meal recommendations from a nutrition dataset")]
pub struct Args {
    /// Meal dataset file (overrides `MEAL_DATASET_PATH`)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("{}", config.summary());

    let table = load_meal_table(&config.dataset.path).with_context(|| {
        format!(
            "Failed to load meal dataset from {}",
            config.dataset.path.display()
        )
    })?;
    let missing: Vec<_> = table.missing_columns().collect();
    if !missing.is_empty() {
        error!(
            ?missing,
            "Meal dataset is incomplete; meal plan requests will fail until it is fixed"
        );
    }

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(table, config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!(
        "   Meal Plan:         POST {base}{}",
        endpoints::PERSONALISED_MEAL_PLAN
    );
    info!("   Health Check:      GET  {base}{}", endpoints::HEALTH);
    info!("   Readiness:         GET  {base}{}", endpoints::READY);
    info!("=== End of Endpoint List ===");
}
