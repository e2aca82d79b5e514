// ABOUTME: Configuration module root for server settings
// ABOUTME: Environment-driven settings for network, dataset, CORS, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management

/// Environment variable parsing into `ServerConfig`
pub mod environment;

pub use environment::{CorsConfig, DatasetConfig, Environment, ServerConfig};
