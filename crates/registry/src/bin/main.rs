// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builds a function registry the way a server would at startup and prints
//! what it contains.
//!
//! Usage: `extfn-registry [settings.json]`

use anyhow::Context;
use extfn_registry::{
    ConfigError, DiscoveryReport, FunctionRegistry, InventoryDiscoverer, RegistryConfig,
};
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file {path}"))?;
            let settings: Value = serde_json::from_str(&raw).map_err(ConfigError::from)?;
            RegistryConfig::from_settings(&settings)?.unwrap_or_default()
        }
        None => RegistryConfig::default(),
    };
    config.validate()?;

    tracing::info!(?config, "Building function registry");

    let registry = FunctionRegistry::configured(&config);
    let report = if config.discover_providers {
        registry.load(&InventoryDiscoverer)
    } else {
        DiscoveryReport::default()
    };

    let output = json!({
        "functions": registry.names(),
        "discovery": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
