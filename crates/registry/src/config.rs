// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Registry Configuration
//!
//! Controls which functions a [`FunctionRegistry`](crate::FunctionRegistry)
//! is populated with at startup:
//! - whether the builtin functions are registered
//! - whether provider discovery runs
//! - declared names that discovery should skip
//!
//! ## Example
//!
//! ```rust,ignore
//! use extfn_registry::{FunctionRegistry, InventoryDiscoverer, RegistryConfig};
//!
//! let config = RegistryConfig {
//!     disabled_functions: vec!["geo_distance".to_string()],
//!     ..Default::default()
//! };
//! config.validate()?;
//! let registry = FunctionRegistry::from_config(&config, &InventoryDiscoverer);
//! ```

use extfn_types::{FunctionName, InvalidFunctionName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Startup configuration for the function registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    /// Register the builtin functions
    pub include_builtins: bool,

    /// Run provider discovery
    pub discover_providers: bool,

    /// Declared provider names skipped during discovery
    pub disabled_functions: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
            discover_providers: true,
            disabled_functions: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Validate the configuration
    ///
    /// Checks that every disabled name is a well-formed function name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.disabled_functions {
            FunctionName::parse(name).map_err(|source| ConfigError::InvalidDisabledFunction {
                name: name.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Parse registry config from a settings payload.
    ///
    /// Expected shape:
    /// {
    ///   "extfn": {
    ///     "includeBuiltins": true,
    ///     "discoverProviders": true,
    ///     "disabledFunctions": ["..."]
    ///   }
    /// }
    ///
    /// Returns `Ok(None)` when the `extfn` section is missing. Missing keys
    /// inside the section take their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Settings` if the section is present but does
    /// not have the expected shape.
    pub fn from_settings(settings: &Value) -> Result<Option<Self>, ConfigError> {
        let Some(section) = settings.get("extfn") else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(section.clone())?))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A disabled function name is malformed
    #[error("Invalid disabled function '{name}': {source}")]
    InvalidDisabledFunction {
        name: String,
        source: InvalidFunctionName,
    },

    /// Settings could not be read
    #[error("Failed to read settings: {0}")]
    Settings(#[from] serde_json::Error),
}
