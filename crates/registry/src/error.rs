// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for the function registry
//!
//! Discovery errors are recovered inside the registry: the offending provider
//! is logged and skipped. Instantiation errors always reach the caller, which
//! reports them as an invalid function call.

use crate::function::FunctionError;
use extfn_types::{FunctionName, InvalidFunctionName};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// A single provider could not be resolved during discovery
#[derive(Debug, Error, Clone, Serialize)]
pub enum DiscoveryError {
    /// The provider's declared name is not a valid function name
    #[error("Provider declares invalid function name '{declared}': {source}")]
    InvalidName {
        declared: String,
        #[source]
        source: InvalidFunctionName,
    },

    /// The provider entry could not be realized
    #[error("Provider '{entry}' could not be resolved: {reason}")]
    Unresolved { entry: String, reason: String },
}

/// Why a bound factory failed to produce an instance
#[derive(Debug, Error)]
pub enum InstantiationCause {
    /// The factory rejected the argument types or failed internally
    #[error(transparent)]
    Rejected(#[from] FunctionError),

    /// The factory panicked
    #[error("factory panicked: {0}")]
    Panicked(String),
}

/// A registered function could not be instantiated for the given argument types
#[derive(Debug, Error)]
#[error("Failed to instantiate function '{name}': {cause}")]
pub struct FunctionInstantiationError {
    /// Function the caller asked for
    pub name: FunctionName,
    /// Underlying failure
    #[source]
    pub cause: InstantiationCause,
}

impl FunctionInstantiationError {
    pub fn new(name: FunctionName, cause: impl Into<InstantiationCause>) -> Self {
        Self {
            name,
            cause: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiation_error_names_function() {
        let err = FunctionInstantiationError::new(
            FunctionName::new("bad_fn"),
            FunctionError::Execution("boom".to_string()),
        );
        let message = err.to_string();
        assert!(message.contains("'bad_fn'"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_discovery_error_serializes() {
        let err = DiscoveryError::Unresolved {
            entry: "geo_distance".to_string(),
            reason: "missing factory".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["Unresolved"]["entry"], "geo_distance");
    }
}
