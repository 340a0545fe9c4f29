// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin pluggable functions
//!
//! These are registered by [`FunctionRegistry::with_builtins`] before any
//! discovery runs, so a discovered provider with the same name replaces them.

pub mod to_json;

use crate::provider::{Binding, BindingSource, FunctionProvider};
use crate::registry::FunctionRegistry;
use extfn_types::FunctionName;

/// Extra names served by a builtin, as `(alias, provider name)`
const ALIASES: &[(&str, &str)] = &[(to_json::CQL_NAME, to_json::NAME)];

/// Get all builtin providers
pub fn all_providers() -> Vec<&'static dyn FunctionProvider> {
    vec![&to_json::ToJsonProvider as &dyn FunctionProvider]
}

/// Register every builtin provider into `registry`
pub fn register_all(registry: &FunctionRegistry) {
    for provider in all_providers() {
        let binding = Binding::new(provider.factory(), BindingSource::Builtin);

        for (alias, _) in ALIASES.iter().filter(|(_, target)| *target == provider.name()) {
            registry.register(FunctionName::new(*alias), binding.clone());
        }
        registry.register(FunctionName::new(provider.name()), binding);
    }
}
