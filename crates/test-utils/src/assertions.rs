// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Registry-specific test helpers and custom assertions

use extfn_registry::{DataType, FunctionInstantiationError, FunctionRegistry};

/// Custom assertion helpers for registry testing
pub struct RegistryAssertions;

impl RegistryAssertions {
    /// Assert that `name` instantiates and the instance was built by the factory tagged `tag`
    pub fn assert_served_by(
        registry: &FunctionRegistry,
        name: &str,
        arg_types: &[DataType],
        tag: &str,
    ) {
        let function = registry
            .instantiate(name, arg_types)
            .unwrap_or_else(|e| panic!("Expected '{}' to instantiate, got error: {}", name, e))
            .unwrap_or_else(|| panic!("Expected '{}' to be registered", name));

        let result = function
            .execute(&[])
            .unwrap_or_else(|e| panic!("Mock function '{}' failed: {}", name, e));
        assert_eq!(
            result,
            serde_json::Value::String(tag.to_string()),
            "Function '{}' was served by the wrong factory",
            name
        );
        assert_eq!(function.arg_types(), arg_types, "Argument types were not passed through");
    }

    /// Assert that `name` is not handled by the registry at all
    pub fn assert_absent(registry: &FunctionRegistry, name: &str) {
        assert!(!registry.contains(name), "Expected '{}' to be absent", name);
        match registry.instantiate(name, &[]) {
            Ok(None) => {}
            Ok(Some(f)) => panic!("Expected '{}' to be absent, got {:?}", name, f),
            Err(e) => panic!("Expected '{}' to be absent, got error: {}", name, e),
        }
    }

    /// Assert that instantiating `name` fails and return the error
    pub fn expect_instantiation_error(
        registry: &FunctionRegistry,
        name: &str,
        arg_types: &[DataType],
    ) -> FunctionInstantiationError {
        match registry.instantiate(name, arg_types) {
            Err(e) => {
                assert_eq!(e.name.as_str(), name, "Error names the wrong function");
                e
            }
            Ok(Some(f)) => panic!("Expected '{}' to fail, got {:?}", name, f),
            Ok(None) => panic!("Expected '{}' to fail, but it is not registered", name),
        }
    }
}
