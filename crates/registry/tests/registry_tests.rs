// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for registration, lookup, and instantiation dispatch

use extfn_registry::{
    Binding, BindingSource, DataType, FunctionError, FunctionName, FunctionRegistry,
    InstantiationCause, StaticDiscoverer,
};
use extfn_test_utils::{
    CountingFactory, FailingFactory, MockProvider, PanickingFactory, RegistryAssertions,
    RejectingFactory,
};
use std::error::Error;

#[test]
fn test_discovered_provider_is_instantiated() {
    let (provider, log) = MockProvider::counting("to_json", "discovered");
    let discoverer = StaticDiscoverer::new().with_provider(provider);

    let registry = FunctionRegistry::new();
    registry.load(&discoverer);

    assert!(registry.contains("to_json"));
    RegistryAssertions::assert_served_by(&registry, "to_json", &[DataType::Int], "discovered");
    assert_eq!(log.count(), 1);
    assert_eq!(log.last(), Some(vec![DataType::Int]));
}

#[test]
fn test_unknown_function_is_absent() {
    let registry = FunctionRegistry::with_builtins();
    RegistryAssertions::assert_absent(&registry, "unknown_fn");
}

#[test]
fn test_never_registered_names_are_absent() {
    let registry = FunctionRegistry::new();
    registry.register_factory(FunctionName::new("custom_sum"), CountingFactory::new("custom_sum", "a"));

    for name in ["custom_avg", "CUSTOM_SUM", "custom_sum_", "to_json"] {
        RegistryAssertions::assert_absent(&registry, name);
    }
}

#[test]
fn test_reregistration_replaces_binding() {
    let registry = FunctionRegistry::new();
    let first = CountingFactory::new("custom_sum", "b1");
    let second = CountingFactory::new("custom_sum", "b2");
    let (first_log, second_log) = (first.log(), second.log());

    registry.register_factory(FunctionName::new("custom_sum"), first);
    registry.register_factory(FunctionName::new("custom_sum"), second);

    let args = [DataType::Int, DataType::Int];
    RegistryAssertions::assert_served_by(&registry, "custom_sum", &args, "b2");
    RegistryAssertions::assert_served_by(&registry, "custom_sum", &args, "b2");

    assert_eq!(first_log.count(), 0);
    assert_eq!(second_log.count(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_factory_receives_exact_argument_types() {
    let registry = FunctionRegistry::new();
    let factory = CountingFactory::new("pack", "pack");
    let log = factory.log();
    registry.register_factory(FunctionName::new("pack"), factory);

    let args = vec![
        DataType::Text,
        DataType::list(DataType::Int),
        DataType::map(DataType::Uuid, DataType::Timestamp),
    ];
    registry.instantiate("pack", &args).unwrap().unwrap();

    assert_eq!(log.last(), Some(args));
}

#[test]
fn test_rejected_argument_types_name_the_function() {
    let registry = FunctionRegistry::new();
    registry.register_factory(
        FunctionName::new("bad_fn"),
        RejectingFactory::new("bad_fn", DataType::Text),
    );

    let err = RegistryAssertions::expect_instantiation_error(&registry, "bad_fn", &[DataType::Text]);
    assert!(err.to_string().contains("'bad_fn'"));
    assert!(matches!(
        err.cause,
        InstantiationCause::Rejected(FunctionError::UnsupportedArgumentType { position: 0, .. })
    ));

    // Other argument types still instantiate
    RegistryAssertions::assert_served_by(&registry, "bad_fn", &[DataType::Int], "accepted");
}

#[test]
fn test_internal_factory_error_is_surfaced() {
    let registry = FunctionRegistry::new();
    registry.register_factory(FunctionName::new("broken"), FailingFactory);

    let err = RegistryAssertions::expect_instantiation_error(&registry, "broken", &[]);
    assert!(matches!(err.cause, InstantiationCause::Rejected(FunctionError::Other(_))));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("plugin state is corrupt"));
}

#[test]
fn test_panicking_factory_is_surfaced_as_error() {
    let registry = FunctionRegistry::new();
    registry.register_factory(FunctionName::new("explosive"), PanickingFactory);

    let err = RegistryAssertions::expect_instantiation_error(&registry, "explosive", &[DataType::Int]);
    match err.cause {
        InstantiationCause::Panicked(message) => assert_eq!(message, "plugin factory exploded"),
        other => panic!("Expected a panic cause, got {:?}", other),
    }

    // The registry stays usable afterwards
    assert!(registry.contains("explosive"));
}

#[test]
fn test_runtime_registration_overrides_builtin() {
    let registry = FunctionRegistry::with_builtins();
    assert_eq!(
        registry.get("to_json").map(|b| b.source()),
        Some(BindingSource::Builtin)
    );

    registry.register_factory(FunctionName::new("to_json"), CountingFactory::new("to_json", "override"));

    assert_eq!(
        registry.get("to_json").map(|b| b.source()),
        Some(BindingSource::Runtime)
    );
    RegistryAssertions::assert_served_by(&registry, "to_json", &[DataType::Int], "override");
}

#[test]
fn test_cql_tojson_resolves_to_builtin() {
    let registry = FunctionRegistry::with_builtins();

    let function = registry
        .instantiate("tojson", &[DataType::Int])
        .unwrap()
        .expect("tojson should be registered");
    assert_eq!(function.return_type(), &DataType::Text);
    assert_eq!(function.execute(&[serde_json::json!(7)]).unwrap(), serde_json::json!("7"));
}

#[test]
fn test_register_shared_binding_under_two_names() {
    let registry = FunctionRegistry::new();
    let binding = Binding::runtime(CountingFactory::new("alias", "shared"));

    registry.register(FunctionName::new("first_name"), binding.clone());
    registry.register(FunctionName::new("second_name"), binding.clone());

    let first = registry.get("first_name").unwrap();
    let second = registry.get("second_name").unwrap();
    assert!(first.same_factory(&second));
    assert_eq!(
        registry.names(),
        vec![FunctionName::new("first_name"), FunctionName::new("second_name")]
    );
}

#[test]
fn test_builtin_to_json_executes() {
    let registry = FunctionRegistry::with_builtins();

    let function = registry
        .instantiate("to_json", &[DataType::list(DataType::Int)])
        .unwrap()
        .unwrap();
    assert_eq!(function.return_type(), &DataType::Text);

    let rendered = function.execute(&[serde_json::json!([1, 2, 3])]).unwrap();
    assert_eq!(rendered, serde_json::Value::String("[1,2,3]".to_string()));
}

#[test]
fn test_builtin_to_json_rejects_two_arguments() {
    let registry = FunctionRegistry::with_builtins();

    let err = RegistryAssertions::expect_instantiation_error(
        &registry,
        "to_json",
        &[DataType::Int, DataType::Text],
    );
    assert!(matches!(
        err.cause,
        InstantiationCause::Rejected(FunctionError::ArityMismatch {
            expected: 1,
            actual: 2
        })
    ));
}
