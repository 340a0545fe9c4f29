// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock factories and providers for testing
//!
//! Factories cover each outcome a real extension can produce: success,
//! rejection of the argument types, an internal error, and a panic.

use crate::mock_function::MockFunction;
use extfn_registry::{
    Binding, BindingSource, DataType, DiscoveryResult, Function, FunctionError, FunctionFactory,
    FunctionName, FunctionProvider, FunctionRegistry, FunctionResult,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared record of the argument types a factory was called with
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Vec<DataType>>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, arg_types: &[DataType]) {
        self.calls.lock().push(arg_types.to_vec());
    }

    /// Number of recorded calls
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Argument types of the most recent call
    pub fn last(&self) -> Option<Vec<DataType>> {
        self.calls.lock().last().cloned()
    }
}

/// Factory that records every call and always succeeds
#[derive(Debug, Clone)]
pub struct CountingFactory {
    name: String,
    tag: String,
    log: CallLog,
}

impl CountingFactory {
    /// Create a factory for `name` whose instances carry `tag`
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            log: CallLog::new(),
        }
    }

    /// Handle on the calls this factory receives
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl FunctionFactory for CountingFactory {
    fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        self.log.record(arg_types);
        Ok(Arc::new(MockFunction::new(
            self.name.clone(),
            arg_types,
            self.tag.clone(),
        )))
    }
}

/// Factory that rejects one argument type and accepts everything else
#[derive(Debug, Clone)]
pub struct RejectingFactory {
    name: String,
    rejected: DataType,
}

impl RejectingFactory {
    pub fn new(name: impl Into<String>, rejected: DataType) -> Self {
        Self {
            name: name.into(),
            rejected,
        }
    }
}

impl FunctionFactory for RejectingFactory {
    fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        if let Some(position) = arg_types.iter().position(|t| *t == self.rejected) {
            return Err(FunctionError::UnsupportedArgumentType {
                position,
                data_type: self.rejected.clone(),
            });
        }

        Ok(Arc::new(MockFunction::new(
            self.name.clone(),
            arg_types,
            "accepted",
        )))
    }
}

/// Factory that fails with an internal error
#[derive(Debug, Clone, Default)]
pub struct FailingFactory;

impl FunctionFactory for FailingFactory {
    fn create(&self, _arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        Err(anyhow::anyhow!("plugin state is corrupt").into())
    }
}

/// Factory that panics
#[derive(Debug, Clone, Default)]
pub struct PanickingFactory;

impl FunctionFactory for PanickingFactory {
    fn create(&self, _arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        panic!("plugin factory exploded")
    }
}

/// Provider with an arbitrary declared name and factory
#[derive(Clone)]
pub struct MockProvider {
    name: String,
    factory: Arc<dyn FunctionFactory>,
}

impl MockProvider {
    /// Create a provider declaring `name`; the name is not validated
    pub fn new(name: impl Into<String>, factory: impl FunctionFactory + 'static) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Provider backed by a [`CountingFactory`], with a handle on its calls
    pub fn counting(name: impl Into<String>, tag: impl Into<String>) -> (Self, CallLog) {
        let name = name.into();
        let factory = CountingFactory::new(name.clone(), tag);
        let log = factory.log();
        (Self::new(name, factory), log)
    }
}

impl FunctionProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn factory(&self) -> Arc<dyn FunctionFactory> {
        self.factory.clone()
    }
}

/// Provider that registers on behalf of another function name
pub struct RedirectProvider {
    declared: String,
    target: FunctionName,
    factory: Arc<dyn FunctionFactory>,
}

impl RedirectProvider {
    pub fn new(
        declared: impl Into<String>,
        target: FunctionName,
        factory: impl FunctionFactory + 'static,
    ) -> Self {
        Self {
            declared: declared.into(),
            target,
            factory: Arc::new(factory),
        }
    }
}

impl FunctionProvider for RedirectProvider {
    fn name(&self) -> &str {
        &self.declared
    }

    fn factory(&self) -> Arc<dyn FunctionFactory> {
        self.factory.clone()
    }

    fn register_into(
        &self,
        registry: &FunctionRegistry,
        source: BindingSource,
    ) -> DiscoveryResult<FunctionName> {
        registry.register(self.target.clone(), Binding::new(self.factory(), source));
        Ok(self.target.clone())
    }
}
