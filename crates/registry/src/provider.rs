// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Provider contract
//!
//! Extension authors implement [`FunctionProvider`] to describe a pluggable
//! function: the name it is registered under and the [`FunctionFactory`]
//! that builds instances for a given argument type list. The registry stores
//! the factory in a [`Binding`].

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::function::{Function, FunctionResult};
use crate::registry::FunctionRegistry;
use extfn_types::{DataType, FunctionName};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Builds function instances for an argument type list
pub trait FunctionFactory: Send + Sync {
    /// Create an instance for `arg_types`, or reject the types
    fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>>;
}

impl<F> FunctionFactory for F
where
    F: Fn(&[DataType]) -> FunctionResult<Arc<dyn Function>> + Send + Sync,
{
    fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        self(arg_types)
    }
}

/// Self-description of a pluggable function
pub trait FunctionProvider: Send + Sync {
    /// Declared function name
    ///
    /// Read during discovery without building any instance. Validated with
    /// [`FunctionName::parse`] before registration.
    fn name(&self) -> &str;

    /// Factory for instances of this function
    fn factory(&self) -> Arc<dyn FunctionFactory>;

    /// Register this provider's factory into `registry`
    ///
    /// The default registers [`FunctionProvider::factory`] under the declared
    /// name, stamped with `source`. Discovery passes
    /// [`BindingSource::Discovered`]; hosts that attach a provider after
    /// startup pass [`BindingSource::Runtime`]. Override it when the provider
    /// is an auxiliary component that registers on behalf of another function.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidName` if the declared name is malformed.
    fn register_into(
        &self,
        registry: &FunctionRegistry,
        source: BindingSource,
    ) -> DiscoveryResult<FunctionName> {
        let declared = self.name();
        let name = FunctionName::parse(declared).map_err(|err| DiscoveryError::InvalidName {
            declared: declared.to_string(),
            source: err,
        })?;

        registry.register(name.clone(), Binding::new(self.factory(), source));
        Ok(name)
    }
}

/// Where a binding came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingSource {
    /// Shipped with this crate
    Builtin,
    /// Found by a provider discoverer at initialization
    Discovered,
    /// Registered explicitly after startup
    Runtime,
}

/// A factory bound to a name in the registry
///
/// Bindings are immutable; replacing a function means registering a new
/// binding under the same name.
#[derive(Clone)]
pub struct Binding {
    factory: Arc<dyn FunctionFactory>,
    source: BindingSource,
}

impl Binding {
    /// Create a binding for a shared factory
    pub fn new(factory: Arc<dyn FunctionFactory>, source: BindingSource) -> Self {
        Self { factory, source }
    }

    /// Create a binding for a factory registered at runtime
    pub fn runtime(factory: impl FunctionFactory + 'static) -> Self {
        Self::new(Arc::new(factory), BindingSource::Runtime)
    }

    /// Origin of this binding
    pub fn source(&self) -> BindingSource {
        self.source
    }

    /// The bound factory
    pub fn factory(&self) -> &Arc<dyn FunctionFactory> {
        &self.factory
    }

    /// Invoke the bound factory
    pub fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        self.factory.create(arg_types)
    }

    /// Whether both bindings share the same factory object
    pub fn same_factory(&self, other: &Binding) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::FunctionError;

    fn reject_all(arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        Err(FunctionError::ArityMismatch {
            expected: 0,
            actual: arg_types.len(),
        })
    }

    #[test]
    fn test_fn_pointer_is_a_factory() {
        let binding = Binding::runtime(reject_all);
        assert_eq!(binding.source(), BindingSource::Runtime);
        assert!(binding.create(&[DataType::Int]).is_err());
    }

    #[test]
    fn test_cloned_binding_shares_factory() {
        let binding = Binding::runtime(reject_all);
        let other = Binding::runtime(reject_all);

        assert!(binding.same_factory(&binding.clone()));
        assert!(!binding.same_factory(&other));
    }
}
