// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::builtin;
use crate::config::RegistryConfig;
use crate::discovery::{DiscoveryReport, ProviderDiscoverer};
use crate::error::{DiscoveryError, FunctionInstantiationError, InstantiationCause};
use crate::function::Function;
use crate::provider::{Binding, BindingSource, FunctionFactory};
use extfn_types::{DataType, FunctionName};
use parking_lot::RwLock;
use std::any::Any;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Report entry for a provider whose name could not be read
pub const UNNAMED_PROVIDER: &str = "<unnamed>";

/// Registry of pluggable functions
///
/// Maps each [`FunctionName`] to at most one [`Binding`]. Construct one at
/// startup and share it as `Arc<FunctionRegistry>` with every resolver; all
/// methods take `&self` and are safe to call from multiple threads.
///
/// Registering a name that is already bound replaces the previous binding.
/// There is no duplicate check, so extensions can override builtins.
pub struct FunctionRegistry {
    /// Current binding for each name
    bindings: RwLock<HashMap<FunctionName, Binding>>,

    /// Declared names that discovery must skip
    disabled: HashSet<String>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
            disabled: HashSet::new(),
        }
    }

    /// Create a registry with the builtin functions loaded
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let registry = FunctionRegistry::with_builtins();
    /// assert!(registry.contains("to_json"));
    /// ```
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        builtin::register_all(&registry);
        registry
    }

    /// Create a registry with builtins plus everything `discoverer` finds
    ///
    /// Providers that fail to resolve are logged and skipped; this never
    /// fails.
    pub fn initialize(discoverer: &dyn ProviderDiscoverer) -> Self {
        let registry = Self::with_builtins();
        registry.load(discoverer);
        registry
    }

    /// Create a registry according to `config`, without running discovery
    ///
    /// Registers the builtins if enabled and records the disabled names
    /// that later calls to [`FunctionRegistry::load`] will skip.
    pub fn configured(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        registry.disabled = config.disabled_functions.iter().cloned().collect();

        if config.include_builtins {
            builtin::register_all(&registry);
        }

        registry
    }

    /// Create a registry according to `config`
    pub fn from_config(config: &RegistryConfig, discoverer: &dyn ProviderDiscoverer) -> Self {
        let registry = Self::configured(config);

        if config.discover_providers {
            registry.load(discoverer);
        } else {
            debug!("Provider discovery disabled by configuration");
        }

        registry
    }

    /// Register every provider yielded by `discoverer`
    ///
    /// Best effort: a provider that fails to resolve, declares a malformed
    /// name, or panics while reporting its name or registering is recorded in the report and the
    /// pass moves on to the next one.
    pub fn load(&self, discoverer: &dyn ProviderDiscoverer) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for entry in discoverer.discover() {
            let provider = match entry {
                Ok(provider) => provider,
                Err(e) => {
                    warn!("Skipping function provider: {}", e);
                    report.failures.push(e);
                    continue;
                }
            };

            let declared = panic::catch_unwind(AssertUnwindSafe(|| provider.name().to_string()));
            let declared = match declared {
                Ok(declared) => declared,
                Err(payload) => {
                    let e = DiscoveryError::Unresolved {
                        entry: UNNAMED_PROVIDER.to_string(),
                        reason: format!(
                            "panicked while reading its name: {}",
                            panic_message(&*payload)
                        ),
                    };
                    warn!("Skipping function provider: {}", e);
                    report.failures.push(e);
                    continue;
                }
            };

            if self.disabled.contains(&declared) {
                debug!(function = %declared, "Function provider disabled by configuration");
                report.disabled.push(declared);
                continue;
            }

            let registered = panic::catch_unwind(AssertUnwindSafe(|| {
                provider.register_into(self, BindingSource::Discovered)
            }));
            match registered {
                Ok(Ok(name)) => report.registered.push(name),
                Ok(Err(e)) => {
                    warn!("Skipping function provider: {}", e);
                    report.failures.push(e);
                }
                Err(payload) => {
                    let e = DiscoveryError::Unresolved {
                        entry: declared,
                        reason: format!("panicked during registration: {}", panic_message(&*payload)),
                    };
                    warn!("Skipping function provider: {}", e);
                    report.failures.push(e);
                }
            }
        }

        info!(
            registered = report.registered.len(),
            disabled = report.disabled.len(),
            failed = report.failures.len(),
            "Function provider discovery finished"
        );
        report
    }

    /// Bind `name` to `binding`, replacing any existing binding
    ///
    /// Returns the binding that was replaced, if any.
    pub fn register(&self, name: FunctionName, binding: Binding) -> Option<Binding> {
        debug!(function = %name, source = ?binding.source(), "Registering function");

        let previous = self.bindings.write().insert(name.clone(), binding);
        if let Some(previous) = &previous {
            debug!(function = %name, replaced = ?previous.source(), "Replaced existing function binding");
        }
        previous
    }

    /// Bind `name` to a factory at runtime
    pub fn register_factory(
        &self,
        name: FunctionName,
        factory: impl FunctionFactory + 'static,
    ) -> Option<Binding> {
        self.register(name, Binding::runtime(factory))
    }

    /// Check if `name` is handled by a registered function
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        FunctionName: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bindings.read().contains_key(name)
    }

    /// Current binding for `name`
    pub fn get<Q>(&self, name: &Q) -> Option<Binding>
    where
        FunctionName: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bindings.read().get(name).cloned()
    }

    /// Build an instance of `name` for `arg_types`
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no function is registered under `name`, so the caller
    /// can fall back to other resolution paths. `Ok(Some(_))` with the
    /// factory's instance otherwise.
    ///
    /// # Errors
    ///
    /// Returns `FunctionInstantiationError` if the bound factory rejects the
    /// argument types, fails, or panics.
    pub fn instantiate<Q>(
        &self,
        name: &Q,
        arg_types: &[DataType],
    ) -> Result<Option<Arc<dyn Function>>, FunctionInstantiationError>
    where
        FunctionName: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // Factories run without the lock held so they may register functions.
        let Some((name, binding)) = self
            .bindings
            .read()
            .get_key_value(name)
            .map(|(name, binding)| (name.clone(), binding.clone()))
        else {
            return Ok(None);
        };

        match panic::catch_unwind(AssertUnwindSafe(|| binding.create(arg_types))) {
            Ok(Ok(function)) => {
                debug!(function = %name, args = arg_types.len(), "Instantiated function");
                Ok(Some(function))
            }
            Ok(Err(e)) => {
                debug!(function = %name, "Function factory rejected call: {}", e);
                Err(FunctionInstantiationError::new(name, e))
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                error!(function = %name, "Function factory panicked: {}", message);
                Err(FunctionInstantiationError::new(
                    name,
                    InstantiationCause::Panicked(message),
                ))
            }
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<FunctionName> {
        let mut names: Vec<_> = self.bindings.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .field("disabled", &self.disabled)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{FunctionError, FunctionResult};

    fn reject_text(arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        Err(FunctionError::UnsupportedArgumentType {
            position: 0,
            data_type: arg_types.first().cloned().unwrap_or(DataType::Text),
        })
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("to_json"));
    }

    #[test]
    fn test_with_builtins() {
        let registry = FunctionRegistry::with_builtins();
        assert!(registry.contains("to_json"));
        assert!(registry.contains("tojson"));
        assert_eq!(
            registry.names(),
            vec![FunctionName::new("to_json"), FunctionName::new("tojson")]
        );
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let registry = FunctionRegistry::with_builtins();
        assert!(!registry.contains("unknown_fn"));
        assert!(registry.instantiate("unknown_fn", &[]).unwrap().is_none());
    }

    #[test]
    fn test_register_returns_replaced_binding() {
        let registry = FunctionRegistry::new();
        let name = FunctionName::new("custom_sum");

        assert!(registry.register_factory(name.clone(), reject_text).is_none());
        let replaced = registry.register_factory(name.clone(), reject_text);
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_by_function_name() {
        let registry = FunctionRegistry::new();
        let name = FunctionName::new("custom_sum");
        registry.register_factory(name.clone(), reject_text);

        assert!(registry.contains(&name));
        assert!(registry.get(&name).is_some());
    }

    #[test]
    fn test_rejection_becomes_instantiation_error() {
        let registry = FunctionRegistry::new();
        registry.register_factory(FunctionName::new("bad_fn"), reject_text);

        let err = registry.instantiate("bad_fn", &[DataType::Text]).unwrap_err();
        assert_eq!(err.name.as_str(), "bad_fn");
        assert!(matches!(err.cause, InstantiationCause::Rejected(_)));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*payload), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(&*payload), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(&*payload), "unknown panic");
    }
}
