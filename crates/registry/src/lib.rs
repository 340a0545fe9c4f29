// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Pluggable Function Registry
//!
//! This crate maps function names to factories that build callable function
//! instances for a given list of argument types. The query planner asks the
//! registry whether a name is handled by a plugin and, if so, for an instance
//! specialised to the call's argument types.
//!
//! ## Features
//!
//! - Provider discovery through a build-time registration list (`inventory`)
//!   or any other [`ProviderDiscoverer`]
//! - Best-effort bulk loading: a malformed provider is logged and skipped
//! - Runtime registration with last-write-wins semantics
//! - Thread-safe lookups and registrations behind a shared handle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use extfn_registry::{DataType, FunctionRegistry, InventoryDiscoverer};
//!
//! let registry = FunctionRegistry::initialize(&InventoryDiscoverer);
//! if let Some(function) = registry.instantiate("to_json", &[DataType::Int])? {
//!     println!("{} -> {}", function.name(), function.return_type());
//! }
//! ```
//!
//! ## Declaring a provider
//!
//! ```rust,ignore
//! use extfn_registry::{FunctionProvider, FunctionFactory, submit_provider};
//!
//! struct CustomSumProvider;
//!
//! impl FunctionProvider for CustomSumProvider {
//!     fn name(&self) -> &str {
//!         "custom_sum"
//!     }
//!
//!     fn factory(&self) -> Arc<dyn FunctionFactory> {
//!         Arc::new(CustomSumFactory)
//!     }
//! }
//!
//! submit_provider!(CustomSumProvider);
//! ```

pub mod builtin;
pub mod config;
pub mod discovery;
pub mod error;
pub mod function;
pub mod provider;
pub mod registry;

// Re-exports from types for convenience
pub use extfn_types::{DataType, FunctionName, InvalidFunctionName};

pub use config::{ConfigError, RegistryConfig};
pub use discovery::{
    ChainDiscoverer, DiscoveryReport, InventoryDiscoverer, ProviderDiscoverer, ProviderIter,
    ProviderRegistration, StaticDiscoverer,
};
pub use error::{DiscoveryError, DiscoveryResult, FunctionInstantiationError, InstantiationCause};
pub use function::{Function, FunctionError, FunctionResult, expect_arity};
pub use provider::{Binding, BindingSource, FunctionFactory, FunctionProvider};
pub use registry::{FunctionRegistry, UNNAMED_PROVIDER};

#[doc(hidden)]
pub use inventory;
