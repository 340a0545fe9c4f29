// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Provider discovery
//!
//! A [`ProviderDiscoverer`] enumerates the providers available to the
//! process. Discovery never writes to the registry; the registry walks the
//! sequence and registers each provider itself.
//!
//! ## Discoverers
//!
//! - [`InventoryDiscoverer`]: providers submitted at build time with
//!   [`submit_provider!`](crate::submit_provider)
//! - [`StaticDiscoverer`]: an in-memory list, for tests and embedding
//! - [`ChainDiscoverer`]: several discoverers, in order

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::provider::FunctionProvider;
use extfn_types::FunctionName;
use serde::Serialize;

/// Lazy sequence of discovered providers
pub type ProviderIter<'a> = Box<dyn Iterator<Item = DiscoveryResult<&'a dyn FunctionProvider>> + 'a>;

/// Enumerates function providers
pub trait ProviderDiscoverer: Send + Sync {
    /// Yield each provider once
    ///
    /// An entry that cannot be realized is yielded as an error and does not
    /// end the sequence.
    fn discover(&self) -> ProviderIter<'_>;
}

/// Build-time registration entry collected via `inventory`
pub struct ProviderRegistration(pub &'static dyn FunctionProvider);

inventory::collect!(ProviderRegistration);

/// Submit a provider to the build-time registration list
///
/// The argument must be a constant expression whose type implements
/// [`FunctionProvider`], typically a unit struct or a `static`.
///
/// ```rust,ignore
/// struct GeoDistanceProvider;
/// impl FunctionProvider for GeoDistanceProvider { /* ... */ }
///
/// extfn_registry::submit_provider!(GeoDistanceProvider);
/// ```
#[macro_export]
macro_rules! submit_provider {
    ($provider:expr) => {
        $crate::inventory::submit! {
            $crate::discovery::ProviderRegistration(&$provider)
        }
    };
}

/// Discovers providers submitted with [`submit_provider!`](crate::submit_provider)
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryDiscoverer;

impl ProviderDiscoverer for InventoryDiscoverer {
    fn discover(&self) -> ProviderIter<'_> {
        Box::new(
            inventory::iter::<ProviderRegistration>
                .into_iter()
                .map(|registration| Ok(registration.0)),
        )
    }
}

/// In-memory provider list
#[derive(Default)]
pub struct StaticDiscoverer {
    entries: Vec<DiscoveryResult<Box<dyn FunctionProvider>>>,
}

impl StaticDiscoverer {
    /// Create an empty discoverer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider
    pub fn with_provider(mut self, provider: impl FunctionProvider + 'static) -> Self {
        self.entries.push(Ok(Box::new(provider)));
        self
    }

    /// Add an entry that fails to resolve
    pub fn with_failure(mut self, error: DiscoveryError) -> Self {
        self.entries.push(Err(error));
        self
    }

    /// Number of entries, failed ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProviderDiscoverer for StaticDiscoverer {
    fn discover(&self) -> ProviderIter<'_> {
        Box::new(self.entries.iter().map(|entry| match entry {
            Ok(provider) => Ok(provider.as_ref() as &dyn FunctionProvider),
            Err(error) => Err(error.clone()),
        }))
    }
}

/// Runs several discoverers one after another
#[derive(Default)]
pub struct ChainDiscoverer {
    discoverers: Vec<Box<dyn ProviderDiscoverer>>,
}

impl ChainDiscoverer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a discoverer; later discoverers win on name clashes
    pub fn with(mut self, discoverer: impl ProviderDiscoverer + 'static) -> Self {
        self.discoverers.push(Box::new(discoverer));
        self
    }
}

impl ProviderDiscoverer for ChainDiscoverer {
    fn discover(&self) -> ProviderIter<'_> {
        Box::new(self.discoverers.iter().flat_map(|d| d.discover()))
    }
}

/// Outcome of one discovery pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryReport {
    /// Names registered, in discovery order
    pub registered: Vec<FunctionName>,
    /// Declared names skipped because configuration disables them
    pub disabled: Vec<String>,
    /// Providers that failed to resolve or register
    pub failures: Vec<DiscoveryError>,
}

impl DiscoveryReport {
    /// Whether every discovered provider was registered or deliberately skipped
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
