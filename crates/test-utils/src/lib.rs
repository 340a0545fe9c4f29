// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the extfn function registry
//!
//! This crate provides common testing components including:
//! - A fake function instance that reports which factory built it
//! - Factories that count calls, reject, fail, or panic
//! - Providers with valid, malformed, and redirected registration targets
//! - Assertion helpers for instantiation results

pub mod assertions;
pub mod mock_function;
pub mod mock_provider;

// Re-exports for convenience
pub use assertions::RegistryAssertions;
pub use mock_function::MockFunction;
pub use mock_provider::{
    CallLog, CountingFactory, FailingFactory, MockProvider, PanickingFactory, RedirectProvider,
    RejectingFactory,
};
