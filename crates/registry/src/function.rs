// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function instances
//!
//! A [`Function`] is what a factory hands back to the planner: an instance
//! specialised to one argument type list. Runtime values are JSON values.

use extfn_types::{DataType, FunctionName};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type alias for factory and execution calls
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Errors raised by a function factory or a function instance
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Wrong number of arguments
    #[error("Expected {expected} argument(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// An argument type is not accepted by this function
    #[error("Argument {position} has unsupported type {data_type}")]
    UnsupportedArgumentType { position: usize, data_type: DataType },

    /// Evaluation failed
    #[error("Execution failed: {0}")]
    Execution(String),

    /// Any other fault inside the extension
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A callable function instance
pub trait Function: Send + Sync + fmt::Debug {
    /// Name this instance was built for
    fn name(&self) -> &FunctionName;

    /// Argument types this instance accepts, in positional order
    fn arg_types(&self) -> &[DataType];

    /// Type of the value returned by [`Function::execute`]
    fn return_type(&self) -> &DataType;

    /// Evaluate the function over one row of argument values
    fn execute(&self, args: &[Value]) -> FunctionResult<Value>;
}

/// Fail with [`FunctionError::ArityMismatch`] unless `args` has `expected` entries
pub fn expect_arity<T>(args: &[T], expected: usize) -> FunctionResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(FunctionError::ArityMismatch {
            expected,
            actual: args.len(),
        })
    }
}
