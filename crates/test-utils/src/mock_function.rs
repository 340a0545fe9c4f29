// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock function instance for testing
//!
//! Each instance carries the tag of the factory that built it, so tests can
//! tell which binding served a call.

use extfn_registry::{DataType, Function, FunctionName, FunctionResult};
use serde_json::Value;

/// Function instance that returns its factory tag when executed
#[derive(Debug, Clone, PartialEq)]
pub struct MockFunction {
    name: FunctionName,
    arg_types: Vec<DataType>,
    return_type: DataType,
    tag: String,
}

impl MockFunction {
    /// Create a new mock function returning `text`
    pub fn new(name: impl Into<String>, arg_types: &[DataType], tag: impl Into<String>) -> Self {
        Self {
            name: FunctionName::new(name),
            arg_types: arg_types.to_vec(),
            return_type: DataType::Text,
            tag: tag.into(),
        }
    }

    /// Builder method: set the return type
    pub fn with_return_type(mut self, return_type: DataType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Tag of the factory that built this instance
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Function for MockFunction {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arg_types(&self) -> &[DataType] {
        &self.arg_types
    }

    fn return_type(&self) -> &DataType {
        &self.return_type
    }

    fn execute(&self, _args: &[Value]) -> FunctionResult<Value> {
        Ok(Value::String(self.tag.clone()))
    }
}
