// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! `to_json(value)`: renders any single value as JSON text

use crate::function::{Function, FunctionError, FunctionResult, expect_arity};
use crate::provider::{FunctionFactory, FunctionProvider};
use extfn_types::{DataType, FunctionName};
use serde_json::Value;
use std::sync::Arc;

/// Registered name
pub const NAME: &str = "to_json";

/// CQL spelling, bound to the same factory as [`NAME`]
pub const CQL_NAME: &str = "tojson";

/// Provider and factory for `to_json`
#[derive(Debug, Default, Clone, Copy)]
pub struct ToJsonProvider;

impl FunctionProvider for ToJsonProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn factory(&self) -> Arc<dyn FunctionFactory> {
        Arc::new(*self)
    }
}

impl FunctionFactory for ToJsonProvider {
    fn create(&self, arg_types: &[DataType]) -> FunctionResult<Arc<dyn Function>> {
        Ok(Arc::new(ToJson::new(arg_types)?))
    }
}

/// `to_json` specialised to one argument type
#[derive(Debug, Clone)]
pub struct ToJson {
    name: FunctionName,
    arg_types: Vec<DataType>,
    return_type: DataType,
}

impl ToJson {
    /// Accepts exactly one argument of any type
    pub fn new(arg_types: &[DataType]) -> FunctionResult<Self> {
        expect_arity(arg_types, 1)?;

        Ok(Self {
            name: FunctionName::new(NAME),
            arg_types: arg_types.to_vec(),
            return_type: DataType::Text,
        })
    }
}

impl Function for ToJson {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arg_types(&self) -> &[DataType] {
        &self.arg_types
    }

    fn return_type(&self) -> &DataType {
        &self.return_type
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        expect_arity(args, 1)?;

        serde_json::to_string(&args[0])
            .map(Value::String)
            .map_err(|e| FunctionError::Execution(e.to_string()))
    }
}
