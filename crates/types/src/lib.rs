// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # extfn - Shared Types
//!
//! Value types shared between the function registry and extension crates:
//!
//! - [`FunctionName`]: the key a pluggable function is registered under
//! - [`DataType`]: a type descriptor; an argument type list is `&[DataType]`

pub mod data_type;
pub mod name;

// Re-export commonly used types
pub use data_type::DataType;
pub use name::{FunctionName, InvalidFunctionName, MAX_NAME_LEN};
