// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function names
//!
//! A [`FunctionName`] is the registry key for a pluggable function. Names are
//! compared exactly; no case folding is applied.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Longest accepted function name, in bytes
pub const MAX_NAME_LEN: usize = 48;

/// Errors produced when validating a function name
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum InvalidFunctionName {
    /// The name is empty
    #[error("Function name is empty")]
    Empty,

    /// The name exceeds [`MAX_NAME_LEN`]
    #[error("Function name '{0}' is longer than {max} bytes", max = MAX_NAME_LEN)]
    TooLong(String),

    /// The name starts with a digit
    #[error("Function name '{0}' must not start with a digit")]
    LeadingDigit(String),

    /// The name contains a character outside `[A-Za-z0-9_]`
    #[error("Function name '{name}' contains invalid character {found:?}")]
    InvalidCharacter { name: String, found: char },
}

/// Identifier of a pluggable function
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FunctionName(String);

impl FunctionName {
    /// Create a function name without validation
    ///
    /// Use this for names known at compile time. Names coming from
    /// extension metadata should go through [`FunctionName::parse`].
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Validate and create a function name
    ///
    /// # Examples
    ///
    /// ```
    /// use extfn_types::FunctionName;
    ///
    /// assert!(FunctionName::parse("to_json").is_ok());
    /// assert!(FunctionName::parse("").is_err());
    /// assert!(FunctionName::parse("1st").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, InvalidFunctionName> {
        let first = name.chars().next().ok_or(InvalidFunctionName::Empty)?;

        if name.len() > MAX_NAME_LEN {
            return Err(InvalidFunctionName::TooLong(name.to_string()));
        }

        if first.is_ascii_digit() {
            return Err(InvalidFunctionName::LeadingDigit(name.to_string()));
        }

        if let Some(found) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(InvalidFunctionName::InvalidCharacter {
                name: name.to_string(),
                found,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FunctionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FunctionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FunctionName {
    type Error = InvalidFunctionName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.0
    }
}
