// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Type descriptors
//!
//! [`DataType`] describes the type of a single function argument or return
//! value. Factories receive the argument types of a call as `&[DataType]`,
//! in positional order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CQL data types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataType {
    // Numeric types
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    VarInt,
    Counter,
    Float,
    Double,
    Decimal,

    // String types
    Ascii,
    Text,

    // Binary
    Blob,

    // Boolean
    Boolean,

    // Date/Time types
    Date,
    Time,
    Timestamp,
    Duration,

    // Identifiers
    Uuid,
    TimeUuid,
    Inet,

    // Collections
    List(Box<DataType>),
    Set(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
    Tuple(Vec<DataType>),
    Frozen(Box<DataType>),

    // User-defined or custom type (with original type name)
    Custom(String),
}

impl DataType {
    /// Shorthand for `list<element>`
    pub fn list(element: DataType) -> Self {
        DataType::List(Box::new(element))
    }

    /// Shorthand for `set<element>`
    pub fn set(element: DataType) -> Self {
        DataType::Set(Box::new(element))
    }

    /// Shorthand for `map<key, value>`
    pub fn map(key: DataType, value: DataType) -> Self {
        DataType::Map(Box::new(key), Box::new(value))
    }

    /// Shorthand for `frozen<inner>`
    pub fn frozen(inner: DataType) -> Self {
        DataType::Frozen(Box::new(inner))
    }

    /// Whether values of this type are numbers
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::TinyInt
                | DataType::SmallInt
                | DataType::Int
                | DataType::BigInt
                | DataType::VarInt
                | DataType::Counter
                | DataType::Float
                | DataType::Double
                | DataType::Decimal
        )
    }

    /// Whether this is a collection or tuple type
    pub fn is_collection(&self) -> bool {
        match self {
            DataType::List(_) | DataType::Set(_) | DataType::Map(_, _) | DataType::Tuple(_) => true,
            DataType::Frozen(inner) => inner.is_collection(),
            _ => false,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::TinyInt => f.write_str("tinyint"),
            DataType::SmallInt => f.write_str("smallint"),
            DataType::Int => f.write_str("int"),
            DataType::BigInt => f.write_str("bigint"),
            DataType::VarInt => f.write_str("varint"),
            DataType::Counter => f.write_str("counter"),
            DataType::Float => f.write_str("float"),
            DataType::Double => f.write_str("double"),
            DataType::Decimal => f.write_str("decimal"),
            DataType::Ascii => f.write_str("ascii"),
            DataType::Text => f.write_str("text"),
            DataType::Blob => f.write_str("blob"),
            DataType::Boolean => f.write_str("boolean"),
            DataType::Date => f.write_str("date"),
            DataType::Time => f.write_str("time"),
            DataType::Timestamp => f.write_str("timestamp"),
            DataType::Duration => f.write_str("duration"),
            DataType::Uuid => f.write_str("uuid"),
            DataType::TimeUuid => f.write_str("timeuuid"),
            DataType::Inet => f.write_str("inet"),
            DataType::List(element) => write!(f, "list<{element}>"),
            DataType::Set(element) => write!(f, "set<{element}>"),
            DataType::Map(key, value) => write!(f, "map<{key}, {value}>"),
            DataType::Tuple(elements) => {
                f.write_str("tuple<")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(">")
            }
            DataType::Frozen(inner) => write!(f, "frozen<{inner}>"),
            DataType::Custom(name) => write!(f, "'{name}'"),
        }
    }
}
