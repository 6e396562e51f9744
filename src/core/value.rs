// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record value type system.
//!
//! Provides the structured representation handed between parsers, record
//! handlers and builders. All variants are serde-serializable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A structured record: field name -> value, in insertion order.
pub type Record = IndexMap<String, RecordValue>;

/// Value held by a record field.
///
/// Scalars, nested records and sequences. Containers own their children,
/// so a record can be moved between threads and dropped after dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordValue {
    // Null value for absent/optional fields
    Null,

    Bool(bool),

    // Signed integer
    Int(i64),

    // Unsigned integer that does not fit in i64
    UInt(u64),

    Float(f64),

    // String (UTF-8)
    String(String),

    // Binary data
    Bytes(Vec<u8>),

    // Sequence of values
    Array(Vec<RecordValue>),

    // Nested record
    Record(Record),
}

impl RecordValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            RecordValue::Int(_) | RecordValue::UInt(_) | RecordValue::Float(_)
        )
    }

    /// Check if this value is a container type (array or record).
    pub fn is_container(&self) -> bool {
        matches!(self, RecordValue::Array(_) | RecordValue::Record(_))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, RecordValue::Null)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RecordValue::Int(v) => Some(*v as f64),
            RecordValue::UInt(v) => Some(*v as f64),
            RecordValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RecordValue::Int(v) => Some(*v),
            RecordValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RecordValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RecordValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            RecordValue::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RecordValue]> {
        match self {
            RecordValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordValue::Null => "null",
            RecordValue::Bool(_) => "bool",
            RecordValue::Int(_) => "int",
            RecordValue::UInt(_) => "uint",
            RecordValue::Float(_) => "float",
            RecordValue::String(_) => "string",
            RecordValue::Bytes(_) => "bytes",
            RecordValue::Array(_) => "array",
            RecordValue::Record(_) => "record",
        }
    }
}

// ============================================================================
// From conversions for building records by hand
// ============================================================================

impl From<bool> for RecordValue {
    fn from(v: bool) -> Self {
        RecordValue::Bool(v)
    }
}

impl From<i64> for RecordValue {
    fn from(v: i64) -> Self {
        RecordValue::Int(v)
    }
}

impl From<i32> for RecordValue {
    fn from(v: i32) -> Self {
        RecordValue::Int(v as i64)
    }
}

impl From<u64> for RecordValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => RecordValue::Int(i),
            Err(_) => RecordValue::UInt(v),
        }
    }
}

impl From<f64> for RecordValue {
    fn from(v: f64) -> Self {
        RecordValue::Float(v)
    }
}

impl From<&str> for RecordValue {
    fn from(v: &str) -> Self {
        RecordValue::String(v.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(v: String) -> Self {
        RecordValue::String(v)
    }
}

impl From<Vec<u8>> for RecordValue {
    fn from(v: Vec<u8>) -> Self {
        RecordValue::Bytes(v)
    }
}

impl From<Vec<RecordValue>> for RecordValue {
    fn from(v: Vec<RecordValue>) -> Self {
        RecordValue::Array(v)
    }
}

impl From<Record> for RecordValue {
    fn from(v: Record) -> Self {
        RecordValue::Record(v)
    }
}

impl<T: Into<RecordValue>> From<Option<T>> for RecordValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(RecordValue::Null, Into::into)
    }
}
