// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Job payload value type system.
//!
//! Provides a self-describing value representation for everything the queue
//! persists on behalf of a task: argument lists, keyword maps, return values,
//! and failure payloads. All variants are serde-serializable so any
//! serde-backed codec can carry them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type alias for a keyword-argument style mapping of field name -> value.
pub type FieldMap = HashMap<String, JobValue>;

/// Self-describing value carried across the serialization boundary.
///
/// This enum is the in-memory shape of task arguments, return values, and
/// failure payloads. Codecs treat it as opaque: they only need it to be a
/// serde tree. It is `Clone` so errors can carry an owned copy of the
/// offending value for diagnostics.
///
/// # Design Principles
///
/// - **Serde support**: all variants serialize through any serde format
/// - **Owned types**: `String` and `Vec<u8>` keep payloads independent of
///   their producers
/// - **Wide integers**: dynamic job arguments collapse to `i64`/`u64`/`f64`
///   rather than tracking every machine width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JobValue {
    /// Absent/None value for optional arguments
    Null,

    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Unsigned integer too large for `Int`
    UInt(u64),

    Float(f64),

    /// UTF-8 string
    String(String),

    /// Binary data (compressed blobs, opaque attachments)
    Bytes(Vec<u8>),

    /// Positional argument list or any sequence value
    Array(Vec<JobValue>),

    /// Keyword arguments or any nested mapping
    Map(FieldMap),
}

impl JobValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, JobValue::Null)
    }

    /// Check if this value is a numeric type (integer or float).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            JobValue::Int(_) | JobValue::UInt(_) | JobValue::Float(_)
        )
    }

    /// Check if this value is an integer (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(self, JobValue::Int(_) | JobValue::UInt(_))
    }

    /// Check if this value is a container type (array or map).
    pub fn is_container(&self) -> bool {
        matches!(self, JobValue::Array(_) | JobValue::Map(_))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to read this value as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JobValue::Int(v) => Some(*v),
            JobValue::UInt(v) => {
                if *v <= i64::MAX as u64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to read this value as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            JobValue::UInt(v) => Some(*v),
            JobValue::Int(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to read this value as f64 (integers widen).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JobValue::Int(v) => Some(*v as f64),
            JobValue::UInt(v) => Some(*v as f64),
            JobValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to read this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JobValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            JobValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to read this value as an array.
    pub fn as_array(&self) -> Option<&[JobValue]> {
        match self {
            JobValue::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Try to read this value as a field map.
    pub fn as_map(&self) -> Option<&FieldMap> {
        match self {
            JobValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JobValue::Null => "null",
            JobValue::Bool(_) => "bool",
            JobValue::Int(_) => "int",
            JobValue::UInt(_) => "uint",
            JobValue::Float(_) => "float",
            JobValue::String(_) => "string",
            JobValue::Bytes(_) => "bytes",
            JobValue::Array(_) => "array",
            JobValue::Map(_) => "map",
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for JobValue {
    fn from(v: bool) -> Self {
        JobValue::Bool(v)
    }
}

impl From<i32> for JobValue {
    fn from(v: i32) -> Self {
        JobValue::Int(v as i64)
    }
}

impl From<i64> for JobValue {
    fn from(v: i64) -> Self {
        JobValue::Int(v)
    }
}

impl From<u64> for JobValue {
    fn from(v: u64) -> Self {
        if v <= i64::MAX as u64 {
            JobValue::Int(v as i64)
        } else {
            JobValue::UInt(v)
        }
    }
}

impl From<f64> for JobValue {
    fn from(v: f64) -> Self {
        JobValue::Float(v)
    }
}

impl From<&str> for JobValue {
    fn from(v: &str) -> Self {
        JobValue::String(v.to_string())
    }
}

impl From<String> for JobValue {
    fn from(v: String) -> Self {
        JobValue::String(v)
    }
}

impl From<Vec<u8>> for JobValue {
    fn from(v: Vec<u8>) -> Self {
        JobValue::Bytes(v)
    }
}

impl From<Vec<JobValue>> for JobValue {
    fn from(v: Vec<JobValue>) -> Self {
        JobValue::Array(v)
    }
}

impl From<FieldMap> for JobValue {
    fn from(v: FieldMap) -> Self {
        JobValue::Map(v)
    }
}

impl<T: Into<JobValue>> From<Option<T>> for JobValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => JobValue::Null,
        }
    }
}
