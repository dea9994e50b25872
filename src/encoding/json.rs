// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON codec for job payloads.
//!
//! Encodes structurally rather than through the `JobValue` serde derive, so
//! the stored form is plain JSON a human or another tool can read:
//! `{"retries": 3}` instead of tagged variant maps.
//!
//! The structural form is lossy for types JSON cannot express natively:
//! bytes encode as hex strings and decode back as strings, and integer
//! signedness collapses to whatever `serde_json` infers. Use the MessagePack
//! codec when exact round-tripping matters.

use crate::core::{CodecError, FieldMap, JobValue, Result};

use super::codec::Codec;

/// JSON codec for job payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    _private: (),
}

impl JsonCodec {
    /// Create a new JSON codec.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Convert a job value to a JSON value.
    fn to_json(value: &JobValue) -> std::result::Result<serde_json::Value, String> {
        match value {
            JobValue::Null => Ok(serde_json::Value::Null),
            JobValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            JobValue::Int(i) => Ok(serde_json::Value::Number(serde_json::Number::from(*i))),
            JobValue::UInt(u) => Ok(serde_json::Value::Number(serde_json::Number::from(*u))),
            JobValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| format!("float {f} is not representable as a JSON number")),
            JobValue::String(s) => Ok(serde_json::Value::String(s.clone())),
            JobValue::Bytes(b) => Ok(serde_json::Value::String(hex::encode(b))),
            JobValue::Array(arr) => {
                let mut values = Vec::with_capacity(arr.len());
                for item in arr {
                    values.push(Self::to_json(item)?);
                }
                Ok(serde_json::Value::Array(values))
            }
            JobValue::Map(map) => {
                let mut obj = serde_json::Map::new();
                for (key, val) in map {
                    obj.insert(key.clone(), Self::to_json(val)?);
                }
                Ok(serde_json::Value::Object(obj))
            }
        }
    }

    /// Convert a JSON value to a job value.
    fn from_json(value: serde_json::Value) -> JobValue {
        match value {
            serde_json::Value::Null => JobValue::Null,
            serde_json::Value::Bool(b) => JobValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JobValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    JobValue::UInt(u)
                } else {
                    // as_f64 is total over the remaining JSON numbers
                    JobValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => JobValue::String(s),
            serde_json::Value::Array(arr) => {
                JobValue::Array(arr.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut map = FieldMap::new();
                for (key, val) in obj {
                    map.insert(key, Self::from_json(val));
                }
                JobValue::Map(map)
            }
        }
    }
}

impl Codec for JsonCodec {
    fn serialize(&self, value: &JobValue) -> Result<Vec<u8>> {
        let json_value = Self::to_json(value).map_err(|reason| {
            CodecError::encode("Could not encode value as JSON", value.clone(), reason)
        })?;
        serde_json::to_vec(&json_value)
            .map_err(|e| CodecError::encode("Could not encode value as JSON", value.clone(), e))
    }

    fn deserialize(&self, data: &[u8]) -> Result<JobValue> {
        let json_value: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| CodecError::decode("Could not decode JSON payload", data, e))?;
        Ok(Self::from_json(json_value))
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
