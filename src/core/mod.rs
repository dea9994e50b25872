// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jobcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling for the serialization boundary
//! - [`JobValue`] - Unified payload value representation
//! - [`Format`] - Built-in serialization format identifier

pub mod error;
pub mod value;

pub use error::{BoxError, CodecError, Result, MAX_DIAGNOSTIC_BYTES};
pub use value::{FieldMap, JobValue};

/// Built-in serialization format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// MessagePack encoding, the default
    Msgpack,
    /// JSON encoding
    Json,
}

/// Error returned when parsing a `Format` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError {
    _private: (),
}

impl std::fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid format name, expected 'msgpack' or 'json'")
    }
}

impl std::error::Error for ParseFormatError {}

impl std::str::FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "msgpack" | "messagepack" => Ok(Format::Msgpack),
            "json" => Ok(Format::Json),
            _ => Err(ParseFormatError { _private: () }),
        }
    }
}

impl Format {
    /// Check if this format is MessagePack.
    pub fn is_msgpack(&self) -> bool {
        matches!(self, Format::Msgpack)
    }

    /// Check if this format is JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Format::Json)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Msgpack => "msgpack",
            Format::Json => "json",
        }
    }
}
