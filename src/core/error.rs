// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for jobcodec.
//!
//! Serialization failures are split into two kinds so callers can tell "we
//! produced bad input data" apart from "we received bad input data" and apply
//! the right retry/alerting policy:
//! - [`CodecError::Encode`] from `serialize`
//! - [`CodecError::Decode`] from `deserialize`
//!
//! Both carry the offending payload and the unaltered underlying cause. This
//! crate never logs internally; errors expose [`CodecError::log_fields`] so
//! the job/task layer can do structured logging at its own level.

use std::fmt;

use crate::core::value::JobValue;

/// Boxed error type accepted as an underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Maximum number of payload bytes retained on a [`CodecError::Decode`] for
/// diagnostics. The full input length is still recorded.
pub const MAX_DIAGNOSTIC_BYTES: usize = 256;

/// Errors produced at the serialization boundary.
#[derive(Debug)]
pub enum CodecError {
    /// The wrapped engine failed to encode a value.
    Encode {
        /// Error message
        message: String,
        /// Owned copy of the value that failed to encode, for diagnostics
        value: JobValue,
        /// Underlying engine error, unaltered
        cause: BoxError,
    },

    /// The wrapped engine failed to decode a byte payload.
    Decode {
        /// Error message
        message: String,
        /// Input bytes, truncated to [`MAX_DIAGNOSTIC_BYTES`]
        payload: Vec<u8>,
        /// Length of the original input before truncation
        payload_len: usize,
        /// Underlying engine error, unaltered
        cause: BoxError,
    },

    /// A named format was requested that no registered codec provides.
    UnknownFormat {
        /// Requested format name
        name: String,
    },
}

impl CodecError {
    /// Create an encode error carrying the offending value and its cause.
    pub fn encode(
        message: impl Into<String>,
        value: JobValue,
        cause: impl Into<BoxError>,
    ) -> Self {
        CodecError::Encode {
            message: message.into(),
            value,
            cause: cause.into(),
        }
    }

    /// Create a decode error carrying a bounded copy of the input and its
    /// cause.
    pub fn decode(message: impl Into<String>, data: &[u8], cause: impl Into<BoxError>) -> Self {
        let mut payload = data.to_vec();
        payload.truncate(MAX_DIAGNOSTIC_BYTES);
        CodecError::Decode {
            message: message.into(),
            payload,
            payload_len: data.len(),
            cause: cause.into(),
        }
    }

    /// Create an "unknown format" error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        CodecError::UnknownFormat { name: name.into() }
    }

    /// The value a failed encode was attempting to serialize.
    pub fn value(&self) -> Option<&JobValue> {
        match self {
            CodecError::Encode { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The (possibly truncated) input bytes of a failed decode.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            CodecError::Decode { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Full input length of a failed decode, before truncation.
    pub fn payload_len(&self) -> Option<usize> {
        match self {
            CodecError::Decode { payload_len, .. } => Some(*payload_len),
            _ => None,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Encode {
                message,
                value,
                cause,
            } => vec![
                ("message", message.clone()),
                ("value_type", value.type_name().to_string()),
                ("cause", cause.to_string()),
            ],
            CodecError::Decode {
                message,
                payload,
                payload_len,
                cause,
            } => vec![
                ("message", message.clone()),
                ("payload_len", payload_len.to_string()),
                ("payload_prefix", hex::encode(payload)),
                ("cause", cause.to_string()),
            ],
            CodecError::UnknownFormat { name } => vec![("format", name.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Encode { message, value, .. } => {
                write!(f, "{message} (value type: {})", value.type_name())
            }
            CodecError::Decode {
                message,
                payload_len,
                ..
            } => {
                write!(f, "{message} (payload: {payload_len} bytes)")
            }
            CodecError::UnknownFormat { name } => {
                write!(f, "Unknown serialization format: '{name}'")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Encode { cause, .. } | CodecError::Decode { cause, .. } => {
                Some(cause.as_ref())
            }
            CodecError::UnknownFormat { .. } => None,
        }
    }
}

/// Result type for jobcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
