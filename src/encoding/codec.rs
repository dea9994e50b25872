// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unified codec interface for the serialization boundary.
//!
//! A [`Codec`] is a matched encode/decode capability pair over an underlying
//! engine. The two concrete built-ins are [`MsgpackCodec`](super::MsgpackCodec)
//! (the default) and [`JsonCodec`](super::JsonCodec); caller-supplied engines
//! are wrapped by [`AdapterCodec`](super::AdapterCodec).
//!
//! ## Example
//!
//! ```
//! use jobcodec::encoding::{resolve, Codec};
//! use jobcodec::JobValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = resolve(None);
//! let bytes = codec.serialize(&JobValue::from(42i64))?;
//! assert_eq!(codec.deserialize(&bytes)?, JobValue::Int(42));
//! # Ok(())
//! # }
//! ```

use crate::core::{JobValue, Result};

/// Unified codec interface for serializing and deserializing job payloads.
///
/// Implementations are immutable once constructed: the wrapped engine is
/// fixed for the codec's lifetime and both operations take `&self`, so one
/// instance can be shared across threads without locking. A caller-supplied
/// engine must itself be reentrant for its dump/load operations; the
/// `Send + Sync` bounds on engine hooks enforce this at the type level.
///
/// Both operations are single-attempt, synchronous, in-memory
/// transformations. Every engine failure is translated into a
/// [`CodecError`](crate::CodecError); implementations never let a raw engine
/// error escape and never recover locally (no default values, no retries).
pub trait Codec: Send + Sync {
    /// Encode a value into an opaque byte sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`](crate::CodecError::Encode) whenever the
    /// underlying engine fails, carrying the offending value and the
    /// unaltered cause.
    fn serialize(&self, value: &JobValue) -> Result<Vec<u8>>;

    /// Decode a byte sequence back into a value.
    ///
    /// The input is not required to come from this codec instance, but only
    /// bytes produced by a matching codec and format version will decode.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`](crate::CodecError::Decode) whenever the
    /// underlying engine fails, carrying a bounded copy of the input and the
    /// unaltered cause.
    fn deserialize(&self, data: &[u8]) -> Result<JobValue>;

    /// Name of the wrapped format (e.g. "msgpack", "json", "adapter"), for
    /// diagnostics and registry listings.
    fn format_name(&self) -> &'static str;
}

/// Owned codec handle returned by resolution.
pub type BoxCodec = Box<dyn Codec>;
