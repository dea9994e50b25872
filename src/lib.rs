// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Jobcodec
//!
//! Pluggable serialization boundary for job-queue payloads.
//!
//! A queue that persists task arguments, return values, and failure payloads
//! needs one thing from its serializer: a matched pair of operations that
//! either succeeds or fails loudly with enough context to diagnose. This
//! library provides that boundary:
//! - A [`Codec`] trait with `serialize`/`deserialize` over [`JobValue`]
//! - A MessagePack default codec and a JSON alternative
//! - An adapter for caller-supplied engines, with configuration-time
//!   capability checking and silent fallback to the default
//! - Errors that classify encode vs decode failures and carry the offending
//!   payload plus the unaltered cause
//!
//! ## Example: default codec
//!
//! ```
//! use jobcodec::{resolve, Codec, JobValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = resolve(None);
//! let bytes = codec.serialize(&JobValue::from(42i64))?;
//! assert_eq!(codec.deserialize(&bytes)?, JobValue::Int(42));
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: caller-supplied engine
//!
//! ```
//! use jobcodec::{resolve, Codec, Engine, JobValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new()
//!     .with_dumps(|value| Ok(serde_json::to_vec(value)?))
//!     .with_loads(|data| Ok(serde_json::from_slice(data)?));
//! let codec = resolve(Some(engine));
//! let bytes = codec.serialize(&JobValue::from("hello"))?;
//! assert_eq!(codec.deserialize(&bytes)?, JobValue::String("hello".into()));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{BoxError, CodecError, FieldMap, Format, JobValue, Result, MAX_DIAGNOSTIC_BYTES};

// Codecs and resolution
pub mod encoding;

// Re-export the codec surface
pub use encoding::{
    global_registry, resolve, resolve_format, resolve_named, AdapterCodec, BoxCodec, Codec,
    CodecFactory, CodecRegistry, Engine, JsonCodec, MsgpackCodec, SerializerEngine,
};
