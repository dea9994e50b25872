// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Adapter codec for caller-supplied serialization engines.
//!
//! An [`Engine`] is the configuration-time candidate handed to
//! [`resolve`](super::resolve): a pair of optional `dumps`/`loads` hooks.
//! The pair of hook names is fixed; providing only one of them leaves the
//! candidate incomplete and resolution falls back to the default codec
//! instead of failing. An [`AdapterCodec`] is only ever constructed from a
//! complete pair, so a half-wired engine can never reach the
//! serialize/deserialize path.
//!
//! Engines that implement both operations on one type can go through the
//! [`SerializerEngine`] trait instead of wiring hooks by hand.
//!
//! ## Example
//!
//! ```
//! use jobcodec::encoding::{resolve, Codec, Engine};
//! use jobcodec::JobValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new()
//!     .with_dumps(|value| Ok(format!("{value:?}").into_bytes()))
//!     .with_loads(|data| Ok(JobValue::Bytes(data.to_vec())));
//! let codec = resolve(Some(engine));
//! assert_eq!(codec.format_name(), "adapter");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::core::{BoxError, CodecError, JobValue, Result};

use super::codec::Codec;

/// Engine hook encoding a value into bytes.
pub type DumpFn = dyn Fn(&JobValue) -> std::result::Result<Vec<u8>, BoxError> + Send + Sync;

/// Engine hook decoding bytes into a value.
pub type LoadFn = dyn Fn(&[u8]) -> std::result::Result<JobValue, BoxError> + Send + Sync;

/// A caller-supplied serialization engine with both operations present.
///
/// Implementors must be reentrant: the wrapping codec is shared across
/// threads and calls both operations concurrently without locking.
pub trait SerializerEngine: Send + Sync {
    /// Encode a value into bytes. Any error is caught and wrapped by the
    /// adapter codec.
    fn dumps(&self, value: &JobValue) -> std::result::Result<Vec<u8>, BoxError>;

    /// Decode bytes into a value. Any error is caught and wrapped by the
    /// adapter codec.
    fn loads(&self, data: &[u8]) -> std::result::Result<JobValue, BoxError>;
}

/// Configuration-time candidate for a caller-supplied engine.
///
/// Holds an optional `dumps` and an optional `loads` hook. Resolution only
/// accepts a candidate exposing both; anything less degrades to the default
/// codec. Hooks are stored behind `Arc`, so the exact callables supplied
/// here are the ones a constructed adapter invokes.
#[derive(Clone, Default)]
pub struct Engine {
    dumps: Option<Arc<DumpFn>>,
    loads: Option<Arc<LoadFn>>,
}

impl Engine {
    /// Create an empty candidate with no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the `dumps` hook.
    pub fn with_dumps<F>(mut self, f: F) -> Self
    where
        F: Fn(&JobValue) -> std::result::Result<Vec<u8>, BoxError> + Send + Sync + 'static,
    {
        self.dumps = Some(Arc::new(f));
        self
    }

    /// Supply the `loads` hook.
    pub fn with_loads<F>(mut self, f: F) -> Self
    where
        F: Fn(&[u8]) -> std::result::Result<JobValue, BoxError> + Send + Sync + 'static,
    {
        self.loads = Some(Arc::new(f));
        self
    }

    /// Build a candidate from a [`SerializerEngine`], which guarantees both
    /// hooks statically.
    pub fn from_serializer<E>(engine: E) -> Self
    where
        E: SerializerEngine + 'static,
    {
        let engine = Arc::new(engine);
        let dump_engine = Arc::clone(&engine);
        Self::new()
            .with_dumps(move |value| dump_engine.dumps(value))
            .with_loads(move |data| engine.loads(data))
    }

    /// Whether the `dumps` hook is present.
    pub fn has_dumps(&self) -> bool {
        self.dumps.is_some()
    }

    /// Whether the `loads` hook is present.
    pub fn has_loads(&self) -> bool {
        self.loads.is_some()
    }

    /// Whether both hooks are present and the candidate can back an adapter.
    pub fn is_complete(&self) -> bool {
        self.has_dumps() && self.has_loads()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("dumps", &self.has_dumps())
            .field("loads", &self.has_loads())
            .finish()
    }
}

/// Codec delegating to a caller-supplied engine.
///
/// Holds the engine's hooks unchanged; every call is wrapped in error
/// translation so an engine failure always surfaces as a
/// [`CodecError`](crate::CodecError), never as a raw engine error.
pub struct AdapterCodec {
    dumps: Arc<DumpFn>,
    loads: Arc<LoadFn>,
}

impl AdapterCodec {
    /// Build an adapter from a complete candidate.
    ///
    /// Returns `None` when either hook is missing; the caller decides what
    /// to fall back to (the resolver uses the default codec).
    pub fn from_engine(engine: Engine) -> Option<Self> {
        match (engine.dumps, engine.loads) {
            (Some(dumps), Some(loads)) => Some(Self { dumps, loads }),
            _ => None,
        }
    }
}

impl Codec for AdapterCodec {
    fn serialize(&self, value: &JobValue) -> Result<Vec<u8>> {
        (self.dumps)(value)
            .map_err(|e| CodecError::encode("Engine dumps hook failed", value.clone(), e))
    }

    fn deserialize(&self, data: &[u8]) -> Result<JobValue> {
        (self.loads)(data).map_err(|e| CodecError::decode("Engine loads hook failed", data, e))
    }

    fn format_name(&self) -> &'static str {
        "adapter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_candidate_is_incomplete() {
        let engine = Engine::new();
        assert!(!engine.has_dumps());
        assert!(!engine.has_loads());
        assert!(!engine.is_complete());
        assert!(AdapterCodec::from_engine(engine).is_none());
    }

    #[test]
    fn test_half_wired_candidate_is_incomplete() {
        let engine = Engine::new().with_dumps(|_| Ok(vec![]));
        assert!(engine.has_dumps());
        assert!(!engine.is_complete());
        assert!(AdapterCodec::from_engine(engine).is_none());

        let engine = Engine::new().with_loads(|_| Ok(JobValue::Null));
        assert!(engine.has_loads());
        assert!(!engine.is_complete());
        assert!(AdapterCodec::from_engine(engine).is_none());
    }

    #[test]
    fn test_complete_candidate_builds_adapter() {
        let engine = Engine::new()
            .with_dumps(|_| Ok(vec![1]))
            .with_loads(|_| Ok(JobValue::Null));
        assert!(engine.is_complete());
        let codec = AdapterCodec::from_engine(engine).unwrap();
        assert_eq!(codec.format_name(), "adapter");
        assert_eq!(codec.serialize(&JobValue::Null).unwrap(), vec![1]);
    }

    #[test]
    fn test_dumps_failure_becomes_encode_error() {
        let engine = Engine::new()
            .with_dumps(|_| Err("dump refused".into()))
            .with_loads(|_| Ok(JobValue::Null));
        let codec = AdapterCodec::from_engine(engine).unwrap();

        let err = codec.serialize(&JobValue::Int(9)).unwrap_err();
        assert!(matches!(err, CodecError::Encode { .. }));
        assert_eq!(err.value(), Some(&JobValue::Int(9)));
        assert_eq!(err.source().unwrap().to_string(), "dump refused");
    }

    #[test]
    fn test_loads_failure_becomes_decode_error() {
        let engine = Engine::new()
            .with_dumps(|_| Ok(vec![]))
            .with_loads(|_| Err("load refused".into()));
        let codec = AdapterCodec::from_engine(engine).unwrap();

        let err = codec.deserialize(&[4, 5, 6]).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
        assert_eq!(err.payload(), Some(&[4u8, 5, 6][..]));
        assert_eq!(err.source().unwrap().to_string(), "load refused");
    }

    #[test]
    fn test_from_serializer_wires_both_hooks() {
        struct Reversing;

        impl SerializerEngine for Reversing {
            fn dumps(&self, value: &JobValue) -> std::result::Result<Vec<u8>, BoxError> {
                let s = value.as_str().ok_or("only strings")?;
                Ok(s.bytes().rev().collect())
            }

            fn loads(&self, data: &[u8]) -> std::result::Result<JobValue, BoxError> {
                let s = std::str::from_utf8(data)?;
                Ok(JobValue::String(s.chars().rev().collect()))
            }
        }

        let engine = Engine::from_serializer(Reversing);
        assert!(engine.is_complete());
        let codec = AdapterCodec::from_engine(engine).unwrap();

        let value = JobValue::String("abc".to_string());
        let bytes = codec.serialize(&value).unwrap();
        assert_eq!(bytes, b"cba");
        assert_eq!(codec.deserialize(&bytes).unwrap(), value);
    }

    #[test]
    fn test_debug_does_not_require_hook_debug() {
        let engine = Engine::new().with_dumps(|_| Ok(vec![]));
        let repr = format!("{engine:?}");
        assert!(repr.contains("dumps: true"));
        assert!(repr.contains("loads: false"));
    }
}
