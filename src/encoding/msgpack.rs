// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! MessagePack codec, the default serialization engine.
//!
//! Wraps `rmp-serde` in named (struct-as-map) mode, so variant and field
//! names travel with the payload and decoding needs no external schema.
//! Bytes are compatible between processes running the same `rmp-serde`
//! major version; no broader compatibility is guaranteed.

use crate::core::{CodecError, JobValue, Result};

use super::codec::Codec;

/// MessagePack codec for job payloads.
///
/// This is the codec the resolver falls back to whenever no usable engine is
/// supplied. Stateless; construction cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgpackCodec {
    _private: (),
}

impl MsgpackCodec {
    /// Create a new MessagePack codec.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Codec for MsgpackCodec {
    fn serialize(&self, value: &JobValue) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(value)
            .map_err(|e| CodecError::encode("Could not encode value as MessagePack", value.clone(), e))
    }

    fn deserialize(&self, data: &[u8]) -> Result<JobValue> {
        rmp_serde::from_slice(data)
            .map_err(|e| CodecError::decode("Could not decode MessagePack payload", data, e))
    }

    fn format_name(&self) -> &'static str {
        "msgpack"
    }
}
