// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configuration-time codec resolution.
//!
//! [`resolve`] maps an optional engine candidate to a usable codec and is
//! total: it never fails and never returns an unusable codec. A candidate
//! missing either of its `dumps`/`loads` hooks degrades silently to the
//! default MessagePack codec. That permissive fallback is deliberate, so a
//! misconfigured engine downgrades behavior instead of failing session
//! setup; only the eventual serialize/deserialize calls can error.
//!
//! [`resolve_format`] and [`resolve_named`] serve host config layers that
//! select a built-in codec by enum or by name.

use crate::core::{Format, Result};

use super::adapter::{AdapterCodec, Engine};
use super::codec::BoxCodec;
use super::json::JsonCodec;
use super::msgpack::MsgpackCodec;
use super::registry::global_registry;

/// Resolve an optional engine candidate to a codec.
///
/// - `None` resolves to the default MessagePack codec.
/// - A candidate exposing both `dumps` and `loads` resolves to an adapter
///   wrapping exactly those hooks.
/// - A candidate missing either hook resolves to the default codec.
///
/// Idempotent: equivalent inputs yield independent, behaviorally identical
/// codec instances.
pub fn resolve(engine: Option<Engine>) -> BoxCodec {
    let Some(engine) = engine else {
        return Box::new(MsgpackCodec::new());
    };

    match AdapterCodec::from_engine(engine) {
        Some(adapter) => Box::new(adapter),
        None => {
            tracing::debug!("engine candidate lacks a dumps/loads pair, using the default codec");
            Box::new(MsgpackCodec::new())
        }
    }
}

/// Resolve a built-in format to its codec. Total over [`Format`].
pub fn resolve_format(format: Format) -> BoxCodec {
    match format {
        Format::Msgpack => Box::new(MsgpackCodec::new()),
        Format::Json => Box::new(JsonCodec::new()),
    }
}

/// Resolve a codec by registered format name.
///
/// # Errors
///
/// Returns [`CodecError::UnknownFormat`](crate::CodecError::UnknownFormat)
/// if no codec is registered under `name`.
pub fn resolve_named(name: &str) -> Result<BoxCodec> {
    global_registry().get_codec(name)
}
