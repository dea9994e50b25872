// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec implementations and configuration-time resolution.
//!
//! The codec system is organized into layers:
//!
//! - **Core trait** ([`Codec`]) - the serialize/deserialize capability pair
//! - **Built-in codecs** ([`MsgpackCodec`], [`JsonCodec`]) - concrete engines
//! - **Adapter** ([`AdapterCodec`], [`Engine`]) - caller-supplied engines
//! - **Resolution** ([`resolve`], [`CodecRegistry`]) - picks a codec once at
//!   configuration time

pub mod adapter;
pub mod codec;
pub mod json;
pub mod msgpack;
pub mod registry;
pub mod resolver;

pub use adapter::{AdapterCodec, DumpFn, Engine, LoadFn, SerializerEngine};
pub use codec::{BoxCodec, Codec};
pub use json::JsonCodec;
pub use msgpack::MsgpackCodec;
pub use registry::{global_registry, CodecFactory, CodecRegistry};
pub use resolver::{resolve, resolve_format, resolve_named};
