// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec registry for name-based codec selection.
//!
//! This module provides a registry pattern for codecs, allowing:
//! - Host config layers to select a codec by name ("msgpack", "json")
//! - Registration of additional codec factories at startup
//! - Centralized codec management
//!
//! The registry only participates in configuration-time resolution; the
//! serialize/deserialize hot path never touches its lock.
//!
//! # Example
//!
//! ```
//! use jobcodec::encoding::{global_registry, Codec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = global_registry().get_codec("msgpack")?;
//! assert_eq!(codec.format_name(), "msgpack");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::{CodecError, Format, Result};

use super::codec::BoxCodec;
use super::json::JsonCodec;
use super::msgpack::MsgpackCodec;

/// Factory for creating codec instances.
pub trait CodecFactory: Send + Sync {
    /// Create a new codec instance.
    fn create(&self) -> BoxCodec;
}

/// Registry of codec factories keyed by format name.
#[derive(Default)]
pub struct CodecRegistry {
    // RwLock guards registration; resolution is read-only
    factories: RwLock<HashMap<String, Box<dyn CodecFactory>>>,
}

impl CodecRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec factory for a format name.
    ///
    /// Replaces any factory previously registered under the same name.
    pub fn register(&self, format: impl Into<String>, factory: Box<dyn CodecFactory>) {
        let mut factories = self.factories.write().unwrap();
        factories.insert(format.into(), factory);
    }

    /// Unregister a codec factory.
    ///
    /// Returns `true` if a factory was unregistered, `false` if not found.
    pub fn unregister(&self, format: &str) -> bool {
        let mut factories = self.factories.write().unwrap();
        factories.remove(format).is_some()
    }

    /// Check if a format name is registered.
    pub fn contains(&self, format: &str) -> bool {
        let factories = self.factories.read().unwrap();
        factories.contains_key(format)
    }

    /// Create a codec by format name.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownFormat`] if the name is not registered.
    pub fn get_codec(&self, format: &str) -> Result<BoxCodec> {
        let factories = self.factories.read().unwrap();
        factories
            .get(format)
            .map(|factory| factory.create())
            .ok_or_else(|| CodecError::unknown_format(format))
    }

    /// Get all registered format names.
    pub fn registered_formats(&self) -> Vec<String> {
        let factories = self.factories.read().unwrap();
        factories.keys().cloned().collect()
    }

    /// Get the number of registered codecs.
    pub fn count(&self) -> usize {
        let factories = self.factories.read().unwrap();
        factories.len()
    }
}

/// Factory for the MessagePack codec.
pub struct MsgpackCodecFactory;

impl CodecFactory for MsgpackCodecFactory {
    fn create(&self) -> BoxCodec {
        Box::new(MsgpackCodec::new())
    }
}

/// Factory for the JSON codec.
pub struct JsonCodecFactory;

impl CodecFactory for JsonCodecFactory {
    fn create(&self) -> BoxCodec {
        Box::new(JsonCodec::new())
    }
}

/// Global codec registry.
///
/// This is a convenience singleton for accessing the global registry.
/// For custom registries, create a `CodecRegistry` instance directly.
static GLOBAL_REGISTRY: std::sync::OnceLock<CodecRegistry> = std::sync::OnceLock::new();

fn init_global_registry() -> CodecRegistry {
    let registry = CodecRegistry::new();
    registry.register(Format::Msgpack.as_str(), Box::new(MsgpackCodecFactory));
    registry.register(Format::Json.as_str(), Box::new(JsonCodecFactory));
    registry
}

/// Get the global codec registry, with the built-in codecs pre-registered.
pub fn global_registry() -> &'static CodecRegistry {
    GLOBAL_REGISTRY.get_or_init(init_global_registry)
}
