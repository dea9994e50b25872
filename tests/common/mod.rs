// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jobcodec::{BoxError, Codec, Engine, FieldMap, JobValue, MsgpackCodec, SerializerEngine};

// ============================================================================
// Sample Payloads
// ============================================================================

/// A representative task invocation payload: name, positional args, kwargs.
pub fn sample_task_payload() -> JobValue {
    let mut kwargs = FieldMap::new();
    kwargs.insert("queue".to_string(), JobValue::String("default".into()));
    kwargs.insert("retries".to_string(), JobValue::Int(3));
    kwargs.insert("attachment".to_string(), JobValue::Bytes(vec![0, 159, 146]));

    let mut payload = FieldMap::new();
    payload.insert("task".to_string(), JobValue::String("send_mail".into()));
    payload.insert(
        "args".to_string(),
        JobValue::Array(vec![
            JobValue::String("user@example.com".into()),
            JobValue::Int(7),
            JobValue::Null,
        ]),
    );
    payload.insert("kwargs".to_string(), JobValue::Map(kwargs));
    JobValue::Map(payload)
}

// ============================================================================
// Test Engines
// ============================================================================

/// Engine that passes string payloads through unchanged.
pub fn identity_string_engine() -> Engine {
    Engine::new()
        .with_dumps(|value: &JobValue| {
            let s = value.as_str().ok_or("identity engine only carries strings")?;
            Ok(s.as_bytes().to_vec())
        })
        .with_loads(|data: &[u8]| {
            let s = std::str::from_utf8(data)?;
            Ok(JobValue::String(s.to_string()))
        })
}

/// Engine delegating to the MessagePack codec while counting hook calls.
///
/// The counters prove that an adapter built from this engine invokes exactly
/// the supplied hooks rather than some internal copy.
pub struct CountingEngine {
    pub dumps_calls: Arc<AtomicUsize>,
    pub loads_calls: Arc<AtomicUsize>,
}

impl CountingEngine {
    pub fn new() -> Self {
        Self {
            dumps_calls: Arc::new(AtomicUsize::new(0)),
            loads_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Build the resolver candidate, sharing this instance's counters.
    pub fn candidate(&self) -> Engine {
        let dumps_calls = Arc::clone(&self.dumps_calls);
        let loads_calls = Arc::clone(&self.loads_calls);
        Engine::new()
            .with_dumps(move |value: &JobValue| {
                dumps_calls.fetch_add(1, Ordering::SeqCst);
                Ok(MsgpackCodec::new().serialize(value)?)
            })
            .with_loads(move |data: &[u8]| {
                loads_calls.fetch_add(1, Ordering::SeqCst);
                Ok(MsgpackCodec::new().deserialize(data)?)
            })
    }
}

/// Error type raised by the failing engines, distinguishable via downcast.
#[derive(Debug, PartialEq, Eq)]
pub struct EngineFault(pub &'static str);

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine fault: {}", self.0)
    }
}

impl std::error::Error for EngineFault {}

/// Engine whose dumps hook always fails; loads succeeds.
pub struct FailingDumpsEngine;

impl SerializerEngine for FailingDumpsEngine {
    fn dumps(&self, _value: &JobValue) -> Result<Vec<u8>, BoxError> {
        Err(Box::new(EngineFault("dumps")))
    }

    fn loads(&self, _data: &[u8]) -> Result<JobValue, BoxError> {
        Ok(JobValue::Null)
    }
}

/// Engine whose loads hook always fails; dumps succeeds.
pub struct FailingLoadsEngine;

impl SerializerEngine for FailingLoadsEngine {
    fn dumps(&self, _value: &JobValue) -> Result<Vec<u8>, BoxError> {
        Ok(vec![])
    }

    fn loads(&self, _data: &[u8]) -> Result<JobValue, BoxError> {
        Err(Box::new(EngineFault("loads")))
    }
}
