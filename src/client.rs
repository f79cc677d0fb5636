//! Cache Client Module
//!
//! The public client: stores scalar values under generated keys, retrieves
//! them with optional typed decoding, and exposes the recorded call history
//! of its instrumented store operation.

use tracing::debug;

use crate::backend::Backend;
use crate::error::Result;
use crate::trace::{
    replay_report, CountCalls, RecordCalls, RecordedCalls, StoreOp, UuidStore, STORE_NAME,
};
use crate::value::CacheValue;

// == Cache Client ==
/// Client over a backing key-value store.
///
/// Owns the backend handle and the store-operation chain assembled at
/// construction. The default chain counts every call and records each call's
/// input and output before the value lands under a fresh UUID key.
/// Construction never touches existing data; [`CacheClient::reset`] is the
/// explicit destructive operation.
pub struct CacheClient<B: Backend> {
    backend: B,
    store_op: Box<dyn StoreOp<B>>,
}

impl<B: Backend> CacheClient<B> {
    // == Constructors ==
    /// Creates a client with the default instrumented store chain:
    /// count wrapper, history wrapper, UUID store.
    pub fn new(backend: B) -> Self {
        let chain = CountCalls::new(RecordCalls::new(UuidStore::new(STORE_NAME)));
        Self::with_store_op(backend, Box::new(chain))
    }

    /// Creates a client with a caller-assembled store chain, for composing
    /// the wrappers differently or leaving instrumentation out.
    pub fn with_store_op(backend: B, store_op: Box<dyn StoreOp<B>>) -> Self {
        Self { backend, store_op }
    }

    // == Store ==
    /// Stores a value under a fresh generated key and returns the key.
    ///
    /// Runs the client's store chain: with the default chain this is one
    /// counter increment, one input append, the SET itself, and one output
    /// append — sequential round trips, atomic only per command.
    pub async fn store(&mut self, value: impl Into<CacheValue>) -> Result<String> {
        let value = value.into();
        self.store_op.store(&mut self.backend, &value).await
    }

    // == Get ==
    /// Reads the raw bytes stored under `key`, or `None` when absent.
    pub async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.backend.get(key).await
    }

    /// Reads `key` and applies `decode` to the bytes when present.
    ///
    /// Absence stays `None`; a decode failure propagates as an error.
    pub async fn get_with<T, F>(&mut self, key: &str, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        match self.backend.get(key).await? {
            Some(raw) => Ok(Some(decode(raw)?)),
            None => Ok(None),
        }
    }

    /// Reads `key` as UTF-8 text.
    pub async fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        self.get_with(key, |raw| Ok(String::from_utf8(raw)?)).await
    }

    /// Reads `key` as a decimal integer.
    pub async fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, |raw| {
            let text = String::from_utf8(raw)?;
            Ok(text.parse::<i64>()?)
        })
        .await
    }

    // == Reset ==
    /// Drops every key in the backing namespace: stored values, counters,
    /// and history. Destructive; callers opt in explicitly.
    pub async fn reset(&mut self) -> Result<()> {
        debug!("flushing backing namespace");
        self.backend.flushdb().await
    }

    // == Instrumentation ==
    /// Number of recorded invocations of this client's store operation.
    pub async fn call_count(&mut self) -> Result<u64> {
        let name = self.store_op.qualified_name().to_string();
        Ok(RecordedCalls::load(&mut self.backend, &name).await?.count)
    }

    /// Counter and history snapshot for this client's store operation.
    pub async fn recorded_calls(&mut self) -> Result<RecordedCalls> {
        let name = self.store_op.qualified_name().to_string();
        RecordedCalls::load(&mut self.backend, &name).await
    }

    /// Replay report for this client's store operation.
    pub async fn replay(&mut self) -> Result<String> {
        let name = self.store_op.qualified_name().to_string();
        replay_report(&mut self.backend, &name).await
    }
}
