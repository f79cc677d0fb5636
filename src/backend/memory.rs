//! Memory Backend
//!
//! In-process implementation of the backend seam with the same observable
//! command semantics as the real store. Lets the full instrumented flow run
//! in tests and local development without a server.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::backend::Backend;
use crate::error::{CacheError, Result};

// == Memory Backend ==
/// HashMap-backed implementation of [`Backend`].
///
/// Counters live in the scalar map as decimal strings, exactly as INCR
/// leaves them in Redis, so everything reading them back behaves the same
/// against either backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// Scalar cells (SET/GET/INCR)
    entries: HashMap<String, Vec<u8>>,
    /// List cells (RPUSH/LRANGE)
    lists: HashMap<String, Vec<Vec<u8>>>,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    // == Is Empty ==
    /// Returns true if no scalar or list keys exist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.lists.is_empty()
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn incr(&mut self, key: &str) -> Result<u64> {
        // INCR semantics: absent cell counts from zero, non-numeric cell errors
        let current = match self.entries.get(key) {
            Some(raw) => std::str::from_utf8(raw)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| CacheError::Counter(key.to_string()))?,
            None => 0,
        };
        let next = current + 1;
        self.entries
            .insert(key.to_string(), next.to_string().into_bytes());
        Ok(next)
    }

    async fn rpush(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.lists
            .entry(key.to_string())
            .or_default()
            .push(value.to_vec());
        Ok(())
    }

    async fn lrange(&mut self, key: &str) -> Result<Vec<Vec<u8>>> {
        Ok(self.lists.get(key).cloned().unwrap_or_default())
    }

    async fn flushdb(&mut self) -> Result<()> {
        self.entries.clear();
        self.lists.clear();
        Ok(())
    }
}
