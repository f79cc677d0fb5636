//! Store Operation
//!
//! The capability the instrumentation wrappers compose over, and the base
//! operation that writes a value under a fresh UUID key.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::backend::Backend;
use crate::error::Result;
use crate::value::CacheValue;

// == Store Op Trait ==
/// A single store operation against a backend.
///
/// Wrappers hold an inner `StoreOp` and delegate to it, adding their own
/// backing-store writes before or after the inner call. `qualified_name` is
/// the stable string that namespaces any per-operation keys (counter,
/// history lists); wrappers pass it through from the innermost operation.
#[async_trait]
pub trait StoreOp<B: Backend>: Send + Sync {
    /// Stable name identifying this operation in the backing store.
    fn qualified_name(&self) -> &str;

    /// Performs the store and returns the key the value landed under.
    async fn store(&self, backend: &mut B, value: &CacheValue) -> Result<String>;
}

// == Uuid Store ==
/// The base store operation: generate a fresh v4 UUID key, write the value
/// under it with a single SET, and return the key.
pub struct UuidStore {
    name: String,
}

impl UuidStore {
    /// Creates the base operation with the given qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl<B: Backend> StoreOp<B> for UuidStore {
    fn qualified_name(&self) -> &str {
        &self.name
    }

    async fn store(&self, backend: &mut B, value: &CacheValue) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        backend.set(&key, &value.to_bytes()).await?;
        debug!(%key, "stored value");
        Ok(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    #[tokio::test]
    async fn test_uuid_store_writes_under_fresh_key() {
        let mut backend = MemoryBackend::new();
        let op = UuidStore::new("test.store");

        let value = CacheValue::from("hello");
        let key = op.store(&mut backend, &value).await.unwrap();

        assert_eq!(backend.get(&key).await.unwrap(), Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_uuid_store_keys_are_unique() {
        let mut backend = MemoryBackend::new();
        let op = UuidStore::new("test.store");

        let value = CacheValue::from("same value");
        let key1 = op.store(&mut backend, &value).await.unwrap();
        let key2 = op.store(&mut backend, &value).await.unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_qualified_name() {
        let op = UuidStore::new("test.store");
        assert_eq!(StoreOp::<MemoryBackend>::qualified_name(&op), "test.store");
    }
}
