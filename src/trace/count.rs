//! Call Counting Wrapper
//!
//! Increments a per-operation counter in the backing store before delegating.

use async_trait::async_trait;

use crate::backend::Backend;
use crate::error::Result;
use crate::trace::StoreOp;
use crate::value::CacheValue;

// == Count Calls ==
/// Wrapper that INCRs the counter keyed by the inner operation's qualified
/// name on every invocation. The inner result passes through untouched.
///
/// The increment lands before the inner call runs, so a failing inner call
/// still counts as an invocation.
pub struct CountCalls<S> {
    inner: S,
}

impl<S> CountCalls<S> {
    /// Wraps an inner store operation.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B, S> StoreOp<B> for CountCalls<S>
where
    B: Backend,
    S: StoreOp<B>,
{
    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn store(&self, backend: &mut B, value: &CacheValue) -> Result<String> {
        backend.incr(self.qualified_name()).await?;
        self.inner.store(backend, value).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::trace::UuidStore;

    #[tokio::test]
    async fn test_counter_increments_per_call() {
        let mut backend = MemoryBackend::new();
        let op = CountCalls::new(UuidStore::new("test.store"));

        for _ in 0..3 {
            op.store(&mut backend, &CacheValue::from("x")).await.unwrap();
        }

        assert_eq!(backend.get("test.store").await.unwrap(), Some(b"3".to_vec()));
    }

    #[tokio::test]
    async fn test_counter_does_not_alter_result() {
        let mut backend = MemoryBackend::new();
        let op = CountCalls::new(UuidStore::new("test.store"));

        let key = op
            .store(&mut backend, &CacheValue::from("payload"))
            .await
            .unwrap();

        // The returned key still resolves to the stored value
        assert_eq!(backend.get(&key).await.unwrap(), Some(b"payload".to_vec()));
    }

    #[tokio::test]
    async fn test_qualified_name_passes_through() {
        let op = CountCalls::new(UuidStore::new("test.store"));
        assert_eq!(StoreOp::<MemoryBackend>::qualified_name(&op), "test.store");
    }
}
