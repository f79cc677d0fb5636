//! Backend Module
//!
//! The key-value command seam between the client and the backing store.

mod memory;
mod redis;

pub use self::memory::MemoryBackend;
pub use self::redis::RedisBackend;

use async_trait::async_trait;

use crate::error::Result;

// == Backend Trait ==
/// The set of key-value commands this client issues.
///
/// One method per backing-store command, one round trip per call. Absence of
/// a key is a normal outcome (`None` or an empty list), never an error.
/// Atomicity is per command; nothing at this seam groups commands into a
/// transaction.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// SET: write raw bytes under a key, overwriting any previous value.
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// GET: read raw bytes, or `None` when the key is absent.
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// INCR: increment the integer cell at `key`, treating an absent cell
    /// as zero. Returns the post-increment value.
    async fn incr(&mut self, key: &str) -> Result<u64>;

    /// RPUSH: append raw bytes to the list at `key`, creating it if absent.
    async fn rpush(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// LRANGE 0 -1: the full list at `key`, empty when absent.
    async fn lrange(&mut self, key: &str) -> Result<Vec<Vec<u8>>>;

    /// FLUSHDB: drop every key in the backing namespace.
    async fn flushdb(&mut self) -> Result<()>;
}
