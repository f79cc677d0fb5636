//! Redis Backend
//!
//! Maps the backend seam onto a multiplexed async Redis connection.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::backend::Backend;
use crate::error::Result;

// == Redis Backend ==
/// Redis-backed implementation of [`Backend`].
///
/// Holds a single multiplexed connection; every trait method is one command
/// round trip. No retry, timeout, or reconnect logic — connection failures
/// and command errors propagate unchanged.
pub struct RedisBackend {
    conn: redis::aio::MultiplexedConnection,
}

impl RedisBackend {
    /// Connects to the Redis instance at `url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the connection cannot be
    /// established.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        debug!("connected to redis at {url}");
        Ok(Self { conn })
    }
}

#[async_trait]
impl Backend for RedisBackend {
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let raw: Option<Vec<u8>> = self.conn.get(key).await?;
        Ok(raw)
    }

    async fn incr(&mut self, key: &str) -> Result<u64> {
        let count: u64 = self.conn.incr(key, 1).await?;
        Ok(count)
    }

    async fn rpush(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.conn.rpush::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn lrange(&mut self, key: &str) -> Result<Vec<Vec<u8>>> {
        let items: Vec<Vec<u8>> = self.conn.lrange(key, 0, -1).await?;
        Ok(items)
    }

    async fn flushdb(&mut self) -> Result<()> {
        let _: () = redis::cmd("FLUSHDB").query_async(&mut self.conn).await?;
        Ok(())
    }
}
