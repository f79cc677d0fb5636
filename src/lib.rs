//! Traced Cache - A Redis-backed cache client with call instrumentation
//!
//! Stores scalar values under generated UUID keys, retrieves them with
//! optional typed decoding, and records call counts and per-call history
//! for the store operation, with a replay report over the recorded calls.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod trace;
pub mod value;


pub use backend::{Backend, MemoryBackend, RedisBackend};
pub use client::CacheClient;
pub use config::Config;
pub use error::{CacheError, Result};
pub use value::CacheValue;
