//! Trace Module
//!
//! Call instrumentation for the store operation: composable wrappers that
//! count invocations and record per-call inputs and outputs in the backing
//! store, plus a replay report over the recorded history.

mod count;
mod history;
mod op;
mod replay;

// Re-export public types
pub use count::CountCalls;
pub use history::{inputs_key, outputs_key, RecordCalls, RecordedCalls};
pub use op::{StoreOp, UuidStore};
pub use replay::{replay, replay_report};

// == Public Constants ==
/// Qualified name of the client's store operation, used to namespace its
/// counter and history keys in the backing store.
pub const STORE_NAME: &str = "CacheClient::store";
