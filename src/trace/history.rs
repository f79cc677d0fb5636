//! Call History Wrapper
//!
//! Records each call's serialized argument and result as ordered lists in
//! the backing store.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::backend::Backend;
use crate::error::{CacheError, Result};
use crate::trace::StoreOp;
use crate::value::CacheValue;

// == Key Naming ==
/// Key of the recorded-inputs list for an operation.
pub fn inputs_key(name: &str) -> String {
    format!("{name}:inputs")
}

/// Key of the recorded-outputs list for an operation.
pub fn outputs_key(name: &str) -> String {
    format!("{name}:outputs")
}

// == Record Calls ==
/// Wrapper that RPUSHes the serialized argument to `<name>:inputs` before
/// delegating and the result to `<name>:outputs` after.
///
/// Each append is atomic on its own; the append-delegate-append sequence is
/// not. A failing inner call leaves the input recorded with no matching
/// output, so readers pair the lists positionally and stop at the shorter one.
pub struct RecordCalls<S> {
    inner: S,
}

impl<S> RecordCalls<S> {
    /// Wraps an inner store operation.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B, S> StoreOp<B> for RecordCalls<S>
where
    B: Backend,
    S: StoreOp<B>,
{
    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn store(&self, backend: &mut B, value: &CacheValue) -> Result<String> {
        let name = self.inner.qualified_name().to_string();
        debug!(input = %value, "recording call");
        backend.rpush(&inputs_key(&name), &value.to_bytes()).await?;
        let key = self.inner.store(backend, value).await?;
        backend.rpush(&outputs_key(&name), key.as_bytes()).await?;
        Ok(key)
    }
}

// == Recorded Calls ==
/// Snapshot of an operation's counter and history lists.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordedCalls {
    /// Total invocations recorded by the count wrapper
    pub count: u64,
    /// Serialized argument of each call, in call order
    pub inputs: Vec<Vec<u8>>,
    /// Serialized result of each call, in call order
    pub outputs: Vec<Vec<u8>>,
}

impl RecordedCalls {
    /// Reads the counter and both history lists for `name`.
    ///
    /// A missing counter reads as zero; missing lists read as empty.
    pub async fn load<B: Backend>(backend: &mut B, name: &str) -> Result<Self> {
        let count = match backend.get(name).await? {
            Some(raw) => std::str::from_utf8(&raw)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| CacheError::Counter(name.to_string()))?,
            None => 0,
        };
        let inputs = backend.lrange(&inputs_key(name)).await?;
        let outputs = backend.lrange(&outputs_key(name)).await?;
        Ok(Self {
            count,
            inputs,
            outputs,
        })
    }

    /// Recorded (input, output) pairs in call order, truncated to the
    /// shorter list when the two ever diverge.
    pub fn pairs(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.inputs
            .iter()
            .zip(self.outputs.iter())
            .map(|(input, output)| (input.as_slice(), output.as_slice()))
    }
}
