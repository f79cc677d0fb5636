//! Replay Report
//!
//! Renders the recorded call history of an operation as a diagnostic dump.

use crate::backend::Backend;
use crate::error::Result;
use crate::trace::RecordedCalls;

/// Builds the replay report for `name`: the call count on the first line,
/// then one `<name>(<input>) -> <output>` line per recorded pair in call
/// order, decoded lossily from bytes to text.
///
/// An operation that was never called reports a count of 0 and no pairs.
pub async fn replay_report<B: Backend>(backend: &mut B, name: &str) -> Result<String> {
    let calls = RecordedCalls::load(backend, name).await?;

    let mut report = format!("{name} was called {} times:\n", calls.count);
    for (input, output) in calls.pairs() {
        report.push_str(&format!(
            "{name}({}) -> {}\n",
            String::from_utf8_lossy(input),
            String::from_utf8_lossy(output),
        ));
    }
    Ok(report)
}

/// Prints the replay report for `name` to stdout. Purely diagnostic.
pub async fn replay<B: Backend>(backend: &mut B, name: &str) -> Result<()> {
    let report = replay_report(backend, name).await?;
    print!("{report}");
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, MemoryBackend};
    use crate::trace::{CountCalls, RecordCalls, StoreOp, UuidStore};
    use crate::value::CacheValue;

    #[tokio::test]
    async fn test_replay_never_called() {
        let mut backend = MemoryBackend::new();

        let report = replay_report(&mut backend, "test.store").await.unwrap();

        assert_eq!(report, "test.store was called 0 times:\n");
    }

    #[tokio::test]
    async fn test_replay_lists_pairs_in_call_order() {
        let mut backend = MemoryBackend::new();
        let op = CountCalls::new(RecordCalls::new(UuidStore::new("test.store")));

        let key_foo = op
            .store(&mut backend, &CacheValue::from("foo"))
            .await
            .unwrap();
        let key_42 = op
            .store(&mut backend, &CacheValue::Int(42))
            .await
            .unwrap();

        let report = replay_report(&mut backend, "test.store").await.unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "test.store was called 2 times:");
        assert_eq!(lines[1], format!("test.store(foo) -> {key_foo}"));
        assert_eq!(lines[2], format!("test.store(42) -> {key_42}"));
        assert_eq!(lines.len(), 3);
    }

    #[tokio::test]
    async fn test_replay_truncates_diverged_lists() {
        let mut backend = MemoryBackend::new();

        backend.incr("test.store").await.unwrap();
        backend.incr("test.store").await.unwrap();
        backend.rpush("test.store:inputs", b"one").await.unwrap();
        backend.rpush("test.store:inputs", b"two").await.unwrap();
        backend.rpush("test.store:outputs", b"key-1").await.unwrap();

        let report = replay_report(&mut backend, "test.store").await.unwrap();
        let lines: Vec<&str> = report.lines().collect();

        // Count still reports 2, but only the complete pair is printed
        assert_eq!(lines[0], "test.store was called 2 times:");
        assert_eq!(lines[1], "test.store(one) -> key-1");
        assert_eq!(lines.len(), 2);
    }
}
