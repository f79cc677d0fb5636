//! Traced Cache - diagnostic walkthrough binary
//!
//! Connects to Redis, stores a few values through the instrumented client,
//! reads them back typed, and prints the replay of the recorded calls.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traced_cache::{CacheClient, Config, RedisBackend};

/// Entry point for the walkthrough binary.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the Redis backend and build the instrumented client
/// 4. Flush the backing namespace only when explicitly configured
/// 5. Store, read back, and replay
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "traced_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Traced Cache walkthrough");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: redis_url={}, reset_on_startup={}",
        config.redis_url, config.reset_on_startup
    );

    let backend = RedisBackend::connect(&config.redis_url).await?;
    let mut client = CacheClient::new(backend);
    info!("Cache client connected");

    if config.reset_on_startup {
        client.reset().await?;
        info!("Backing namespace flushed");
    }

    // Store one value of each scalar shape
    let text_key = client.store("hello").await?;
    let int_key = client.store(42i64).await?;
    let float_key = client.store(2.5f64).await?;
    info!("Stored three values, text under {text_key}");

    // Read them back typed
    info!(
        "get_str: {:?}, get_int: {:?}, raw float bytes: {:?}",
        client.get_str(&text_key).await?,
        client.get_int(&int_key).await?,
        client.get(&float_key).await?,
    );

    let calls = client.recorded_calls().await?;
    info!("Recorded calls: {}", serde_json::to_string(&calls)?);

    // Diagnostic dump of the recorded history
    print!("{}", client.replay().await?);

    Ok(())
}
