//! Async reassembly against a store with slow reads.
//!
//! Lookups go through an async function, as they would for a remote session
//! store. The stale tail of an earlier, longer write is left in place to show
//! that reads still stop at the sentinel.
//!
//! Run with:
//!     RUST_LOG=cookie_chunker=trace cargo run --example async_store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cookie_chunker::{combine_async, split_with};
use tracing_subscriber::EnvFilter;

type Store = Arc<Mutex<HashMap<String, String>>>;

async fn fetch(store: Store, name: String) -> Result<Option<String>, std::io::Error> {
    // Simulate network latency
    tokio::time::sleep(Duration::from_millis(5)).await;
    let store = store
        .lock()
        .map_err(|_| std::io::Error::other("store poisoned"))?;
    Ok(store.get(&name).cloned())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store: Store = Arc::default();

    let long_value = "session-state;".repeat(100);
    let short_value = "session-state;".repeat(20);

    for value in [&long_value, &short_value] {
        let mut entries = store.lock().map_err(|_| "store poisoned")?;
        for piece in split_with("session", value, 256)? {
            entries.insert(piece.name, piece.value);
        }
    }

    println!("Store holds {} entries", store.lock().map_err(|_| "store poisoned")?.len());

    let value = combine_async("session", |name: String| fetch(store.clone(), name)).await?;
    let value = value.ok_or("no session stored")?;

    assert_eq!(value, short_value);
    println!("Read back {} chars (stale tail ignored)", value.len());
    Ok(())
}
