// Integration tests for async reassembly
// Tests cover: round-trip through an async store, sequential lookups, errors

#![cfg(feature = "async")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cookie_chunker::{AsyncLookup, combine, combine_async, pieces_async, split_with};
use futures_util::StreamExt;

/// A store whose reads complete after a short delay.
#[derive(Clone, Default)]
struct SlowStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl SlowStore {
    fn write(&self, base: &str, value: &str, max: usize) {
        let mut entries = self.entries.lock().unwrap();
        for piece in split_with(base, value, max).unwrap() {
            entries.insert(piece.name, piece.value);
        }
    }

    async fn get(self, name: String) -> Result<Option<String>, std::io::Error> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.reads.lock().unwrap().push(name.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;

        let found = self.entries.lock().unwrap().get(&name).cloned();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(found)
    }

    fn lookup(&self) -> impl AsyncLookup<Error = std::io::Error> + '_ {
        move |name: String| self.clone().get(name)
    }
}

fn chunk_string() -> String {
    "token-segment.".repeat(300)
}

// ============================================================================
// Round-trip
// ============================================================================

#[tokio::test]
async fn test_async_round_trip() {
    let store = SlowStore::default();
    let value = chunk_string();
    store.write("sb-auth-token", &value, 320);

    let combined = combine_async("sb-auth-token", store.lookup()).await.unwrap();
    assert_eq!(combined, Some(value));
}

#[tokio::test]
async fn test_async_matches_sync() {
    let store = SlowStore::default();
    store.write("key", "\u{1F926}\u{1F3FB}\u{200D}\u{2642}\u{FE0F} and more", 18);
    let entries = store.entries.lock().unwrap().clone();

    let sync = combine("key", |name: &str| {
        Ok::<_, std::io::Error>(entries.get(name).cloned())
    })
    .unwrap();
    let async_ = combine_async("key", store.lookup()).await.unwrap();

    assert_eq!(sync, async_);
}

#[tokio::test]
async fn test_async_missing_value() {
    let store = SlowStore::default();
    assert_eq!(combine_async("key", store.lookup()).await.unwrap(), None);
}

// ============================================================================
// Sequencing
// ============================================================================

#[tokio::test]
async fn test_lookups_are_sequential_and_stop_at_sentinel() {
    let store = SlowStore::default();
    let long = chunk_string();
    store.write("key", &long, 320);
    store.write("key", &long[..700], 320);

    let combined = combine_async("key", store.lookup()).await.unwrap();
    assert_eq!(combined.as_deref(), Some(&long[..700]));

    assert_eq!(store.max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(
        *store.reads.lock().unwrap(),
        vec!["key", "key.0", "key.1", "key.2", "key.3"]
    );
}

#[tokio::test]
async fn test_piece_stream_yields_data_pieces() {
    let store = SlowStore::default();
    store.write("key", "abcdefghij", 4);

    let values: Vec<String> = pieces_async("key", store.lookup())
        .map(|piece| piece.unwrap().value)
        .collect()
        .await;

    assert_eq!(values, vec!["abcd", "efgh", "ij"]);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_async_error_is_not_absence() {
    let store = SlowStore::default();
    store.write("key", &chunk_string(), 320);

    let result = combine_async("key", |name: String| {
        let store = store.clone();
        async move {
            if name == "key.2" {
                return Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out"));
            }
            store.get(name).await
        }
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::TimedOut);
}
