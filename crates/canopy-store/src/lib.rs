//! # canopy-store — In-Memory Content-Addressed Record Store
//!
//! Records are keyed by the lowercase hex SHA-256 digest of their canonical
//! byte form. All digest computation flows through
//! `CanonicalBytes::new()` → `sha256_digest()`, so structurally equal
//! records always map to the same key regardless of mapping key order.
//!
//! ## Ownership
//!
//! [`ContentStore`] is an owned object, constructed once at process start
//! and passed by handle to the boundary layer. There is no ambient
//! singleton; tests instantiate independent stores. The store exclusively
//! owns submitted records — [`ContentStore::get`] returns a value, never a
//! reference into internal storage.
//!
//! ## Lifecycle
//!
//! Empty at construction; entries are added only via
//! [`add()`](ContentStore::add); no deletion path exists; all state is
//! volatile and lost on process exit.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use canopy_core::{sha256_digest, CanonicalBytes, ContentDigest, EncodingError};

/// A content-addressed record store backed by a digest-keyed map.
///
/// ## Concurrency
///
/// One `RwLock` guards the map. `add` performs its check-then-insert under
/// a single write lock, so two concurrent `add` calls for the same canonical
/// value cannot create two entries and both observe the same digest. `get`s
/// run concurrently under read locks and never see a partial insert. Both
/// operations are O(1), in-memory, and non-blocking beyond the lock itself.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl ContentStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record and return its content digest.
    ///
    /// Computes the canonical bytes and SHA-256 digest of `value`, then
    /// inserts `hex(digest) -> value` if the key is absent. The record is
    /// stored exactly as submitted (not its canonical bytes), so retrieval
    /// returns a value structurally equal to the input; byte-level
    /// formatting such as mapping key order is not preserved.
    ///
    /// Insertion is idempotent: adding a deeply equal record again returns
    /// the same digest and does not grow the store.
    ///
    /// # Errors
    ///
    /// Propagates [`EncodingError`] from canonicalization. Nothing else
    /// can fail.
    pub fn add(&self, value: Value) -> Result<ContentDigest, EncodingError> {
        let canonical = CanonicalBytes::new(&value)?;
        let digest = sha256_digest(&canonical);

        let mut entries = self.entries.write();
        entries.entry(digest.to_hex()).or_insert(value);

        Ok(digest)
    }

    /// Look up a record by its hex digest.
    ///
    /// Returns `None` for any key not present in the store. Malformed
    /// digest strings (wrong length, non-hex characters) are treated
    /// identically to a miss — this is a key lookup, not a validator.
    /// The boundary layer decides how absence is surfaced.
    pub fn get(&self, digest: &str) -> Option<Value> {
        self.entries.read().get(digest).cloned()
    }

    /// Check whether a record with the given hex digest is stored.
    pub fn contains(&self, digest: &str) -> bool {
        self.entries.read().contains_key(digest)
    }

    /// Number of distinct records stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no records have been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_returns_64_hex_identifier() {
        let store = ContentStore::new();
        let digest = store.add(json!({"owner": "alice", "price": 100})).unwrap();
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn add_is_deterministic() {
        let store = ContentStore::new();
        let d1 = store.add(json!({"a": 1})).unwrap();
        let d2 = store.add(json!({"a": 1})).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn key_order_invariance() {
        let store = ContentStore::new();
        let d1 = store.add(json!({"owner": "alice", "price": 100})).unwrap();
        let d2 = store.add(json!({"price": 100, "owner": "alice"})).unwrap();
        assert_eq!(d1, d2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sequence_order_sensitivity() {
        let store = ContentStore::new();
        let d1 = store.add(json!([1, 2])).unwrap();
        let d2 = store.add(json!([2, 1])).unwrap();
        assert_ne!(d1, d2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn scalar_type_injectivity() {
        let store = ContentStore::new();
        let d1 = store.add(json!({"x": 1})).unwrap();
        let d2 = store.add(json!({"x": "1"})).unwrap();
        assert_ne!(d1, d2);
    }

    #[test]
    fn idempotent_insertion_does_not_grow_store() {
        let store = ContentStore::new();
        let value = json!({"k": [true, null, "v"]});
        store.add(value.clone()).unwrap();
        store.add(value).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn round_trip_returns_deeply_equal_value() {
        let store = ContentStore::new();
        let value = json!({
            "owner": "alice",
            "price": 100,
            "tags": ["garden", "river"],
            "meta": {"floors": 2, "heated": true}
        });
        let digest = store.add(value.clone()).unwrap();
        let retrieved = store.get(&digest.to_hex()).expect("stored record");
        assert_eq!(retrieved, value);
    }

    #[test]
    fn well_formed_absent_digest_is_a_miss() {
        let store = ContentStore::new();
        store.add(json!({"a": 1})).unwrap();
        let absent = "0".repeat(64);
        assert_eq!(store.get(&absent), None);
    }

    #[test]
    fn malformed_digest_is_a_miss_not_an_error() {
        let store = ContentStore::new();
        assert_eq!(store.get(""), None);
        assert_eq!(store.get("abc"), None);
        assert_eq!(store.get("zzzz-not-hex"), None);
    }

    #[test]
    fn get_returns_a_copy_not_a_handle() {
        let store = ContentStore::new();
        let digest = store.add(json!({"n": 1})).unwrap();
        let hex = digest.to_hex();

        let mut first = store.get(&hex).unwrap();
        first["n"] = json!(999);

        // Mutating the retrieved value must not affect stored state.
        assert_eq!(store.get(&hex).unwrap(), json!({"n": 1}));
    }

    #[test]
    fn encoding_error_propagates_and_store_is_untouched() {
        let store = ContentStore::new();
        let mut deep = json!(0);
        for _ in 0..(canopy_core::MAX_DEPTH + 1) {
            deep = json!([deep]);
        }
        assert!(store.add(deep).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn empty_at_construction() {
        let store = ContentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn contains_tracks_membership() {
        let store = ContentStore::new();
        let digest = store.add(json!({"here": true})).unwrap();
        assert!(store.contains(&digest.to_hex()));
        assert!(!store.contains(&"f".repeat(64)));
    }

    #[test]
    fn concurrent_adds_agree_on_one_digest() {
        use std::sync::Arc;

        let store = Arc::new(ContentStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.add(json!({"shared": "record"})).unwrap().to_hex()
            }));
        }
        let digests: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(digests.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.len(), 1);
    }
}
