//! Thread-safe handle over the store.
//!
//! [`GraphStore`] itself is single-threaded. Callers that hand the store to
//! a concurrent dispatch layer wrap it here: one lock around the whole
//! store serializes all writes while letting readers proceed in parallel.

use crate::store::GraphStore;
use parking_lot::RwLock;
use std::sync::Arc;

/// A store shared between threads behind a single reader-writer lock.
pub type SharedStore = Arc<RwLock<GraphStore>>;

/// Wraps a store for shared access.
pub fn shared(store: GraphStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
