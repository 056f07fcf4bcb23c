//! Shared server state.

use crate::search::SearchIndex;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the current search index snapshot.
///
/// Tool handlers take a cheap `Arc` clone and query it without holding the
/// lock; a rebuild publishes a complete replacement index in one swap, so
/// readers never observe a partially updated corpus.
#[derive(Debug)]
pub struct IndexState {
    current: RwLock<Arc<SearchIndex>>,
}

impl IndexState {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Current index snapshot.
    pub async fn snapshot(&self) -> Arc<SearchIndex> {
        self.current.read().await.clone()
    }

    /// Atomically replaces the index with a freshly built one.
    pub async fn replace(&self, index: SearchIndex) {
        let mut guard = self.current.write().await;
        *guard = Arc::new(index);
    }
}
