//! The persisted favorites set and its reconciliation against the catalog.
//!
//! Favorite quote ids live in the key-value store as a JSON array of
//! strings under one fixed key. The set only ever contains ids the user
//! chose; a single writer per session is assumed (no cross-tab merging).

use std::sync::Arc;

use tracing::{debug, warn};

use goroku_api::types::{Quote, QuoteFilter};
use goroku_api::QuoteSource;

use crate::soft;
use crate::store::KeyValueStore;

const FAVORITES_KEY: &str = "favorites";

/// Cap on the catalog fetch used for reconciliation.
pub const FETCH_CAP: u32 = 1000;

/// Ordered, duplicate-free set of favorite quote ids, read-modify-write
/// against the store.
pub struct Favorites<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted id sequence. Absent or unparseable state reads as empty.
    pub fn ids(&self) -> Vec<String> {
        let Some(raw) = self.store.get(FAVORITES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "stored favorites are unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids().iter().any(|fav| fav == id)
    }

    /// Append `id` if absent; duplicates are a no-op (set semantics).
    /// Returns whether the set changed.
    pub fn add(&self, id: &str) -> bool {
        let mut ids = self.ids();
        if ids.iter().any(|fav| fav == id) {
            return false;
        }
        ids.push(id.to_string());
        self.write(&ids);
        true
    }

    /// Rewrite the set excluding `id`. Idempotent: removing an absent id
    /// leaves the persisted state unchanged. Returns whether the set changed.
    pub fn remove(&self, id: &str) -> bool {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|fav| fav != id);
        if ids.len() == before {
            return false;
        }
        self.write(&ids);
        true
    }

    fn write(&self, ids: &[String]) {
        match serde_json::to_string(ids) {
            Ok(json) => self.store.set(FAVORITES_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize favorites"),
        }
    }
}

/// Reconciles the persisted id set against server-fetched records to produce
/// the displayable favorites collection.
pub struct FavoritesView<Q: QuoteSource, S: KeyValueStore> {
    source: Arc<Q>,
    favorites: Favorites<S>,
    quotes: Vec<Quote>,
}

impl<Q: QuoteSource, S: KeyValueStore> FavoritesView<Q, S> {
    pub fn new(source: Arc<Q>, favorites: Favorites<S>) -> Self {
        Self {
            source,
            favorites,
            quotes: Vec::new(),
        }
    }

    /// Load the displayable favorites: exactly the fetched quotes whose id
    /// is in the persisted set, in fetch order.
    ///
    /// An empty id set short-circuits without a network call; a failed fetch
    /// degrades to an empty view.
    pub async fn load(&mut self) {
        let ids = self.favorites.ids();
        if ids.is_empty() {
            self.quotes.clear();
            return;
        }
        let filter = QuoteFilter::with_limit(FETCH_CAP);
        let all = soft::or_empty("list_quotes", self.source.list_quotes(&filter)).await;
        self.quotes = all
            .into_iter()
            .filter(|q| ids.iter().any(|id| id == &q.id))
            .collect();
        debug!(count = self.quotes.len(), "reconciled favorites");
    }

    /// Remove a favorite from both the persisted set and the displayed
    /// collection, so the two never diverge. Idempotent.
    pub fn remove(&mut self, id: &str) {
        self.favorites.remove(id);
        self.quotes.retain(|q| q.id != id);
    }

    /// The reconciled snapshot from the last [`load`](Self::load).
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn favorites(&self) -> &Favorites<S> {
        &self.favorites
    }
}
