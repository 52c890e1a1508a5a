//! Shared fakes for module tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use goroku_api::types::{Anime, Character, Quote, QuoteFilter};
use goroku_api::QuoteSource;

#[derive(Debug, thiserror::Error)]
#[error("fake source failure")]
pub struct FakeError;

/// A canned quote with the given id and character name.
pub fn quote(id: &str, character: &str) -> Quote {
    Quote {
        id: id.to_string(),
        anime: "ONE PIECE".to_string(),
        anime_slug: "one-piece".to_string(),
        character: character.to_string(),
        character_slug: character.to_lowercase(),
        text: format!("quote {id}"),
        image_url: None,
        category: None,
        japanese_title: Some("ワンピース".to_string()),
        featured: false,
    }
}

/// In-memory `QuoteSource` with optional per-query search latency.
#[derive(Default)]
pub struct FakeSource {
    quotes: Vec<Quote>,
    search_results: HashMap<String, Vec<Quote>>,
    search_delays: HashMap<String, Duration>,
    fail: bool,
    list_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            ..Default::default()
        }
    }

    /// A source whose every call fails with a transport-like error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Register a search response, settling `delay` after dispatch.
    pub fn on_search(mut self, query: &str, delay: Duration, results: Vec<Quote>) -> Self {
        self.search_results.insert(query.to_string(), results);
        self.search_delays.insert(query.to_string(), delay);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

impl QuoteSource for FakeSource {
    type Error = FakeError;

    async fn list_anime(&self) -> Result<Vec<Anime>, FakeError> {
        Ok(Vec::new())
    }

    async fn get_anime(&self, _slug: &str) -> Result<Option<Anime>, FakeError> {
        Ok(None)
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, FakeError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FakeError);
        }
        let mut quotes = self.quotes.clone();
        if let Some(limit) = filter.limit {
            quotes.truncate(limit as usize);
        }
        Ok(quotes)
    }

    async fn search_quotes(&self, query: &str) -> Result<Vec<Quote>, FakeError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FakeError);
        }
        if let Some(delay) = self.search_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    async fn featured_quotes(&self) -> Result<Vec<Quote>, FakeError> {
        if self.fail {
            return Err(FakeError);
        }
        Ok(self.quotes.clone())
    }

    async fn list_characters(&self, _anime_slug: Option<&str>) -> Result<Vec<Character>, FakeError> {
        Ok(Vec::new())
    }

    async fn get_character(&self, _slug: &str) -> Result<Option<Character>, FakeError> {
        Ok(None)
    }
}
