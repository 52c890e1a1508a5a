//! Search state: query text, a triggered remote search, and result state.
//!
//! The query text is shared with the address bar via the `q` parameter so
//! search state is bookmarkable and re-derivable on reload.

use std::sync::{Arc, Mutex};

use tracing::debug;
use url::Url;

use goroku_api::types::Quote;
use goroku_api::QuoteSource;

use crate::soft;

#[derive(Debug, Default)]
struct SearchState {
    query: String,
    searched: bool,
    pending: usize,
    results: Vec<Quote>,
}

/// Owns the query text and the result state for the search surface.
pub struct SearchController<Q: QuoteSource> {
    source: Arc<Q>,
    state: Arc<Mutex<SearchState>>,
}

impl<Q: QuoteSource> Clone for SearchController<Q> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<Q: QuoteSource> SearchController<Q> {
    pub fn new(source: Arc<Q>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(SearchState::default())),
        }
    }

    /// Controller seeded with an externally supplied initial query, e.g. a
    /// deep link.
    pub fn with_query(source: Arc<Q>, query: &str) -> Self {
        let controller = Self::new(source);
        controller.set_query(query);
        controller
    }

    pub fn set_query(&self, text: &str) {
        self.state.lock().unwrap().query = text.to_string();
    }

    pub fn query(&self) -> String {
        self.state.lock().unwrap().query.clone()
    }

    /// True once any search has been triggered this session; never reverts.
    pub fn searched(&self) -> bool {
        self.state.lock().unwrap().searched
    }

    /// True while at least one request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().pending > 0
    }

    /// Results of the most recently completed search.
    pub fn results(&self) -> Vec<Quote> {
        self.state.lock().unwrap().results.clone()
    }

    /// Trigger a search for the current query.
    ///
    /// Whitespace-only text is a no-op: no request, no state change.
    /// Overlapping submissions all run to completion with no cancellation;
    /// whichever response settles last owns the results. The contract is
    /// eventual consistency with the last *issued* query, not the last
    /// *completed* one.
    pub async fn submit(&self) {
        let query = {
            let mut state = self.state.lock().unwrap();
            if state.query.trim().is_empty() {
                return;
            }
            state.searched = true;
            state.pending += 1;
            state.query.clone()
        };
        debug!(query = %query, "search dispatched");
        let results = soft::or_empty("search_quotes", self.source.search_quotes(&query)).await;
        let mut state = self.state.lock().unwrap();
        state.pending -= 1;
        state.results = results;
    }

    /// Re-encode the current query onto `base` as a shareable `?q=` link.
    pub fn share_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().clear().append_pair("q", &self.query());
        url
    }
}

/// Extract the `q` parameter from a deep link.
pub fn query_from_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testutil::{quote, FakeSource};

    #[tokio::test]
    async fn whitespace_only_submission_is_a_no_op() {
        let source = Arc::new(FakeSource::default());
        let controller = SearchController::with_query(Arc::clone(&source), "  ");
        controller.submit().await;
        assert_eq!(source.search_calls(), 0);
        assert!(!controller.searched());
        assert!(!controller.is_loading());
        assert!(controller.results().is_empty());
    }

    #[tokio::test]
    async fn completed_search_stores_results_and_clears_loading() {
        let luffy = vec![quote("q1", "LUFFY")];
        let source = Arc::new(FakeSource::default().on_search(
            "luffy",
            Duration::ZERO,
            luffy.clone(),
        ));
        let controller = SearchController::with_query(Arc::clone(&source), "luffy");
        controller.submit().await;
        assert!(controller.searched());
        assert!(!controller.is_loading());
        assert_eq!(controller.results(), luffy);
    }

    #[tokio::test]
    async fn failed_search_degrades_to_empty_results() {
        let source = Arc::new(FakeSource::failing());
        let controller = SearchController::with_query(Arc::clone(&source), "luffy");
        controller.submit().await;
        assert!(controller.searched());
        assert!(!controller.is_loading());
        assert!(controller.results().is_empty());
    }

    #[tokio::test]
    async fn searched_flag_is_monotonic() {
        let source = Arc::new(FakeSource::default().on_search("luffy", Duration::ZERO, vec![]));
        let controller = SearchController::with_query(Arc::clone(&source), "luffy");
        controller.submit().await;
        assert!(controller.searched());
        // A blank resubmission is rejected at the guard and reverts nothing.
        controller.set_query("   ");
        controller.submit().await;
        assert!(controller.searched());
        assert_eq!(source.search_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn last_settled_response_wins_the_race() {
        let luffy = vec![quote("q1", "LUFFY")];
        let zoro = vec![quote("q2", "ZORO")];
        let source = Arc::new(
            FakeSource::default()
                .on_search("luffy", Duration::from_millis(100), luffy.clone())
                .on_search("zoro", Duration::from_millis(10), zoro),
        );
        let controller = SearchController::with_query(Arc::clone(&source), "luffy");

        let first = controller.clone();
        let h1 = tokio::spawn(async move { first.submit().await });
        tokio::task::yield_now().await;
        assert!(controller.is_loading());

        controller.set_query("zoro");
        let second = controller.clone();
        let h2 = tokio::spawn(async move { second.submit().await });

        h1.await.unwrap();
        h2.await.unwrap();

        // "zoro" settled first; the slower "luffy" response arrived last
        // and owns the results. Both requests ran, none were cancelled.
        assert_eq!(source.search_calls(), 2);
        assert!(!controller.is_loading());
        assert_eq!(controller.results(), luffy);
    }

    #[test]
    fn deep_link_query_round_trips() {
        assert_eq!(
            query_from_url("https://example.com/search?q=straw%20hat"),
            Some("straw hat".to_string())
        );
        assert_eq!(query_from_url("https://example.com/search"), None);
        assert_eq!(query_from_url("not a url"), None);
    }

    #[test]
    fn share_url_encodes_the_current_query() {
        let source = Arc::new(FakeSource::default());
        let controller = SearchController::with_query(source, "straw hat");
        let base = Url::parse("https://example.com/search").unwrap();
        let shared = controller.share_url(&base);
        assert_eq!(shared.as_str(), "https://example.com/search?q=straw+hat");
        assert_eq!(query_from_url(shared.as_str()), Some("straw hat".to_string()));
    }
}
