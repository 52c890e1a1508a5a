//! The service seam the state engine programs against.
//!
//! [`QuoteApiClient`](crate::client::QuoteApiClient) is the production
//! implementation; tests substitute in-memory fakes.

use std::future::Future;

use crate::types::{Anime, Character, Quote, QuoteFilter};

/// A read/search source for the quote catalog.
///
/// All operations are request/response pairs over the network boundary and
/// may fail with a transport or decoding error. `None` from the single-entity
/// getters means the entity does not exist, which is a legitimate terminal
/// state and not a failure.
pub trait QuoteSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// List every anime series in the catalog.
    fn list_anime(&self) -> impl Future<Output = Result<Vec<Anime>, Self::Error>> + Send;

    /// Fetch one anime by slug.
    fn get_anime(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Anime>, Self::Error>> + Send;

    /// List quotes matching the given server-side filters.
    fn list_quotes(
        &self,
        filter: &QuoteFilter,
    ) -> impl Future<Output = Result<Vec<Quote>, Self::Error>> + Send;

    /// Full-text search over quote text, character, anime, and category.
    fn search_quotes(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Quote>, Self::Error>> + Send;

    /// Quotes the service has designated for carousel rotation.
    fn featured_quotes(&self) -> impl Future<Output = Result<Vec<Quote>, Self::Error>> + Send;

    /// List characters, optionally restricted to one anime.
    fn list_characters(
        &self,
        anime_slug: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Character>, Self::Error>> + Send;

    /// Fetch one character by slug.
    fn get_character(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Character>, Self::Error>> + Send;
}
