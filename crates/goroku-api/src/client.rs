use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::QuoteApiError;
use crate::traits::QuoteSource;
use crate::types::{Anime, Character, Quote, QuoteFilter};

/// The search endpoint's result cap. The server defaults to 50 as well, but
/// sending it explicitly keeps the contract independent of server defaults.
const SEARCH_LIMIT: u32 = 50;

/// JSON client for the quote catalog API.
pub struct QuoteApiClient {
    base_url: Url,
    http: Client,
}

impl QuoteApiClient {
    /// The base URL is resolved once at startup from configuration.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, QuoteApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(QuoteApiError::Api {
                status,
                message: body,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, QuoteApiError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).query(query).send().await?;
        let resp = Self::check_response(resp).await?;
        resp.json()
            .await
            .map_err(|e| QuoteApiError::Parse(e.to_string()))
    }

    /// Single-entity fetch where 404 means the entity does not exist.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, QuoteApiError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::check_response(resp).await?;
        resp.json()
            .await
            .map(Some)
            .map_err(|e| QuoteApiError::Parse(e.to_string()))
    }
}

impl QuoteSource for QuoteApiClient {
    type Error = QuoteApiError;

    async fn list_anime(&self) -> Result<Vec<Anime>, QuoteApiError> {
        self.get_json("/api/anime", &[]).await
    }

    async fn get_anime(&self, slug: &str) -> Result<Option<Anime>, QuoteApiError> {
        self.get_optional(&format!("/api/anime/{slug}")).await
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, QuoteApiError> {
        self.get_json("/api/quotes", &filter.to_query()).await
    }

    async fn search_quotes(&self, query: &str) -> Result<Vec<Quote>, QuoteApiError> {
        self.get_json(
            "/api/quotes/search",
            &[
                ("q", query.to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
            ],
        )
        .await
    }

    async fn featured_quotes(&self) -> Result<Vec<Quote>, QuoteApiError> {
        self.get_json("/api/quotes/featured", &[]).await
    }

    async fn list_characters(
        &self,
        anime_slug: Option<&str>,
    ) -> Result<Vec<Character>, QuoteApiError> {
        let query: Vec<(&str, String)> = anime_slug
            .map(|slug| vec![("anime_slug", slug.to_string())])
            .unwrap_or_default();
        self.get_json("/api/characters", &query).await
    }

    async fn get_character(&self, slug: &str) -> Result<Option<Character>, QuoteApiError> {
        self.get_optional(&format!("/api/characters/{slug}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = QuoteApiClient::new(Url::parse("http://localhost:8001/").unwrap());
        assert_eq!(
            client.endpoint("/api/quotes/featured"),
            "http://localhost:8001/api/quotes/featured"
        );
    }
}
