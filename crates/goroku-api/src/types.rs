use serde::{Deserialize, Serialize};

/// A single attributed line of dialogue tied to a character and anime.
///
/// Immutable once fetched; each component keeps its fetched collection as a
/// private snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub anime: String,
    pub anime_slug: String,
    pub character: String,
    pub character_slug: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub japanese_title: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// An anime series in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anime {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub japanese_name: String,
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub release_year: Option<u32>,
    #[serde(default)]
    pub total_quotes: u32,
}

/// A character belonging to one anime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub japanese_name: Option<String>,
    pub anime: String,
    pub anime_slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub total_quotes: u32,
}

/// Server-side filters for the quote list endpoint.
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    pub anime_slug: Option<String>,
    pub character_slug: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl QuoteFilter {
    /// All quotes for one anime.
    pub fn anime(slug: &str) -> Self {
        Self {
            anime_slug: Some(slug.to_string()),
            ..Default::default()
        }
    }

    /// All quotes for one character.
    pub fn character(slug: &str) -> Self {
        Self {
            character_slug: Some(slug.to_string()),
            ..Default::default()
        }
    }

    /// An unfiltered fetch capped at `limit` quotes.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Query-string pairs for the `/api/quotes` endpoint.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref slug) = self.anime_slug {
            pairs.push(("anime_slug", slug.clone()));
        }
        if let Some(ref slug) = self.character_slug {
            pairs.push(("character_slug", slug.clone()));
        }
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
