//! HTTP boundary for the quote catalog service.
//!
//! The service is a plain JSON read/search API; this crate holds the wire
//! models, the [`QuoteSource`] trait that the state engine programs
//! against, and the reqwest-backed client.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::QuoteApiClient;
pub use error::QuoteApiError;
pub use traits::QuoteSource;
