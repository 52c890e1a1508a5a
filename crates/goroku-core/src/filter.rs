//! Client-side character filter over an already-fetched quote list.
//!
//! Independent of the server search path: it narrows a snapshot the caller
//! already holds (for example, all quotes of one anime) without issuing a
//! new request.

use goroku_api::types::Quote;

/// Exact-match filter on the character display name.
///
/// `None` is the identity ("all characters"); `Some(name)` keeps quotes
/// whose `character` equals `name` exactly, case-sensitive, no
/// normalization. Pure and idempotent.
pub fn by_character(quotes: &[Quote], character: Option<&str>) -> Vec<Quote> {
    match character {
        None => quotes.to_vec(),
        Some(name) => quotes
            .iter()
            .filter(|q| q.character == name)
            .cloned()
            .collect(),
    }
}
