//! Uniform fail-soft wrapper around remote calls.
//!
//! Transport and decoding failures degrade to "no data" plus a diagnostic
//! log entry; they never propagate past the component that issued the
//! request. Every remote call the engine makes goes through [`or_empty`] so
//! the policy lives in one place. `Ok(None)` from the single-entity getters
//! passes through untouched: not-found is a terminal state, not a failure.

use std::future::Future;

use tracing::warn;

/// Await a remote call, downgrading any error to `T::default()`.
pub async fn or_empty<T, E, F>(op: &'static str, fut: F) -> T
where
    T: Default,
    E: std::error::Error,
    F: Future<Output = Result<T, E>>,
{
    match fut.await {
        Ok(value) => value,
        Err(e) => {
            warn!(op, error = %e, "request failed, treating result as empty");
            T::default()
        }
    }
}
