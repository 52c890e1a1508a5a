pub mod carousel;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod search;
pub mod soft;
pub mod store;

#[cfg(test)]
mod testutil;
