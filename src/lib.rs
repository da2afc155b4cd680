//! Avatar Cache - avatar lookups for chain accounts
//!
//! Serves account avatars from a bounded in-memory LRU cache, fetching
//! missing ones from the chain-state avatar service.

pub mod api;
pub mod avatar;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
