//! HTTP layer for TrustBank.
//!
//! This crate implements the core store contracts against the remote REST
//! backend:
//! - `ApiClient` - shared HTTP client with bearer auth and timeouts
//! - `AuthProvider` - OAuth password-grant login building a session
//! - `HttpTransactionStore` / `HttpProfileStore` - store trait impls
//! - `TracingSink` - notification sink backed by tracing events

pub mod api;
pub mod auth;
pub mod notify;
pub mod stores;
mod wire;

pub use api::ApiClient;
pub use auth::AuthProvider;
pub use notify::TracingSink;
pub use stores::{HttpProfileStore, HttpTransactionStore};
