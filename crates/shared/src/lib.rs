//! Shared types, errors, and configuration for TrustBank.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Bearer token claims and the login response shape
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::{Claims, TokenResponse};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
