//! Session management for authenticated principals.
//!
//! A session is created once after external authentication and threaded
//! explicitly through every operation that needs an authorization check.
//!
//! # Modules
//!
//! - `types` - Principal and role types
//! - `error` - Session-specific error types
//! - `context` - The session context and role gates

pub mod context;
pub mod error;
pub mod types;

pub use context::SessionContext;
pub use error::SessionError;
pub use types::{Principal, Role};
