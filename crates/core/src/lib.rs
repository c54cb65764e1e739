//! Core approval-workflow logic for TrustBank.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! External collaborators (the remote transaction and profile stores) are
//! expressed as traits and implemented elsewhere.
//!
//! # Modules
//!
//! - `session` - Authenticated principal and role checks
//! - `profile` - User profile record and store contract
//! - `ledger` - Transaction creation and approval workflow
//! - `documents` - Per-slot document approval state machine
//! - `notification` - Fire-and-forget user notification contract

pub mod documents;
pub mod ledger;
pub mod notification;
pub mod profile;
pub mod session;
