//! Document approval tracking.
//!
//! Each user carries three independent document slots (photo, ID front,
//! ID back), each with its own tri-state approval status.
//!
//! # Modules
//!
//! - `types` - Slot, status, and embedded state types
//! - `error` - Document-specific error types
//! - `service` - Upload and admin decision operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod state_props;

pub use error::DocumentError;
pub use service::DocumentService;
pub use types::{
    DecisionOutcome, DocumentApprovalState, DocumentSlot, DocumentStats, SlotStatus,
};
