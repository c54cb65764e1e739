//! HTTP-backed implementations of the core store contracts.

mod profile;
mod transaction;

pub use profile::HttpProfileStore;
pub use transaction::HttpTransactionStore;
