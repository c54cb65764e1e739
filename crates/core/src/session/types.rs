//! Principal and role types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use trustbank_shared::Claims;
use trustbank_shared::types::UserId;

/// Role of an authenticated principal.
///
/// Approval decisions on transactions and documents are gated on `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account holder.
    User,
    /// Back-office administrator.
    Admin,
}

impl Role {
    /// Parses a role from its wire representation.
    ///
    /// The identity provider emits Spring-style authority strings
    /// (`ROLE_USER`, `ROLE_ADMIN`); the bare names are accepted too.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_uppercase();
        match s.strip_prefix("ROLE_").unwrap_or(&s) {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated actor performing operations.
///
/// Constructed from the access token claims on login; the balance is a
/// snapshot of the owner record at authentication time and is kept in sync
/// by the ledger when a debit succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// The principal's user ID.
    pub id: UserId,
    /// The principal's role.
    pub role: Role,
    /// Available balance snapshot.
    pub balance: Decimal,
}

impl Principal {
    /// Creates a principal.
    #[must_use]
    pub const fn new(id: UserId, role: Role, balance: Decimal) -> Self {
        Self { id, role, balance }
    }

    /// Builds a principal from bearer token claims.
    ///
    /// Returns `None` if the role claim is not a known role.
    #[must_use]
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        Some(Self {
            id: claims.sub,
            role: Role::parse(&claims.role)?,
            balance: claims.balance,
        })
    }
}
