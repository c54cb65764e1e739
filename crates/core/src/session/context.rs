//! The session context and role gates.

use rust_decimal::Decimal;
use trustbank_shared::types::UserId;

use crate::session::error::SessionError;
use crate::session::types::{Principal, Role};

/// The authenticated session, created once per login.
///
/// Replaces the ambient browser-storage session of the original dashboard:
/// the context is constructed from the auth response and passed explicitly
/// to every operation that needs an authorization check. Dropping or
/// `close`-ing the context ends the session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    principal: Principal,
}

impl SessionContext {
    /// Creates a session for an authenticated principal.
    #[must_use]
    pub const fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Returns the authenticated principal.
    #[must_use]
    pub const fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the principal's user ID.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.principal.id
    }

    /// Returns true if the principal is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.principal.role == Role::Admin
    }

    /// Fails unless the principal holds exactly the given role.
    pub fn require_role(&self, required: Role) -> Result<(), SessionError> {
        if self.principal.role == required {
            Ok(())
        } else {
            Err(SessionError::RoleMismatch {
                role: self.principal.role,
                required,
            })
        }
    }

    /// Fails unless the principal is an admin.
    pub fn require_admin(&self) -> Result<(), SessionError> {
        self.require_role(Role::Admin)
    }

    /// Updates the cached balance snapshot after a successful debit.
    ///
    /// The persisted owner record is the source of truth; this keeps the
    /// session's view consistent with what the ledger just wrote.
    pub fn debit_balance(&mut self, amount: Decimal) {
        self.principal.balance -= amount;
    }

    /// Ends the session, consuming the context.
    pub fn close(self) {
        drop(self);
    }
}
