//! Identity Port (Driven Port)
//!
//! Resolves bearer tokens to caller identities. Handlers gate on the resolved
//! role; the port itself never decides what an identity may do.

use async_trait::async_trait;
use thiserror::Error;

/// Authentication/authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No token, or the token matched nothing. Maps to 401.
    #[error("Missing or invalid bearer token")]
    Unauthenticated,

    /// Token resolved, but the identity lacks the required role. Maps to 403.
    #[error("Insufficient privileges")]
    Forbidden,
}

/// Role attached to a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Back-office administrator.
    Admin,
    /// Internal service (the fraud dispatcher).
    Service,
}

/// A resolved caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// The caller's role.
    pub role: Role,
}

impl Identity {
    /// Require the admin role.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for any non-admin identity.
    pub const fn require_admin(self) -> Result<Self, AuthError> {
        match self.role {
            Role::Admin => Ok(self),
            Role::Service => Err(AuthError::Forbidden),
        }
    }
}

/// Port for resolving bearer tokens.
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Resolve a bearer token (without the `Bearer ` prefix) to an identity.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` when the token is absent or unknown.
    async fn verify(&self, bearer: Option<&str>) -> Result<Identity, AuthError>;
}
