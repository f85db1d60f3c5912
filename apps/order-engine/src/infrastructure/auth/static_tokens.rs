//! Static-token identity adapter.
//!
//! Tokens come from the environment: a set of admin tokens and one internal
//! service token. Comparison is exact; there is no expiry or refresh.

use async_trait::async_trait;

use crate::application::ports::{AuthError, Identity, IdentityPort, Role};

/// `IdentityPort` implementation over configured static tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenIdentity {
    admin_tokens: Vec<String>,
    service_token: Option<String>,
}

impl StaticTokenIdentity {
    /// Create a new adapter. Empty tokens are dropped so a blank env var can
    /// never authenticate anything.
    #[must_use]
    pub fn new(admin_tokens: Vec<String>, service_token: Option<String>) -> Self {
        Self {
            admin_tokens: admin_tokens.into_iter().filter(|t| !t.is_empty()).collect(),
            service_token: service_token.filter(|t| !t.is_empty()),
        }
    }
}

#[async_trait]
impl IdentityPort for StaticTokenIdentity {
    async fn verify(&self, bearer: Option<&str>) -> Result<Identity, AuthError> {
        let token = bearer.ok_or(AuthError::Unauthenticated)?;
        if self.admin_tokens.iter().any(|t| t == token) {
            return Ok(Identity { role: Role::Admin });
        }
        if self.service_token.as_deref() == Some(token) {
            return Ok(Identity {
                role: Role::Service,
            });
        }
        Err(AuthError::Unauthenticated)
    }
}
