use serde::{Deserialize, Serialize};

use sabor_core::SessionUser;

/// Bearer token plus the user snapshot it was issued for.
///
/// Persisted as a single record so the token and the snapshot can only be
/// written or cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: SessionUser,
}

impl StoredSession {
    #[must_use]
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// `Authorization` header value for this session.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// A session with a blank token is never sent.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
