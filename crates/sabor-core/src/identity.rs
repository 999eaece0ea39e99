use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Snapshot of the authenticated principal, stored next to the bearer token.
///
/// Only meaningful while the token it was issued with is still accepted by the
/// backend. Produced by `sabor-client` on login, persisted by `sabor-auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend user id.
    pub id: String,
    /// Display name. The backend omits it for some accounts.
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Name to show in greetings, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: name.map(Into::into),
            email: "ana@x.com".into(),
            role: Role::Cliente,
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(user(Some("Ana")).display_name(), "Ana");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(user(None).display_name(), "ana@x.com");
        assert_eq!(user(Some("  ")).display_name(), "ana@x.com");
    }

    #[test]
    fn role_serializes_as_wire_tag() {
        let json = serde_json::to_value(user(Some("Ana"))).expect("serialize");
        assert_eq!(json["role"], "CLIENTE");
    }
}
