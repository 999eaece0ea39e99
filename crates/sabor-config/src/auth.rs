//! Session storage settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the session (token + user snapshot) is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// OS keychain, falling back to the credentials file.
    #[default]
    Keyring,
    /// Credentials file only.
    File,
    /// Process memory; nothing survives exit.
    Memory,
}

fn default_keyring_service() -> String {
    "saborlocal".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub store: StoreBackend,

    /// Keychain service name. Tests should override it to avoid touching a
    /// real session.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Credentials file. Empty means `~/.sabor/session.json`.
    #[serde(default)]
    pub credentials_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::default(),
            keyring_service: default_keyring_service(),
            credentials_path: String::new(),
        }
    }
}

impl AuthConfig {
    /// Resolved credentials file path, or `None` if no home directory exists.
    #[must_use]
    pub fn credentials_file(&self) -> Option<PathBuf> {
        if self.credentials_path.is_empty() {
            dirs::home_dir().map(|home| home.join(".sabor").join("session.json"))
        } else {
            Some(PathBuf::from(&self.credentials_path))
        }
    }
}
