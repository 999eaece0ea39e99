//! Backend API connection settings.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000/api/".to_string()
}

const fn default_connect_timeout_secs() -> u64 {
    30
}

const fn default_read_timeout_secs() -> u64 {
    30
}

const fn default_request_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("saborlocal/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the REST API; endpoint paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Timeout between reads of the response body, in seconds.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Upper bound for a whole request/response exchange, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Parse `base_url`, adding the trailing slash `Url::join` needs to keep
    /// the last path segment (`/api` → `/api/`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL does not parse or is not
    /// `http`/`https`.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        let url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url".into(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    /// Check every field that would otherwise fail at client construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a bad URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        for (field, value) in [
            ("api.connect_timeout_secs", self.connect_timeout_secs),
            ("api.read_timeout_secs", self.read_timeout_secs),
            ("api.request_timeout_secs", self.request_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
