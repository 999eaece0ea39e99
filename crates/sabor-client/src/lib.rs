//! # sabor-client
//!
//! Typed HTTP client for the SaborLocal backend.
//!
//! Every call goes through one pipeline (see `http`): the [`AuthInterceptor`]
//! attaches the stored bearer token, the response status is reported back to
//! it so a rejected session is dropped, and the `{ success, message, data }`
//! envelope is unwrapped. Callers only ever see [`OperationResult`].
//!
//! Repositories are `impl SaborClient` blocks, one module per entity:
//! - `auth`: login, registration, logout, profile
//! - `productos`, `productores`, `clientes`
//! - `pedidos`, `entregas`
//!
//! [`view_state`] turns results into observable screen state.

pub mod dto;
pub mod envelope;
pub mod error;
pub mod view_state;

mod auth;
mod clientes;
mod entregas;
mod http;
mod pedidos;
mod productores;
mod productos;

use std::sync::Arc;

use reqwest::Url;

use sabor_auth::{AuthInterceptor, CredentialStore};
use sabor_config::ApiConfig;

pub use dto::{
    ClienteUpdate, LoginRequest, NewEntrega, NewPedido, NewPedidoItem, NewProducto,
    ProductoUpdate, ProductorUpdate, RegisterRequest,
};
pub use error::{ApiFailure, BuildError, ErrorKind, OperationResult};
pub use view_state::{StateHolder, ViewScope, ViewState};

// ── Client ─────────────────────────────────────────────────────────

/// Client for the SaborLocal REST API.
///
/// Built once from configuration and shared by reference (or in an `Arc`)
/// with every screen or command that needs it.
pub struct SaborClient {
    http: reqwest::Client,
    base_url: Url,
    interceptor: AuthInterceptor,
}

impl SaborClient {
    /// Build a client for `config.base_url` backed by `store`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] for an invalid base URL or timeout and
    /// [`BuildError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self, BuildError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url()?,
            interceptor: AuthInterceptor::new(store),
        })
    }

    /// Replace the interceptor, e.g. to change the auth-endpoint allowlist.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: AuthInterceptor) -> Self {
        self.interceptor = interceptor;
        self
    }

    /// Store holding the current session.
    #[must_use]
    pub fn session_store(&self) -> &Arc<dyn CredentialStore> {
        self.interceptor.store()
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for SaborClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaborClient")
            .field("base_url", &self.base_url.as_str())
            .field("interceptor", &self.interceptor)
            .finish_non_exhaustive()
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
