//! # sabor-auth
//!
//! Session handling for the SaborLocal client.
//!
//! Provides the [`CredentialStore`] backends (OS keychain via `keyring`, a
//! JSON file, process memory), the [`AuthInterceptor`] that injects the bearer
//! token into outgoing requests and drops the session when the backend rejects
//! it, and best-effort JWT expiry decoding for status display.

pub mod error;
pub mod interceptor;
pub mod session;
pub mod token;
pub mod token_store;

use std::sync::Arc;

use sabor_config::{AuthConfig, StoreBackend};

pub use error::AuthError;
pub use interceptor::AuthInterceptor;
pub use session::StoredSession;
pub use token_store::{CredentialStore, FileStore, KeyringStore, MemoryStore};

/// Open the session store selected by `config.store`.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if a file-backed store is requested
/// and no credentials path can be resolved.
pub fn open_store(config: &AuthConfig) -> Result<Arc<dyn CredentialStore>, AuthError> {
    let store: Arc<dyn CredentialStore> = match config.store {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(file_store(config)?),
        StoreBackend::Keyring => Arc::new(KeyringStore::new(
            config.keyring_service.clone(),
            file_store(config)?,
        )),
    };
    tracing::debug!(backend = store.source(), "opened session store");
    Ok(store)
}

fn file_store(config: &AuthConfig) -> Result<FileStore, AuthError> {
    config.credentials_file().map(FileStore::new).ok_or_else(|| {
        AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
    })
}
