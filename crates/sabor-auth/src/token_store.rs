//! Session persistence backends.
//!
//! Every backend stores the whole [`StoredSession`] as one JSON record, so the
//! token and the user snapshot are always written and cleared together.
//! All operations are synchronous: the interceptor reads the store from inside
//! the request pipeline, where there is nothing to await on.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use sabor_core::SessionUser;

use crate::error::AuthError;
use crate::session::StoredSession;

const KEYRING_USER: &str = "session";

/// Synchronous storage for the current session.
pub trait CredentialStore: Send + Sync {
    /// Load the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the backend cannot be read or holds a corrupt record.
    fn load(&self) -> Result<Option<StoredSession>, AuthError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the record cannot be written.
    fn save(&self, session: &StoredSession) -> Result<(), AuthError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the record exists but cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;

    /// Short backend name for status output.
    fn source(&self) -> &'static str;

    /// Remove the stored session only while it still carries `token`.
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the backend cannot be read or the record cannot be removed.
    fn clear_if_token(&self, token: &str) -> Result<bool, AuthError> {
        match self.load()? {
            Some(stored) if stored.token == token => {
                self.clear()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Replace the stored session only while it still carries `token`.
    /// Returns whether the record was written.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the backend cannot be read or written.
    fn save_if_token(&self, token: &str, session: &StoredSession) -> Result<bool, AuthError> {
        match self.load()? {
            Some(stored) if stored.token == token => {
                self.save(session)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// User snapshot of a usable stored session. Read failures count as logged out.
    fn current_user(&self) -> Option<SessionUser> {
        match self.load() {
            Ok(session) => session.filter(StoredSession::is_usable).map(|s| s.user),
            Err(error) => {
                tracing::warn!(%error, "failed to read stored session");
                None
            }
        }
    }

    fn is_logged_in(&self) -> bool {
        self.load()
            .ok()
            .flatten()
            .is_some_and(|session| session.is_usable())
    }
}

// --- Memory ---

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RwLock<Option<StoredSession>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `session`.
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        self.session
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| AuthError::TokenStoreError("session lock poisoned".into()))
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AuthError::TokenStoreError("session lock poisoned".into()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AuthError::TokenStoreError("session lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }

    fn source(&self) -> &'static str {
        "memory"
    }

    fn clear_if_token(&self, token: &str) -> Result<bool, AuthError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AuthError::TokenStoreError("session lock poisoned".into()))?;
        if guard.as_ref().is_some_and(|stored| stored.token == token) {
            *guard = None;
            return Ok(true);
        }
        Ok(false)
    }

    fn save_if_token(&self, token: &str, session: &StoredSession) -> Result<bool, AuthError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AuthError::TokenStoreError("session lock poisoned".into()))?;
        if guard.as_ref().is_some_and(|stored| stored.token == token) {
            *guard = Some(session.clone());
            return Ok(true);
        }
        Ok(false)
    }
}

/// Serializes writers inside this process so the conditional operations
/// cannot interleave with a plain save or clear.
fn hold(lock: &Mutex<()>) -> Result<MutexGuard<'_, ()>, AuthError> {
    lock.lock()
        .map_err(|_| AuthError::TokenStoreError("session write lock poisoned".into()))
}

// --- File ---

/// JSON file store (`0600` file in a `0700` directory on Unix).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    writes: Arc<Mutex<()>>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writes: Arc::default(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, session: &StoredSession) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        // Write-then-rename so a crash never leaves half a session behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", tmp.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", tmp.display())))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            AuthError::TokenStoreError(format!("rename to {}: {e}", self.path.display()))
        })
    }

    fn remove_record(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::TokenStoreError(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthError::TokenStoreError(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&content).map(Some).map_err(|e| {
            AuthError::TokenStoreError(format!("corrupt session file {}: {e}", self.path.display()))
        })
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let _writes = hold(&self.writes)?;
        self.write_record(session)
    }

    fn clear(&self) -> Result<(), AuthError> {
        let _writes = hold(&self.writes)?;
        self.remove_record()
    }

    fn source(&self) -> &'static str {
        "file"
    }

    fn clear_if_token(&self, token: &str) -> Result<bool, AuthError> {
        let _writes = hold(&self.writes)?;
        match self.load()? {
            Some(stored) if stored.token == token => self.remove_record().map(|()| true),
            _ => Ok(false),
        }
    }

    fn save_if_token(&self, token: &str, session: &StoredSession) -> Result<bool, AuthError> {
        let _writes = hold(&self.writes)?;
        match self.load()? {
            Some(stored) if stored.token == token => self.write_record(session).map(|()| true),
            _ => Ok(false),
        }
    }
}

// --- Keyring ---

/// OS keychain store with a file fallback for headless machines.
///
/// Load priority: keyring → file.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    fallback: FileStore,
    writes: Arc<Mutex<()>>,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>, fallback: FileStore) -> Self {
        Self {
            service: service.into(),
            fallback,
            writes: Arc::default(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn load_keyring(&self) -> Result<Option<StoredSession>, AuthError> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(json) if json.trim().is_empty() => Ok(None),
            Ok(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| AuthError::KeyringError(format!("corrupt keyring entry: {e}"))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn write_record(&self, session: &StoredSession) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;

        let stored = self
            .entry()
            .and_then(|entry| {
                entry
                    .set_password(&json)
                    .map_err(|e| AuthError::KeyringError(e.to_string()))
            });
        match stored {
            Ok(()) => {
                // An older file session would otherwise resurface if the
                // keychain later becomes unreadable.
                if let Err(error) = self.fallback.clear() {
                    tracing::warn!(%error, "failed to remove stale credentials file");
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.fallback.save(session)
            }
        }
    }

    fn remove_record(&self) -> Result<(), AuthError> {
        // The file goes first so a keyring failure never leaves it behind.
        let file = self.fallback.clear();
        let keyring = match self.entry() {
            Ok(entry) => settle_keyring_delete(entry.delete_credential(), || {
                matches!(self.load_keyring(), Ok(Some(_)))
            }),
            Err(error) => {
                tracing::debug!(%error, "no keyring backend; nothing to delete there");
                Ok(())
            }
        };
        keyring.and(file)
    }
}

/// Outcome of deleting the keyring entry. A failed delete only counts as
/// cleared when `still_stored` confirms no session can be read back.
fn settle_keyring_delete(
    deleted: keyring::Result<()>,
    still_stored: impl FnOnce() -> bool,
) -> Result<(), AuthError> {
    match deleted {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(error) if still_stored() => Err(AuthError::KeyringError(format!(
            "failed to delete keyring session: {error}"
        ))),
        Err(error) => {
            tracing::warn!(%error, "keyring delete failed; no session left to read back");
            Ok(())
        }
    }
}

impl CredentialStore for KeyringStore {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        match self.load_keyring() {
            Ok(Some(session)) => return Ok(Some(session)),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, "keyring read failed; trying credentials file");
            }
        }
        self.fallback.load()
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let _writes = hold(&self.writes)?;
        self.write_record(session)
    }

    fn clear(&self) -> Result<(), AuthError> {
        let _writes = hold(&self.writes)?;
        self.remove_record()
    }

    fn source(&self) -> &'static str {
        "keyring"
    }

    fn clear_if_token(&self, token: &str) -> Result<bool, AuthError> {
        let _writes = hold(&self.writes)?;
        match self.load()? {
            Some(stored) if stored.token == token => self.remove_record().map(|()| true),
            _ => Ok(false),
        }
    }

    fn save_if_token(&self, token: &str, session: &StoredSession) -> Result<bool, AuthError> {
        let _writes = hold(&self.writes)?;
        match self.load()? {
            Some(stored) if stored.token == token => self.write_record(session).map(|()| true),
            _ => Ok(false),
        }
    }
}
