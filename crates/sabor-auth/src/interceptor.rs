//! Bearer-token injection and session invalidation around every API call.
//!
//! The client calls [`AuthInterceptor::decorate`] on each outgoing request and
//! [`AuthInterceptor::observe`] with the status of each response and the token
//! the request carried. Neither phase can fail: store problems are logged and
//! the request proceeds as if no session existed, which the backend then
//! answers with a 401.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, StatusCode};

use crate::token_store::CredentialStore;

/// Path segments whose 401 means "bad credentials", not "stale session".
pub const DEFAULT_EXEMPT_SEGMENTS: &[&str] = &["login", "register"];

pub struct AuthInterceptor {
    store: Arc<dyn CredentialStore>,
    exempt_segments: Vec<String>,
}

impl AuthInterceptor {
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            exempt_segments: DEFAULT_EXEMPT_SEGMENTS
                .iter()
                .map(|segment| (*segment).to_string())
                .collect(),
        }
    }

    /// Replace the auth-endpoint allowlist.
    #[must_use]
    pub fn with_exempt_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_segments = segments
            .into_iter()
            .map(|segment| segment.into().to_ascii_lowercase())
            .collect();
        self
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Whether `path` is a login/register style endpoint.
    #[must_use]
    pub fn is_auth_endpoint(&self, path: &str) -> bool {
        path.split('/').any(|segment| {
            self.exempt_segments
                .iter()
                .any(|exempt| segment.eq_ignore_ascii_case(exempt))
        })
    }

    /// Attach `Authorization: Bearer <token>` when a session is stored.
    ///
    /// Any existing `Authorization` header is replaced, so the request carries
    /// at most one. Without a session the request is returned untouched.
    #[must_use]
    pub fn decorate(&self, mut request: Request) -> Request {
        let session = match self.store.load() {
            Ok(Some(session)) if session.is_usable() => session,
            Ok(_) => return request,
            Err(error) => {
                tracing::warn!(%error, "credential store unreadable; sending request without credentials");
                return request;
            }
        };

        match HeaderValue::from_str(&session.bearer()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(error) => {
                tracing::warn!(%error, "stored token is not a valid header value; sending request without credentials");
            }
        }
        request
    }

    /// Token carried in the `Authorization` header of a decorated request.
    #[must_use]
    pub fn attached_token(request: &Request) -> Option<String> {
        request
            .headers()
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::to_string)
    }

    /// React to a response status. Returns `true` if the stored session was cleared.
    ///
    /// A 401 from anything but an auth endpoint means the backend no longer
    /// accepts `sent_token`, so the session holding it is dropped and the user
    /// has to log in again. The store is only cleared while it still holds
    /// that token: a session saved after the request went out survives a late
    /// 401. A 401 from login/register, or for a request sent without
    /// credentials, is left alone.
    pub fn observe(&self, path: &str, status: StatusCode, sent_token: Option<&str>) -> bool {
        if status != StatusCode::UNAUTHORIZED || self.is_auth_endpoint(path) {
            return false;
        }
        let Some(token) = sent_token else {
            tracing::debug!(path, "401 for a request sent without credentials");
            return false;
        };
        match self.store.clear_if_token(token) {
            Ok(true) => {
                tracing::info!(path, "session rejected by backend; stored credentials cleared");
                true
            }
            Ok(false) => {
                tracing::debug!(path, "rejected token already replaced; keeping stored session");
                false
            }
            Err(error) => {
                tracing::warn!(%error, path, "failed to clear rejected session");
                false
            }
        }
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("store", &self.store.source())
            .field("exempt_segments", &self.exempt_segments)
            .finish()
    }
}
