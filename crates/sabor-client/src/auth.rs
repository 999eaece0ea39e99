//! Login, registration and the stored session.

use sabor_auth::StoredSession;
use sabor_core::SessionUser;

use crate::SaborClient;
use crate::dto::auth::{AuthPayloadDto, UserDto};
use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::{ApiFailure, ErrorKind, OperationResult};

impl SaborClient {
    /// `POST auth/login`, then persist the returned session.
    ///
    /// A 401 here means wrong credentials; any session already stored is kept.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a malformed email or empty password (no request
    /// is sent), any pipeline failure, or `Unknown` if the session cannot be
    /// written to the store.
    pub async fn login(&self, email: &str, password: &str) -> OperationResult<SessionUser> {
        let request = LoginRequest::new(email, password);
        request.validate()?;
        let payload: AuthPayloadDto = self.post("auth/login", &request).await?.into_data()?;
        self.persist(payload)
    }

    /// `POST auth/register`, then persist the returned session.
    ///
    /// # Errors
    ///
    /// As for [`login`](Self::login); registration also requires a non-blank
    /// name and a password of at least six characters.
    pub async fn register(&self, request: &RegisterRequest) -> OperationResult<SessionUser> {
        request.validate()?;
        let payload: AuthPayloadDto = self.post("auth/register", request).await?.into_data()?;
        self.persist(payload)
    }

    /// Drop the stored session. Purely local; the backend keeps no sessions.
    ///
    /// # Errors
    ///
    /// `Unknown` if the store cannot be cleared.
    pub fn logout(&self) -> OperationResult<()> {
        self.session_store().clear().map_err(store_failure)?;
        tracing::info!("logged out");
        Ok(())
    }

    /// User snapshot of the stored session, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.session_store().current_user()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session_store().is_logged_in()
    }

    /// `GET auth/profile`. Refreshes the stored snapshot when it changed.
    ///
    /// The snapshot is only rewritten while the store still holds the token
    /// the profile was fetched with, so a session cleared or replaced while
    /// the call was in flight stays that way.
    ///
    /// # Errors
    ///
    /// Any pipeline failure. `Unauthorized` also drops the session.
    pub async fn profile(&self) -> OperationResult<SessionUser> {
        let sent_token = self
            .session_store()
            .load()
            .ok()
            .flatten()
            .filter(StoredSession::is_usable)
            .map(|session| session.token);
        let user = self
            .get::<UserDto>("auth/profile")
            .await?
            .into_data()?
            .into_domain()?;

        let Some(token) = sent_token else {
            return Ok(user);
        };
        match self.session_store().load() {
            Ok(Some(stored)) if stored.token == token && stored.user != user => {
                let refreshed = StoredSession::new(token.as_str(), user.clone());
                match self.session_store().save_if_token(&token, &refreshed) {
                    Ok(true) => tracing::debug!(user_id = %user.id, "stored user snapshot refreshed"),
                    Ok(false) => tracing::debug!("session changed during profile call; not refreshed"),
                    Err(error) => tracing::warn!(%error, "failed to refresh stored user snapshot"),
                }
            }
            Ok(_) => {}
            Err(error) => tracing::warn!(%error, "credential store unreadable"),
        }
        Ok(user)
    }

    fn persist(&self, payload: AuthPayloadDto) -> OperationResult<SessionUser> {
        let (token, user) = payload.into_session_parts()?;
        let session = StoredSession::new(token, user.clone());
        self.session_store().save(&session).map_err(store_failure)?;
        tracing::info!(user_id = %user.id, role = %user.role, "session stored");
        Ok(user)
    }
}

fn store_failure(error: sabor_auth::AuthError) -> ApiFailure {
    tracing::warn!(%error, "credential store write failed");
    ApiFailure::new(
        ErrorKind::Unknown,
        "No se pudo guardar la sesión en este dispositivo.",
    )
    .with_cause(error)
}
