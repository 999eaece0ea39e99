use serde::{Deserialize, Serialize};

use sabor_core::enums::Role;
use sabor_core::{CoreError, SessionUser};

use crate::error::{ApiFailure, ErrorKind, OperationResult};

const MIN_PASSWORD_LEN: usize = 6;

/// Account as returned by `auth/login`, `auth/register` and `auth/profile`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub nombre: Option<String>,
    pub email: String,
    #[serde(alias = "role")]
    pub rol: String,
}

impl UserDto {
    pub(crate) fn into_domain(self) -> OperationResult<SessionUser> {
        let role: Role = self.rol.parse().map_err(|error: CoreError| {
            ApiFailure::from_kind(ErrorKind::MalformedResponse).with_cause(error)
        })?;
        Ok(SessionUser {
            id: self.id,
            name: self.nombre,
            email: self.email,
            role,
        })
    }
}

/// `data` of a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthPayloadDto {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: Option<String>,
    #[serde(alias = "usuario")]
    pub user: UserDto,
}

impl AuthPayloadDto {
    /// Split into token and user, rejecting payloads without a usable token.
    pub(crate) fn into_session_parts(self) -> OperationResult<(String, SessionUser)> {
        let token = self
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiFailure::from_kind(ErrorKind::MalformedResponse))?;
        Ok((token, self.user.into_domain()?))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(CoreError::validation("La contraseña es obligatoria."));
        }
        Ok(())
    }
}

/// New account. `rol` decides whether a productor or cliente profile is
/// created alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

impl RegisterRequest {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        super::require_text(&self.nombre, "nombre")?;
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "La contraseña debe tener al menos {MIN_PASSWORD_LEN} caracteres."
            )));
        }
        Ok(())
    }
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain.
fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            && !email.chars().any(char::is_whitespace)
    });
    if valid {
        Ok(())
    } else {
        Err(CoreError::validation("Introduce un correo electrónico válido."))
    }
}
