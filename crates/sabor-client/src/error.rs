//! Failure taxonomy for API calls.
//!
//! Every call made through [`SaborClient`](crate::SaborClient) ends in an
//! [`OperationResult`]: either the mapped payload or an [`ApiFailure`] that
//! carries a category, a non-empty user-facing message, and the underlying
//! cause when there is one.

use std::fmt;

use reqwest::StatusCode;
use sabor_config::ConfigError;
use sabor_core::CoreError;
use thiserror::Error;

/// Outcome of one remote operation.
pub type OperationResult<T> = Result<T, ApiFailure>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message shown when login/register is rejected with 401.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas.";

/// Message for transport failures that are neither connect errors nor timeouts.
pub const GENERIC_IO_MESSAGE: &str = "Error de comunicación con el servidor. Inténtalo de nuevo.";

/// Category of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NetworkUnreachable,
    Timeout,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ValidationFailed,
    ServerError,
    MalformedResponse,
    Unknown,
}

impl ErrorKind {
    /// Categorize a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::Timeout,
            s if s.is_server_error() => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Short user-facing sentence for this category.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NetworkUnreachable => {
                "No se pudo conectar con el servidor. Revisa tu conexión a internet."
            }
            Self::Timeout => "El servidor tardó demasiado en responder. Inténtalo de nuevo.",
            Self::Unauthorized => "Tu sesión ha expirado. Inicia sesión de nuevo.",
            Self::Forbidden => "No tienes permiso para realizar esta acción.",
            Self::NotFound => "El recurso solicitado no existe.",
            Self::Conflict => "El registro ya existe.",
            Self::ValidationFailed => "Los datos enviados no son válidos.",
            Self::ServerError => "Error del servidor. Inténtalo más tarde.",
            Self::MalformedResponse => "Respuesta inesperada del servidor.",
            Self::Unknown => "Ocurrió un error inesperado.",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetworkUnreachable => "network_unreachable",
            Self::Timeout => "timeout",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ValidationFailed => "validation_failed",
            Self::ServerError => "server_error",
            Self::MalformedResponse => "malformed_response",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed remote operation, ready to be shown to the user.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiFailure {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    #[source]
    cause: Option<BoxError>,
}

impl ApiFailure {
    /// Build a failure. A blank `message` is replaced by the kind's default.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        Self {
            kind,
            message,
            status: None,
            cause: None,
        }
    }

    /// Failure with the kind's default message.
    #[must_use]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// User-facing message. Never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl From<CoreError> for ApiFailure {
    fn from(error: CoreError) -> Self {
        let message = match &error {
            CoreError::Validation(message) => message.clone(),
            CoreError::InvalidTransition { from, to, .. } => {
                format!("No se puede cambiar el estado de {from} a {to}.")
            }
        };
        Self::new(ErrorKind::ValidationFailed, message).with_cause(error)
    }
}

/// Errors raised while constructing a [`SaborClient`](crate::SaborClient).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
