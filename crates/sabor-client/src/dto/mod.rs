//! Wire formats of the SaborLocal backend and their mapping to domain types.
//!
//! The backend is a NestJS + MongoDB service: ids arrive as `_id`, fields are
//! camelCase, and relations are either an id string or a populated object.
//! Response DTOs are `pub(crate)`; request bodies are public because callers
//! build them.

pub(crate) mod auth;
pub(crate) mod cliente;
pub(crate) mod entrega;
pub(crate) mod pedido;
pub(crate) mod producto;
pub(crate) mod productor;

pub use auth::{LoginRequest, RegisterRequest};
pub use cliente::ClienteUpdate;
pub use entrega::NewEntrega;
pub use pedido::{NewPedido, NewPedidoItem};
pub use producto::{NewProducto, ProductoUpdate};
pub use productor::ProductorUpdate;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sabor_core::{CoreError, Related};

use crate::error::{ApiFailure, ErrorKind, OperationResult};

/// A relation as sent by the backend: `"665f..."` or `{ "_id": "665f...", ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RelatedDto<T> {
    Reference(String),
    Embedded(T),
}

impl<T> RelatedDto<T> {
    pub(crate) fn into_domain<U>(self, map: impl FnOnce(T) -> U) -> Related<U> {
        match self {
            Self::Reference(id) => Related::Reference(id),
            Self::Embedded(dto) => Related::Embedded(map(dto)),
        }
    }
}

/// Populated object of which only the id is kept.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IdOnly {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
}

impl RelatedDto<IdOnly> {
    pub(crate) fn into_id(self) -> String {
        match self {
            Self::Reference(id) => id,
            Self::Embedded(IdOnly { id }) => id,
        }
    }
}

/// Body of `PATCH .../estado`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EstadoUpdate<E> {
    pub estado: E,
}

/// Parse a status tag sent by the backend. Unknown tags mean the response does
/// not match this client's model.
pub(crate) fn parse_estado<E>(raw: &str) -> OperationResult<E>
where
    E: FromStr<Err = CoreError>,
{
    raw.parse()
        .map_err(|error: CoreError| ApiFailure::from_kind(ErrorKind::MalformedResponse).with_cause(error))
}

pub(crate) const fn default_true() -> bool {
    true
}

/// Reject blank required text fields.
pub(crate) fn require_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(format!(
            "El campo {field} es obligatorio."
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_accepts_bare_id() {
        let dto: RelatedDto<IdOnly> = serde_json::from_str(r#""665f1c""#).expect("parse");
        assert_eq!(dto.into_id(), "665f1c");
    }

    #[test]
    fn related_accepts_populated_object() {
        let dto: RelatedDto<IdOnly> =
            serde_json::from_str(r#"{"_id":"665f1c","nombre":"Granja Sol"}"#).expect("parse");
        assert_eq!(dto.into_id(), "665f1c");
    }

    #[test]
    fn estado_tags_are_case_insensitive() {
        let estado: sabor_core::enums::PedidoEstado = parse_estado("en_preparacion").expect("tag");
        assert_eq!(estado, sabor_core::enums::PedidoEstado::EnPreparacion);
        let failure = parse_estado::<sabor_core::enums::PedidoEstado>("PERDIDO").unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn require_text_rejects_whitespace() {
        assert!(require_text("  ", "nombre").is_err());
        assert!(require_text("Miel", "nombre").is_ok());
    }
}
