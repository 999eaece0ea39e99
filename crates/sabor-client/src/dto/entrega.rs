use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabor_core::CoreError;
use sabor_core::entities::Entrega;
use sabor_core::enums::EntregaEstado;

use super::{IdOnly, RelatedDto};
use crate::error::OperationResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntregaDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub pedido: RelatedDto<IdOnly>,
    pub repartidor: Option<String>,
    pub estado: String,
    pub direccion: Option<String>,
    pub fecha_estimada: Option<DateTime<Utc>>,
    pub fecha_entrega: Option<DateTime<Utc>>,
}

impl EntregaDto {
    pub(crate) fn into_domain(self) -> OperationResult<Entrega> {
        Ok(Entrega {
            estado: super::parse_estado(&self.estado)?,
            id: self.id,
            pedido_id: self.pedido.into_id(),
            repartidor: self.repartidor,
            direccion: self.direccion,
            fecha_estimada: self.fecha_estimada,
            fecha_entrega: self.fecha_entrega,
        })
    }
}

/// Body of `POST entregas`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntrega {
    pub pedido: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repartidor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_estimada: Option<DateTime<Utc>>,
}

impl NewEntrega {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        super::require_text(&self.pedido, "pedido")
    }
}

pub(crate) type EntregaEstadoUpdate = super::EstadoUpdate<EntregaEstado>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pedido_may_be_populated() {
        let dto: EntregaDto = serde_json::from_str(
            r#"{"_id":"e1","pedido":{"_id":"pe1","total":7.5},"estado":"en_camino","fechaEstimada":"2026-03-02T09:00:00Z"}"#,
        )
        .expect("parse");
        let entrega = dto.into_domain().expect("domain");
        assert_eq!(entrega.pedido_id, "pe1");
        assert_eq!(entrega.estado, EntregaEstado::EnCamino);
        assert!(entrega.fecha_estimada.is_some());
    }

    #[test]
    fn blank_pedido_is_rejected() {
        let entrega = NewEntrega {
            pedido: String::new(),
            repartidor: None,
            direccion: None,
            fecha_estimada: None,
        };
        assert!(entrega.validate().is_err());
    }
}
