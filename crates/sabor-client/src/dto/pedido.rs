use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabor_core::CoreError;
use sabor_core::entities::{Pedido, PedidoItem};
use sabor_core::enums::PedidoEstado;

use super::RelatedDto;
use super::cliente::ClienteDto;
use super::producto::ProductoDto;
use crate::error::OperationResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PedidoItemDto {
    /// `null` once the product has been deleted.
    #[serde(default)]
    pub producto: Option<RelatedDto<ProductoDto>>,
    pub cantidad: u32,
    #[serde(default, alias = "precio")]
    pub precio_unitario: f64,
}

impl PedidoItemDto {
    fn into_domain(self) -> PedidoItem {
        if self.producto.is_none() {
            tracing::warn!(cantidad = self.cantidad, "pedido line references a deleted producto");
        }
        PedidoItem {
            producto: self
                .producto
                .map(|producto| producto.into_domain(ProductoDto::into_domain)),
            cantidad: self.cantidad,
            precio_unitario: self.precio_unitario,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PedidoDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub cliente: RelatedDto<ClienteDto>,
    #[serde(default, alias = "items")]
    pub productos: Vec<PedidoItemDto>,
    #[serde(default)]
    pub total: f64,
    pub estado: String,
    pub direccion_entrega: Option<String>,
    pub notas: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PedidoDto {
    pub(crate) fn into_domain(self) -> OperationResult<Pedido> {
        Ok(Pedido {
            estado: super::parse_estado(&self.estado)?,
            id: self.id,
            cliente: self.cliente.into_domain(ClienteDto::into_domain),
            items: self
                .productos
                .into_iter()
                .map(PedidoItemDto::into_domain)
                .collect(),
            total: self.total,
            direccion_entrega: self.direccion_entrega,
            notas: self.notas,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPedidoItem {
    pub producto: String,
    pub cantidad: u32,
}

/// Body of `POST pedidos`. Prices and the cliente are resolved server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPedido {
    #[serde(rename = "productos")]
    pub items: Vec<NewPedidoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion_entrega: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

impl NewPedido {
    #[must_use]
    pub fn with_item(mut self, producto: impl Into<String>, cantidad: u32) -> Self {
        self.items.push(NewPedidoItem {
            producto: producto.into(),
            cantidad,
        });
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        if self.items.is_empty() {
            return Err(CoreError::validation(
                "El pedido debe incluir al menos un producto.",
            ));
        }
        for item in &self.items {
            super::require_text(&item.producto, "producto")?;
            if item.cantidad == 0 {
                return Err(CoreError::validation("La cantidad debe ser al menos 1."));
            }
        }
        Ok(())
    }
}

pub(crate) type PedidoEstadoUpdate = super::EstadoUpdate<PedidoEstado>;
