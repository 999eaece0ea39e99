use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Cliente, Producto};
use crate::enums::PedidoEstado;
use crate::errors::CoreError;
use crate::related::{Identified, Related};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoItem {
    /// `None` when the product was deleted after the order was placed.
    pub producto: Option<Related<Producto>>,
    pub cantidad: u32,
    pub precio_unitario: f64,
}

impl PedidoItem {
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.precio_unitario * f64::from(self.cantidad)
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: String,
    pub cliente: Related<Cliente>,
    pub items: Vec<PedidoItem>,
    pub total: f64,
    pub estado: PedidoEstado,
    pub direccion_entrega: Option<String>,
    pub notas: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Pedido {
    /// Sum of the line subtotals. May differ from `total` when the backend
    /// applies delivery fees.
    #[must_use]
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(PedidoItem::subtotal).sum()
    }

    /// Check that moving to `next` follows the order state machine.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable
    /// from the current state.
    pub fn check_transition(&self, next: PedidoEstado) -> Result<(), CoreError> {
        if self.estado.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: "pedido".into(),
                id: self.id.clone(),
                from: self.estado.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl Identified for Pedido {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pedido(estado: PedidoEstado) -> Pedido {
        Pedido {
            id: "pe1".into(),
            cliente: Related::Reference("c1".into()),
            items: vec![
                PedidoItem {
                    producto: Some(Related::Reference("pr1".into())),
                    cantidad: 2,
                    precio_unitario: 3.0,
                },
                PedidoItem {
                    producto: None,
                    cantidad: 1,
                    precio_unitario: 1.5,
                },
            ],
            total: 7.5,
            estado,
            direccion_entrega: None,
            notas: None,
            created_at: None,
        }
    }

    #[test]
    fn items_total_sums_lines() {
        assert!((pedido(PedidoEstado::Pendiente).items_total() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn check_transition_accepts_next_state() {
        assert!(
            pedido(PedidoEstado::Pendiente)
                .check_transition(PedidoEstado::Confirmado)
                .is_ok()
        );
    }

    #[test]
    fn check_transition_reports_both_states() {
        let err = pedido(PedidoEstado::Entregado)
            .check_transition(PedidoEstado::Pendiente)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTransition {
                entity_type: "pedido".into(),
                id: "pe1".into(),
                from: "ENTREGADO".into(),
                to: "PENDIENTE".into(),
            }
        );
    }
}
