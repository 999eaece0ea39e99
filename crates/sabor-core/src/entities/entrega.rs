use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::EntregaEstado;
use crate::related::Identified;

/// Delivery of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrega {
    pub id: String,
    pub pedido_id: String,
    pub repartidor: Option<String>,
    pub estado: EntregaEstado,
    pub direccion: Option<String>,
    pub fecha_estimada: Option<DateTime<Utc>>,
    pub fecha_entrega: Option<DateTime<Utc>>,
}

impl Identified for Entrega {
    fn id(&self) -> &str {
        &self.id
    }
}
