use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Productor;
use crate::related::{Identified, Related};

/// A product offered by a producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: u32,
    pub categoria: Option<String>,
    /// Sales unit (`kg`, `docena`, ...).
    pub unidad: Option<String>,
    pub imagen_url: Option<String>,
    pub disponible: bool,
    /// Absent when the producto is embedded inside another record.
    pub productor: Option<Related<Productor>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Producto {
    /// Whether the product can currently be ordered.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.disponible && self.stock > 0
    }
}

impl Identified for Producto {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(stock: u32, disponible: bool) -> Producto {
        Producto {
            id: "pr1".into(),
            nombre: "Queso fresco".into(),
            descripcion: None,
            precio: 4.5,
            stock,
            categoria: Some("lacteos".into()),
            unidad: Some("kg".into()),
            imagen_url: None,
            disponible,
            productor: Some(Related::Reference("p1".into())),
            created_at: None,
        }
    }

    #[test]
    fn in_stock_requires_both_flags() {
        assert!(producto(3, true).in_stock());
        assert!(!producto(0, true).in_stock());
        assert!(!producto(3, false).in_stock());
    }
}
