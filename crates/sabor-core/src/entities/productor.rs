use serde::{Deserialize, Serialize};

use crate::related::Identified;

/// A local food producer selling through the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Productor {
    pub id: String,
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub descripcion: Option<String>,
    /// Account that owns this producer profile.
    pub usuario_id: Option<String>,
}

impl Identified for Productor {
    fn id(&self) -> &str {
        &self.id
    }
}
