use serde::{Deserialize, Serialize};

use crate::related::Identified;

/// A customer placing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: String,
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub usuario_id: Option<String>,
}

impl Identified for Cliente {
    fn id(&self) -> &str {
        &self.id
    }
}
