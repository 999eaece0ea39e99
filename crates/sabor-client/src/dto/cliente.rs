use serde::{Deserialize, Serialize};

use sabor_core::entities::Cliente;

use super::{IdOnly, RelatedDto};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClienteDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    #[serde(alias = "user")]
    pub usuario: Option<RelatedDto<IdOnly>>,
}

impl ClienteDto {
    pub(crate) fn into_domain(self) -> Cliente {
        Cliente {
            id: self.id,
            nombre: self.nombre,
            email: self.email,
            telefono: self.telefono,
            direccion: self.direccion,
            usuario_id: self.usuario.map(RelatedDto::into_id),
        }
    }
}

/// Partial update of a customer profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
}

impl ClienteUpdate {
    pub(crate) fn validate(&self) -> Result<(), sabor_core::CoreError> {
        if let Some(nombre) = &self.nombre {
            super::require_text(nombre, "nombre")?;
        }
        Ok(())
    }
}
