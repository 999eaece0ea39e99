use serde::{Deserialize, Serialize};

use sabor_core::entities::Productor;

use super::IdOnly;
use super::RelatedDto;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductorDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub descripcion: Option<String>,
    #[serde(alias = "user")]
    pub usuario: Option<RelatedDto<IdOnly>>,
}

impl ProductorDto {
    pub(crate) fn into_domain(self) -> Productor {
        Productor {
            id: self.id,
            nombre: self.nombre,
            email: self.email,
            telefono: self.telefono,
            direccion: self.direccion,
            descripcion: self.descripcion,
            usuario_id: self.usuario.map(RelatedDto::into_id),
        }
    }
}

/// Partial update of a producer profile. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl ProductorUpdate {
    pub(crate) fn validate(&self) -> Result<(), sabor_core::CoreError> {
        if let Some(nombre) = &self.nombre {
            super::require_text(nombre, "nombre")?;
        }
        Ok(())
    }
}
