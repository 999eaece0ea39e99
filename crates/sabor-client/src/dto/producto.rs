use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabor_core::CoreError;
use sabor_core::entities::Producto;

use super::RelatedDto;
use super::productor::ProductorDto;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductoDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio: f64,
    #[serde(default)]
    pub stock: u32,
    pub categoria: Option<String>,
    pub unidad: Option<String>,
    #[serde(alias = "imagen")]
    pub imagen_url: Option<String>,
    #[serde(default = "super::default_true")]
    pub disponible: bool,
    pub productor: Option<RelatedDto<ProductorDto>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ProductoDto {
    pub(crate) fn into_domain(self) -> Producto {
        Producto {
            id: self.id,
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            stock: self.stock,
            categoria: self.categoria,
            unidad: self.unidad,
            imagen_url: self.imagen_url,
            disponible: self.disponible,
            productor: self
                .productor
                .map(|productor| productor.into_domain(ProductorDto::into_domain)),
            created_at: self.created_at,
        }
    }
}

/// Body of `POST productos`. The backend takes the productor from the token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProducto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
}

impl NewProducto {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        super::require_text(&self.nombre, "nombre")?;
        validate_precio(self.precio)
    }
}

/// Partial update of a producto.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponible: Option<bool>,
}

impl ProductoUpdate {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        if let Some(nombre) = &self.nombre {
            super::require_text(nombre, "nombre")?;
        }
        if let Some(precio) = self.precio {
            validate_precio(precio)?;
        }
        Ok(())
    }
}

fn validate_precio(precio: f64) -> Result<(), CoreError> {
    if precio.is_finite() && precio > 0.0 {
        Ok(())
    } else {
        Err(CoreError::validation("El precio debe ser mayor que cero."))
    }
}
