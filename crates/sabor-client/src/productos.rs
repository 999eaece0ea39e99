use sabor_core::Page;
use sabor_core::entities::Producto;

use crate::dto::producto::ProductoDto;
use crate::dto::{NewProducto, ProductoUpdate};
use crate::error::OperationResult;
use crate::{SaborClient, segment};

impl SaborClient {
    /// `GET productos`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure.
    pub async fn list_productos(&self) -> OperationResult<Page<Producto>> {
        Ok(self
            .get::<Vec<ProductoDto>>("productos")
            .await?
            .into_page()?
            .map(ProductoDto::into_domain))
    }

    /// `GET productos/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, or any pipeline failure.
    pub async fn get_producto(&self, id: &str) -> OperationResult<Producto> {
        let dto: ProductoDto = self
            .get(&format!("productos/{}", segment(id)))
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }

    /// `GET productores/{id}/productos`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure.
    pub async fn list_productos_by_productor(
        &self,
        productor_id: &str,
    ) -> OperationResult<Page<Producto>> {
        Ok(self
            .get::<Vec<ProductoDto>>(&format!("productores/{}/productos", segment(productor_id)))
            .await?
            .into_page()?
            .map(ProductoDto::into_domain))
    }

    /// `POST productos`. Requires a productor session.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a blank name or a non-positive price (no request
    /// is sent), `Forbidden` for non-productor accounts, or any pipeline failure.
    pub async fn create_producto(&self, producto: &NewProducto) -> OperationResult<Producto> {
        producto.validate()?;
        let dto: ProductoDto = self.post("productos", producto).await?.into_data()?;
        tracing::info!(producto_id = %dto.id, "producto created");
        Ok(dto.into_domain())
    }

    /// `PATCH productos/{id}`.
    ///
    /// # Errors
    ///
    /// As for [`create_producto`](Self::create_producto).
    pub async fn update_producto(
        &self,
        id: &str,
        update: &ProductoUpdate,
    ) -> OperationResult<Producto> {
        update.validate()?;
        let dto: ProductoDto = self
            .patch(&format!("productos/{}", segment(id)), update)
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }

    /// `DELETE productos/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Forbidden`, or any pipeline failure.
    pub async fn delete_producto(&self, id: &str) -> OperationResult<()> {
        self.delete::<serde_json::Value>(&format!("productos/{}", segment(id)))
            .await?
            .into_unit()?;
        tracing::info!(producto_id = id, "producto deleted");
        Ok(())
    }
}
