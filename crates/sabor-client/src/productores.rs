use sabor_core::Page;
use sabor_core::entities::Productor;

use crate::dto::ProductorUpdate;
use crate::dto::productor::ProductorDto;
use crate::error::OperationResult;
use crate::{SaborClient, segment};

impl SaborClient {
    /// `GET productores`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure.
    pub async fn list_productores(&self) -> OperationResult<Page<Productor>> {
        Ok(self
            .get::<Vec<ProductorDto>>("productores")
            .await?
            .into_page()?
            .map(ProductorDto::into_domain))
    }

    /// `GET productores/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, or any pipeline failure.
    pub async fn get_productor(&self, id: &str) -> OperationResult<Productor> {
        let dto: ProductorDto = self
            .get(&format!("productores/{}", segment(id)))
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }

    /// `PATCH productores/{id}`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a blank name, or any pipeline failure.
    pub async fn update_productor(
        &self,
        id: &str,
        update: &ProductorUpdate,
    ) -> OperationResult<Productor> {
        update.validate()?;
        let dto: ProductorDto = self
            .patch(&format!("productores/{}", segment(id)), update)
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }
}
