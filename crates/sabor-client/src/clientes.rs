use sabor_core::Page;
use sabor_core::entities::Cliente;

use crate::dto::ClienteUpdate;
use crate::dto::cliente::ClienteDto;
use crate::error::OperationResult;
use crate::{SaborClient, segment};

impl SaborClient {
    /// `GET clientes`. Admin only on the backend.
    ///
    /// # Errors
    ///
    /// `Forbidden` for other roles, or any pipeline failure.
    pub async fn list_clientes(&self) -> OperationResult<Page<Cliente>> {
        Ok(self
            .get::<Vec<ClienteDto>>("clientes")
            .await?
            .into_page()?
            .map(ClienteDto::into_domain))
    }

    /// `GET clientes/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, or any pipeline failure.
    pub async fn get_cliente(&self, id: &str) -> OperationResult<Cliente> {
        let dto: ClienteDto = self
            .get(&format!("clientes/{}", segment(id)))
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }

    /// `PATCH clientes/{id}`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a blank name, or any pipeline failure.
    pub async fn update_cliente(
        &self,
        id: &str,
        update: &ClienteUpdate,
    ) -> OperationResult<Cliente> {
        update.validate()?;
        let dto: ClienteDto = self
            .patch(&format!("clientes/{}", segment(id)), update)
            .await?
            .into_data()?;
        Ok(dto.into_domain())
    }
}
