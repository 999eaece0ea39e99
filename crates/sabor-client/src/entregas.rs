use sabor_core::Page;
use sabor_core::entities::Entrega;
use sabor_core::enums::EntregaEstado;

use crate::dto::NewEntrega;
use crate::dto::entrega::{EntregaDto, EntregaEstadoUpdate};
use crate::error::OperationResult;
use crate::{SaborClient, segment};

impl SaborClient {
    /// `GET entregas`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure, or `MalformedResponse` for an unknown estado.
    pub async fn list_entregas(&self) -> OperationResult<Page<Entrega>> {
        self.get::<Vec<EntregaDto>>("entregas")
            .await?
            .into_page()?
            .try_map(EntregaDto::into_domain)
    }

    /// `GET entregas/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, or any pipeline failure.
    pub async fn get_entrega(&self, id: &str) -> OperationResult<Entrega> {
        self.get::<EntregaDto>(&format!("entregas/{}", segment(id)))
            .await?
            .into_data()?
            .into_domain()
    }

    /// `POST entregas`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a missing pedido id, or any pipeline failure.
    pub async fn create_entrega(&self, entrega: &NewEntrega) -> OperationResult<Entrega> {
        entrega.validate()?;
        let created = self
            .post::<_, EntregaDto>("entregas", entrega)
            .await?
            .into_data()?
            .into_domain()?;
        tracing::info!(entrega_id = %created.id, pedido_id = %created.pedido_id, "entrega created");
        Ok(created)
    }

    /// `PATCH entregas/{id}/estado`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure.
    pub async fn update_entrega_estado(
        &self,
        id: &str,
        estado: EntregaEstado,
    ) -> OperationResult<Entrega> {
        self.patch::<_, EntregaDto>(
            &format!("entregas/{}/estado", segment(id)),
            &EntregaEstadoUpdate { estado },
        )
        .await?
        .into_data()?
        .into_domain()
    }
}
