use sabor_core::Page;
use sabor_core::entities::Pedido;
use sabor_core::enums::PedidoEstado;

use crate::dto::NewPedido;
use crate::dto::pedido::{PedidoDto, PedidoEstadoUpdate};
use crate::error::OperationResult;
use crate::{SaborClient, segment};

impl SaborClient {
    /// `GET pedidos`. The backend scopes the list to the caller's role.
    ///
    /// # Errors
    ///
    /// Any pipeline failure, or `MalformedResponse` for an unknown estado.
    pub async fn list_pedidos(&self) -> OperationResult<Page<Pedido>> {
        self.get::<Vec<PedidoDto>>("pedidos")
            .await?
            .into_page()?
            .try_map(PedidoDto::into_domain)
    }

    /// `GET pedidos/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, or any pipeline failure.
    pub async fn get_pedido(&self, id: &str) -> OperationResult<Pedido> {
        self.get::<PedidoDto>(&format!("pedidos/{}", segment(id)))
            .await?
            .into_data()?
            .into_domain()
    }

    /// `GET pedidos/cliente/{id}`.
    ///
    /// # Errors
    ///
    /// Any pipeline failure.
    pub async fn list_pedidos_by_cliente(&self, cliente_id: &str) -> OperationResult<Page<Pedido>> {
        self.get::<Vec<PedidoDto>>(&format!("pedidos/cliente/{}", segment(cliente_id)))
            .await?
            .into_page()?
            .try_map(PedidoDto::into_domain)
    }

    /// `POST pedidos`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for an empty order or a zero quantity (no request is
    /// sent), `Conflict` when stock ran out, or any pipeline failure.
    pub async fn create_pedido(&self, pedido: &NewPedido) -> OperationResult<Pedido> {
        pedido.validate()?;
        let created = self
            .post::<_, PedidoDto>("pedidos", pedido)
            .await?
            .into_data()?
            .into_domain()?;
        tracing::info!(pedido_id = %created.id, total = created.total, "pedido created");
        Ok(created)
    }

    /// `PATCH pedidos/{id}/estado`. The backend enforces the state machine.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` when the backend rejects the transition, or any
    /// pipeline failure.
    pub async fn update_pedido_estado(
        &self,
        id: &str,
        estado: PedidoEstado,
    ) -> OperationResult<Pedido> {
        self.patch::<_, PedidoDto>(
            &format!("pedidos/{}/estado", segment(id)),
            &PedidoEstadoUpdate { estado },
        )
        .await?
        .into_data()?
        .into_domain()
    }

    /// Move `pedido` to `next`, rejecting transitions its current estado does
    /// not allow before anything is sent.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for a disallowed transition, otherwise as for
    /// [`update_pedido_estado`](Self::update_pedido_estado).
    pub async fn advance_pedido(&self, pedido: &Pedido, next: PedidoEstado) -> OperationResult<Pedido> {
        pedido.check_transition(next)?;
        let updated = self.update_pedido_estado(&pedido.id, next).await?;
        tracing::info!(pedido_id = %pedido.id, from = %pedido.estado, to = %next, "pedido advanced");
        Ok(updated)
    }
}
