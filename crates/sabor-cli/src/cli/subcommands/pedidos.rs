use clap::{Args, Subcommand};

use sabor_client::NewPedidoItem;
use sabor_core::enums::{EntregaEstado, PedidoEstado};

use super::EntityIdArgs;

/// Order commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PedidoCommands {
    /// List orders, optionally for one customer.
    List(PedidoListArgs),
    Get(EntityIdArgs),
    /// Place an order.
    Create(PedidoCreateArgs),
    /// Move an order to another estado.
    Estado(PedidoEstadoArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PedidoListArgs {
    #[arg(long)]
    pub cliente: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PedidoCreateArgs {
    /// PRODUCTO:CANTIDAD, repeatable.
    #[arg(long = "item", value_parser = parse_item)]
    pub items: Vec<NewPedidoItem>,
    #[arg(long)]
    pub direccion: Option<String>,
    #[arg(long)]
    pub notas: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PedidoEstadoArgs {
    pub id: String,
    /// PENDIENTE, CONFIRMADO, EN_PREPARACION, ENVIADO, ENTREGADO or CANCELADO.
    pub estado: PedidoEstado,
}

/// Delivery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntregaCommands {
    List,
    Get(EntityIdArgs),
    /// Schedule the delivery of an order.
    Create(EntregaCreateArgs),
    /// Move a delivery to another estado.
    Estado(EntregaEstadoArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EntregaCreateArgs {
    #[arg(long)]
    pub pedido: String,
    #[arg(long)]
    pub repartidor: Option<String>,
    #[arg(long)]
    pub direccion: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EntregaEstadoArgs {
    pub id: String,
    /// PENDIENTE, EN_CAMINO, ENTREGADO or FALLIDO.
    pub estado: EntregaEstado,
}

fn parse_item(raw: &str) -> Result<NewPedidoItem, String> {
    let (producto, cantidad) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected PRODUCTO:CANTIDAD, got '{raw}'"))?;
    let cantidad = cantidad
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid cantidad '{cantidad}': {error}"))?;
    Ok(NewPedidoItem {
        producto: producto.trim().to_string(),
        cantidad,
    })
}
