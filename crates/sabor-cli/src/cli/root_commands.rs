use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, ClienteCommands, EntregaCommands, PedidoCommands, ProductoCommands,
    ProductorCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session: login, registration, logout, status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Product catalogue.
    Productos {
        #[command(subcommand)]
        action: ProductoCommands,
    },
    /// Producers.
    Productores {
        #[command(subcommand)]
        action: ProductorCommands,
    },
    /// Customers.
    Clientes {
        #[command(subcommand)]
        action: ClienteCommands,
    },
    /// Orders.
    Pedidos {
        #[command(subcommand)]
        action: PedidoCommands,
    },
    /// Deliveries.
    Entregas {
        #[command(subcommand)]
        action: EntregaCommands,
    },
}
