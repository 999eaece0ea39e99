mod auth;
mod catalog;
mod pedidos;

pub use auth::AuthCommands;
pub use catalog::{ClienteCommands, EntityIdArgs, ProductoCommands, ProductorCommands};
pub use pedidos::{EntregaCommands, PedidoCommands};
