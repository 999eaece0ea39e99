mod auth;
mod catalog;
mod pedidos;
mod shared;

use std::sync::Arc;

use sabor_client::SaborClient;

use crate::cli::{Commands, GlobalFlags};

/// Everything a command handler needs.
pub struct CommandContext {
    pub client: Arc<SaborClient>,
    pub flags: GlobalFlags,
    pub default_limit: u32,
}

impl CommandContext {
    /// Max items printed by list commands: `--limit`, else `general.default_limit`.
    pub fn limit(&self) -> usize {
        let limit = self.flags.limit.unwrap_or(self.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &CommandContext) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(action, ctx).await,
        Commands::Productos { action } => catalog::handle_productos(action, ctx).await,
        Commands::Productores { action } => catalog::handle_productores(action, ctx).await,
        Commands::Clientes { action } => catalog::handle_clientes(action, ctx).await,
        Commands::Pedidos { action } => pedidos::handle_pedidos(action, ctx).await,
        Commands::Entregas { action } => pedidos::handle_entregas(action, ctx).await,
    }
}
