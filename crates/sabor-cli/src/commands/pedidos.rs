use std::sync::Arc;

use sabor_client::{NewEntrega, NewPedido};

use super::CommandContext;
use super::shared::{load, show, show_page};
use crate::cli::subcommands::{EntregaCommands, PedidoCommands};

/// Handle `sabor pedidos <subcommand>`.
pub async fn handle_pedidos(action: PedidoCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        PedidoCommands::List(args) => match args.cliente {
            Some(cliente) => {
                show_page(ctx, async move { client.list_pedidos_by_cliente(&cliente).await })
                    .await
            }
            None => show_page(ctx, async move { client.list_pedidos().await }).await,
        },
        PedidoCommands::Get(args) => {
            show(ctx, async move { client.get_pedido(&args.id).await }).await
        }
        PedidoCommands::Create(args) => {
            let pedido = NewPedido {
                items: args.items,
                direccion_entrega: args.direccion,
                notas: args.notas,
            };
            show(ctx, async move { client.create_pedido(&pedido).await }).await
        }
        PedidoCommands::Estado(args) => {
            // Fetch first so disallowed transitions are caught before the PATCH.
            let fetch = Arc::clone(&client);
            let id = args.id.clone();
            let pedido = load(async move { fetch.get_pedido(&id).await }).await?;
            show(ctx, async move { client.advance_pedido(&pedido, args.estado).await }).await
        }
    }
}

/// Handle `sabor entregas <subcommand>`.
pub async fn handle_entregas(action: EntregaCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        EntregaCommands::List => show_page(ctx, async move { client.list_entregas().await }).await,
        EntregaCommands::Get(args) => {
            show(ctx, async move { client.get_entrega(&args.id).await }).await
        }
        EntregaCommands::Create(args) => {
            let entrega = NewEntrega {
                pedido: args.pedido,
                repartidor: args.repartidor,
                direccion: args.direccion,
                fecha_estimada: None,
            };
            show(ctx, async move { client.create_entrega(&entrega).await }).await
        }
        EntregaCommands::Estado(args) => {
            show(ctx, async move {
                client.update_entrega_estado(&args.id, args.estado).await
            })
            .await
        }
    }
}
