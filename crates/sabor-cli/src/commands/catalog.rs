use std::sync::Arc;

use sabor_client::NewProducto;

use super::CommandContext;
use super::shared::{load, show, show_page};
use crate::cli::subcommands::{ClienteCommands, ProductoCommands, ProductorCommands};
use crate::output::output;

/// Handle `sabor productos <subcommand>`.
pub async fn handle_productos(action: ProductoCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        ProductoCommands::List(args) => match args.productor {
            Some(productor) => {
                show_page(ctx, async move {
                    client.list_productos_by_productor(&productor).await
                })
                .await
            }
            None => show_page(ctx, async move { client.list_productos().await }).await,
        },
        ProductoCommands::Get(args) => {
            show(ctx, async move { client.get_producto(&args.id).await }).await
        }
        ProductoCommands::Create(args) => {
            let producto = NewProducto {
                nombre: args.nombre,
                descripcion: args.descripcion,
                precio: args.precio,
                stock: args.stock,
                categoria: args.categoria,
                unidad: args.unidad,
                imagen_url: None,
            };
            show(ctx, async move { client.create_producto(&producto).await }).await
        }
        ProductoCommands::Delete(args) => {
            let id = args.id.clone();
            load(async move { client.delete_producto(&id).await }).await?;
            output(
                &serde_json::json!({ "deleted": true, "id": args.id }),
                ctx.flags.format,
            )
        }
    }
}

/// Handle `sabor productores <subcommand>`.
pub async fn handle_productores(
    action: ProductorCommands,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        ProductorCommands::List => {
            show_page(ctx, async move { client.list_productores().await }).await
        }
        ProductorCommands::Get(args) => {
            show(ctx, async move { client.get_productor(&args.id).await }).await
        }
    }
}

/// Handle `sabor clientes <subcommand>`.
pub async fn handle_clientes(action: ClienteCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        ClienteCommands::List => show_page(ctx, async move { client.list_clientes().await }).await,
        ClienteCommands::Get(args) => {
            show(ctx, async move { client.get_cliente(&args.id).await }).await
        }
    }
}
