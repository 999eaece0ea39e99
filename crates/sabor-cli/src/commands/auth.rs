use std::sync::Arc;

use serde::Serialize;

use sabor_client::RegisterRequest;
use sabor_core::SessionUser;

use super::CommandContext;
use super::shared::show;
use crate::cli::subcommands::AuthCommands;
use crate::output::output;

const EXPIRY_WARNING_SECS: i64 = 600;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<SessionUser>,
    token_source: Option<&'static str>,
    expires_at: Option<String>,
    /// Token expires within the next ten minutes.
    expiring_soon: bool,
}

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Handle `sabor auth <subcommand>`.
pub async fn handle(action: AuthCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let client = Arc::clone(&ctx.client);
    match action {
        AuthCommands::Login(args) => {
            show(ctx, async move { client.login(&args.email, &args.password).await }).await
        }
        AuthCommands::Register(args) => {
            let request = RegisterRequest {
                nombre: args.name,
                email: args.email,
                password: args.password,
                rol: args.role,
                telefono: args.phone,
            };
            show(ctx, async move { client.register(&request).await }).await
        }
        AuthCommands::Logout => {
            client.logout()?;
            output(&AuthLogoutResponse { cleared: true }, ctx.flags.format)
        }
        AuthCommands::Status => output(&status(&ctx.client), ctx.flags.format),
        AuthCommands::Profile => show(ctx, async move { client.profile().await }).await,
    }
}

fn status(client: &sabor_client::SaborClient) -> AuthStatusResponse {
    let store = client.session_store();
    match store.load() {
        Ok(Some(session)) if session.is_usable() => AuthStatusResponse {
            authenticated: true,
            expires_at: sabor_auth::token::decode_expiry(&session.token)
                .ok()
                .map(|expiry| expiry.to_rfc3339()),
            expiring_soon: sabor_auth::token::is_near_expiry(&session.token, EXPIRY_WARNING_SECS),
            user: Some(session.user),
            token_source: Some(store.source()),
        },
        Ok(_) => AuthStatusResponse {
            authenticated: false,
            user: None,
            token_source: None,
            expires_at: None,
            expiring_soon: false,
        },
        Err(error) => {
            tracing::warn!(%error, "credential store unreadable");
            AuthStatusResponse {
                authenticated: false,
                user: None,
                token_source: None,
                expires_at: None,
                expiring_soon: false,
            }
        }
    }
}
