use std::future::Future;

use serde::Serialize;

use sabor_client::{OperationResult, StateHolder, ViewScope, ViewState};
use sabor_core::Page;

use super::CommandContext;
use crate::output::output;

/// Run one API call in its own scope and wait for its final state.
pub async fn load<T, F>(call: F) -> anyhow::Result<T>
where
    T: Clone + Send + Sync + 'static,
    F: Future<Output = OperationResult<T>> + Send + 'static,
{
    let holder = StateHolder::new();
    let mut scope = ViewScope::new();
    scope.launch(&holder, call);
    scope.join_all().await;

    match holder.current() {
        ViewState::Loaded(value) => Ok(value),
        ViewState::Failed(message) => Err(anyhow::anyhow!(message)),
        ViewState::Idle | ViewState::Loading => anyhow::bail!("operation did not complete"),
    }
}

/// [`load`] then print the result.
pub async fn show<T, F>(ctx: &CommandContext, call: F) -> anyhow::Result<()>
where
    T: Serialize + Clone + Send + Sync + 'static,
    F: Future<Output = OperationResult<T>> + Send + 'static,
{
    let value = load(call).await?;
    output(&value, ctx.flags.format)
}

/// [`load`] a page, truncate it to the list limit and print it.
pub async fn show_page<T, F>(ctx: &CommandContext, call: F) -> anyhow::Result<()>
where
    T: Serialize + Clone + Send + Sync + 'static,
    F: Future<Output = OperationResult<Page<T>>> + Send + 'static,
{
    let page = load(call).await?.truncated(ctx.limit());
    output(&page, ctx.flags.format)
}
