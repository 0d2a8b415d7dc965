use std::future::IntoFuture;
use std::time::Duration;

use anyhow::Context;
use lists_config::ListsConfig;
use lists_db::service::ListService;
use lists_web::{AppState, build_router};
use tokio::net::TcpListener;
use tokio::sync::watch;

pub async fn serve(config: ListsConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let service = ListService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;
    if config.database.is_in_memory() {
        tracing::warn!("using an in-memory database; lists are lost on shutdown");
    }

    let app = build_router(AppState::new(service));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "superlists listening");

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        wait_for_shutdown_signal().await;
        tracing::info!("shutdown requested; draining in-flight requests");
        let _ = stop_tx.send(true);
    });

    let grace = Duration::from_secs(config.server.shutdown_grace_secs);
    tokio::select! {
        result = server.into_future() => result.context("server failed")?,
        () = async {
            let _ = stop_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_secs = grace.as_secs(), "grace period elapsed; closing remaining connections");
        }
    }
    Ok(())
}

pub async fn migrate(config: ListsConfig) -> anyhow::Result<()> {
    let service = ListService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to migrate database '{}'", config.database.path))?;
    let lists = service.count_lists().await?;
    let items = service.count_items().await?;
    tracing::info!(path = %config.database.path, lists, items, "database schema is up to date");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl-c; shutting down");
    }
}
