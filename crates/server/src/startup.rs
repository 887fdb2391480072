use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the configured database and create the schema if it is absent.
pub async fn prepare_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "schema_ready", "ingredient table ensured");
    Ok(ServerState::from_db(db))
}

/// Build the router for `state` with the default CORS policy.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = prepare_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(%addr, "server drained");
    Ok(())
}
