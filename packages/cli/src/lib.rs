// ABOUTME: Server bootstrap for Tasklist
// ABOUTME: Logging setup, schema initialization and HTTP server lifecycle

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tasklist_api::{create_router, DbState};
use tasklist_config::RUST_LOG;

pub mod config;
pub mod middleware;


use config::Config;

/// Log filter from `RUST_LOG`; `info` when unset or unparseable
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .init();
}

/// Open the configured database and bring its schema up to date
pub async fn open_database(config: &Config) -> anyhow::Result<DbState> {
    let state = DbState::init_with_path(Some(config.database_path.clone()))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    state
        .init_schema()
        .await
        .context("Failed to initialize database schema")?;

    Ok(state)
}

/// Router with static assets and the HTTP middleware stack applied
pub fn build_app(state: DbState, config: &Config) -> anyhow::Result<Router> {
    let mut app = create_router(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(middleware::create_panic_handler())
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let cors = CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))?,
            )
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);
        app = app.layer(cors);
    }

    Ok(app)
}

/// Create or upgrade the schema without serving
pub async fn init_db(config: &Config) -> anyhow::Result<()> {
    let state = open_database(config).await?;
    info!(
        "Database ready at {} ({} item(s))",
        config.database_path.display(),
        state.item_storage.count_items().await?
    );
    state.pool.close().await;
    Ok(())
}

/// Initialize the schema, then serve until Ctrl-C or SIGTERM
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = open_database(&config).await?;
    let app = build_app(state, &config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
