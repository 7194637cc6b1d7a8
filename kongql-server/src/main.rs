// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  kongql — GraphQL façade over the Kong Admin API
//
//  GraphQL:  axum + async-graphql, POST /graphql
//  Upstream: Kong Admin API at a configured base address
//  Config:   YAML file / KONGQL_* environment overrides
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use clap::Parser;
use kongql_admin::AdminClient;
use kongql_core::KongqlConfig;
use kongql_graphql::{KongqlSchema, build_schema};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kongql", version, about = "GraphQL façade over the Kong Admin API")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "kongql.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone)]
struct AppState {
    schema: KongqlSchema,
    client: AdminClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "kongql starting");

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        KongqlConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        KongqlConfig::default()
    };

    // ── Admin client & schema ──
    let client = AdminClient::new(&config.admin)?;
    let schema = build_schema();

    // ── Router ──
    let mut app = Router::new().route("/graphql", post(graphql_handler));
    if config.server.playground {
        app = app.route("/", get(playground));
    }
    let app = app
        .layer(CorsLayer::permissive())
        .with_state(AppState { schema, client });

    info!(
        addr = %config.server.addr,
        admin_url = %config.admin.url,
        "kongql is ready — serving GraphQL"
    );

    let listener = tokio::net::TcpListener::bind(&config.server.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("kongql stopped");
    Ok(())
}

/// GraphQL execution handler.
///
/// The Admin client is attached to each request's context here, so every
/// query execution carries its own explicit context value and nothing is
/// shared process-wide.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner().data(state.client.clone());
    state.schema.execute(request).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

// SIGTERM (docker stop) + SIGINT (Ctrl+C)
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};
    let mut term = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
