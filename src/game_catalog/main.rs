mod catalog;

use axum::{routing::get, serve, Router};
use catalog::{get_catalog, get_games, root};
use game_hub::{
    catalog::Catalog,
    header::permissive_cors,
    signals::shutdown_signal,
    utils::{configure_tracing, get_env_var_or, get_optional_env_var},
};
use std::{
    error::Error,
    path::Path,
    sync::{Arc, OnceLock},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

// Host variables
static HOST: OnceLock<String> = OnceLock::new();
static LOG_LEVEL: OnceLock<String> = OnceLock::new();

// Catalog variables
static CATALOG_FILE: OnceLock<Option<String>> = OnceLock::new();

const DEFAULT_HOST: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize env variables
    init_env();

    // Configure logging
    configure_tracing(LOG_LEVEL.get().map_or(DEFAULT_LOG_LEVEL, String::as_str));

    // Load the catalog once, it is only read afterwards.
    let catalog: Arc<Catalog> = Arc::new(Catalog::load(
        CATALOG_FILE.get().and_then(Option::as_deref).map(Path::new),
    )?);

    // Build application and listen to incoming requests.
    let host: &str = HOST.get().map_or(DEFAULT_HOST, String::as_str);
    let app: Router = build_app(catalog);
    let listener: TcpListener = TcpListener::bind(host).await?;
    info!("Game catalog listening on {}", listener.local_addr()?);

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Initialize env variables
fn init_env() {
    HOST.get_or_init(|| get_env_var_or("GAME_CATALOG_HOST", DEFAULT_HOST));
    LOG_LEVEL.get_or_init(|| get_env_var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL));

    CATALOG_FILE.get_or_init(|| get_optional_env_var("GAME_CATALOG_FILE"));
}

/// Builds the application.
fn build_app(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/games", get(get_games))
        .route("/game/catalog", get(get_catalog))
        .with_state(catalog)
        .layer(
            // Axum recommends to use tower::ServiceBuilder to apply multiple middleware at once, instead of repeatadly calling layer.
            // https://docs.rs/axum/latest/axum/middleware/index.html#applying-multiple-middleware
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(permissive_cors()),
        )
}
