mod routes;
mod storage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use routes::AppState;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary
/// directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(state: AppState) -> Router {
    // Hashed frontend bundles can be cached forever
    let static_files = Router::new()
        .nest("/dist", cached_static_router(Path::new("dist"), CACHE_IMMUTABLE))
        .nest(
            "/assets",
            cached_static_router(Path::new("dist/assets"), CACHE_IMMUTABLE),
        );

    Router::new()
        .nest("/api", routes::api_router(state))
        .route("/", get(serve_index))
        .route("/canvas", get(serve_index))
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let db_path =
        PathBuf::from(std::env::var("DB_PATH").unwrap_or_else(|_| "data/wall.redb".to_string()));
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create database directory");
    }
    let storage = storage::Storage::open(&db_path);

    let admin_password = Arc::new(
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set, using development default");
            "wall-admin".to_string()
        }),
    );

    let app = build_app(AppState {
        storage,
        admin_password,
    });

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!(%addr, "wall server listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn serve_index() -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match std::fs::read_to_string("dist/index.html") {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>The Wall</title></head>
<body>
<h1>The Wall</h1>
<p>Frontend not built yet. The API lives under <code>/api/notes</code>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}
