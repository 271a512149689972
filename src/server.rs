//! SSR shell server using Axum
//!
//! Serves the HTML shell that carries the static site metadata and
//! bootstraps the client application.

use crate::meta::SITE;
use anyhow::{Context, Result};
use axum::{Router, response::IntoResponse, routing::get};
use http::{HeaderValue, StatusCode};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application state for the shell server
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ServerState {
    /// Create new server state with configuration
    #[must_use]
    pub fn new(request_timeout: u64) -> Self {
        Self { request_timeout }
    }

    /// Create state from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        let request_timeout = std::env::var("JOBIFY_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(request_timeout)
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Build the Axum router with all middleware and routes
#[must_use]
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route("/api/health", get(health_check))
        .fallback(render_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.request_timeout,
        )))
        .with_state(state)
}

/// Render the HTML shell
async fn render_handler() -> impl IntoResponse {
    let mut response = (StatusCode::OK, generate_html()).into_response();
    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        http::header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        http::header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );
    response
}

/// Generate the HTML shell, including the static site metadata tags
fn generate_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <meta name="author" content="{author}">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="{site_name}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:url" content="{url}">
    <meta property="og:image" content="{image}">
    <meta property="og:locale" content="{locale}">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="{twitter}">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{description}">
    <meta name="twitter:image" content="{image}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
    <link href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:wght,FILL@100..700,0..1&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="/pkg/styles.css">
</head>
<body>
    <div id="app">
        <div class="boot-screen">
            <span class="material-symbols-outlined boot-icon">work_history</span>
            <p>Loading Jobify...</p>
        </div>
    </div>
    <script type="module" src="/pkg/client.js"></script>
</body>
</html>"#,
        title = SITE.title,
        description = SITE.description,
        keywords = SITE.keywords_csv(),
        author = SITE.author,
        site_name = SITE.site_name,
        url = SITE.url,
        image = SITE.image,
        locale = SITE.locale,
        twitter = SITE.twitter_handle,
    )
}

/// Run the server with the given configuration
///
/// # Errors
/// Returns an error if the server fails to bind to the address or encounters
/// a critical error during operation.
pub async fn run_with_config(bind_address: SocketAddr, request_timeout: u64) -> Result<()> {
    let state = Arc::new(ServerState::new(request_timeout));
    let router = build_router(state);

    info!("Starting Jobify web server on {}", bind_address);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error occurred")?;

    Ok(())
}

/// Handle shutdown signals gracefully
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    warn!("Received shutdown signal");
    info!("Shutting down server...");
}
