//! Companion HTTP server.
//!
//! Serves the page shell, the static bundle and the highlight stylesheet, and
//! relays `POST /chat` upstream.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::protocol::{ChatRequest, ErrorDetail};
use crate::relay::ChatRelay;
use crate::ui;
use crate::widget::highlight;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Relay to the upstream chat service.
    pub relay: Arc<ChatRelay>,
    /// Pre-rendered page shell.
    pub page: Arc<str>,
    /// Stylesheet for highlighted code.
    pub highlight_css: Arc<str>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let relay = ChatRelay::new(&config.relay)?;
        let page = ui::render_page(&config.widget)?;
        let highlight_css = highlight::stylesheet()?;

        Ok(Self {
            config,
            relay: Arc::new(relay),
            page: page.into(),
            highlight_css: highlight_css.into(),
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);
    let cors = cors_layer(&state.config.server.allowed_origins);

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/highlight.css", get(highlight_css_handler))
        .nest_service("/static", static_dir)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config))?;

    match state.relay.upstream() {
        Some(url) => info!(name: "relay.configured", upstream = %url, "Chat relay configured"),
        None => warn!(
            name: "relay.unconfigured",
            "No chat upstream configured; POST /chat will answer 503"
        ),
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    // A wildcard anywhere in the list opens `/chat` to every origin
    let allow_origin = if origins.iter().any(|origin| origin.trim() == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.trim().parse() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Chat page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// GET /highlight.css - Code highlighting stylesheet.
async fn highlight_css_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.highlight_css.to_string(),
    )
}

/// POST /chat - Relay one exchange to the upstream chat service.
async fn chat_handler(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    info!(
        request_id = %request_id,
        prompt_len = req.prompt.len(),
        history_len = req.history.len(),
        "Relaying chat request"
    );

    match state.relay.forward(&req).await {
        Ok(reply) => {
            info!(request_id = %request_id, status = %reply.status, "Upstream replied");
            (reply.status, Json(reply.body)).into_response()
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Chat relay failed");
            (e.status(), Json(ErrorDetail::new(e.to_string()))).into_response()
        }
    }
}
