//! Chat Widget Server
//!
//! Entry point for the companion server that hosts the widget page.

#[cfg(not(target_arch = "wasm32"))]
use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[cfg(not(target_arch = "wasm32"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use chat_widget::config::AppConfig;
    use tracing::info;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Load .env (if present) before anything reads the environment
    let _ = dotenvy::dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    let config = AppConfig::load()?;
    info!(
        name: "config.loaded",
        bind = %config.bind_address(),
        static_dir = %config.server.static_dir,
        endpoint = %config.widget.endpoint,
        "Configuration loaded"
    );

    chat_widget::server::start_server(Arc::new(config)).await
}

/// The browser build is a library; `web::mount` is its entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}
