//! Product Service Binary
//!
//! Starts the product CRUD HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin product-service
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `DATABASE_URL`: SQLite database URL (default: sqlite:products.db)
//! - `DATABASE_MAX_CONNECTIONS`: Connection pool size (default: 5)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use product_service::application::services::ProductService;
use product_service::config::Config;
use product_service::infrastructure::http::{AppState, create_router};
use product_service::infrastructure::persistence::SqliteProductRepository;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting product service");

    let config = Config::from_env();
    log_config(&config);

    let repository = SqliteProductRepository::connect(
        &config.persistence.database_url,
        config.persistence.max_connections,
    )
    .await
    .context("failed to open the product database")?;

    let service = Arc::new(ProductService::new(Arc::new(repository)));

    let state = AppState {
        service,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.bind_address, config.server.http_port
    )
    .parse()
    .context("invalid bind address")?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /products");
    tracing::info!("  POST   /products");
    tracing::info!("  GET    /products/{{id}}");
    tracing::info!("  PUT    /products/{{id}}");
    tracing::info!("  DELETE /products/{{id}}");

    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind HTTP listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Product service stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant
/// guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "product_service=info"
                    .parse()
                    .expect("static directive 'product_service=info' is valid"),
            ),
        )
        .init();
}

/// Log the resolved configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        database_url = %config.persistence.database_url,
        max_connections = config.persistence.max_connections,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
