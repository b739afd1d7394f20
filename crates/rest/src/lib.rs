//! # flowtrace-rest - History Query REST API
//!
//! This crate exposes the history of a workflow engine over HTTP. Every
//! endpoint accepts filter criteria, sort criteria and pagination either
//! as URL query parameters (GET) or as a JSON body (POST), translates
//! them, via [`flowtrace_query`], into an ordered sequence of calls on
//! a query builder obtained from the engine's
//! [`HistoryService`](flowtrace_engine::HistoryService), and returns the
//! resulting records as JSON.
//!
//! ## Endpoints
//!
//! | Resource | URL |
//! |----------|-----|
//! | Process instances | `/history/process-instance` |
//! | Activity instances | `/history/activity-instance` |
//! | Case instances | `/history/case-instance` |
//! | Decision instances | `/history/decision-instance` |
//! | Details | `/history/detail` |
//! | Incidents | `/history/incident` |
//! | Job logs | `/history/job-log` |
//! | Task instances | `/history/task` |
//! | Variable instances | `/history/variable-instance` |
//!
//! Each resource answers `GET`/`POST` on its collection path and on
//! `<path>/count`; process and variable instances additionally support
//! `GET <path>/{id}` singleton lookups.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowtrace_rest::{ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = my_engine::connect()?;
//!     let config = ServerConfig::from_env();
//!     flowtrace_rest::init_logging(&config.log_level);
//!     serve(engine, config).await
//! }
//! ```
//!
//! ## Error Handling
//!
//! Errors are JSON objects `{"type": <kind>, "message": <text>}`;
//! see [`error`] for the status mapping.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (engine, configuration)
//! - [`extractors`] - Parameter-map extractors for both transports
//! - [`handlers`] - HTTP request handlers per endpoint
//! - [`responses`] - Shared response payloads
//! - [`routing`] - Route configuration

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use flowtrace_engine::HistoryService;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<E>(engine: E) -> Router
where
    E: HistoryService + 'static,
{
    create_app_with_config(engine, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all history routes plus the trace, timeout and (optional)
/// CORS middleware.
pub fn create_app_with_config<E>(engine: E, config: ServerConfig) -> Router
where
    E: HistoryService + 'static,
{
    info!(port = config.port, "creating history REST API");

    let state = AppState::new(Arc::new(engine), config.clone());
    let router = routing::history_routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Binds a listener and serves the application until shutdown.
pub async fn serve<E>(engine: E, config: ServerConfig) -> anyhow::Result<()>
where
    E: HistoryService + 'static,
{
    let addr = config.socket_addr();
    let app = create_app_with_config(engine, config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "history REST API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flowtrace_rest={level},tower_http=debug")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
