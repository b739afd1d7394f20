//! Server configuration for the history REST API.
//!
//! Configuration is available programmatically, from command line
//! arguments, or from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FLOWTRACE_SERVER_PORT` | 8080 | Server port |
//! | `FLOWTRACE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `FLOWTRACE_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `FLOWTRACE_MAX_BODY_SIZE` | 1048576 | Max request body size (bytes) |
//! | `FLOWTRACE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `FLOWTRACE_ENABLE_CORS` | true | Enable CORS |
//! | `FLOWTRACE_CORS_ORIGINS` | * | Allowed origins |
//! | `FLOWTRACE_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `FLOWTRACE_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `FLOWTRACE_BASE_URL` | http://localhost:8080 | Server base URL |
//!
//! # Example
//!
//! ```rust
//! use flowtrace_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the history REST API.
///
/// Construct from environment variables with [`ServerConfig::from_env`],
/// from command line arguments with `ServerConfig::parse`, or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "flowtrace-server")]
#[command(about = "Flowtrace history REST API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "FLOWTRACE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "FLOWTRACE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FLOWTRACE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "FLOWTRACE_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "FLOWTRACE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "FLOWTRACE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "FLOWTRACE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "FLOWTRACE_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "FLOWTRACE_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server.
    #[arg(long, env = "FLOWTRACE_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB of filter criteria is plenty
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a `ServerConfig` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
        }
    }
}
