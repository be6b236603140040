use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the pre-rendered badge assets, one subdirectory
    /// per style (default: `assets`).
    pub asset_dir: PathBuf,
    /// Path of the JSON registry document (default: `registry.json`).
    pub registry_file: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default         |
    /// |------------------------|-----------------|
    /// | `HOST`                 | `0.0.0.0`       |
    /// | `PORT`                 | `3000`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`            |
    /// | `ASSET_DIR`            | `assets`        |
    /// | `REGISTRY_FILE`        | `registry.json` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let asset_dir = PathBuf::from(std::env::var("ASSET_DIR").unwrap_or_else(|_| "assets".into()));

        let registry_file =
            PathBuf::from(std::env::var("REGISTRY_FILE").unwrap_or_else(|_| "registry.json".into()));

        Self {
            host,
            port,
            request_timeout_secs,
            asset_dir,
            registry_file,
        }
    }
}
