//! Server configuration.
//!
//! Settings are layered: built-in defaults, then an optional JSON file
//! (`config/App.Config.json` by default), then environment variables:
//! - `CALCULATOR_HOST` - Interface to bind (default: `127.0.0.1`)
//! - `CALCULATOR_PORT` - Port to listen on (default: `3000`)
//! - `CALCULATOR_PUBLIC_DIR` - Static frontend directory (default: `public`)
//!
//! Command-line flags are applied on top by the binary.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config/App.Config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Load from `path` if it exists, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::from_file(path)?
        } else {
            tracing::info!("No config file at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env()
    }

    /// Parse a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Override fields from `CALCULATOR_*` environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = var("CALCULATOR_HOST") {
            self.host = host;
        }
        if let Some(port) = var("CALCULATOR_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("CALCULATOR_PORT is not a valid port: {}", port))?;
        }
        if let Some(dir) = var("CALCULATOR_PUBLIC_DIR") {
            self.public_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
