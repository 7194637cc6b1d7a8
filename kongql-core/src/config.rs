use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::KongqlError;

/// Top-level façade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KongqlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminApiConfig,
}

/// GraphQL server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_addr")]
    pub addr: String,
    /// Serve the GraphQL playground page on `/`.
    #[serde(default = "default_true")]
    pub playground: bool,
}

/// Admin API settings.
///
/// Only the base address is configurable. The façade imposes no timeouts,
/// retries, or connection limits of its own beyond the transport defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApiConfig {
    #[serde(default = "default_admin_url")]
    pub url: String,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_server_addr() -> String {
    "0.0.0.0:4000".into()
}
fn default_true() -> bool {
    true
}
fn default_admin_url() -> String {
    "http://localhost:8001/".into()
}

// ── Impls ─────────────────────────────────────────────────────

impl Default for KongqlConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            admin: AdminApiConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
            playground: true,
        }
    }
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            url: default_admin_url(),
        }
    }
}

impl KongqlConfig {
    pub fn load(path: &Path) -> Result<Self, KongqlError> {
        let config: KongqlConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("KONGQL_").split("__"))
            .extract()?;
        Ok(config)
    }
}
