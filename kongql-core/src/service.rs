use serde::{Deserialize, Serialize};

/// Protocol used to reach an upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

/// Service entity — an abstraction of one upstream the gateway proxies to.
///
/// Fetched from `services` and `services/{id}`. Associated routes and
/// plugins are never embedded in the body; they live behind the
/// service-scoped sub-collection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub name: Option<String>,
    /// Number of retries to execute upon failure to proxy.
    pub retries: Option<i32>,
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub path: Option<String>,
    pub connect_timeout: Option<i32>,
    pub write_timeout: Option<i32>,
    pub read_timeout: Option<i32>,
}
