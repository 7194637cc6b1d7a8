use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use kongql_core::config::AdminApiConfig;
use kongql_core::error::KongqlError;
use kongql_core::{Consumer, Node, Plugin, Route, Service, Status};

/// Client for the Kong Admin API.
///
/// Cheap to clone; the underlying HTTP client is shared across clones.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Collection envelope: the Admin API wraps lists in `{"data": [...]}`.
///
/// Only the first page is ever read, and a body without `data` fails
/// decoding — there is deliberately no fallback.
#[derive(Debug, Deserialize)]
struct Collection<T> {
    data: Vec<T>,
}

impl AdminClient {
    pub fn new(config: &AdminApiConfig) -> Result<Self, KongqlError> {
        Self::with_base_url(&config.url)
    }

    pub fn with_base_url(url: &str) -> Result<Self, KongqlError> {
        // Url::join treats a base without a trailing slash as a file and
        // would drop its last path segment.
        let normalized = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|source| KongqlError::BaseUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Node descriptor, from `GET /`.
    pub async fn node(&self) -> Result<Node, KongqlError> {
        self.get("").await
    }

    /// Node usage snapshot, from `GET /status`.
    pub async fn status(&self) -> Result<Status, KongqlError> {
        self.get("status").await
    }

    pub async fn services(&self) -> Result<Vec<Service>, KongqlError> {
        self.get_collection("services").await
    }

    pub async fn service(&self, id: &str) -> Result<Service, KongqlError> {
        self.get(&format!("services/{id}")).await
    }

    pub async fn service_routes(&self, service_id: &str) -> Result<Vec<Route>, KongqlError> {
        self.get_collection(&format!("services/{service_id}/routes")).await
    }

    pub async fn service_plugins(&self, service_id: &str) -> Result<Vec<Plugin>, KongqlError> {
        self.get_collection(&format!("services/{service_id}/plugins")).await
    }

    pub async fn routes(&self) -> Result<Vec<Route>, KongqlError> {
        self.get_collection("routes").await
    }

    pub async fn route(&self, id: &str) -> Result<Route, KongqlError> {
        self.get(&format!("routes/{id}")).await
    }

    pub async fn route_plugins(&self, route_id: &str) -> Result<Vec<Plugin>, KongqlError> {
        self.get_collection(&format!("routes/{route_id}/plugins")).await
    }

    pub async fn consumers(&self) -> Result<Vec<Consumer>, KongqlError> {
        self.get_collection("consumers").await
    }

    pub async fn consumer(&self, id: &str) -> Result<Consumer, KongqlError> {
        self.get(&format!("consumers/{id}")).await
    }

    pub async fn consumer_plugins(&self, consumer_id: &str) -> Result<Vec<Plugin>, KongqlError> {
        self.get_collection(&format!("consumers/{consumer_id}/plugins")).await
    }

    pub async fn plugins(&self) -> Result<Vec<Plugin>, KongqlError> {
        self.get_collection("plugins").await
    }

    pub async fn plugin(&self, id: &str) -> Result<Plugin, KongqlError> {
        self.get(&format!("plugins/{id}")).await
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, KongqlError> {
        let page: Collection<T> = self.get(path).await?;
        Ok(page.data)
    }

    /// One GET against the admin base address, decoded straight from the
    /// body bytes so JSON object key order survives for the map→list
    /// reshapes.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, KongqlError> {
        let display_path = format!("/{path}");
        let url = self.base_url.join(path).map_err(|source| KongqlError::BaseUrl {
            url: format!("{}{path}", self.base_url),
            source,
        })?;

        debug!(path = %display_path, "Admin API GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| KongqlError::Transport {
                path: display_path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(KongqlError::UpstreamStatus {
                status: status.as_u16(),
                path: display_path,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| KongqlError::Transport {
                path: display_path.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| KongqlError::Decode {
            path: display_path,
            source,
        })
    }
}
