use serde::{Deserialize, Serialize};

/// Consumer entity — an API consumer known to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    pub created_at: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub username: Option<String>,
    /// Caller-defined identifier, for mapping onto an external user store.
    pub custom_id: Option<String>,
}
