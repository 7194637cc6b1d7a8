use serde::{Deserialize, Serialize};

use crate::entity::EntityRef;
use crate::service::Protocol;

/// Plugin entity — one plugin configuration on the gateway.
///
/// The three owner references are each independently nullable, and the
/// control plane only ever populates one at a time in practice; nothing
/// here enforces that convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    pub id: String,
    pub created_at: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub name: Option<String>,
    pub run_on: Option<String>,
    pub protocols: Option<Vec<Protocol>>,
    pub enabled: Option<bool>,
    pub service: Option<EntityRef>,
    pub route: Option<EntityRef>,
    pub consumer: Option<EntityRef>,
}
