use serde::{Deserialize, Serialize};

use crate::reshape::{FromNamed, named_record_list};

/// Generic details about a gateway node, from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub hostname: Option<String>,
    pub node_id: String,
    pub lua_version: Option<String>,
    pub tagline: Option<String>,
    pub version: Option<String>,
    pub plugins: NodePlugins,
}

/// Plugin inventory of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePlugins {
    /// Per-plugin availability, reshaped from the upstream name→bool map.
    #[serde(deserialize_with = "named_record_list")]
    pub available_on_server: Vec<PluginAvailability>,
    /// Plugins with configurations in the shared datastore.
    pub enabled_in_cluster: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginAvailability {
    pub name: String,
    pub available: bool,
}

impl FromNamed for PluginAvailability {
    type Entry = bool;

    fn from_named(name: String, available: bool) -> Self {
        Self { name, available }
    }
}
