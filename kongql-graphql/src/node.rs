use async_graphql::{ID, Object};

use kongql_core::node;

/// Generic details about the gateway node behind the Admin API.
pub struct Node(pub kongql_core::Node);

#[Object(rename_fields = "snake_case")]
impl Node {
    async fn hostname(&self) -> Option<&str> {
        self.0.hostname.as_deref()
    }

    async fn node_id(&self) -> ID {
        ID(self.0.node_id.clone())
    }

    async fn lua_version(&self) -> Option<&str> {
        self.0.lua_version.as_deref()
    }

    async fn tagline(&self) -> Option<&str> {
        self.0.tagline.as_deref()
    }

    async fn version(&self) -> Option<&str> {
        self.0.version.as_deref()
    }

    async fn plugins(&self) -> NodePlugins {
        NodePlugins(self.0.plugins.clone())
    }
}

/// Plugin inventory of a node.
pub struct NodePlugins(pub node::NodePlugins);

#[Object(rename_fields = "snake_case")]
impl NodePlugins {
    /// Per-plugin availability, in the order the node reports it.
    async fn available_on_server(&self) -> Vec<PluginAvailability> {
        self.0
            .available_on_server
            .iter()
            .cloned()
            .map(PluginAvailability)
            .collect()
    }

    /// Plugins with configurations in the shared datastore.
    async fn enabled_in_cluster(&self) -> Option<&Vec<String>> {
        self.0.enabled_in_cluster.as_ref()
    }
}

pub struct PluginAvailability(pub node::PluginAvailability);

#[Object(rename_fields = "snake_case")]
impl PluginAvailability {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn available(&self) -> bool {
        self.0.available
    }
}
