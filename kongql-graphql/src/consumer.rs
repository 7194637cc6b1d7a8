use async_graphql::{Context, ID, Object, Result};

use kongql_admin::AdminClient;

use crate::plugin::Plugin;

/// An API consumer known to the gateway.
pub struct Consumer(pub kongql_core::Consumer);

#[Object(rename_fields = "snake_case")]
impl Consumer {
    pub async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    pub async fn created_at(&self) -> Option<i64> {
        self.0.created_at
    }

    pub async fn tags(&self) -> Option<Vec<String>> {
        self.0.tags.clone()
    }

    async fn username(&self) -> Option<&str> {
        self.0.username.as_deref()
    }

    async fn custom_id(&self) -> Option<&str> {
        self.0.custom_id.as_deref()
    }

    /// Plugins scoped to this consumer.
    async fn plugins(&self, ctx: &Context<'_>) -> Result<Option<Vec<Plugin>>> {
        let plugins = ctx.data::<AdminClient>()?.consumer_plugins(&self.0.id).await?;
        Ok(Some(plugins.into_iter().map(Plugin).collect()))
    }
}
