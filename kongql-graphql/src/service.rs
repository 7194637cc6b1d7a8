use async_graphql::{Context, Enum, ID, Object, Result};

use kongql_admin::AdminClient;
use kongql_core::service;

use crate::plugin::Plugin;
use crate::route::Route;

/// Protocol used to reach an upstream.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(rename_items = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl From<service::Protocol> for Protocol {
    fn from(protocol: service::Protocol) -> Self {
        match protocol {
            service::Protocol::Http => Protocol::Http,
            service::Protocol::Https => Protocol::Https,
        }
    }
}

pub(crate) fn protocol_list(protocols: &Option<Vec<service::Protocol>>) -> Option<Vec<Protocol>> {
    protocols
        .as_ref()
        .map(|list| list.iter().map(|&p| p.into()).collect())
}

/// An upstream the gateway proxies to.
pub struct Service(pub kongql_core::Service);

#[Object(rename_fields = "snake_case")]
impl Service {
    pub async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    pub async fn created_at(&self) -> Option<i64> {
        self.0.created_at
    }

    async fn updated_at(&self) -> Option<i64> {
        self.0.updated_at
    }

    pub async fn tags(&self) -> Option<Vec<String>> {
        self.0.tags.clone()
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn retries(&self) -> Option<i32> {
        self.0.retries
    }

    async fn protocol(&self) -> Protocol {
        self.0.protocol.into()
    }

    async fn host(&self) -> &str {
        &self.0.host
    }

    async fn port(&self) -> u16 {
        self.0.port
    }

    async fn path(&self) -> Option<&str> {
        self.0.path.as_deref()
    }

    async fn connect_timeout(&self) -> Option<i32> {
        self.0.connect_timeout
    }

    async fn write_timeout(&self) -> Option<i32> {
        self.0.write_timeout
    }

    async fn read_timeout(&self) -> Option<i32> {
        self.0.read_timeout
    }

    /// Routes attached to this service, from the service-scoped collection.
    async fn routes(&self, ctx: &Context<'_>) -> Result<Option<Vec<Route>>> {
        let routes = ctx.data::<AdminClient>()?.service_routes(&self.0.id).await?;
        Ok(Some(routes.into_iter().map(Route).collect()))
    }

    /// Plugins scoped to this service.
    async fn plugins(&self, ctx: &Context<'_>) -> Result<Option<Vec<Plugin>>> {
        let plugins = ctx.data::<AdminClient>()?.service_plugins(&self.0.id).await?;
        Ok(Some(plugins.into_iter().map(Plugin).collect()))
    }
}
