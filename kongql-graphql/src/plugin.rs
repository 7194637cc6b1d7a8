use async_graphql::{Context, ID, Object, Result};

use kongql_admin::AdminClient;

use crate::consumer::Consumer;
use crate::route::Route;
use crate::service::{Protocol, Service, protocol_list};

/// One plugin configuration on the gateway.
pub struct Plugin(pub kongql_core::Plugin);

#[Object(rename_fields = "snake_case")]
impl Plugin {
    pub async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    pub async fn created_at(&self) -> Option<i64> {
        self.0.created_at
    }

    pub async fn tags(&self) -> Option<Vec<String>> {
        self.0.tags.clone()
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn run_on(&self) -> Option<&str> {
        self.0.run_on.as_deref()
    }

    async fn protocols(&self) -> Option<Vec<Protocol>> {
        protocol_list(&self.0.protocols)
    }

    async fn enabled(&self) -> Option<bool> {
        self.0.enabled
    }

    // The three owner fields are each independently nullable. An absent or
    // id-less reference resolves to null without touching the Admin API;
    // a usable reference triggers exactly one re-fetch of the full entity.

    async fn service(&self, ctx: &Context<'_>) -> Result<Option<Service>> {
        let Some(id) = self.0.service.as_ref().and_then(|r| r.target()) else {
            return Ok(None);
        };
        let service = ctx.data::<AdminClient>()?.service(id).await?;
        Ok(Some(Service(service)))
    }

    async fn route(&self, ctx: &Context<'_>) -> Result<Option<Route>> {
        let Some(id) = self.0.route.as_ref().and_then(|r| r.target()) else {
            return Ok(None);
        };
        let route = ctx.data::<AdminClient>()?.route(id).await?;
        Ok(Some(Route(route)))
    }

    async fn consumer(&self, ctx: &Context<'_>) -> Result<Option<Consumer>> {
        let Some(id) = self.0.consumer.as_ref().and_then(|r| r.target()) else {
            return Ok(None);
        };
        let consumer = ctx.data::<AdminClient>()?.consumer(id).await?;
        Ok(Some(Consumer(consumer)))
    }
}
