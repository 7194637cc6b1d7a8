use async_graphql::{Context, ID, Object, Result};

use kongql_admin::AdminClient;

use crate::consumer::Consumer;
use crate::node::Node;
use crate::plugin::Plugin;
use crate::route::Route;
use crate::service::Service;
use crate::status::Status;

/// Root query — every field is exactly one Admin API call.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Generic details about the gateway node behind the Admin API.
    async fn node(&self, ctx: &Context<'_>) -> Result<Option<Node>> {
        let node = ctx.data::<AdminClient>()?.node().await?;
        Ok(Some(Node(node)))
    }

    /// Usage snapshot of the node: connections, database, memory.
    async fn status(&self, ctx: &Context<'_>) -> Result<Option<Status>> {
        let status = ctx.data::<AdminClient>()?.status().await?;
        Ok(Some(Status(status)))
    }

    async fn services(&self, ctx: &Context<'_>) -> Result<Option<Vec<Service>>> {
        let services = ctx.data::<AdminClient>()?.services().await?;
        Ok(Some(services.into_iter().map(Service).collect()))
    }

    async fn service(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Service>> {
        let service = ctx.data::<AdminClient>()?.service(id.as_str()).await?;
        Ok(Some(Service(service)))
    }

    async fn routes(&self, ctx: &Context<'_>) -> Result<Option<Vec<Route>>> {
        let routes = ctx.data::<AdminClient>()?.routes().await?;
        Ok(Some(routes.into_iter().map(Route).collect()))
    }

    async fn route(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Route>> {
        let route = ctx.data::<AdminClient>()?.route(id.as_str()).await?;
        Ok(Some(Route(route)))
    }

    async fn consumers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Consumer>>> {
        let consumers = ctx.data::<AdminClient>()?.consumers().await?;
        Ok(Some(consumers.into_iter().map(Consumer).collect()))
    }

    async fn consumer(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Consumer>> {
        let consumer = ctx.data::<AdminClient>()?.consumer(id.as_str()).await?;
        Ok(Some(Consumer(consumer)))
    }

    async fn plugins(&self, ctx: &Context<'_>) -> Result<Option<Vec<Plugin>>> {
        let plugins = ctx.data::<AdminClient>()?.plugins().await?;
        Ok(Some(plugins.into_iter().map(Plugin).collect()))
    }

    async fn plugin(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Plugin>> {
        let plugin = ctx.data::<AdminClient>()?.plugin(id.as_str()).await?;
        Ok(Some(Plugin(plugin)))
    }
}
