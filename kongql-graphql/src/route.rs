use async_graphql::{Context, ID, Object, Result};

use kongql_admin::AdminClient;
use kongql_core::KongqlError;

use crate::plugin::Plugin;
use crate::service::{Protocol, Service, protocol_list};

/// A request-matching rule attached to a service.
pub struct Route(pub kongql_core::Route);

#[Object(rename_fields = "snake_case")]
impl Route {
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

    async fn protocols(&self) -> Option<Vec<Protocol>> {
        protocol_list(&self.0.protocols)
    }

    async fn hosts(&self) -> Option<&Vec<String>> {
        self.0.hosts.as_ref()
    }

    async fn paths(&self) -> Option<&Vec<String>> {
        self.0.paths.as_ref()
    }

    async fn https_redirect_status_code(&self) -> Option<i32> {
        self.0.https_redirect_status_code
    }

    async fn regex_priority(&self) -> Option<i32> {
        self.0.regex_priority
    }

    async fn strip_path(&self) -> Option<bool> {
        self.0.strip_path
    }

    async fn preserve_host(&self) -> Option<bool> {
        self.0.preserve_host
    }

    /// The owning service, re-fetched in full from the embedded reference.
    ///
    /// An unattached route fails this field: the embedded reference is the
    /// only way to locate the service, and there is no absent-value
    /// fallback here, unlike the plugin owner fields.
    async fn service(&self, ctx: &Context<'_>) -> Result<Option<Service>> {
        let target = self
            .0
            .service
            .as_ref()
            .and_then(|reference| reference.target())
            .ok_or(KongqlError::MissingReference {
                entity: "route",
                field: "service",
            })?;
        let service = ctx.data::<AdminClient>()?.service(target).await?;
        Ok(Some(Service(service)))
    }

    /// Plugins scoped to this route.
    async fn plugins(&self, ctx: &Context<'_>) -> Result<Option<Vec<Plugin>>> {
        let plugins = ctx.data::<AdminClient>()?.route_plugins(&self.0.id).await?;
        Ok(Some(plugins.into_iter().map(Plugin).collect()))
    }
}
