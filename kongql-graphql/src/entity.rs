use async_graphql::{ID, Interface};

use kongql_core::{KongqlError, entity};

use crate::consumer::Consumer;
use crate::plugin::Plugin;
use crate::route::Route;
use crate::service::Service;

/// Shared capability contract over the four concrete entity kinds: every
/// entity has an identifier, a creation timestamp, and a tag set.
#[derive(Interface)]
#[graphql(
    rename_fields = "snake_case",
    field(name = "id", ty = "ID"),
    field(name = "created_at", ty = "Option<i64>"),
    field(name = "tags", ty = "Option<Vec<String>>")
)]
pub enum KongEntity {
    Service(Service),
    Route(Route),
    Consumer(Consumer),
    Plugin(Plugin),
}

impl TryFrom<entity::Entity> for KongEntity {
    type Error = KongqlError;

    /// The tagged union has five cases but the interface only four: the
    /// `Unclassified` sentinel has no GraphQL counterpart and is rejected
    /// here, at the boundary where a value must surface through the
    /// interface.
    fn try_from(entity: entity::Entity) -> Result<Self, Self::Error> {
        match entity {
            entity::Entity::Service(service) => Ok(KongEntity::Service(Service(service))),
            entity::Entity::Route(route) => Ok(KongEntity::Route(Route(route))),
            entity::Entity::Consumer(consumer) => Ok(KongEntity::Consumer(Consumer(consumer))),
            entity::Entity::Plugin(plugin) => Ok(KongEntity::Plugin(Plugin(plugin))),
            entity::Entity::Unclassified(_) => Err(KongqlError::Unclassified),
        }
    }
}
