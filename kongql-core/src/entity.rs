use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consumer::Consumer;
use crate::plugin::Plugin;
use crate::route::Route;
use crate::service::Service;

/// Reference object the control plane embeds in parents: `{"id": "..."}`,
/// possibly with a null id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Option<String>,
}

impl EntityRef {
    /// The referenced id, if the reference is actually usable.
    pub fn target(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Discriminated kind of a raw Admin API entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Service,
    Route,
    Consumer,
    Plugin,
    Unclassified,
}

impl EntityKind {
    /// Classify a raw decoded value by field presence.
    ///
    /// The checks run in a fixed priority order because the field sets of
    /// the four kinds are not guaranteed disjoint: `routes` wins over
    /// `https_redirect_status_code`, which wins over `username`, which wins
    /// over `run_on`.
    pub fn classify(value: &Value) -> EntityKind {
        let Some(fields) = value.as_object() else {
            return EntityKind::Unclassified;
        };
        if fields.contains_key("routes") {
            EntityKind::Service
        } else if fields.contains_key("https_redirect_status_code") {
            EntityKind::Route
        } else if fields.contains_key("username") {
            EntityKind::Consumer
        } else if fields.contains_key("run_on") {
            EntityKind::Plugin
        } else {
            EntityKind::Unclassified
        }
    }
}

/// A decoded entity tagged with its kind.
///
/// The tag is computed once, here, when the raw value enters the domain —
/// not re-derived on every access. Values matching none of the
/// discrimination rules are kept as an `Unclassified` sentinel rather than
/// failing outright; the GraphQL layer rejects the sentinel at the point
/// where a value must surface through the shared interface.
#[derive(Debug, Clone)]
pub enum Entity {
    Service(Service),
    Route(Route),
    Consumer(Consumer),
    Plugin(Plugin),
    Unclassified(Value),
}

impl Entity {
    /// Decode a raw Admin API value into a tagged entity.
    pub fn from_value(value: Value) -> Result<Entity, serde_json::Error> {
        let entity = match EntityKind::classify(&value) {
            EntityKind::Service => Entity::Service(decode(value)?),
            EntityKind::Route => Entity::Route(decode(value)?),
            EntityKind::Consumer => Entity::Consumer(decode(value)?),
            EntityKind::Plugin => Entity::Plugin(decode(value)?),
            EntityKind::Unclassified => Entity::Unclassified(value),
        };
        Ok(entity)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Service(_) => EntityKind::Service,
            Entity::Route(_) => EntityKind::Route,
            Entity::Consumer(_) => EntityKind::Consumer,
            Entity::Plugin(_) => EntityKind::Plugin,
            Entity::Unclassified(_) => EntityKind::Unclassified,
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}
