pub mod config;
pub mod consumer;
pub mod entity;
pub mod error;
pub mod node;
pub mod plugin;
pub mod reshape;
pub mod route;
pub mod service;
pub mod status;

pub use config::KongqlConfig;
pub use consumer::Consumer;
pub use entity::{Entity, EntityKind, EntityRef};
pub use error::KongqlError;
pub use node::Node;
pub use plugin::Plugin;
pub use route::Route;
pub use service::{Protocol, Service};
pub use status::Status;
