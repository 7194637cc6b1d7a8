//! GraphQL schema and resolvers for the Admin API façade.
//!
//! Every root field is one Admin API call; every relationship field is a
//! fresh follow-up call keyed by an identifier on the parent object. There
//! is no memoization between fields — a query reaching the same entity
//! through two paths issues two fetches, a deliberate simplicity trade-off.
//!
//! The Admin client is not baked into the schema: the HTTP handler attaches
//! one to each request's context, so a query execution carries its own
//! explicit context value and nothing outlives the request.

pub mod consumer;
pub mod entity;
pub mod node;
pub mod plugin;
pub mod query;
pub mod route;
pub mod service;
pub mod status;

pub use entity::KongEntity;
pub use query::QueryRoot;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

/// Schema type served by the façade — queries only.
pub type KongqlSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema.
///
/// `KongEntity` is registered explicitly: no field returns the interface
/// directly, but the four entity objects implement it and it must appear in
/// the exposed type system.
pub fn build_schema() -> KongqlSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .register_output_type::<KongEntity>()
        .finish()
}
