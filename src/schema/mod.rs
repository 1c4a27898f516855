//! GraphQL schema for lifts and trails
//!
//! This module declares the schema (enums, object types, query root) and the
//! resolver set that computes query results from the loaded data.

mod builder;
mod enums;
mod objects;
mod query;
mod resolver;

pub use builder::SchemaBuilder;
pub use enums::register_enums;
pub use objects::{lift_object, trail_object, Record};
pub use query::query_fields;
pub use resolver::{accessed_by_lifts, trail_access, Resolvers};
