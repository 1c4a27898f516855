/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which assembles the enum types,
/// the `Lift`/`Trail` objects and the `Query` root into an executable schema.

use crate::data::ResortData;
use crate::error::{Result, SnowtoothError};
use crate::schema::enums::register_enums;
use crate::schema::objects::{lift_object, trail_object};
use crate::schema::query::{query_fields, QUERY};
use crate::schema::resolver::Resolvers;

use async_graphql::dynamic::{Object, Schema};
use std::sync::Arc;

/// Schema builder over one data snapshot
pub struct SchemaBuilder {
    resolvers: Resolvers,
    max_depth: Option<usize>,
}

impl SchemaBuilder {
    /// Create a builder whose resolvers read from `data`
    pub fn new(data: Arc<ResortData>) -> Self {
        Self {
            resolvers: Resolvers::new(data),
            max_depth: None,
        }
    }

    /// Reject query documents nested deeper than `depth`
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Build the complete GraphQL schema
    ///
    /// The `Resolvers` are stored as schema data, so every field resolver
    /// reads the same snapshot.
    pub fn build_schema(self) -> Result<Schema> {
        let query = query_fields()
            .into_iter()
            .fold(Object::new(QUERY), |query, field| query.field(field));

        let mut schema_builder = Schema::build(query.type_name(), None, None);

        for enum_type in register_enums() {
            schema_builder = schema_builder.register(enum_type);
        }

        schema_builder = schema_builder
            .register(lift_object())
            .register(trail_object())
            .register(query);

        if let Some(depth) = self.max_depth {
            schema_builder = schema_builder.limit_depth(depth);
        }

        tracing::debug!(
            "Building schema over {} lifts and {} trails",
            self.resolvers.data().lifts().len(),
            self.resolvers.data().trails().len()
        );

        let schema = schema_builder
            .data(self.resolvers)
            .finish()
            .map_err(|e| {
                SnowtoothError::SchemaGeneration(format!("Failed to build schema: {}", e))
            })?;

        Ok(schema)
    }
}
