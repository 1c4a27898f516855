pub mod config;
pub mod data;
pub mod error;
pub mod schema;
pub mod server;

// Re-export commonly used types
pub use config::{Config, DataConfig, ServerConfig};
pub use data::{Lift, ResortData, Trail};
pub use error::{Result, SnowtoothError};
pub use schema::{Resolvers, SchemaBuilder};
