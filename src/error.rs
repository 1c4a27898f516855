use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowtoothError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Lift not found: {0}")]
    LiftNotFound(String),

    #[error("Trail not found: {0}")]
    TrailNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SnowtoothError {
    /// Machine-readable code reported under `extensions.code` in GraphQL errors
    pub fn code(&self) -> &'static str {
        match self {
            SnowtoothError::LiftNotFound(_) | SnowtoothError::TrailNotFound(_) => "NOT_FOUND",
            SnowtoothError::InvalidArgument(_) => "BAD_USER_INPUT",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for SnowtoothError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<toml::de::Error> for SnowtoothError {
    fn from(err: toml::de::Error) -> Self {
        SnowtoothError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for SnowtoothError {
    fn from(err: toml::ser::Error) -> Self {
        SnowtoothError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SnowtoothError>;
