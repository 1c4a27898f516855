use snowtooth::config::Config;
use snowtooth::data::ResortData;
use snowtooth::error::{Result, SnowtoothError};
use snowtooth::schema::SchemaBuilder;
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: Option<String>, port: Option<u16>, bind: Option<String>) -> Result<()> {
    if let Some(path) = &config_path {
        tracing::info!("📖 Loading configuration from {}", path);
    }
    let config = snowtooth::config::load_or_default(config_path.as_deref())?;
    let config = apply_overrides(config, port, bind)?;

    // Data must load before the server accepts any query
    let data = Arc::new(ResortData::load(&config.data)?);

    tracing::info!("🔧 Building GraphQL schema...");
    let schema = SchemaBuilder::new(data)
        .with_max_depth(config.server.max_depth)
        .build_schema()?;
    tracing::info!("✅ Schema built successfully");

    snowtooth::server::serve(schema, &config.server.bind, config.server.port).await
}

/// Command-line flags win over the config file; the result is validated again
fn apply_overrides(mut config: Config, port: Option<u16>, bind: Option<String>) -> Result<Config> {
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    config.server.validate().map_err(SnowtoothError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let config = apply_overrides(Config::default(), Some(8080), Some("127.0.0.1".to_string())).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let config = apply_overrides(Config::default(), None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_bind_override_rejected() {
        let result = apply_overrides(Config::default(), None, Some(String::new()));
        assert!(matches!(result, Err(SnowtoothError::Config(_))));
    }
}
