mod types;

pub use types::{Config, DataConfig, ServerConfig};

use crate::error::{Result, SnowtoothError};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SnowtoothError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = toml::from_str(&contents)?;

    config.validate().map_err(SnowtoothError::Config)?;

    Ok(config)
}

/// Load configuration from `path` if given, otherwise fall back to defaults
pub fn load_or_default(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => {
            tracing::debug!("No config file given, using defaults");
            Ok(Config::default())
        }
    }
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.validate().map_err(SnowtoothError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| SnowtoothError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]
port = 4100
bind = "127.0.0.1"
max_depth = 8

[data]
lifts = "fixtures/lifts.json"
trails = "fixtures/trails.json"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 4100);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.max_depth, Some(8));
        assert_eq!(config.data.lifts, "fixtures/lifts.json");
        assert_eq!(config.data.trails, "fixtures/trails.json");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 5000\n").unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server\nport = ").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(SnowtoothError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/definitely/not/here/snowtooth.toml");
        assert!(matches!(result, Err(SnowtoothError::Config(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = Config::default();
        config.server.port = 4321;
        config.server.max_depth = Some(12);

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded_config = load_config(path).unwrap();

        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let mut config = Config::default();
        config.data.lifts = String::new();

        let temp_file = NamedTempFile::new().unwrap();
        let result = save_config(&config, temp_file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
