use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Maximum nesting depth accepted for a query document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            max_depth: None,
        }
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Locations of the static lift and trail records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of lift records
    #[serde(default = "default_lifts_path")]
    pub lifts: String,

    /// JSON array of trail records
    #[serde(default = "default_trails_path")]
    pub trails: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            lifts: default_lifts_path(),
            trails: default_trails_path(),
        }
    }
}

fn default_lifts_path() -> String {
    "data/lifts.json".to_string()
}

fn default_trails_path() -> String {
    "data/trails.json".to_string()
}

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.data.validate()
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bind.trim().is_empty() {
            return Err("Server bind address must not be empty".to_string());
        }

        if self.max_depth == Some(0) {
            return Err("max_depth must be greater than zero".to_string());
        }

        Ok(())
    }
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.lifts.trim().is_empty() {
            return Err("Lift data path must not be empty".to_string());
        }
        if self.trails.trim().is_empty() {
            return Err("Trail data path must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.data.lifts, "data/lifts.json");
    }

    #[test]
    fn test_empty_bind_rejected() {
        let server = ServerConfig {
            bind: "  ".to_string(),
            ..ServerConfig::default()
        };

        assert!(server.validate().is_err());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let server = ServerConfig {
            max_depth: Some(0),
            ..ServerConfig::default()
        };

        assert!(server.validate().is_err());
    }

    #[test]
    fn test_empty_data_path_rejected() {
        let data = DataConfig {
            lifts: "data/lifts.json".to_string(),
            trails: String::new(),
        };

        assert!(data.validate().is_err());
    }
}
