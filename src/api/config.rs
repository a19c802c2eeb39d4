// API Configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// JSON file holding the tag database
    pub database_path: PathBuf,

    /// Enable CORS
    pub enable_cors: bool,

    /// Enable Swagger UI
    pub enable_swagger: bool,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("ip_base.json"),
            enable_cors: false,
            enable_swagger: false,
            request_timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    /// Create config from file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create example config file
    pub fn create_example(path: &str) -> anyhow::Result<()> {
        let config = Self::default();
        let toml = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("request_timeout_seconds must be greater than zero");
        }
        Ok(())
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ApiConfig = toml::from_str("port = 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_path, PathBuf::from("ip_base.json"));
    }

    #[test]
    fn test_example_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iptags.toml");
        let path = path.to_str().unwrap();

        ApiConfig::create_example(path).unwrap();
        let config = ApiConfig::from_file(path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ApiConfig {
            request_timeout_seconds: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(ApiConfig::default().bind_address(), "127.0.0.1:8080");
    }
}
