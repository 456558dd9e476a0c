use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path of the JSON document holding the six collections
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "data.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "CAMPUS_", e.g. CAMPUS_SERVER_PORT
        config = config.add_source(
            config::Environment::with_prefix("CAMPUS")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// One-line description printed at startup
    pub fn summary(&self) -> String {
        format!(
            "Configuration loaded: server={}:{} data={}",
            self.server.host, self.server.port, self.data.path
        )
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:3000");
        assert_eq!(config.data.path, "data.json");
    }

    #[test]
    fn test_summary() {
        let mut config = AppConfig::default();
        config.server.port = 8080;
        config.data.path = "/srv/campus.json".to_string();
        assert_eq!(
            config.summary(),
            "Configuration loaded: server=127.0.0.1:8080 data=/srv/campus.json"
        );
    }
}
