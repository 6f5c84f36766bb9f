use serde::{Deserialize, Serialize};

pub const DEFAULT_PEOPLE_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning the JSON array of people
    pub people_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory served under /assets, if any
    pub dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            people_url: DEFAULT_PEOPLE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("config")
    }

    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name(file).required(false));

        // PEOPLE_SERVER__PORT=8080, PEOPLE_API__PEOPLE_URL=...
        config = config.add_source(
            config::Environment::with_prefix("PEOPLE")
                .separator("__")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
