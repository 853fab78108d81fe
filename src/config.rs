use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database type, used as the URL scheme (postgres or postgresql)
    #[serde(default = "default_db_type", rename = "type")]
    pub db_type: String,
    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,
    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database name
    #[serde(default = "default_db_name", rename = "database")]
    pub name: String,
    /// Database user
    #[serde(default = "default_db_user", rename = "username")]
    pub user: String,
    /// Database password
    #[serde(default)]
    pub password: String,
    /// Full connection URL, takes precedence over the individual fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// Default value functions
fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_db_type() -> String {
    "postgres".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "notadinas".to_string()
}

fn default_db_user() -> String {
    "postgres".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            log: LogConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: default_db_type(),
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            user: default_db_user(),
            password: String::new(),
            url: None,
        }
    }
}

impl DatabaseConfig {
    /// Generate database connection URL
    pub fn connection_url(&self) -> String {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return url.to_string();
        }
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.db_type, self.user, self.password, self.host, self.port, self.name
        )
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// `DATABASE_URL` replaces whatever connection settings the file carried.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.database.url = Some(url);
            }
        }
        self
    }
}
