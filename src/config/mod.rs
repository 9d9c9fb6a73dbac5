use std::str::FromStr;

use dotenvy::dotenv;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Full connection URL. Takes precedence over the discrete `DB_*` settings.
    pub database_url: Option<String>,
    #[serde(default = "default_db_host")]
    pub db_host: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Config>()?)
    }

    /// Build a configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Connection options for the configured database
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::InvalidUrl);
        }

        let name = self
            .db_name
            .as_deref()
            .ok_or(ConfigError::MissingField { field: "DB_NAME" })?;
        let user = self
            .db_user
            .as_deref()
            .ok_or(ConfigError::MissingField { field: "DB_USER" })?;

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(name)
            .username(user);
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }

        Ok(options)
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config, ConfigError> {
    // .env is optional
    dotenv().ok();

    Config::load()
}
