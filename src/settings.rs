use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_CONFIG_PATH: &str = "config/perguntas.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_connections: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub acquire_timeout_secs: u64,
    pub ssl_mode: SslMode,
}

// None of these verify the server certificate, managed databases hand out
// self-signed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    Prefer,
    Require,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

impl DatabaseSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        Ok(PgConnectOptions::from_str(self.url.expose_secret())?.ssl_mode(self.ssl_mode.into()))
    }
}

impl Settings {
    /// Reads `.env`, the optional TOML file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let vars: HashMap<String, String> = std::env::vars().collect();
        let path = vars
            .get("PERGUNTAS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::from_sources(&path, vars)
    }

    /// `PORT` and `DATABASE_URL` are read as-is; everything else uses the
    /// `PERGUNTAS__KEY` / `PERGUNTAS__SECTION__KEY` form. Shells export their
    /// own `HOST`, so the bind address is only taken from `PERGUNTAS__HOST`.
    pub fn from_sources(path: &Path, vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_secs", 5)?
            .set_default("database.ssl_mode", "prefer")?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("PERGUNTAS")
                    .prefix_separator("__")
                    .separator("__")
                    .source(Some(vars.clone().into_iter().collect())),
            )
            .set_override_option("port", vars.get("PORT").cloned())?
            .set_override_option("database.url", vars.get("DATABASE_URL").cloned())?
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
