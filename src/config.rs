//! Process configuration from the environment (and `.env` via dotenvy).

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_backend: DatabaseBackend,
    pub database_url: String,
    pub db_max_connections: u32,
    pub static_dir: PathBuf,
    pub body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse(&lookup, "PORT", "port number", 3000u16)?;
        let database_backend = match lookup("DATABASE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => DatabaseBackend::Postgres,
        };
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/croquetas".into());
        if database_backend == DatabaseBackend::Postgres
            && !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://"))
        {
            return Err(ConfigError::DatabaseUrl(database_url));
        }
        let db_max_connections = parse(&lookup, "DB_MAX_CONNECTIONS", "u32", 5u32)?;
        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| "public".into()));
        let body_limit = parse(&lookup, "BODY_LIMIT_BYTES", "byte count", DEFAULT_BODY_LIMIT)?;

        Ok(Self {
            host,
            port,
            database_backend,
            database_url,
            db_max_connections,
            static_dir,
            body_limit,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
