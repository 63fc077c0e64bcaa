//! Daemon settings: an optional `hbnb.toml` layered under `HBNB_*`
//! environment variables.
//!
//! `HBNB_CONFIG` points at another file. A variable that is set but does not
//! parse is an error rather than being silently ignored.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use hbnb_domain::place_amenity::DetachPolicy;

const DEFAULT_PATH: &str = "hbnb.toml";
const DEFAULT_FILTER: &str = "hbnbd=info,hbnb_app=info,hbnb_adapter_http_axum=info,\
                              hbnb_adapter_storage_sqlite_sqlx=info,tower_http=debug";

/// Daemon settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub amenities: AmenitiesConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `SQLite` location and pool size.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    /// Ignored for in-memory databases, which always use one connection.
    pub max_connections: u32,
}

/// `tracing` filter directive, in `RUST_LOG` syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmenitiesConfig {
    /// Unlinking an amenity from a place also deletes the amenity.
    pub detach_deletes_amenity: bool,
}

impl Config {
    /// Read settings from the process environment and the file it names.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, when an
    /// environment variable holds an unparseable value, or when the merged
    /// settings are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    fn resolve<E>(env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let path = env("HBNB_CONFIG").unwrap_or_else(|| DEFAULT_PATH.to_string());
        let mut config = Self::read(Path::new(&path))?;
        config.overlay(&env)?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Ok(toml::from_str(&content)?)
    }

    fn overlay<E>(&mut self, env: &E) -> Result<(), ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = env("HBNB_BIND") {
            let (host, port) = bind
                .rsplit_once(':')
                .ok_or_else(|| ConfigError::env("HBNB_BIND", &bind))?;
            self.server.host = host.to_string();
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::env("HBNB_BIND", &bind))?;
        }
        if let Some(host) = env("HBNB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parsed(env, "HBNB_PORT")? {
            self.server.port = port;
        }
        if let Some(url) = env("HBNB_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = parsed(env, "HBNB_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Some(filter) = env("RUST_LOG").or_else(|| env("HBNB_LOG")) {
            self.logging.filter = filter;
        }
        if let Some(raw) = env("HBNB_DETACH_DELETES_AMENITY") {
            self.amenities.detach_deletes_amenity = parse_flag(&raw)
                .ok_or_else(|| ConfigError::env("HBNB_DETACH_DELETES_AMENITY", &raw))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn detach_policy(&self) -> DetachPolicy {
        if self.amenities.detach_deletes_amenity {
            DetachPolicy::DeleteAmenity
        } else {
            DetachPolicy::EdgeOnly
        }
    }
}

fn parsed<E, T>(env: &E, key: &'static str) -> Result<Option<T>, ConfigError>
where
    E: Fn(&str) -> Option<String>,
    T: FromStr,
{
    env(key)
        .map(|raw| raw.trim().parse().map_err(|_| ConfigError::env(key, &raw)))
        .transpose()
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hbnb.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid value for {key}: {value:?}")]
    Env { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    fn env(key: &'static str, value: &str) -> Self {
        Self::Env {
            key,
            value: value.to_string(),
        }
    }
}
