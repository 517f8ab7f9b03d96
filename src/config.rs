use chrono::{Duration, Utc};
use std::env;
use std::fmt;

const DEFAULT_GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const DEFAULT_PUBLISHER_SEARCH_URL: &str = "https://www.mann-ivanov-ferber.ru/book/search.ajax";

/// Error raised when the process configuration is missing or malformed.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    Missing(&'static str),
    /// A variable is set but cannot be parsed.
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings used to sign and verify JWTs. Registered as app data.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub ttl_seconds: i64,
}

/// Endpoints and timeout for the external book catalogs.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub google_books_url: String,
    pub publisher_search_url: String,
    pub timeout_seconds: u64,
}

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_port: u16,
    pub server_host: String,
    pub jwt: JwtSettings,
    pub catalog: CatalogSettings,
}

impl Config {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = lookup("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?;
                let port = parse_or(&lookup, "DB_PORT", 5432u16)?;
                let name = lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let pass = lookup("DB_PASS").unwrap_or_default();
                format!("postgres://{}:{}@{}:{}/{}", user, pass, host, port, name)
            }
        };

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt_ttl_seconds: i64 = parse_or(&lookup, "JWT_TTL_SECONDS", 60 * 60)?;
        if !is_usable_ttl(jwt_ttl_seconds) {
            return Err(ConfigError::Invalid {
                key: "JWT_TTL_SECONDS",
                value: jwt_ttl_seconds.to_string(),
            });
        }

        Ok(Self {
            database_url,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            server_port: parse_or(&lookup, "SERVER_PORT", 8080)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            jwt: JwtSettings {
                secret: jwt_secret,
                ttl_seconds: jwt_ttl_seconds,
            },
            catalog: CatalogSettings {
                google_books_url: lookup("GOOGLE_BOOKS_URL")
                    .unwrap_or_else(|| DEFAULT_GOOGLE_BOOKS_URL.to_string()),
                publisher_search_url: lookup("PUBLISHER_SEARCH_URL")
                    .unwrap_or_else(|| DEFAULT_PUBLISHER_SEARCH_URL.to_string()),
                timeout_seconds: parse_or(&lookup, "CATALOG_TIMEOUT_SECONDS", 10)?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

// Tokens must expire in the future, at an instant chrono can represent.
fn is_usable_ttl(ttl_seconds: i64) -> bool {
    ttl_seconds > 0
        && Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some()
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://test"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://test");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_url(), "http://127.0.0.1:8080");
        assert_eq!(config.jwt.ttl_seconds, 3600);
        assert_eq!(config.catalog.google_books_url, DEFAULT_GOOGLE_BOOKS_URL);
        assert_eq!(config.catalog.publisher_search_url, DEFAULT_PUBLISHER_SEARCH_URL);
        assert_eq!(config.catalog.timeout_seconds, 10);
    }

    #[test]
    fn test_config_custom_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://test"),
            ("JWT_SECRET", "secret"),
            ("SERVER_PORT", "3000"),
            ("SERVER_HOST", "0.0.0.0"),
            ("JWT_TTL_SECONDS", "120"),
            ("CATALOG_TIMEOUT_SECONDS", "2"),
            ("GOOGLE_BOOKS_URL", "http://localhost:9000/volumes"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.jwt.ttl_seconds, 120);
        assert_eq!(config.catalog.timeout_seconds, 2);
        assert_eq!(config.catalog.google_books_url, "http://localhost:9000/volumes");
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db"),
            ("DB_NAME", "library"),
            ("DB_USER", "reader"),
            ("DB_PASS", "pw"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://reader:pw@db:5432/library");
    }

    #[test]
    fn test_missing_jwt_secret() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://test")]));
        assert_eq!(result.err(), Some(ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn test_missing_database_settings() {
        let result = Config::from_lookup(lookup_from(&[("JWT_SECRET", "secret")]));
        assert_eq!(result.err(), Some(ConfigError::Missing("DB_HOST")));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://test"),
            ("JWT_SECRET", "secret"),
            ("SERVER_PORT", "eighty"),
        ]));
        assert_eq!(
            result.err(),
            Some(ConfigError::Invalid {
                key: "SERVER_PORT",
                value: "eighty".to_string()
            })
        );
    }

    #[test]
    fn test_unusable_jwt_ttl() {
        for ttl in ["-60", "0", "100000000000000000"] {
            let result = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://test"),
                ("JWT_SECRET", "secret"),
                ("JWT_TTL_SECONDS", ttl),
            ]));
            assert_eq!(
                result.err(),
                Some(ConfigError::Invalid {
                    key: "JWT_TTL_SECONDS",
                    value: ttl.to_string()
                }),
                "ttl {}",
                ttl
            );
        }
    }
}
