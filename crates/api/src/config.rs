//! Environment-driven configuration.
//!
//! Every knob is an environment variable; unset variables fall back to
//! development defaults. `DATABASE_URL` wins over the individual
//! `DATABASE_*` parts so platform-provided connection strings work as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Optional override for the `GET /` redirect target.
    pub redirect_main: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub ssl: bool,
    /// Poll the database once a second at startup until it is reachable.
    pub conn_wait: bool,
    pub conn_pool: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Tests feed a map
    /// here instead of mutating the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parsed(&get, "SERVER_PORT", 8080)?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL"),
                host: get("DATABASE_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parsed(&get, "DATABASE_PORT", 5432)?,
                name: get("DATABASE_NAME").unwrap_or_else(|| "tinypay".to_string()),
                username: get("DATABASE_USERNAME").unwrap_or_else(|| "postgres".to_string()),
                password: get("DATABASE_PASSWORD").unwrap_or_default(),
                ssl: flag(&get, "DATABASE_SSL", false)?,
                conn_wait: flag(&get, "DATABASE_CONN_WAIT", false)?,
                conn_pool: parsed(&get, "DATABASE_CONN_POOL", 10)?,
            },
            redirect_main: get("REDIRECT_MAIN").filter(|v| !v.is_empty()),
        })
    }
}

impl DatabaseConfig {
    /// Connection string for sqlx. `DATABASE_URL` is passed through
    /// untouched when present.
    pub fn dsn(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        let sslmode = if self.ssl { "require" } else { "disable" };
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.username, self.password, self.host, self.port, self.name, sslmode,
        )
    }
}

fn parsed<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn flag(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match get(var).as_deref() {
        None => Ok(default),
        Some("1" | "t" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "false" | "FALSE" | "False") => Ok(false),
        Some(value) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.conn_pool, 10);
        assert!(!cfg.database.conn_wait);
        assert!(cfg.redirect_main.is_none());
        assert_eq!(
            cfg.database.dsn(),
            "postgres://postgres:@localhost:5432/tinypay?sslmode=disable"
        );
    }

    #[test]
    fn database_url_wins_over_parts() {
        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://u:p@db:6432/wallet"),
            ("DATABASE_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.dsn(), "postgres://u:p@db:6432/wallet");
    }

    #[test]
    fn ssl_flag_switches_sslmode() {
        let cfg = Config::from_lookup(lookup(&[("DATABASE_SSL", "true")])).unwrap();
        assert!(cfg.database.dsn().ends_with("sslmode=require"));
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "SERVER_PORT", .. }));
    }

    #[test]
    fn bad_bool_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("DATABASE_CONN_WAIT", "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "DATABASE_CONN_WAIT",
                ..
            }
        ));
    }

    #[test]
    fn empty_redirect_override_is_ignored() {
        let cfg = Config::from_lookup(lookup(&[("REDIRECT_MAIN", "")])).unwrap();
        assert!(cfg.redirect_main.is_none());
    }
}
