//! Load server settings from environment variables.

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl ServerConfig {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to honour a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            busy_timeout: Duration::from_millis(parse_or(
                &lookup,
                "DATABASE_BUSY_TIMEOUT_MS",
                DEFAULT_BUSY_TIMEOUT_MS,
            )?),
            enforce_foreign_keys: parse_bool_or(&lookup, "ENFORCE_FOREIGN_KEYS", defaults.enforce_foreign_keys)?,
        };
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;
        let schema_init = match lookup("SCHEMA_INIT_POLICY") {
            None => SchemaInitPolicy::default(),
            Some(v) => SchemaInitPolicy::from_str(&v).map_err(|_| ConfigError::InvalidValue {
                key: "SCHEMA_INIT_POLICY",
                value: v.clone(),
            })?,
        };
        Ok(Self {
            bind_addr,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            database,
            schema_init,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse() {
            Ok(v) => Ok(v),
            Err(_) => Err(ConfigError::InvalidValue { key, value: raw }),
        },
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let normalized = raw.trim().to_ascii_lowercase();
            match normalized.as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue { key, value: raw }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(cfg.database, DatabaseConfig::default());
        assert_eq!(cfg.schema_init, SchemaInitPolicy::FailFast);
    }

    #[test]
    fn reads_every_key() {
        let cfg = config_from(&[
            ("DATABASE_URL", "sqlite://shop.db"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("DATABASE_BUSY_TIMEOUT_MS", "250"),
            ("ENFORCE_FOREIGN_KEYS", "true"),
            ("SCHEMA_INIT_POLICY", "best_effort"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("MAX_BODY_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.database.url, "sqlite://shop.db");
        assert_eq!(cfg.database.max_connections, 2);
        assert_eq!(cfg.database.busy_timeout, Duration::from_millis(250));
        assert!(cfg.database.enforce_foreign_keys);
        assert_eq!(cfg.schema_init, SchemaInitPolicy::BestEffort);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_body_bytes, 1024);
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = config_from(&[("DATABASE_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DATABASE_MAX_CONNECTIONS", .. }));

        let err = config_from(&[("SCHEMA_INIT_POLICY", "sometimes")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "SCHEMA_INIT_POLICY", .. }));

        let err = config_from(&[("ENFORCE_FOREIGN_KEYS", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "ENFORCE_FOREIGN_KEYS", .. }));
    }
}
