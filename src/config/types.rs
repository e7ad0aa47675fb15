//! Runtime settings for the server and the SQLite store.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// 100 KiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub database: DatabaseConfig,
    pub schema_init: SchemaInitPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    /// When set, `purchases.user_id` must reference an existing user at write time.
    pub enforce_foreign_keys: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
            enforce_foreign_keys: false,
        }
    }
}

/// What startup does when the tables cannot be ensured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaInitPolicy {
    /// Abort startup.
    #[default]
    FailFast,
    /// Log and keep serving; requests will surface store errors.
    BestEffort,
}

impl std::str::FromStr for SchemaInitPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Ok(Self::FailFast),
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            _ => Err(()),
        }
    }
}
