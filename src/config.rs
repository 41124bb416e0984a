//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `STORAGE` - `memory` or `sqlite` (default: `memory`)
//! - `DATABASE_URL` - SQLite URL used when `STORAGE=sqlite` (default: `sqlite::memory:`)
//! - `DB_MAX_CONNECTIONS` - Pool size for file databases (default: 5)
//! - `SLUG_LENGTH` - Characters per slug (default: 5, range 1-32)
//! - `SLUG_GENERATOR` - `random` or `os` (default: `random`)
//! - `SLUG_MAX_ATTEMPTS` - Collision retries per create (default: 10, range 1-100)
//! - `MAX_BODY_BYTES` - Request body limit (default: 4096)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::application::services::DEFAULT_MAX_SLUG_ATTEMPTS;
use crate::state::DEFAULT_MAX_BODY_BYTES;
use crate::utils::slug_generator::DEFAULT_SLUG_LENGTH;

/// Where links are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map, reset on restart.
    Memory,
    /// SQLite database at `DATABASE_URL`.
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("STORAGE must be 'memory' or 'sqlite', got '{}'", other),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Which randomness source slugs are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugSource {
    /// Thread-local RNG.
    Random,
    /// Operating system entropy.
    Os,
}

impl FromStr for SlugSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "os" => Ok(Self::Os),
            other => anyhow::bail!("SLUG_GENERATOR must be 'random' or 'os', got '{}'", other),
        }
    }
}

impl fmt::Display for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Os => f.write_str("os"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage: StorageBackend,
    pub database_url: String,
    pub db_max_connections: u32,
    pub slug_length: usize,
    pub slug_source: SlugSource,
    /// How many slugs a single create request may try before failing.
    pub slug_max_attempts: usize,
    /// Upper bound on request body size; larger bodies are rejected with 400.
    pub max_body_bytes: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            storage: StorageBackend::Memory,
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 5,
            slug_length: DEFAULT_SLUG_LENGTH,
            slug_source: SlugSource::Random,
            slug_max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let storage = match env::var("STORAGE") {
            Ok(v) => v.parse::<StorageBackend>().context("Invalid STORAGE")?,
            Err(_) => defaults.storage,
        };

        let slug_source = match env::var("SLUG_GENERATOR") {
            Ok(v) => v.parse::<SlugSource>().context("Invalid SLUG_GENERATOR")?,
            Err(_) => defaults.slug_source,
        };

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            storage,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            slug_length: parse_var("SLUG_LENGTH", defaults.slug_length)?,
            slug_source,
            slug_max_attempts: parse_var("SLUG_MAX_ATTEMPTS", defaults.slug_max_attempts)?,
            max_body_bytes: parse_var("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL while `storage` is `sqlite`
    /// - `slug_length`, `slug_max_attempts` or `max_body_bytes` is out of range
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage == StorageBackend::Sqlite && !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.slug_length == 0 || self.slug_length > 32 {
            anyhow::bail!(
                "SLUG_LENGTH must be between 1 and 32, got {}",
                self.slug_length
            );
        }

        if self.slug_max_attempts == 0 || self.slug_max_attempts > 100 {
            anyhow::bail!(
                "SLUG_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.slug_max_attempts
            );
        }

        if self.max_body_bytes < 64 || self.max_body_bytes > 1_048_576 {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between 64 and 1048576, got {}",
                self.max_body_bytes
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage);
        if self.storage == StorageBackend::Sqlite {
            tracing::info!("  Database: {}", self.database_url);
        }
        tracing::info!(
            "  Slugs: {} chars, {} source, {} attempts",
            self.slug_length,
            self.slug_source,
            self.slug_max_attempts
        );
        tracing::info!("  Max body: {} bytes", self.max_body_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, v)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
