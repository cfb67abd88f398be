//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://data.sqlite`)
//! - `STORAGE_BACKEND` - `sqlite` or `memory` (default: `sqlite`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Fixed short URL prefix; derived from the `Host` header when unset
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Characters per short code (default: 6, range: 1-10)
//! - `MAX_CODE_ATTEMPTS` - Candidate codes tried per request (default: 10, range: 1-1000)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::services::ShortenPolicy;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};

/// Where links are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORAGE_BACKEND must be 'sqlite' or 'memory', got '{other}'"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub listen_addr: String,
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    pub max_code_attempts: usize,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.sqlite".to_string());

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|v| v.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Sqlite);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL").ok().filter(|v| !v.trim().is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = parse_var("CODE_LENGTH")?.unwrap_or(DEFAULT_CODE_LENGTH);
        let max_code_attempts = parse_var("MAX_CODE_ATTEMPTS")?.unwrap_or(10);
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(5);

        Ok(Self {
            database_url,
            storage_backend,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            max_code_attempts,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 1000 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_code_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_backend == StorageBackend::Sqlite
            && !self.database_url.starts_with("sqlite:")
        {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if let Some(ref base_url) = self.base_url {
            let parsed = url::Url::parse(base_url)
                .with_context(|| format!("BASE_URL is not a valid URL: '{base_url}'"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("BASE_URL must use http or https, got '{base_url}'");
            }
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Code generation parameters for the shortening service.
    pub fn shorten_policy(&self) -> ShortenPolicy {
        ShortenPolicy {
            code_length: self.code_length,
            max_attempts: self.max_code_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.storage_backend {
            StorageBackend::Sqlite => tracing::info!("  Storage: sqlite ({})", self.database_url),
            StorageBackend::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }
        tracing::info!(
            "  Short codes: {} chars, {} attempts",
            self.code_length,
            self.max_code_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable, failing loudly on garbage.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
