// catalog_ingest/src/config.rs

use crate::bootstrap::RetryPolicy;
use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl LogFormat {
  /// Reads `LOG_FORMAT`. Called before the subscriber exists, so it reports
  /// bad values to the caller instead of logging them.
  pub fn from_env() -> Result<Self> {
    match env::var("LOG_FORMAT") {
      Ok(raw) => raw.parse(),
      Err(_) => Ok(LogFormat::Pretty),
    }
  }
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Unknown LOG_FORMAT '{}'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,

  /// How Store Bootstrap retries the first connection.
  pub store_retry: RetryPolicy,

  /// Request bodies above this size are refused before decoding.
  pub max_body_bytes: usize,
}

impl AppConfig {
  pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable lookup.
  pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| {
      lookup(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = parse_var(&lookup, "SERVER_PORT", 8080u16)?;
    let database_url = get_env("DATABASE_URL")?;
    let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;

    let defaults = RetryPolicy::default();
    let max_attempts = parse_var(&lookup, "DB_CONNECT_MAX_ATTEMPTS", defaults.max_attempts)?;
    if max_attempts == 0 {
      return Err(AppError::Config("DB_CONNECT_MAX_ATTEMPTS must be at least 1".to_string()));
    }
    let delay_secs = parse_var(&lookup, "DB_CONNECT_RETRY_DELAY_SECS", defaults.delay.as_secs())?;

    let max_body_bytes = parse_var(&lookup, "MAX_BODY_BYTES", Self::DEFAULT_MAX_BODY_BYTES)?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      store_retry: RetryPolicy {
        max_attempts,
        delay: Duration::from_secs(delay_secs),
      },
      max_body_bytes,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var_name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(var_name) {
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
    None => Ok(default),
  }
}
