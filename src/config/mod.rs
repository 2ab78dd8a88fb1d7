//! Configuration Module - TOML-based Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! The swap deployment address is externalized here - nothing in the
//! domain layer hardcodes an account address.

pub mod loader;

use serde::Deserialize;

use crate::domain::validator::ValidationOptions;

/// Top-level configuration.
///
/// Loaded from `config.toml` at startup and validated before any
/// command runs.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  pub app: AppSection,
  /// Swap deployment the type builders target.
  pub swap: SwapConfig,
  /// Defaults for type validation.
  #[serde(default)]
  pub validation: ValidationOptions,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name, used in log lines.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON log lines instead of plain text.
  #[serde(default)]
  pub json_logs: bool,
}

/// Swap deployment configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SwapConfig {
  /// Account address the LP token and pool modules are published under.
  pub address: String,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}
