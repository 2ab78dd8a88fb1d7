//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::adapters::hex::HexAddress;
use crate::ports::address::AddressPredicate;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    name = %config.app.name,
    swap_address = %config.swap.address,
    leading_zero = config.validation.leading_zero,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML is malformed or validation fails.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty application name
/// - Swap address accepted under the configured validation options
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );

  anyhow::ensure!(
    HexAddress.is_valid_address(&config.swap.address, config.validation),
    "swap.address is not a valid account address: {:?} (leading_zero = {})",
    config.swap.address,
    config.validation.leading_zero
  );

  Ok(())
}
