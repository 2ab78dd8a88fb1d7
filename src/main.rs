//! Aptos Type Naming — Command Line Entry Point
//!
//! Wiring sequence:
//! 1. Parse arguments
//! 2. Load config.toml + validate
//! 3. Init tracing (plain or JSON, `RUST_LOG` overrides the config level)
//! 4. Run the requested subcommand, printing results to stdout
//!
//! Logs go to stderr so stdout carries only results.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aptos_type_naming::config::{self, AppConfig};
use aptos_type_naming::domain::{
    SymbolPair, ValidationOptions, compose_lp, compose_lp_coin, compose_swap_pool_data,
    extract_address_from_type, is_sorted_symbols, validate_type,
};
use aptos_type_naming::adapters::HexAddress;

#[derive(Parser, Debug)]
#[command(name = "aptos-type-naming", version)]
#[command(about = "Compose and validate Aptos pool type names", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate fully-qualified types
    Check {
        /// Types to validate
        #[arg(required = true)]
        types: Vec<String>,
        /// Accept addresses without the 0x prefix
        #[arg(long)]
        no_leading_zero: bool,
    },
    /// Print two coin types in canonical order
    Order { coin_x: String, coin_y: String },
    /// Print the LP coin type for a pair
    LpCoin { coin_x: String, coin_y: String },
    /// Print the liquidity pool type for a pair
    Pool { coin_x: String, coin_y: String },
    /// Print the pool admin data type
    Admin,
    /// Print the address of a type
    Address { type_str: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── 1. Load configuration ───────────────────────────────
    let config = config::loader::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command,
        "Starting"
    );

    // ── 3. Run the command ──────────────────────────────────
    let address = config.swap.address.as_str();
    match cli.command {
        Command::Check {
            types,
            no_leading_zero,
        } => {
            let options = if no_leading_zero {
                ValidationOptions {
                    leading_zero: false,
                }
            } else {
                config.validation
            };
            return Ok(run_check(&types, options));
        }
        Command::Order { coin_x, coin_y } => {
            let pair = SymbolPair::canonical(&coin_x, &coin_y);
            println!("{}", pair.first);
            println!("{}", pair.second);
            info!(
                comparator_sorted = is_sorted_symbols(&coin_x, &coin_y),
                input_canonical = SymbolPair::is_sorted(&coin_x, &coin_y),
                "Canonical order computed"
            );
        }
        Command::LpCoin { coin_x, coin_y } => {
            println!("{}", compose_lp_coin(address, &coin_x, &coin_y));
        }
        Command::Pool { coin_x, coin_y } => {
            println!("{}", compose_lp(address, &coin_x, &coin_y));
        }
        Command::Admin => {
            println!("{}", compose_swap_pool_data(address));
        }
        Command::Address { type_str } => {
            println!("{}", extract_address_from_type(&type_str));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `app.log_level` when set.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Validate each type, printing one verdict per line.
///
/// Fails the process if any type is invalid.
fn run_check(types: &[String], options: ValidationOptions) -> ExitCode {
    let mut invalid = 0usize;

    for type_str in types {
        match validate_type(type_str, options, &HexAddress) {
            Ok(()) => println!("valid\t{type_str}"),
            Err(reason) => {
                invalid += 1;
                println!("invalid\t{type_str}\t{reason}");
            }
        }
    }

    if invalid > 0 {
        warn!(invalid, total = types.len(), "Some types failed validation");
        ExitCode::FAILURE
    } else {
        info!(total = types.len(), "All types valid");
        ExitCode::SUCCESS
    }
}
