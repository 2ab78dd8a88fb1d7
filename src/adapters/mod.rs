//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports`.
//!
//! Adapter categories:
//! - `hex`: hex account addresses (default `AddressPredicate`)

pub mod hex;

pub use hex::HexAddress;
