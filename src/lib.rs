//! Aptos Type Naming — Library Root
//!
//! Canonical coin-pair ordering, fully-qualified type composition and
//! type validation for AnimeSwap-style pools.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::*;
