//! Address Predicate Port - Account Address Format Rules
//!
//! The type validator does not define what a valid account address looks
//! like. It asks an `AddressPredicate`, forwarding the caller's
//! `ValidationOptions`. The default implementation is
//! `crate::adapters::hex::HexAddress`.

use crate::domain::validator::ValidationOptions;

/// Decides whether a string is a well-formed account address.
pub trait AddressPredicate: Send + Sync {
    /// Check `address` under `options`.
    fn is_valid_address(&self, address: &str, options: ValidationOptions) -> bool;
}

impl<F> AddressPredicate for F
where
    F: Fn(&str, ValidationOptions) -> bool + Send + Sync,
{
    fn is_valid_address(&self, address: &str, options: ValidationOptions) -> bool {
        self(address, options)
    }
}
