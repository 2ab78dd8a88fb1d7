//! Hex Address Adapter - Default Account Address Rules
//!
//! Aptos account addresses are up to 32 bytes written as hex, usually
//! `0x`-prefixed and often shortened by dropping leading zeros
//! (`0x1` is `0x000...001`).
//!
//! With `leading_zero` set the `0x` prefix is mandatory, otherwise it is
//! optional. Either way at least one and at most 64 hex digits must follow.

use crate::domain::validator::ValidationOptions;
use crate::ports::address::AddressPredicate;

/// Maximum number of hex digits in an address (32 bytes).
pub const MAX_ADDRESS_DIGITS: usize = 64;

/// Hex address predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexAddress;

impl HexAddress {
    /// Hex digits of `address`, or `None` if it is malformed under `options`.
    fn digits(address: &str, options: ValidationOptions) -> Option<&str> {
        let digits = match address.strip_prefix("0x") {
            Some(digits) => digits,
            None if options.leading_zero => return None,
            None => address,
        };

        let well_formed = !digits.is_empty()
            && digits.len() <= MAX_ADDRESS_DIGITS
            && digits.bytes().all(|b| b.is_ascii_hexdigit());
        well_formed.then_some(digits)
    }
}

impl AddressPredicate for HexAddress {
    fn is_valid_address(&self, address: &str, options: ValidationOptions) -> bool {
        Self::digits(address, options).is_some()
    }
}

/// Expand an address to its full `0x`-prefixed, 64-digit lower-case form.
///
/// The prefix is optional on input. Returns `None` for malformed addresses.
pub fn normalize_address(address: &str) -> Option<String> {
    let digits = HexAddress::digits(address, ValidationOptions { leading_zero: false })?;
    Some(format!(
        "0x{:0>width$}",
        digits.to_ascii_lowercase(),
        width = MAX_ADDRESS_DIGITS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: ValidationOptions = ValidationOptions { leading_zero: true };
    const RELAXED: ValidationOptions = ValidationOptions { leading_zero: false };

    #[test]
    fn test_prefixed_short_and_full_addresses() {
        assert!(HexAddress.is_valid_address("0x1", STRICT));
        assert!(HexAddress.is_valid_address("0xAB", STRICT));
        assert!(HexAddress.is_valid_address(&format!("0x{}", "f".repeat(64)), STRICT));
    }

    #[test]
    fn test_prefix_required_with_leading_zero() {
        assert!(!HexAddress.is_valid_address("1", STRICT));
        assert!(HexAddress.is_valid_address("1", RELAXED));
        assert!(HexAddress.is_valid_address("0x1", RELAXED));
    }

    #[test]
    fn test_rejects_malformed_digits() {
        assert!(!HexAddress.is_valid_address("0x", STRICT));
        assert!(!HexAddress.is_valid_address("", RELAXED));
        assert!(!HexAddress.is_valid_address("0xg1", STRICT));
        assert!(!HexAddress.is_valid_address("0X1", STRICT));
        assert!(!HexAddress.is_valid_address(&format!("0x{}", "1".repeat(65)), STRICT));
    }

    #[test]
    fn test_normalize_address() {
        let expected = format!("0x{}1", "0".repeat(63));
        assert_eq!(normalize_address("0x1").as_deref(), Some(expected.as_str()));
        assert_eq!(normalize_address("1").as_deref(), Some(expected.as_str()));
        assert_eq!(
            normalize_address("0xAB"),
            Some(format!("0x{}ab", "0".repeat(62)))
        );
        assert_eq!(normalize_address("0xnope"), None);
    }
}
