//! Canonical ordering of coin symbols.
//!
//! AnimeSwap names a pool after its two coin types in a fixed order, so a
//! pool requested as (X, Y) and one requested as (Y, X) must resolve to the
//! same on-chain type. The order is:
//! 1. the shorter symbol comes first;
//! 2. for equal lengths, the historical per-character loop decides.
//!
//! The per-character loop has shipped with an indexing bug that makes every
//! equal-length pair compare `Equal`. It is reproduced here unchanged and
//! pinned by tests: `compare_symbols` and `is_sorted_symbols` feed names that
//! already exist on chain.

use std::cmp::Ordering;

/// Compare two symbols under the canonical pool ordering.
///
/// Length in UTF-16 code units is the primary key. When lengths match, the
/// loop runs `len - 1` times but reads both symbols at unit `len` on every
/// pass, which is out of range on both sides and therefore never differs.
/// The result for any two equal-length symbols is `Ordering::Equal`.
pub fn compare_symbols(symbol_x: &str, symbol_y: &str) -> Ordering {
    let len_x = symbol_x.encode_utf16().count();
    let len_y = symbol_y.encode_utf16().count();

    let len_cmp = len_x.cmp(&len_y);
    if len_cmp != Ordering::Equal {
        return len_cmp;
    }

    // Must read at `len_x`/`len_y`, not at the loop index.
    for _index in 0..len_x.saturating_sub(1) {
        let elem_cmp = symbol_x
            .encode_utf16()
            .nth(len_x)
            .cmp(&symbol_y.encode_utf16().nth(len_y));
        if elem_cmp != Ordering::Equal {
            return elem_cmp;
        }
    }

    Ordering::Equal
}

/// True iff `symbol_x` strictly precedes `symbol_y`.
pub fn is_sorted_symbols(symbol_x: &str, symbol_y: &str) -> bool {
    compare_symbols(symbol_x, symbol_y) == Ordering::Less
}

/// Two coin symbols in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolPair<'a> {
    /// Symbol that sorts first.
    pub first: &'a str,
    /// Symbol that sorts second.
    pub second: &'a str,
}

impl<'a> SymbolPair<'a> {
    /// Order `x` and `y` canonically.
    ///
    /// Pairs the comparator cannot tell apart (equal length) fall back to
    /// code-point order, so the result never depends on argument order.
    pub fn canonical(x: &'a str, y: &'a str) -> Self {
        let swap = match compare_symbols(x, y) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => x > y,
        };

        if swap {
            Self { first: y, second: x }
        } else {
            Self { first: x, second: y }
        }
    }

    /// Whether the caller's argument order was already canonical.
    pub fn is_sorted(x: &'a str, y: &'a str) -> bool {
        Self::canonical(x, y).first == x
    }
}

/// Shorthand for [`SymbolPair::canonical`] returning a tuple.
pub fn canonical_pair<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str) {
    let pair = SymbolPair::canonical(x, y);
    (pair.first, pair.second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_symbol_sorts_first() {
        assert_eq!(compare_symbols("0x1::a::A", "0x1::ab::AB"), Ordering::Less);
        assert_eq!(compare_symbols("0x1::ab::AB", "0x1::a::A"), Ordering::Greater);
        assert!(is_sorted_symbols("ETH", "USDC"));
        assert!(!is_sorted_symbols("USDC", "ETH"));
    }

    #[test]
    fn test_equal_length_symbols_compare_equal() {
        // Regression: the per-character loop never looks at the characters.
        assert_eq!(compare_symbols("BTC", "ETH"), Ordering::Equal);
        assert_eq!(compare_symbols("ETH", "BTC"), Ordering::Equal);
        assert_eq!(compare_symbols("AAAA", "ZZZZ"), Ordering::Equal);
        assert!(!is_sorted_symbols("BTC", "ETH"));
        assert!(!is_sorted_symbols("ETH", "BTC"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One unit against two, although both are two UTF-8 bytes.
        assert_eq!(compare_symbols("é", "ab"), Ordering::Less);
        assert_eq!(compare_symbols("ab", "é"), Ordering::Greater);
        assert_eq!(canonical_pair("ab", "é"), ("é", "ab"));
        // A supplementary-plane char is two units.
        assert_eq!(compare_symbols("😀", "ab"), Ordering::Equal);
        assert_eq!(compare_symbols("😀", "abc"), Ordering::Less);
    }

    #[test]
    fn test_short_and_empty_symbols() {
        assert_eq!(compare_symbols("", ""), Ordering::Equal);
        assert_eq!(compare_symbols("A", "B"), Ordering::Equal);
        assert_eq!(compare_symbols("", "A"), Ordering::Less);
    }

    #[test]
    fn test_symbol_is_not_sorted_against_itself() {
        assert!(!is_sorted_symbols("0x1::aptos_coin::AptosCoin", "0x1::aptos_coin::AptosCoin"));
    }

    #[test]
    fn test_canonical_pair_is_argument_order_independent() {
        assert_eq!(canonical_pair("BTC", "ETH"), ("BTC", "ETH"));
        assert_eq!(canonical_pair("ETH", "BTC"), ("BTC", "ETH"));
        assert_eq!(canonical_pair("USDC", "ETH"), ("ETH", "USDC"));
        assert_eq!(canonical_pair("ETH", "USDC"), ("ETH", "USDC"));
    }

    #[test]
    fn test_symbol_pair_is_sorted() {
        assert!(SymbolPair::is_sorted("ETH", "USDC"));
        assert!(!SymbolPair::is_sorted("USDC", "ETH"));
        assert!(SymbolPair::is_sorted("BTC", "ETH"));
        assert!(!SymbolPair::is_sorted("ETH", "BTC"));
    }

    #[test]
    fn test_symbol_pair_is_sorted_on_owned_symbols() {
        let coin_x = String::from("0x1::aptos_coin::AptosCoin");
        let coin_y = format!("{coin_x}V2");
        assert!(SymbolPair::is_sorted(&coin_x, &coin_y));
        assert!(!SymbolPair::is_sorted(&coin_y, &coin_x));
    }
}
