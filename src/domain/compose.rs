//! Fully-qualified type composition.
//!
//! Builds strings of the form `address::module::Struct<Generic,...>`.
//! Composition is purely generative: nothing is validated here, use
//! [`crate::domain::validator`] to check the result.

use std::fmt;

use tracing::trace;

use super::ordering::SymbolPair;

/// Module holding the LP coin struct.
pub const LP_TOKEN_MODULE: &str = "DemoLPTokenV1";
/// LP coin struct name.
pub const LP_TOKEN_STRUCT: &str = "LPToken";
/// Module holding the pool structs.
pub const POOL_MODULE: &str = "DemoAnimeSwapPoolV1";
/// Liquidity pool struct name.
pub const LIQUIDITY_POOL_STRUCT: &str = "LiquidityPool";
/// Pool admin data struct name.
pub const PAIR_ADMIN_STRUCT: &str = "PairAdmin";

/// Parts of a fully-qualified type.
///
/// Covers the three shapes in use: address with generics only,
/// address and struct, and address, module and struct. Empty parts are
/// dropped when the type is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSpec {
    /// Account address the module is published under.
    pub address: String,
    /// Module name.
    pub module: Option<String>,
    /// Struct name.
    pub name: Option<String>,
    /// Generic type arguments, rendered as `<a,b,...>`.
    pub generics: Vec<String>,
}

impl TypeSpec {
    /// Start a type at `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Set the module name.
    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Set the struct name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one generic argument.
    #[must_use]
    pub fn generic(mut self, generic: impl Into<String>) -> Self {
        self.generics.push(generic.into());
        self
    }

    /// Append several generic arguments.
    #[must_use]
    pub fn generics<I, S>(mut self, generics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generics.extend(generics.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = std::iter::once(self.address.as_str())
            .chain(self.module.as_deref())
            .chain(self.name.as_deref())
            .filter(|segment| !segment.is_empty());

        for (i, segment) in segments.enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(segment)?;
        }

        if !self.generics.is_empty() {
            write!(f, "<{}>", self.generics.join(","))?;
        }
        Ok(())
    }
}

/// Render a [`TypeSpec`] to its string form.
pub fn compose_type(spec: &TypeSpec) -> String {
    spec.to_string()
}

/// `address<generics>`.
pub fn compose_type_with_generics<S: AsRef<str>>(address: &str, generics: &[S]) -> String {
    compose_type(&TypeSpec::new(address).generics(generics.iter().map(|g| g.as_ref())))
}

/// `address::name<generics>`.
pub fn compose_type_struct<S: AsRef<str>>(address: &str, name: &str, generics: &[S]) -> String {
    compose_type(
        &TypeSpec::new(address)
            .name(name)
            .generics(generics.iter().map(|g| g.as_ref())),
    )
}

/// `address::module::name<generics>`.
pub fn compose_type_full<S: AsRef<str>>(
    address: &str,
    module: &str,
    name: &str,
    generics: &[S],
) -> String {
    compose_type(
        &TypeSpec::new(address)
            .module(module)
            .name(name)
            .generics(generics.iter().map(|g| g.as_ref())),
    )
}

/// LP coin type for a coin pair, coins in canonical order.
///
/// `address::DemoLPTokenV1::LPToken<CoinA,CoinB>`
pub fn compose_lp_coin(address: &str, coin_x: &str, coin_y: &str) -> String {
    let pair = SymbolPair::canonical(coin_x, coin_y);
    let lp_coin = compose_type_full(
        address,
        LP_TOKEN_MODULE,
        LP_TOKEN_STRUCT,
        &[pair.first, pair.second],
    );
    trace!(%lp_coin, "Composed LP coin type");
    lp_coin
}

/// Liquidity pool type for a coin pair, coins in canonical order.
///
/// `address::DemoAnimeSwapPoolV1::LiquidityPool<CoinA,CoinB,LPToken<CoinA,CoinB>>`
pub fn compose_lp(address: &str, coin_x: &str, coin_y: &str) -> String {
    let pair = SymbolPair::canonical(coin_x, coin_y);
    let lp_coin = compose_lp_coin(address, pair.first, pair.second);
    let pool = compose_type_full(
        address,
        POOL_MODULE,
        LIQUIDITY_POOL_STRUCT,
        &[pair.first, pair.second, lp_coin.as_str()],
    );
    trace!(%pool, "Composed liquidity pool type");
    pool
}

/// Pool admin data type: `address::DemoAnimeSwapPoolV1::PairAdmin`.
pub fn compose_swap_pool_data(address: &str) -> String {
    compose_type_full::<&str>(address, POOL_MODULE, PAIR_ADMIN_STRUCT, &[])
}

/// Leading address of a type: everything before the first `::`.
pub fn extract_address_from_type(type_str: &str) -> &str {
    type_str.split("::").next().unwrap_or(type_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USD: &str = "0x1::USD::USD";

    #[test]
    fn test_compose_struct_with_generics() {
        assert_eq!(compose_type_struct("0x1", "Coin", &[USD]), "0x1::Coin<0x1::USD::USD>");
    }

    #[test]
    fn test_compose_full_without_generics() {
        assert_eq!(compose_type_full::<&str>("0x1", "mod", "Struct", &[]), "0x1::mod::Struct");
    }

    #[test]
    fn test_compose_address_with_generics() {
        assert_eq!(
            compose_type_with_generics("0x1", &[USD, "0x2::a::B"]),
            "0x1<0x1::USD::USD,0x2::a::B>"
        );
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let spec = TypeSpec::new("0x1").module("").name("Struct");
        assert_eq!(compose_type(&spec), "0x1::Struct");

        let spec = TypeSpec::new("").module("mod").name("Struct");
        assert_eq!(compose_type(&spec), "mod::Struct");
    }

    #[test]
    fn test_empty_generics_add_no_brackets() {
        let spec = TypeSpec::new("0x1").module("m").name("S").generics(Vec::<String>::new());
        assert_eq!(spec.to_string(), "0x1::m::S");
    }

    #[test]
    fn test_compose_lp_coin_orders_by_length() {
        let lp = compose_lp_coin("0xA", "0x1::usdc::USDC", "0x1::eth::ETH");
        assert_eq!(lp, "0xA::DemoLPTokenV1::LPToken<0x1::eth::ETH,0x1::usdc::USDC>");
    }

    #[test]
    fn test_compose_lp_nests_lp_coin() {
        let pool = compose_lp("0xA", "BTC", "ETH");
        assert_eq!(
            pool,
            "0xA::DemoAnimeSwapPoolV1::LiquidityPool<BTC,ETH,0xA::DemoLPTokenV1::LPToken<BTC,ETH>>"
        );
    }

    #[test]
    fn test_compose_lp_is_argument_order_independent() {
        assert_eq!(compose_lp("0xA", "BTC", "ETH"), compose_lp("0xA", "ETH", "BTC"));
        assert_eq!(compose_lp("0xA", "USDC", "ETH"), compose_lp("0xA", "ETH", "USDC"));
        assert_eq!(compose_lp_coin("0xA", "BTC", "ETH"), compose_lp_coin("0xA", "ETH", "BTC"));
    }

    #[test]
    fn test_compose_swap_pool_data() {
        assert_eq!(compose_swap_pool_data("0xAB"), "0xAB::DemoAnimeSwapPoolV1::PairAdmin");
    }

    #[test]
    fn test_extract_address_from_type() {
        assert_eq!(extract_address_from_type("0x1::mod::Struct<0x2::a::b>"), "0x1");
        assert_eq!(extract_address_from_type("no_separator"), "no_separator");
        assert_eq!(extract_address_from_type(""), "");
    }
}
