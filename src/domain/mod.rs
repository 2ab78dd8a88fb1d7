//! Domain layer - Type naming and validation.
//!
//! Pure string functions over fully-qualified Move types
//! (`address::module::Struct<Generic,...>`). No I/O and no shared state;
//! every function is safe to call from any thread.

pub mod compose;
pub mod ordering;
pub mod validator;

// Re-export core API for convenience
pub use compose::{
    TypeSpec, compose_lp, compose_lp_coin, compose_swap_pool_data, compose_type,
    compose_type_full, compose_type_struct, compose_type_with_generics,
    extract_address_from_type,
};
pub use ordering::{SymbolPair, canonical_pair, compare_symbols, is_sorted_symbols};
pub use validator::{
    TypeError, ValidationOptions, check_aptos_type, check_aptos_type_with, validate_type,
};
