#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Build-once symbol tables for closed enumerations.
//!
//! A symbol table is constructed a single time from a list of names and values
//! and is read-only afterwards. It provides:
//! - value → name lookup through a [`Table`] (dense array or sorted array,
//!   chosen from the key spread)
//! - name → value lookup, case-sensitive and ASCII case-insensitive
//! - typo-tolerant lookup through a bounded Levenshtein [`FuzzyMatcher`]
//!
//! All names live in one [`StringBlock`]: a contiguous buffer plus an offset table.

pub mod declare;
pub mod fuzzy;
pub mod hash;
pub mod prefix;
pub mod sort_dedup;
pub mod string_block;
pub mod symbol_table;
pub mod table;

#[cfg(test)]
mod declare_tests;
#[cfg(test)]
mod sort_dedup_tests;

pub use declare::{Declaration, assign_values, parse_declarations};
pub use fuzzy::{FuzzyMatcher, caseless_levenshtein, fuzzy_search, levenshtein, next_pow2_minus_1};
pub use hash::{BlockWidth, BuildRollingHasher, MODULUS, RollingHash, RollingHasher};
pub use prefix::find_longest_prefix;
pub use sort_dedup::{sort_dedup, sort_dedup_by, sort_dedup_by_key};
pub use string_block::{StringBlock, Terminator};
pub use symbol_table::{SymbolTable, SymbolTableBuilder, SymbolTableConfig};
pub use table::{
    DenseTable, Entry, IndexKey, Lookup, Representation, SparseTable, Table, TablePolicy,
    select_representation,
};

/// Errors raised while constructing tables from declaration data.
///
/// Lookups never fail; a missing key is `None` or the caller's fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} names, source text holds {found}")]
    NameCountMismatch { expected: usize, found: usize },

    #[error("value {value} of `{name}` does not fit the key type")]
    ValueOutOfRange { name: String, value: i128 },

    #[error("string block is corrupt: {0}")]
    CorruptBlock(&'static str),

    #[error("string block fingerprint mismatch (stored {stored:#x}, computed {computed:#x})")]
    FingerprintMismatch { stored: u64, computed: u64 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),
}

/// Result type for table construction.
pub type Result<T> = std::result::Result<T, Error>;
