//! The queryable symbol table of one enumeration.
//!
//! Built once from names and values, then read-only. Names are kept in
//! declaration order inside a [`StringBlock`]; every index structure refers to
//! names by their slot in that block instead of owning copies.
//!
//! - value → name: a [`Table`] from value to slot (dense or sparse)
//! - name → value: slots sorted by name, binary-searched
//! - lowercase name → value: slots sorted by lowercased name
//!
//! When a value or a name is declared more than once, the first declaration
//! is the one every lookup returns.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::marker::PhantomData;

use crate::Result;
use crate::declare::{Declaration, assign_values};
use crate::fuzzy::FuzzyMatcher;
use crate::prefix::find_longest_prefix;
use crate::string_block::{StringBlock, Terminator, split_names};
use crate::table::{IndexKey, Representation, SparseTable, Table, TablePolicy};

/// Construction-time options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolTableConfig {
    /// Write a `\0` after each name in the string blocks.
    pub null_terminated: bool,
    /// Default case handling of [`SymbolTable::value_of`].
    pub ignore_case: bool,
    /// Representation of the value → name table.
    pub policy: TablePolicy,
}

impl SymbolTableConfig {
    fn terminator(&self) -> Terminator {
        if self.null_terminated {
            Terminator::Nul
        } else {
            Terminator::None
        }
    }
}

#[derive(Debug, Clone)]
pub struct SymbolTableBuilder<V> {
    type_name: String,
    qualified_type_name: Option<String>,
    config: SymbolTableConfig,
    _value: PhantomData<V>,
}

impl<V: IndexKey> SymbolTableBuilder<V> {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            qualified_type_name: None,
            config: SymbolTableConfig::default(),
            _value: PhantomData,
        }
    }

    /// Fully qualified type name, e.g. `app::palette::Color`.
    pub fn with_qualified_name(mut self, name: impl Into<String>) -> Self {
        self.qualified_type_name = Some(name.into());
        self
    }

    pub fn with_null_terminators(mut self, enabled: bool) -> Self {
        self.config.null_terminated = enabled;
        self
    }

    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.config.ignore_case = enabled;
        self
    }

    pub fn with_policy(mut self, policy: TablePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn with_config(mut self, config: SymbolTableConfig) -> Self {
        self.config = config;
        self
    }

    /// Build from comma-delimited declaration text and the matching values.
    ///
    /// Each piece is trimmed to its name, so `"Red = 0xff0000, Green"` works.
    pub fn from_source(self, source: &str, values: &[V]) -> Result<SymbolTable<V>> {
        let names = split_names(source, values.len())?;
        Ok(self.build(&names, values.to_vec()))
    }

    pub fn from_pairs<I, S>(self, pairs: I) -> Result<SymbolTable<V>>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        let (names, values): (Vec<S>, Vec<V>) = pairs.into_iter().unzip();
        Ok(self.build(&names, values))
    }

    /// Build from a declaration manifest, assigning implicit values.
    pub fn from_declarations(self, decls: &[Declaration]) -> Result<SymbolTable<V>> {
        let pairs = assign_values::<V>(decls)?;
        self.from_pairs(pairs)
    }

    fn build<S: AsRef<str>>(self, names: &[S], values: Vec<V>) -> SymbolTable<V> {
        let terminator = self.config.terminator();
        let names = StringBlock::from_names(names, terminator);
        let lowercase_names = names.to_ascii_lowercase();

        let slots: Vec<u32> = (0..names.len() as u32).collect();
        let value_to_name = Table::with_policy(&values, &slots, u32::MAX, self.config.policy);
        let name_to_value = SparseTable::new_by(&slots, &values, V::ZERO, by_name(&names));
        let lowercase_to_value =
            SparseTable::new_by(&slots, &values, V::ZERO, by_name(&lowercase_names));

        let matcher = FuzzyMatcher::for_names(names.iter());
        let max_name_length = names.max_len();
        let qualified_type_name = self
            .qualified_type_name
            .unwrap_or_else(|| self.type_name.clone());

        tracing::debug!(
            type_name = %self.type_name,
            entries = names.len(),
            distinct_values = value_to_name.len(),
            representation = ?value_to_name.representation(),
            fuzzy_max_length = matcher.max_length(),
            "built symbol table"
        );

        SymbolTable {
            names,
            lowercase_names,
            values: values.into_boxed_slice(),
            value_to_name,
            name_to_value,
            lowercase_to_value,
            matcher,
            max_name_length,
            type_name: self.type_name.into_boxed_str(),
            qualified_type_name: qualified_type_name.into_boxed_str(),
            config: self.config,
        }
    }
}

/// Orders block slots by the names they point at.
fn by_name(block: &StringBlock) -> impl Fn(&u32, &u32) -> Ordering + '_ {
    move |a: &u32, b: &u32| block[*a as usize].cmp(&block[*b as usize])
}

/// Bidirectional name/value lookup for one enumeration.
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    names: StringBlock,
    lowercase_names: StringBlock,
    values: Box<[V]>,
    value_to_name: Table<V, u32>,
    name_to_value: SparseTable<u32, V>,
    lowercase_to_value: SparseTable<u32, V>,
    matcher: FuzzyMatcher,
    max_name_length: usize,
    type_name: Box<str>,
    qualified_type_name: Box<str>,
    config: SymbolTableConfig,
}

impl<V: IndexKey> SymbolTable<V> {
    pub fn builder(type_name: impl Into<String>) -> SymbolTableBuilder<V> {
        SymbolTableBuilder::new(type_name)
    }

    /// Number of declarations, duplicates included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names in declaration order.
    pub fn names(&self) -> &StringBlock {
        &self.names
    }

    pub fn lowercase_names(&self) -> &StringBlock {
        &self.lowercase_names
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> + '_ {
        self.names.iter().zip(self.values.iter().copied())
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index)
    }

    pub fn value_at(&self, index: usize) -> Option<V> {
        self.values.get(index).copied()
    }

    /// Declaration index of the first name declared with `value`.
    pub fn index_of_value(&self, value: V) -> Option<usize> {
        self.value_to_name.get(value).map(|&slot| slot as usize)
    }

    pub fn contains(&self, value: V) -> bool {
        self.value_to_name.contains(value)
    }

    pub fn name_of(&self, value: V) -> Option<&str> {
        self.index_of_value(value).map(|slot| &self.names[slot])
    }

    /// Name for `value`, taken from the lowercase copy when `use_lowercase` is set.
    pub fn name_of_with(&self, value: V, use_lowercase: bool) -> Option<&str> {
        let names = if use_lowercase {
            &self.lowercase_names
        } else {
            &self.names
        };
        self.index_of_value(value).map(|slot| &names[slot])
    }

    pub fn name_of_or<'a>(&'a self, value: V, fallback: &'a str) -> &'a str {
        self.name_of(value).unwrap_or(fallback)
    }

    /// Value for `name` using the configured case handling.
    pub fn value_of(&self, name: &str) -> Option<V> {
        self.value_of_with(name, self.config.ignore_case)
    }

    /// Value for `name`. With `ignore_case`, ASCII letters match regardless
    /// of case; names longer than every declared name are rejected up front.
    pub fn value_of_with(&self, name: &str, ignore_case: bool) -> Option<V> {
        let entry = if ignore_case {
            if name.len() > self.max_name_length {
                return None;
            }
            self.lowercase_to_value.find_by(|&slot| {
                let candidate = self.lowercase_names[slot as usize].bytes();
                candidate.cmp(name.bytes().map(|b| b.to_ascii_lowercase()))
            })
        } else {
            self.name_to_value
                .find_by(|&slot| self.names[slot as usize].cmp(name))
        };
        entry.map(|e| e.value)
    }

    pub fn value_of_or(&self, name: &str, fallback: V) -> V {
        self.value_of(name).unwrap_or(fallback)
    }

    /// Declaration index of the name closest to `query`, compared without
    /// regard to ASCII case. `None` only for an empty table.
    pub fn find_fuzzy(&self, query: &str) -> Option<usize> {
        self.find_fuzzy_with(query, true)
    }

    pub fn find_fuzzy_with(&self, query: &str, use_lowercase: bool) -> Option<usize> {
        if use_lowercase {
            self.matcher
                .find_caseless(self.lowercase_names.iter(), query)
        } else {
            self.matcher.find(self.names.iter(), query)
        }
    }

    /// Value of the longest declared name that starts `input`, and the number
    /// of bytes it covers.
    pub fn parse_prefix(&self, input: &str) -> Option<(V, usize)> {
        let entry = find_longest_prefix(self.name_to_value.entries(), input, |e| {
            &self.names[e.key as usize]
        })?;
        Some((entry.value, self.names[entry.key as usize].len()))
    }

    /// Every sorted index is strictly increasing under its own order.
    pub fn validate_map(&self) -> bool {
        self.value_to_name.validate_map()
            && self.name_to_value.validate_map_by(by_name(&self.names))
            && self
                .lowercase_to_value
                .validate_map_by(by_name(&self.lowercase_names))
    }

    /// Representation picked for value → name lookup.
    pub fn representation(&self) -> Representation {
        self.value_to_name.representation()
    }

    pub fn min_value(&self) -> Option<V> {
        self.values.iter().min().copied()
    }

    pub fn max_value(&self) -> Option<V> {
        self.values.iter().max().copied()
    }

    /// Length in bytes of the longest name.
    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    pub fn fuzzy_max_length(&self) -> usize {
        self.matcher.max_length()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn qualified_type_name(&self) -> &str {
        &self.qualified_type_name
    }

    pub fn config(&self) -> &SymbolTableConfig {
        &self.config
    }

    /// Fingerprint of the name block.
    pub fn fingerprint(&self) -> u64 {
        self.names.fingerprint()
    }

    /// Human-readable listing of the table, one declaration per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({} entries, {:?})",
            self.qualified_type_name,
            self.len(),
            self.representation()
        );

        let width = self.max_name_length;
        for (index, (name, value)) in self.iter().enumerate() {
            let shadowed = if self.index_of_value(value) == Some(index) {
                ""
            } else {
                "  (shadowed)"
            };
            let _ = writeln!(out, "  {name:<width$} = {value:?}{shadowed}");
        }
        out
    }
}
