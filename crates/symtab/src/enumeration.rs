use symtab_core::{IndexKey, SymbolTable};

use crate::display::{NameDisplay, NameStyle};

/// A closed set of named values backed by a shared [`SymbolTable`].
///
/// Usually implemented with `#[derive(Enumeration)]`.
pub trait Enumeration: Copy + 'static {
    /// Integer type of the discriminants.
    type Repr: IndexKey;

    /// Bare type name, e.g. `Color`.
    const TYPE_NAME: &'static str;
    /// Type name with its module path, e.g. `app::palette::Color`.
    const QUALIFIED_TYPE_NAME: &'static str;
    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    fn to_repr(self) -> Self::Repr;

    /// The table for this type. Built on first call.
    fn symbol_table() -> &'static SymbolTable<Self::Repr>;

    fn name(self) -> Option<&'static str> {
        Self::symbol_table().name_of(self.to_repr())
    }

    /// ASCII-lowercased name, e.g. `indigo` for `Indigo`.
    fn lowercase_name(self) -> Option<&'static str> {
        Self::symbol_table().name_of_with(self.to_repr(), true)
    }

    /// Variant whose discriminant is `repr`.
    fn from_repr(repr: Self::Repr) -> Option<Self> {
        Self::symbol_table()
            .index_of_value(repr)
            .map(|index| Self::VARIANTS[index])
    }

    /// Variant named `name`, with the case handling chosen at declaration.
    fn from_name(name: &str) -> Option<Self> {
        Self::symbol_table().value_of(name).and_then(Self::from_repr)
    }

    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::symbol_table()
            .value_of_with(name, true)
            .and_then(Self::from_repr)
    }

    /// Variant whose name is closest to `query`, ignoring ASCII case.
    fn find_fuzzy(query: &str) -> Option<Self> {
        Self::symbol_table()
            .find_fuzzy(query)
            .map(|index| Self::VARIANTS[index])
    }

    /// Variant with the longest name that starts `input`, and the number of
    /// bytes the name covers.
    fn parse_prefix(input: &str) -> Option<(Self, usize)> {
        let (repr, len) = Self::symbol_table().parse_prefix(input)?;
        Some((Self::from_repr(repr)?, len))
    }

    fn display(self) -> NameDisplay<Self> {
        NameDisplay::new(self.to_repr(), NameStyle::Name)
    }
}
