use std::fmt;

use crate::Enumeration;

/// How much of the type path to print in front of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// `Red`
    #[default]
    Name,
    /// `Color::Red`
    Qualified,
    /// `palette::Color::Red`
    Full,
}

/// Formats a value by its declared name.
///
/// Values without a name print as the type name followed by the raw value,
/// e.g. `Color(-1)`. Width, fill and alignment flags apply to the whole text.
pub struct NameDisplay<E: Enumeration> {
    repr: E::Repr,
    style: NameStyle,
}

impl<E: Enumeration> NameDisplay<E> {
    pub fn new(repr: E::Repr, style: NameStyle) -> Self {
        Self { repr, style }
    }

    /// Display for a raw discriminant that may not belong to any variant.
    pub fn from_repr(repr: E::Repr) -> Self {
        Self::new(repr, NameStyle::Name)
    }

    pub fn style(self, style: NameStyle) -> Self {
        Self { style, ..self }
    }

    pub fn qualified(self) -> Self {
        self.style(NameStyle::Qualified)
    }

    pub fn full(self) -> Self {
        self.style(NameStyle::Full)
    }
}

impl<E: Enumeration> fmt::Display for NameDisplay<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = E::symbol_table().name_of(self.repr);
        let text = match (self.style, name) {
            (NameStyle::Name, Some(name)) => return f.pad(name),
            (NameStyle::Qualified, Some(name)) => format!("{}::{name}", E::TYPE_NAME),
            (NameStyle::Full, Some(name)) => format!("{}::{name}", E::QUALIFIED_TYPE_NAME),
            (NameStyle::Name | NameStyle::Qualified, None) => {
                format!("{}({:?})", E::TYPE_NAME, self.repr)
            }
            (NameStyle::Full, None) => format!("{}({:?})", E::QUALIFIED_TYPE_NAME, self.repr),
        };
        f.pad(&text)
    }
}

impl<E: Enumeration> fmt::Debug for NameDisplay<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameDisplay")
            .field("repr", &self.repr)
            .field("style", &self.style)
            .finish()
    }
}

impl<E: Enumeration> Clone for NameDisplay<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Enumeration> Copy for NameDisplay<E> {}
