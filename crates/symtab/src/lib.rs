#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declare an enum once, get name and value lookup for free.
//!
//! ```ignore
//! use symtab::Enumeration;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
//! #[repr(i32)]
//! enum Color { Red, Orange, Yellow }
//!
//! assert_eq!(Color::Orange.name(), Some("Orange"));
//! assert_eq!(Color::from_name_ignore_case("yellow"), Some(Color::Yellow));
//! assert_eq!(Color::find_fuzzy("Oranege"), Some(Color::Orange));
//! assert_eq!(Color::Red.display().qualified().to_string(), "Color::Red");
//! ```

extern crate self as symtab;

mod display;
mod enumeration;

#[cfg(test)]
mod display_tests;

pub use display::{NameDisplay, NameStyle};
pub use enumeration::Enumeration;
pub use symtab_macros::Enumeration;

pub use symtab_core::*;
