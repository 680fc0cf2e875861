//! Declaration manifests: names with optional explicit values.
//!
//! Values follow enumeration rules. A running counter starts at zero; an
//! explicit value replaces the counter, and every entry advances it by one.
//!
//! ```json
//! [{"name": "Red", "value": 16711680}, {"name": "Orange"}, {"name": "Yellow"}]
//! ```

use serde::Deserialize;

use crate::table::IndexKey;
use crate::{Error, Result};

/// One declared name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(default)]
    pub value: Option<i128>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: Option<i128>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Parse a JSON array of declarations.
pub fn parse_declarations(json: &str) -> Result<Vec<Declaration>> {
    Ok(serde_json::from_str(json)?)
}

/// Resolve implicit values and convert them to the key type.
pub fn assign_values<V: IndexKey>(decls: &[Declaration]) -> Result<Vec<(String, V)>> {
    let mut next: i128 = 0;
    decls
        .iter()
        .map(|decl| {
            let value = decl.value.unwrap_or(next);
            next = value.saturating_add(1);
            let key = V::from_ordinal(value).ok_or_else(|| Error::ValueOutOfRange {
                name: decl.name.clone(),
                value,
            })?;
            Ok((decl.name.clone(), key))
        })
        .collect()
}
