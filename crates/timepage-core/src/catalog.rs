//! The fixed set of date/time display patterns a visitor can choose from.
//!
//! Keys are small positive integers and patterns use chrono's strftime
//! syntax. The stock catalog is:
//!
//! | key | pattern          | example            |
//! |-----|------------------|--------------------|
//! | 1   | `%H:%M`          | `14:55`            |
//! | 2   | `%d/%m/%Y`       | `12/01/2020`       |
//! | 3   | `%d/%m/%Y %H:%M` | `12/01/2020 14:55` |

use std::collections::BTreeMap;
use std::fmt;

use chrono::format::{Item, StrftimeItems};

use crate::error::CatalogError;

/// Identifier of one entry in a [`FormatCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatKey(u32);

impl FormatKey {
    pub const fn new(key: u32) -> Self {
        FormatKey(key)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for FormatKey {
    fn from(key: u32) -> Self {
        FormatKey(key)
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key used when neither the query string nor the cookie picks a valid one.
pub const DEFAULT_FORMAT: FormatKey = FormatKey(1);

const STOCK_FORMATS: [(u32, &str); 3] = [(1, "%H:%M"), (2, "%d/%m/%Y"), (3, "%d/%m/%Y %H:%M")];

/// Immutable mapping from [`FormatKey`] to strftime pattern, plus the key
/// to fall back on.
///
/// Every pattern is checked when the catalog is built, so formatting with a
/// catalog pattern never fails at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCatalog {
    formats: BTreeMap<FormatKey, String>,
    default_key: FormatKey,
}

impl FormatCatalog {
    /// Build a catalog from `(key, pattern)` pairs.
    ///
    /// Fails if the catalog is empty, a pattern does not parse, or
    /// `default_key` is not one of the keys.
    pub fn new<I, P>(entries: I, default_key: u32) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (u32, P)>,
        P: Into<String>,
    {
        let default_key = FormatKey(default_key);
        let mut formats = BTreeMap::new();

        for (key, pattern) in entries {
            let pattern = pattern.into();
            if !is_valid_pattern(&pattern) {
                return Err(CatalogError::InvalidPattern { key, pattern });
            }
            formats.insert(FormatKey(key), pattern);
        }

        if formats.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !formats.contains_key(&default_key) {
            return Err(CatalogError::UnknownDefault(default_key.get()));
        }

        Ok(FormatCatalog {
            formats,
            default_key,
        })
    }

    pub fn default_key(&self) -> FormatKey {
        self.default_key
    }

    pub fn contains(&self, key: FormatKey) -> bool {
        self.formats.contains_key(&key)
    }

    /// Pattern registered for `key`, if any.
    pub fn pattern(&self, key: FormatKey) -> Option<&str> {
        self.formats.get(&key).map(String::as_str)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = FormatKey> + '_ {
        self.formats.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        FormatCatalog {
            formats: STOCK_FORMATS
                .iter()
                .map(|&(key, pattern)| (FormatKey(key), pattern.to_string()))
                .collect(),
            default_key: DEFAULT_FORMAT,
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_catalog_has_three_formats() {
        let catalog = FormatCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.default_key(), DEFAULT_FORMAT);
        assert_eq!(catalog.pattern(FormatKey::new(1)), Some("%H:%M"));
        assert_eq!(catalog.pattern(FormatKey::new(2)), Some("%d/%m/%Y"));
        assert_eq!(catalog.pattern(FormatKey::new(3)), Some("%d/%m/%Y %H:%M"));
        assert!(!catalog.contains(FormatKey::new(0)));
        assert!(!catalog.contains(FormatKey::new(4)));
    }

    #[test]
    fn stock_patterns_are_valid() {
        for (_, pattern) in STOCK_FORMATS {
            assert!(is_valid_pattern(pattern), "{pattern}");
        }
    }

    #[test]
    fn custom_catalog() {
        let catalog = FormatCatalog::new([(1, "%H:%M"), (2, "%d/%m/%Y")], 1).unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![FormatKey::new(1), FormatKey::new(2)]);
    }

    #[test]
    fn rejects_unknown_default() {
        let err = FormatCatalog::new([(1, "%H:%M")], 7).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDefault(7)));
    }

    #[test]
    fn rejects_bad_pattern() {
        let err = FormatCatalog::new([(1, "%H:%M %")], 1).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { key: 1, .. }));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = FormatCatalog::new(Vec::<(u32, &str)>::new(), 1).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }
}
