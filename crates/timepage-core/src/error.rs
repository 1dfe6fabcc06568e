use thiserror::Error;

/// Errors raised while building a [`FormatCatalog`](crate::FormatCatalog).
///
/// Request handling itself never fails: bad input falls back to the
/// catalog's default key.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Format catalog is empty")]
    Empty,

    #[error("Invalid pattern for format {key}: {pattern:?}")]
    InvalidPattern { key: u32, pattern: String },

    #[error("Default format {0} is not in the catalog")]
    UnknownDefault(u32),
}
