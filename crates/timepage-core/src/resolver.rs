//! Picks the format key for one request.
//!
//! Precedence, highest wins:
//!
//! 1. `format` query parameter, only if it is all ASCII digits *and* names a
//!    catalog entry. Anything else is dropped whole, never partially parsed.
//! 2. `format` cookie, parsed as an integer.
//! 3. The catalog default.
//!
//! The merged result is checked against the catalog once more, which is
//! where a stale or tampered cookie falls back to the default.

use crate::catalog::{FormatCatalog, FormatKey};

/// Resolve the format key from the raw query and cookie values.
///
/// Never fails. The returned key is always a member of `catalog`.
pub fn resolve(catalog: &FormatCatalog, query: Option<&str>, cookie: Option<&str>) -> FormatKey {
    let mut format = catalog.default_key();

    if let Some(key) = cookie.and_then(parse_cookie) {
        format = key;
    }

    if let Some(key) = query.and_then(parse_query).filter(|key| catalog.contains(*key)) {
        format = key;
    }

    if !catalog.contains(format) {
        tracing::debug!(rejected = %format, "format not in catalog, using default");
        format = catalog.default_key();
    }

    format
}

fn parse_cookie(raw: &str) -> Option<FormatKey> {
    raw.trim().parse::<u32>().ok().map(FormatKey::new)
}

fn parse_query(raw: &str) -> Option<FormatKey> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().map(FormatKey::new)
}
