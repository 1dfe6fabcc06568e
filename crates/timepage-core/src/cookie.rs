use std::fmt;

use crate::catalog::FormatKey;

/// Name of the cookie carrying the sticky format preference.
pub const FORMAT_COOKIE: &str = "format";

/// Outgoing `format=<key>` cookie.
///
/// Session cookie: no expiry, no explicit path, domain or security
/// attributes. Sent on every response, whether or not the key changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCookie {
    key: FormatKey,
}

impl FormatCookie {
    pub fn new(key: FormatKey) -> Self {
        FormatCookie { key }
    }

    pub fn name(&self) -> &'static str {
        FORMAT_COOKIE
    }

    pub fn key(&self) -> FormatKey {
        self.key
    }

    pub fn value(&self) -> String {
        self.key.to_string()
    }
}

/// Renders as a `Set-Cookie` header value.
impl fmt::Display for FormatCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", FORMAT_COOKIE, self.key)
    }
}
