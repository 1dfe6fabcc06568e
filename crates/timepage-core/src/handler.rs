//! The request handler as a pure function over explicit values.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use timepage_core::{handle, FixedClock, FormatCatalog, FormatRequest};
//!
//! let catalog = FormatCatalog::default();
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2020, 1, 12, 13, 55, 0).unwrap());
//!
//! let page = handle(&catalog, &clock, &FormatRequest::new().with_cookie("2"));
//! assert_eq!(page.cookie.to_string(), "format=2");
//! assert!(page.body.contains("12/01/2020"));
//! ```

use crate::catalog::{FormatCatalog, FormatKey};
use crate::clock::Clock;
use crate::cookie::FormatCookie;
use crate::render;
use crate::resolver;

/// Query parameter selecting a format for one request.
pub const FORMAT_PARAM: &str = "format";

/// Content type of every page.
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// How long clients may reuse a page without asking again.
pub const CACHE_MAX_AGE_SECS: u32 = 10;

/// Raw `format` inputs of one request, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRequest {
    query: Option<String>,
    cookie: Option<String>,
}

impl FormatRequest {
    /// A request with neither a query parameter nor a cookie.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, value: impl Into<String>) -> Self {
        self.query = Some(value.into());
        self
    }

    pub fn with_cookie(mut self, value: impl Into<String>) -> Self {
        self.cookie = Some(value.into());
        self
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

/// Everything the page response carries. Status is always 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub format: FormatKey,
    pub cookie: FormatCookie,
    pub content_type: &'static str,
    pub max_age: u32,
    pub body: String,
}

impl PageResponse {
    /// `Cache-Control` header value.
    pub fn cache_control(&self) -> String {
        format!("max-age={}", self.max_age)
    }
}

/// Resolve the format, render the page and assemble the response.
pub fn handle(catalog: &FormatCatalog, clock: &dyn Clock, request: &FormatRequest) -> PageResponse {
    let format = resolver::resolve(catalog, request.query(), request.cookie());
    tracing::debug!(
        query = ?request.query(),
        cookie = ?request.cookie(),
        resolved = %format,
        "format resolved"
    );

    // `resolve` only returns catalog members.
    let pattern = catalog.pattern(format).unwrap_or_default();
    let time = render::format_time(&render::local_now(clock), pattern);

    PageResponse {
        format,
        cookie: FormatCookie::new(format),
        content_type: CONTENT_TYPE_HTML,
        max_age: CACHE_MAX_AGE_SECS,
        body: render::render_page(&time),
    }
}
