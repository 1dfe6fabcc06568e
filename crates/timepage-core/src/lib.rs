//! Core of timepage: which date/time format a visitor sees, and the page
//! that shows it.
//!
//! Nothing here touches the network. A request is a [`FormatRequest`]
//! value, a response is a [`PageResponse`] value, and [`handle`] maps one
//! to the other.

pub mod catalog;
pub mod clock;
pub mod cookie;
pub mod error;
pub mod handler;
pub mod render;
pub mod resolver;

pub use catalog::{DEFAULT_FORMAT, FormatCatalog, FormatKey};
pub use clock::{Clock, FixedClock, SystemClock};
pub use cookie::{FORMAT_COOKIE, FormatCookie};
pub use error::CatalogError;
pub use handler::{
    CACHE_MAX_AGE_SECS, CONTENT_TYPE_HTML, FORMAT_PARAM, FormatRequest, PageResponse, handle,
};
pub use resolver::resolve;
