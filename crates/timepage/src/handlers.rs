//! Axum side of the page handler.
//!
//! Extracts the raw `format` query parameter and cookie into a
//! [`FormatRequest`], runs [`timepage_core::handle`], and writes the
//! resulting [`PageResponse`] back as headers, cookie and body.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use timepage_core::{Clock, FORMAT_COOKIE, FORMAT_PARAM, FormatCatalog, FormatRequest, PageResponse};

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FormatCatalog>,
    pub clock: Arc<dyn Clock>,
}

/// `GET /`
pub async fn show_time(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    jar: CookieJar,
) -> HtmlPage {
    let request = format_request(query.as_deref(), &jar);
    HtmlPage(timepage_core::handle(
        &state.catalog,
        state.clock.as_ref(),
        &request,
    ))
}

/// Collect the raw `format` inputs of a request.
///
/// When the query string repeats `format`, the last occurrence counts.
/// A query string that does not decode is treated as absent.
pub fn format_request(raw_query: Option<&str>, jar: &CookieJar) -> FormatRequest {
    let mut request = FormatRequest::new();
    if let Some(value) = raw_query.and_then(query_format) {
        request = request.with_query(value);
    }
    if let Some(cookie) = jar.get(FORMAT_COOKIE) {
        request = request.with_cookie(cookie.value());
    }
    request
}

fn query_format(raw: &str) -> Option<String> {
    match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
        Ok(pairs) => pairs
            .into_iter()
            .rev()
            .find(|(name, _)| name == FORMAT_PARAM)
            .map(|(_, value)| value),
        Err(err) => {
            tracing::debug!(%err, "ignoring undecodable query string");
            None
        }
    }
}

/// A [`PageResponse`] ready to go on the wire.
#[derive(Debug)]
pub struct HtmlPage(pub PageResponse);

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        let page = self.0;
        // A fresh jar, so the cookie is always in the delta and always sent.
        let jar = CookieJar::new().add(Cookie::new(page.cookie.name(), page.cookie.value()));
        (
            jar,
            [
                (header::CONTENT_TYPE, page.content_type.to_string()),
                (header::CACHE_CONTROL, page.cache_control()),
            ],
            page.body,
        )
            .into_response()
    }
}
