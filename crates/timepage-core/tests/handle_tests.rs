use chrono::{TimeZone, Utc};
use timepage_core::{
    CACHE_MAX_AGE_SECS, FixedClock, FormatCatalog, FormatKey, FormatRequest, PageResponse, handle,
};

// 13:55 UTC is 14:55 at the display offset.
fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2020, 1, 12, 13, 55, 30).unwrap())
}

fn run(request: FormatRequest) -> PageResponse {
    handle(&FormatCatalog::default(), &clock(), &request)
}

// ═══ Resolution ═══

#[test]
fn test_default_without_input() {
    let page = run(FormatRequest::new());
    assert_eq!(page.format, FormatKey::new(1));
    assert!(page.body.contains("<strong>14:55</strong>"), "{}", page.body);
}

#[test]
fn test_cookie_is_respected() {
    let page = run(FormatRequest::new().with_cookie("2"));
    assert_eq!(page.format, FormatKey::new(2));
    assert!(page.body.contains("<strong>12/01/2020</strong>"), "{}", page.body);
}

#[test]
fn test_query_overrides_cookie() {
    let page = run(FormatRequest::new().with_cookie("2").with_query("3"));
    assert_eq!(page.format, FormatKey::new(3));
    assert!(page.body.contains("<strong>12/01/2020 14:55</strong>"), "{}", page.body);
}

#[test]
fn test_invalid_query_keeps_cookie() {
    for query in ["not-a-number", "99", "0", "2.5", "-3", ""] {
        let page = run(FormatRequest::new().with_cookie("2").with_query(query));
        assert_eq!(page.format, FormatKey::new(2), "query {query:?}");
    }
}

#[test]
fn test_invalid_cookie_falls_back_to_default() {
    for cookie in ["abc", "99", "0", ""] {
        let page = run(FormatRequest::new().with_cookie(cookie));
        assert_eq!(page.format, FormatKey::new(1), "cookie {cookie:?}");
    }
}

#[test]
fn test_valid_query_wins_over_invalid_cookie() {
    let page = run(FormatRequest::new().with_cookie("whatever").with_query("2"));
    assert_eq!(page.format, FormatKey::new(2));
}

#[test]
fn test_resolution_is_repeatable() {
    let request = FormatRequest::new().with_cookie("2");
    let first = run(request.clone());
    let second = run(request);
    assert_eq!(first.format, FormatKey::new(2));
    assert_eq!(first, second);
}

// ═══ Response assembly ═══

#[test]
fn test_cookie_always_echoes_resolved_format() {
    let cases = [
        (FormatRequest::new(), "format=1"),
        (FormatRequest::new().with_cookie("2"), "format=2"),
        (FormatRequest::new().with_cookie("2").with_query("3"), "format=3"),
        (FormatRequest::new().with_cookie("2").with_query("99"), "format=2"),
        (FormatRequest::new().with_cookie("abc"), "format=1"),
    ];
    for (request, expected) in cases {
        let page = run(request);
        assert_eq!(page.cookie.to_string(), expected);
        assert_eq!(page.cookie.key(), page.format);
    }
}

#[test]
fn test_content_type_and_cache_policy() {
    let page = run(FormatRequest::new());
    assert_eq!(page.content_type, "text/html");
    assert_eq!(page.max_age, CACHE_MAX_AGE_SECS);
    assert_eq!(page.cache_control(), "max-age=10");
}

#[test]
fn test_custom_catalog() {
    let catalog = FormatCatalog::new([(1, "%H:%M"), (2, "%d/%m/%Y")], 1).unwrap();

    let page = handle(&catalog, &clock(), &FormatRequest::new().with_query("3"));
    assert_eq!(page.format, FormatKey::new(1));

    let page = handle(&catalog, &clock(), &FormatRequest::new().with_cookie("2"));
    assert!(page.body.contains("12/01/2020"));
}
