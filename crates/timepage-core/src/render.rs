//! Turns the current instant into the HTML page.

use chrono::{DateTime, FixedOffset};

use crate::clock::Clock;

/// Display offset from UTC, in seconds. Fixed, with no daylight saving.
pub const DISPLAY_OFFSET_SECS: i32 = 3600;

/// The fixed UTC+1 display offset.
pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).expect("display offset is less than a day")
}

/// Current instant from `clock`, shifted to the display offset.
pub fn local_now(clock: &dyn Clock) -> DateTime<FixedOffset> {
    clock.now().with_timezone(&display_offset())
}

/// Format `at` with a strftime `pattern`.
///
/// Patterns come from a validated [`FormatCatalog`](crate::FormatCatalog).
pub fn format_time(at: &DateTime<FixedOffset>, pattern: &str) -> String {
    at.format(pattern).to_string()
}

/// Render the full HTML document around an already formatted time.
///
/// `time` is interpolated verbatim: it is always produced by
/// [`format_time`] from a catalog pattern, never from visitor input.
pub fn render_page(time: &str) -> String {
    format!(
        r#"<html>
    <head>
        <title>An app that does nothing but tell you the date :D</title>
    </head>
    <body>
        <h1>Welcome to this useless app :D</h1>
        <p>Current time: <strong>{time}</strong></p>
        <a href="/">Refresh</a>
    </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn shifts_utc_by_one_hour() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2020, 1, 12, 13, 55, 30).unwrap());
        let now = local_now(&clock);
        assert_eq!(format_time(&now, "%H:%M"), "14:55");
        assert_eq!(now.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn offset_ignores_daylight_saving() {
        // Mid-July: Europe/Paris would be UTC+2, the display stays at UTC+1.
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2020, 7, 14, 10, 0, 0).unwrap());
        assert_eq!(format_time(&local_now(&clock), "%H:%M"), "11:00");
    }

    #[test]
    fn crosses_midnight() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2019, 12, 31, 23, 30, 0).unwrap());
        assert_eq!(format_time(&local_now(&clock), "%d/%m/%Y %H:%M"), "01/01/2020 00:30");
    }

    #[test]
    fn page_embeds_time_and_refresh_link() {
        let page = render_page("14:55");
        assert!(page.contains("<strong>14:55</strong>"));
        assert!(page.contains(r#"<a href="/">"#));
        assert!(page.contains("<title>"));
        assert!(page.contains("<h1>"));
    }
}
