//! Calendar helpers.
//!
//! `time`'s system clock is unavailable on `wasm32-unknown-unknown`, so the
//! browser build reads the date from `js_sys::Date` instead.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::Date;
use time::macros::format_description;

/// Today's date in the local calendar (browser) or UTC (server).
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let parts = (now.get_full_year() as i32, now.get_month() as u8 + 1, now.get_date() as u8);
        time::Month::try_from(parts.1)
            .and_then(|month| Date::from_calendar_date(parts.0, month, parts.2))
            .unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// `Sep 15, 2023`.
pub fn format_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}
