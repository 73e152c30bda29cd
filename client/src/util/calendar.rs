//! Current-year lookup for the footer copyright line.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

/// Current Gregorian year in UTC (browser clock under `hydrate`, system clock
/// otherwise).
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // `get_utc_full_year` is a u32 that always fits a calendar year.
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
