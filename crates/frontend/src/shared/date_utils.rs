//! Browser clock helpers

use chrono::NaiveTime;

/// Current wall-clock time in the browser's local time zone
pub fn local_time() -> NaiveTime {
    let now = js_sys::Date::new_0();
    NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
        .unwrap_or(NaiveTime::MIN)
}

/// Current local year, for the footer
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
