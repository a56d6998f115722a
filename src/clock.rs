//! Time and date strings in the firmware's display format.
//!
//! The watch shows `"6:24 AM"` and `"Jun 24"`: 12-hour clock, no leading
//! zero on the hour, two-digit minutes, three-letter month, unpadded day.

use chrono::{Datelike, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a time as `"H:MM AM"`, or `"H:MM"` without the meridiem.
pub fn format_time<T: Timelike>(time: &T, include_meridiem: bool) -> String {
    let (is_pm, hour) = time.hour12();
    let mut out = format!("{}:{:02}", hour, time.minute());
    if include_meridiem {
        out.push_str(if is_pm { " PM" } else { " AM" });
    }
    out
}

/// Format a date as `"Mon D"`.
pub fn format_date<D: Datelike>(date: &D) -> String {
    let month = MONTH_NAMES
        .get(date.month0() as usize)
        .copied()
        .unwrap_or(MONTH_NAMES[0]);
    format!("{} {}", month, date.day())
}

/// Remove a `" AM"` / `" PM"` marker from a time string.
pub fn strip_meridiem(time: &str) -> String {
    time.replace(" AM", "").replace(" PM", "")
}
