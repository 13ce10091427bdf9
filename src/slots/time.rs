//! Requested-time normalization.

use std::sync::LazyLock;

use regex::Regex;

static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(am|pm)$").expect("valid time pattern"));

/// Convert a bare 12-hour time such as `4PM` into `16:00`.
///
/// Only one or two digits directly followed by AM/PM are converted. Anything
/// else (24-hour times, "tomorrow at noon", out-of-range hours) is returned
/// trimmed but otherwise unchanged.
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(caps) = TWELVE_HOUR.captures(trimmed) else {
        return trimmed.to_string();
    };
    let Ok(hour) = caps[1].parse::<u32>() else {
        return trimmed.to_string();
    };
    if !(1..=12).contains(&hour) {
        return trimmed.to_string();
    }

    let pm = caps[2].eq_ignore_ascii_case("pm");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    format!("{hour:02}:00")
}
