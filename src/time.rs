/// Hours below this are read as afternoon times written in 12-hour form.
pub const PM_THRESHOLD: i64 = 8;

/// Returned when a start time cannot be parsed at all.
pub const FALLBACK_START: &str = "17:00";
/// Returned when the end time cannot be derived from the start time.
pub const FALLBACK_END: &str = "18:00";

/// Normalize a loosely formatted start time into 24-hour `HH:MM`.
///
/// Accepts `H:MM`, `H.MM` and bare hours, optionally wrapped in double quotes.
/// The first separator rule that yields two integers wins; anything
/// unparsable becomes [`FALLBACK_START`].
pub fn normalize_time(raw: &str) -> String {
    let token = raw.trim_matches('"');

    if token.contains(':') {
        if let Some(hhmm) = split_hour_minute(token, ':').and_then(format_pm) {
            return hhmm;
        }
    }

    if token.contains('.') {
        if let Some(hhmm) = split_hour_minute(token, '.').and_then(format_pm) {
            return hhmm;
        }
    }

    if let Some(hhmm) = parse_int(token).and_then(|hour| format_pm((hour, 0))) {
        return hhmm;
    }

    FALLBACK_START.to_string()
}

/// One hour after `start` (an `HH:MM` string), same minute. No wrap past 24.
pub fn end_time(start: &str) -> String {
    split_hour_minute(start, ':')
        .and_then(|(hour, minute)| Some(format_hm(hour.checked_add(1)?, minute)))
        .unwrap_or_else(|| FALLBACK_END.to_string())
}

fn format_pm((hour, minute): (i64, i64)) -> Option<String> {
    let hour = if hour < PM_THRESHOLD { hour.checked_add(12)? } else { hour };
    Some(format_hm(hour, minute))
}

fn format_hm(hour: i64, minute: i64) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Exactly two integer parts, or nothing.
fn split_hour_minute(token: &str, sep: char) -> Option<(i64, i64)> {
    let mut parts = token.split(sep);
    let hour = parse_int(parts.next()?)?;
    let minute = parse_int(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((hour, minute))
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
