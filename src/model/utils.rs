use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Upstream tee times are sometimes bare display strings ("11:35am") and sometimes
/// timestamps. Timestamps are rendered in central time like "4/11 9:05a"; anything
/// else passes through untouched.
#[must_use]
pub fn process_tee_time(tee_time: &str) -> String {
    let trimmed = tee_time.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed).or_else(|_| {
        let with_offset = if trimmed.ends_with('Z') {
            format!("{trimmed}+0000")
        } else {
            trimmed.to_owned()
        };
        DateTime::parse_from_str(&with_offset, "%Y-%m-%dT%H:%MZ%z")
    });

    let Ok(parsed) = parsed else {
        return trimmed.to_string();
    };

    let central = FixedOffset::west_opt(5 * 3600).unwrap_or_else(|| Utc.fix());
    take_a_char_off(
        &parsed
            .with_timezone(&central)
            .format("%-m/%d %-I:%M%P")
            .to_string(),
    )
}

#[must_use]
pub fn format_refresh_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[must_use]
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

#[must_use]
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[must_use]
pub fn take_a_char_off(s: &str) -> String {
    let mut result = s.to_string();
    result.pop();
    result
}
