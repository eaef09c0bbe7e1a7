use chrono::NaiveDate;

const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// Parse a `date_added` value such as `"September 25, 2021"`.
///
/// Returns `None` for anything that is not a recognised calendar date.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Leading integer of a duration: `"90 min"` is 90, `"2 Seasons"` is 2.
pub fn parse_duration(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().ok()
}
