use chrono::{DateTime, NaiveDate, Utc};

/// Parses a publication date from either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
///
/// Plain dates are interpreted as midnight UTC.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed date
/// - `None` - Value matches neither accepted format
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Checks that `value` is an absolute http(s) URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
