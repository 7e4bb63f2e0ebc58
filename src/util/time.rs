use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

#[cfg(test)]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The stand-in archive time for records flagged archived without saying
/// when: the unix epoch.
pub fn default_time() -> DateTime<Utc> {
    DateTime::<Utc>::from(std::time::UNIX_EPOCH)
}

/// Parse a timestamp, either RFC 3339 or a bare `YYYY-MM-DD HH:MM:SS` (taken
/// as UTC). Returns `None` if it's neither.
pub fn parse_timestamp(val: &str) -> Option<DateTime<Utc>> {
    let val = val.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(val) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(val, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
