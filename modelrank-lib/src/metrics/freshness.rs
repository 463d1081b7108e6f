use chrono::{DateTime, NaiveDate, Utc};

const UNKNOWN: f64 = 0.3;
const FUTURE: f64 = 0.5;

/// (maximum age in days, exclusive; score)
const BUCKETS: &[(i64, f64)] = &[(30, 1.0), (180, 0.8), (365, 0.6), (730, 0.4)];
const STALE: f64 = 0.2;

/// How recently a model was modified, as a score in `[0, 1]`.
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates. A missing or unparseable
/// timestamp scores 0.3, one in the future 0.5.
#[must_use]
pub fn freshness(last_modified: Option<&str>, now: DateTime<Utc>) -> f64 {
    let Some(modified) = last_modified.and_then(parse_timestamp) else {
        return UNKNOWN;
    };

    if modified > now {
        return FUTURE;
    }

    let age_days = (now - modified).num_days();
    BUCKETS
        .iter()
        .find(|(max_days, _)| age_days < *max_days)
        .map_or(STALE, |(_, score)| *score)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
