//! Timestamp helpers shared by the model and the SQLite layer.
//!
//! Timestamps are persisted as RFC 3339 text with millisecond precision and a
//! `Z` suffix. Fixed width keeps lexicographic order equal to time order, so
//! `ORDER BY publish_date DESC` works on the text column directly.

use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};

pub type Timestamp = DateTime<Utc>;

/// Current UTC time at storage precision.
pub fn now() -> Timestamp {
    to_storage_precision(Utc::now())
}

/// Drops sub-millisecond digits so a stored value reads back unchanged.
pub fn to_storage_precision(value: Timestamp) -> Timestamp {
    value.trunc_subsecs(3)
}

/// Formats a timestamp the way it is written to the store.
pub fn format_timestamp(value: Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whether `value` formats as a plain four-digit-year timestamp.
///
/// Years outside `0..=9999` get a sign prefix in RFC 3339 output, which
/// neither parses back nor sorts with the rest of the column.
pub fn is_storable(value: Timestamp) -> bool {
    (0..=9999).contains(&value.year())
}

/// Parses any RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
