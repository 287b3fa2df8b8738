//! Timestamp parsing and serialization
//!
//! Transaction dates are stored as naive local timestamps in ISO-8601 form
//! (`2025-01-15T10:30:00`). Documents written by other clients may carry a
//! bare date, a space separator, minutes-only precision or an RFC 3339
//! offset, so parsing is lenient while writing is always canonical.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical storage format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the accepted forms
///
/// RFC 3339 values keep the wall-clock time they were written with; the
/// offset is dropped rather than converted.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render a timestamp in the canonical storage format
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for `NaiveDateTime` fields using the lenient parser
pub mod serde_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

/// Serde adapter for optional timestamps
pub mod serde_format_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => serializer.serialize_str(&super::format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_with_fraction() {
        let ts = parse_timestamp("2025-01-15T10:30:00.123456").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(ts.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_variants() {
        let expected = ymd_hms(2025, 1, 15, 10, 30, 0);
        assert_eq!(parse_timestamp("2025-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15T10:30"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15 10:30"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15T10:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(
            parse_timestamp("2025-01-15"),
            Some(ymd_hms(2025, 1, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2025-13-01"), None);
    }

    #[test]
    fn test_format_omits_zero_fraction() {
        assert_eq!(
            format_timestamp(&ymd_hms(2025, 1, 15, 10, 30, 0)),
            "2025-01-15T10:30:00"
        );
    }
}
