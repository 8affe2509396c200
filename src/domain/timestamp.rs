//! Minute-precision timestamps as stored in the records file.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current local time with seconds and sub-seconds dropped.
pub fn now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .unwrap_or(time)
}

pub fn format(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    // Older files may carry seconds; they are dropped on load.
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(truncate_to_minute)
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn now_has_no_seconds() {
        let time = now();
        assert_eq!(time.second(), 0);
        assert_eq!(time.nanosecond(), 0);
    }

    #[test]
    fn formats_without_seconds() {
        let time = NaiveDate::from_ymd_opt(2023, 5, 17)
            .and_then(|d| d.and_hms_opt(9, 4, 0))
            .unwrap();

        assert_eq!(format(&time), "2023-05-17T09:04");
    }

    #[test]
    fn parses_with_and_without_seconds() {
        let mut de = serde_json::Deserializer::from_str("\"2023-05-17T09:04\"");
        let short = deserialize(&mut de).unwrap();

        let mut de = serde_json::Deserializer::from_str("\"2023-05-17T09:04:31.250\"");
        let long = deserialize(&mut de).unwrap();

        assert_eq!(short, long);
    }
}
