use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};

/// Returns the instant `days` days before `now`.
pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Returns the instant `months` calendar months before `now`.
///
/// The day of month is clamped to the last day of the target month, so
/// March 31st minus one month is February 28th (or 29th).
pub fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parses a timestamp the way clients commonly send one.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`, with any offset), naive
/// date-times (`2024-05-01T10:00:00`, `2024-05-01 10:00:00`) which are read as
/// UTC, and bare dates (`2024-05-01`) which map to midnight UTC.
pub fn parse_datetime_flexible(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter for optional timestamps accepting every format understood by
/// [`parse_datetime_flexible`]. `null`, a missing field and an empty string all
/// deserialize to `None`.
pub mod optional_datetime {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::parse_datetime_flexible;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_datetime_flexible(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", s))),
        }
    }
}
