//! Lenient coercion of raw text cells into typed values.
//!
//! Nothing here fails: a cell that cannot be read becomes `None`, and the
//! batch carries on.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse one timestamp cell.
///
/// Dates without a time of day resolve to midnight. RFC 3339 values are
/// converted to UTC before the offset is dropped.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(ts) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(ts);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.naive_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

/// Coerce a column of raw cells into timestamps, one output per input.
pub fn normalize<'a, I>(values: I) -> Vec<Option<NaiveDateTime>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .map(|cell| cell.and_then(parse_timestamp))
        .collect()
}

/// Parse a numeric cell as an exact decimal; scientific notation is accepted.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Parse an ordinal review score. Float spellings such as `4.0` are accepted
/// when they carry no fraction.
#[must_use]
pub fn parse_score(raw: &str) -> Option<u8> {
    let value = raw.trim();
    if let Ok(score) = value.parse::<u8>() {
        return Some(score);
    }
    let decimal = parse_decimal(value)?;
    if decimal.fract().is_zero() {
        decimal.to_u8()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, s).unwrap())
    }

    #[test]
    fn test_parse_timestamp_common_layouts() {
        let expected = ts(2017, 10, 2, 10, 56, 33);
        assert_eq!(parse_timestamp("2017-10-02 10:56:33"), Some(expected));
        assert_eq!(parse_timestamp("2017-10-02T10:56:33"), Some(expected));
        assert_eq!(parse_timestamp("  2017-10-02 10:56:33 "), Some(expected));
        assert_eq!(
            parse_timestamp("2017-10-02 10:56"),
            Some(ts(2017, 10, 2, 10, 56, 0))
        );
    }

    #[test]
    fn test_parse_timestamp_fractional_seconds() {
        let parsed = parse_timestamp("2017-10-02 10:56:33.250").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2017, 10, 2).unwrap());
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_timestamp_date_only_is_midnight() {
        assert_eq!(parse_timestamp("2018-01-08"), Some(ts(2018, 1, 8, 0, 0, 0)));
        assert_eq!(parse_timestamp("08/01/2018"), Some(ts(2018, 1, 8, 0, 0, 0)));
    }

    #[test]
    fn test_parse_timestamp_rfc3339_converts_to_utc() {
        assert_eq!(
            parse_timestamp("2018-01-08T03:00:00+03:00"),
            Some(ts(2018, 1, 8, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_timestamp_garbage_is_absent() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2018-13-45 10:00:00"), None);
    }

    #[test]
    fn test_normalize_keeps_length_and_positions() {
        let column = vec![
            Some("2018-01-01 00:00:00"),
            None,
            Some("garbage"),
            Some("2018-02-01"),
        ];
        let normalized = normalize(column);
        assert_eq!(normalized.len(), 4);
        assert_eq!(normalized[0], Some(ts(2018, 1, 1, 0, 0, 0)));
        assert_eq!(normalized[1], None);
        assert_eq!(normalized[2], None);
        assert_eq!(normalized[3], Some(ts(2018, 2, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("13.29"), Some(dec!(13.29)));
        assert_eq!(parse_decimal(" 0 "), Some(dec!(0)));
        assert_eq!(parse_decimal("1.5e2"), Some(dec!(150)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("n/a"), None);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("5"), Some(5));
        assert_eq!(parse_score("4.0"), Some(4));
        assert_eq!(parse_score("4.5"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("-1"), None);
    }

    #[test]
    fn test_parse_score_float_spellings() {
        assert_eq!(parse_score("3.00"), Some(3));
        assert_eq!(parse_score("1e0"), Some(1));
        assert_eq!(parse_score("-2.0"), None);
        assert_eq!(parse_score("256.0"), None);
    }
}
