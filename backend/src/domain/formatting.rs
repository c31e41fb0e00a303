//! Wire date/time conversions and display formatting.
//!
//! The fleet API exchanges dates as `DD-MM-YYYY` and times as `HH:MM`.
//! Money is shown in rupees with Indian magnitude suffixes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

const API_DATE_FORMAT: &str = "%d-%m-%Y";
const API_TIME_FORMAT: &str = "%H:%M";

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Parse a `DD-MM-YYYY` date.
#[must_use]
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), API_DATE_FORMAT).ok()
}

/// Render a date as `DD-MM-YYYY`.
#[must_use]
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse an `HH:MM` 24-hour time.
#[must_use]
pub fn parse_api_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), API_TIME_FORMAT).ok()
}

/// Render a time as `HH:MM`.
#[must_use]
pub fn format_api_time(time: NaiveTime) -> String {
    time.format(API_TIME_FORMAT).to_string()
}

/// Combine a wire date and time into an ISO 8601 UTC timestamp such as
/// `2025-03-05T14:30:00.000Z`.
#[must_use]
pub fn to_iso8601(date: &str, time: &str) -> Option<String> {
    let stamp = NaiveDateTime::new(parse_api_date(date)?, parse_api_time(time)?);
    Some(stamp.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Compact duration: `45m`, `2h`, `2h 5m`, `1d`, `1d 3h`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes}m");
    }
    if minutes < MINUTES_PER_DAY {
        let hours = minutes / MINUTES_PER_HOUR;
        let rest = minutes % MINUTES_PER_HOUR;
        return if rest > 0 {
            format!("{hours}h {rest}m")
        } else {
            format!("{hours}h")
        };
    }
    let days = minutes / MINUTES_PER_DAY;
    let hours = (minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    if hours > 0 {
        format!("{days}d {hours}h")
    } else {
        format!("{days}d")
    }
}

/// Distance for display. Unknown is `NA`; under a kilometre shows whole
/// metres.
#[must_use]
pub fn format_distance(km: Option<f64>) -> String {
    match km {
        None => "NA".to_owned(),
        Some(km) if km < 1.0 => format!("{} m", (km * 1000.0).trunc()),
        Some(km) => format!("{km:.1} km"),
    }
}

/// Rupee amount with `K`, `L` (lakh) or `Cr` (crore) suffix.
#[must_use]
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return "₹0".to_owned();
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let scaled = if magnitude >= CRORE {
        format!("{:.2} Cr", magnitude / CRORE)
    } else if magnitude >= LAKH {
        format!("{:.2} L", magnitude / LAKH)
    } else if magnitude >= THOUSAND {
        format!("{:.2} K", magnitude / THOUSAND)
    } else {
        format!("{magnitude:.2}")
    };
    format!("₹{sign}{scaled}")
}

/// Title-case a wire status: `on_leave` becomes `On Leave`.
#[must_use]
pub fn format_status(status: &str) -> String {
    status
        .replace('_', " ")
        .split(' ')
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0m")]
    #[case(45, "45m")]
    #[case(60, "1h")]
    #[case(125, "2h 5m")]
    #[case(1440, "1d")]
    #[case(1620, "1d 3h")]
    fn durations(#[case] minutes: u32, #[case] expected: &str) {
        assert_eq!(format_duration(minutes), expected);
    }

    #[rstest]
    #[case(None, "NA")]
    #[case(Some(0.5), "500 m")]
    #[case(Some(12.46), "12.5 km")]
    #[case(Some(1.0), "1.0 km")]
    fn distances(#[case] km: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_distance(km), expected);
    }

    #[rstest]
    #[case(None, "₹0")]
    #[case(Some(250.0), "₹250.00")]
    #[case(Some(1_500.0), "₹1.50 K")]
    #[case(Some(250_000.0), "₹2.50 L")]
    #[case(Some(12_000_000.0), "₹1.20 Cr")]
    #[case(Some(-2_000.0), "₹-2.00 K")]
    fn currency(#[case] amount: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[rstest]
    #[case("on_leave", "On Leave")]
    #[case("IN_PROGRESS", "In Progress")]
    #[case("active", "Active")]
    #[case("", "")]
    fn statuses(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_status(raw), expected);
    }

    #[test]
    fn api_dates_round_trip() {
        let date = parse_api_date("05-03-2025").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 5).expect("calendar date"));
        assert_eq!(format_api_date(date), "05-03-2025");
        assert!(parse_api_date("2025-03-05").is_none());
        assert!(parse_api_date("31-02-2025").is_none());
    }

    #[test]
    fn api_times_round_trip() {
        let time = parse_api_time("09:05").expect("valid time");
        assert_eq!(format_api_time(time), "09:05");
        assert!(parse_api_time("25:00").is_none());
    }

    #[test]
    fn iso_timestamp_from_wire_parts() {
        assert_eq!(
            to_iso8601("05-03-2025", "14:30").as_deref(),
            Some("2025-03-05T14:30:00.000Z")
        );
        assert!(to_iso8601("05-03-2025", "later").is_none());
    }
}
