//! Date arithmetic for scheduling fields
//!
//! Scheduling dates travel as `YYYY-MM-DD` strings (or full RFC 3339
//! timestamps, of which only the date part matters here).

use chrono::{DateTime, NaiveDate};

/// How close a target date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUrgency {
    Overdue,
    ThisWeek,
    Upcoming,
}

/// Parse a scheduling date, accepting a bare date or an RFC 3339 timestamp.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Whole days from `today` until `target`; negative when overdue.
///
/// Returns `None` when the target is missing or unparseable.
#[must_use]
pub fn days_until(target: Option<&str>, today: NaiveDate) -> Option<i64> {
    let target = parse_date(target?)?;
    Some((target - today).num_days())
}

/// Classify a target date: overdue before today, this week within seven
/// days, upcoming after that.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rfshop_domain::utils::dates::{date_urgency, DateUrgency};
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
/// assert_eq!(date_urgency(Some("2026-02-03"), today), Some(DateUrgency::Overdue));
/// assert_eq!(date_urgency(Some("2026-02-11"), today), Some(DateUrgency::ThisWeek));
/// assert_eq!(date_urgency(None, today), None);
/// ```
#[must_use]
pub fn date_urgency(target: Option<&str>, today: NaiveDate) -> Option<DateUrgency> {
    let days = days_until(target, today)?;
    Some(match days {
        d if d < 0 => DateUrgency::Overdue,
        0..=7 => DateUrgency::ThisWeek,
        _ => DateUrgency::Upcoming,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
    }

    #[test]
    fn parses_dates_and_timestamps() {
        assert_eq!(parse_date("2026-02-10"), NaiveDate::from_ymd_opt(2026, 2, 10));
        assert_eq!(parse_date("2026-02-10T15:30:00.000Z"), NaiveDate::from_ymd_opt(2026, 2, 10));
        assert_eq!(parse_date("next tuesday"), None);
    }

    #[test]
    fn days_until_is_signed() {
        assert_eq!(days_until(Some("2026-02-04"), today()), Some(0));
        assert_eq!(days_until(Some("2026-01-31"), today()), Some(-4));
        assert_eq!(days_until(Some(""), today()), None);
    }

    #[test]
    fn urgency_boundaries() {
        assert_eq!(date_urgency(Some("2026-02-04"), today()), Some(DateUrgency::ThisWeek));
        assert_eq!(date_urgency(Some("2026-02-12"), today()), Some(DateUrgency::Upcoming));
        assert_eq!(date_urgency(Some("garbage"), today()), None);
    }
}
