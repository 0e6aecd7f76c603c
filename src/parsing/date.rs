use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

use super::EventParseError;

/// Resolves an `MM-DD` token against `now`.
///
/// The listing only carries current and upcoming shows, so a month that has
/// already passed this year belongs to next year. Components are not range
/// checked; an out-of-range month or day rolls over into the following
/// month or year.
pub fn resolve_date<Tz: TimeZone>(
    date_token: &str,
    now: &DateTime<Tz>,
) -> Result<NaiveDate, EventParseError> {
    let (month_str, day_str) = date_token
        .split_once('-')
        .ok_or_else(|| EventParseError::MalformedDateToken(date_token.to_string()))?;

    let month = parse_component("month", month_str)?;
    let day = parse_component("day", day_str)?;

    let mut year = now.year();
    if i64::from(month) < i64::from(now.month()) {
        year += 1;
    }

    normalized_date(year, month, day)
        .ok_or_else(|| EventParseError::DateOutOfRange(date_token.to_string()))
}

fn parse_component(component: &'static str, value: &str) -> Result<i32, EventParseError> {
    value
        .parse::<i32>()
        .map_err(|_| EventParseError::InvalidDateComponent {
            component,
            value: value.to_string(),
        })
}

fn normalized_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = i64::from(day) - 1;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}
