//! Date rendering for history entries and collection metadata.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{CommonError, Result};
use crate::text::pluralize_word;

fn ago(count: i64, unit: &str) -> String {
    format!("{} {} ago", count, pluralize_word(unit, count))
}

/// Renders how long ago `then` happened, using the coarsest time unit
/// whose threshold was crossed. Months are approximated as 30 days.
pub fn relative_date(then: DateTime<Utc>) -> String {
    relative_date_from(then, Utc::now())
}

/// Same as [`relative_date`] with an explicit reference point.
pub fn relative_date_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    let weeks = days / 7;
    let months = days / 30;

    if seconds < 60 {
        "Few seconds ago".to_string()
    } else if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 7 {
        ago(days, "day")
    } else if weeks < 4 {
        ago(weeks, "week")
    } else {
        ago(months, "month")
    }
}

/// Renders a hyphen-delimited `YYYY-MM-DD` string as a long English
/// date, e.g. `January 5, 2024`. Unpadded months and days are accepted.
pub fn human_date(input: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommonError::InvalidDate {
            value: input.to_string(),
        }
    })?;
    Ok(date.format("%B %-d, %Y").to_string())
}

/// Lenient wrapper around [`human_date`]: unparseable input passes
/// through unchanged.
pub fn humanize_date(input: &str) -> Cow<'_, str> {
    match human_date(input) {
        Ok(formatted) => Cow::Owned(formatted),
        Err(e) => {
            tracing::debug!("{}", e);
            Cow::Borrowed(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_under_a_minute() {
        let now = reference();
        assert_eq!(relative_date_from(now - Duration::seconds(5), now), "Few seconds ago");
        assert_eq!(relative_date_from(now - Duration::seconds(59), now), "Few seconds ago");
    }

    #[test]
    fn test_minutes() {
        let now = reference();
        assert_eq!(relative_date_from(now - Duration::seconds(60), now), "1 minute ago");
        assert_eq!(relative_date_from(now - Duration::seconds(90), now), "1 minute ago");
        assert_eq!(relative_date_from(now - Duration::minutes(59), now), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        let now = reference();
        assert_eq!(relative_date_from(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_date_from(now - Duration::hours(23), now), "23 hours ago");
    }

    #[test]
    fn test_days_and_weeks() {
        let now = reference();
        assert_eq!(relative_date_from(now - Duration::days(2), now), "2 days ago");
        assert_eq!(relative_date_from(now - Duration::days(7), now), "1 week ago");
        assert_eq!(relative_date_from(now - Duration::days(27), now), "3 weeks ago");
    }

    #[test]
    fn test_months() {
        let now = reference();
        assert_eq!(relative_date_from(now - Duration::days(45), now), "1 month ago");
        assert_eq!(relative_date_from(now - Duration::days(90), now), "3 months ago");
    }

    #[test]
    fn test_future_timestamps_stay_in_seconds_bucket() {
        let now = reference();
        assert_eq!(relative_date_from(now + Duration::hours(2), now), "Few seconds ago");
    }

    #[test]
    fn test_humanize_date() {
        assert_eq!(humanize_date("2024-01-05"), "January 5, 2024");
        assert_eq!(humanize_date("2024-1-5"), "January 5, 2024");
        assert_eq!(humanize_date("2026-12-31"), "December 31, 2026");
    }

    #[test]
    fn test_humanize_date_passes_through_garbage() {
        assert_eq!(humanize_date("not-a-date"), "not-a-date");
        assert_eq!(humanize_date(""), "");
    }

    #[test]
    fn test_human_date_reports_failure() {
        assert!(human_date("05/01/2024").is_err());
    }
}
