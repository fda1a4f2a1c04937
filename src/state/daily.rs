//! Submission window rules for the daily task planner.
//!
//! All checks are pure functions over an injected clock so the rules can be
//! tested without touching the wall clock. Callers derive the local calendar
//! day through [`local_date`] using the configured UTC offset.

use time::{Date, Duration, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Why a next-day task list submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OttGateError {
    /// Submissions are only accepted from today's page.
    WrongDate,
    /// The evening cutoff has passed.
    DeadlinePassed,
}

/// Why a focus task submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitGateError {
    /// Submissions are only accepted from today's page.
    WrongDate,
    /// The working-day window has not opened yet.
    TooEarly,
    /// The working-day window has already closed.
    WindowClosed,
}

/// The calendar day at the configured offset from UTC.
pub fn local_date(now_utc: OffsetDateTime, utc_offset_hours: i8) -> Date {
    let offset = UtcOffset::from_hms(utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);
    now_utc.to_offset(offset).date()
}

/// Parse a `YYYY-MM-DD` key into a [`Date`].
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value, DATE_FORMAT).ok()
}

/// Render a [`Date`] as the `YYYY-MM-DD` key used by the record registry.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| String::from("invalid-date"))
}

/// The day after `date`.
pub fn next_day(date: Date) -> Date {
    date.saturating_add(Duration::days(1))
}

/// The day before `date`.
pub fn previous_day(date: Date) -> Date {
    date.saturating_sub(Duration::days(1))
}

/// Check whether tomorrow's task list may be submitted right now.
///
/// `page_date` is the day whose page the user is on; entries for any day other
/// than the current local day are refused, as are entries after the cutoff.
pub fn check_ott_submission(
    now_local: OffsetDateTime,
    page_date: Date,
    cutoff_hour: u8,
) -> Result<(), OttGateError> {
    if page_date != now_local.date() {
        return Err(OttGateError::WrongDate);
    }
    if now_local.hour() >= cutoff_hour {
        return Err(OttGateError::DeadlinePassed);
    }
    Ok(())
}

/// Check whether the focus task may be picked right now.
pub fn check_mit_submission(
    now_local: OffsetDateTime,
    page_date: Date,
    open_hour: u8,
    close_hour: u8,
) -> Result<(), MitGateError> {
    if page_date != now_local.date() {
        return Err(MitGateError::WrongDate);
    }
    if now_local.hour() < open_hour {
        return Err(MitGateError::TooEarly);
    }
    if now_local.hour() >= close_hour {
        return Err(MitGateError::WindowClosed);
    }
    Ok(())
}

/// Trimmed non-blank entries of a submitted task list.
pub fn non_blank_tasks(tasks: &[String]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.trim())
        .filter(|task| !task.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn ott_submission_allowed_before_cutoff() {
        let now = datetime!(2025-03-10 19:59 UTC);
        assert_eq!(check_ott_submission(now, date!(2025 - 03 - 10), 20), Ok(()));
    }

    #[test]
    fn ott_submission_rejected_at_cutoff() {
        let now = datetime!(2025-03-10 20:00 UTC);
        assert_eq!(
            check_ott_submission(now, date!(2025 - 03 - 10), 20),
            Err(OttGateError::DeadlinePassed)
        );
    }

    #[test]
    fn ott_submission_rejected_from_another_day_page() {
        let now = datetime!(2025-03-10 10:00 UTC);
        assert_eq!(
            check_ott_submission(now, date!(2025 - 03 - 11), 20),
            Err(OttGateError::WrongDate)
        );
        assert_eq!(
            check_ott_submission(now, date!(2025 - 03 - 09), 20),
            Err(OttGateError::WrongDate)
        );
    }

    #[test]
    fn mit_window_boundaries() {
        let day = date!(2025 - 03 - 10);
        assert_eq!(
            check_mit_submission(datetime!(2025-03-10 05:59 UTC), day, 6, 22),
            Err(MitGateError::TooEarly)
        );
        assert_eq!(
            check_mit_submission(datetime!(2025-03-10 06:00 UTC), day, 6, 22),
            Ok(())
        );
        assert_eq!(
            check_mit_submission(datetime!(2025-03-10 21:59 UTC), day, 6, 22),
            Ok(())
        );
        assert_eq!(
            check_mit_submission(datetime!(2025-03-10 22:00 UTC), day, 6, 22),
            Err(MitGateError::WindowClosed)
        );
    }

    #[test]
    fn mit_submission_rejected_from_another_day_page() {
        let now = datetime!(2025-03-10 10:00 UTC);
        assert_eq!(
            check_mit_submission(now, date!(2025 - 03 - 11), 6, 22),
            Err(MitGateError::WrongDate)
        );
    }

    #[test]
    fn local_date_applies_offset() {
        let now = datetime!(2025-03-10 23:30 UTC);
        assert_eq!(local_date(now, 0), date!(2025 - 03 - 10));
        assert_eq!(local_date(now, 2), date!(2025 - 03 - 11));

        let early = datetime!(2025-03-10 00:30 UTC);
        assert_eq!(local_date(early, -1), date!(2025 - 03 - 09));
    }

    #[test]
    fn day_arithmetic_crosses_month_boundaries() {
        assert_eq!(next_day(date!(2025 - 01 - 31)), date!(2025 - 02 - 01));
        assert_eq!(previous_day(date!(2025 - 03 - 01)), date!(2025 - 02 - 28));
    }

    #[test]
    fn date_keys_parse_and_format() {
        let parsed = parse_date("2025-12-31");
        assert_eq!(parsed, Some(date!(2025 - 12 - 31)));
        assert_eq!(format_date(date!(2025 - 12 - 31)), "2025-12-31");

        assert!(parse_date("31-12-2025").is_none());
        assert!(parse_date("2025-13-01").is_none());
        assert!(parse_date("not-a-date").is_none());
    }

    #[test]
    fn blank_entries_are_dropped() {
        let tasks = vec![
            "  ship the release  ".to_owned(),
            String::new(),
            "   ".to_owned(),
            "review backlog".to_owned(),
        ];
        assert_eq!(
            non_blank_tasks(&tasks),
            vec!["ship the release".to_owned(), "review backlog".to_owned()]
        );
    }
}
