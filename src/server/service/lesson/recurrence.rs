//! Expansion of a weekly recurrence rule into concrete lesson dates.

use chrono::{Datelike, Days, NaiveDate};

use crate::server::model::lesson::{RecurrenceCaps, SeriesBound, Weekdays};

/// Expands a weekly recurrence into strictly increasing calendar dates.
///
/// Walks day by day from `first_date` (inclusive) and keeps the days whose weekday is in
/// `days`. A `Count(n)` bound stops after `n` matches and never walks further than
/// `ceil(n / |days|)` weeks or `caps.interval_max` past the first date, whichever comes
/// first. A `LastDate(l)` bound stops after `l` (inclusive). Every series is limited to
/// `caps.lessons_max` dates.
///
/// Returns an empty list when `days` is empty or nothing matches in the window.
pub fn generate(
    first_date: NaiveDate,
    days: &Weekdays,
    bound: SeriesBound,
    caps: &RecurrenceCaps,
) -> Vec<NaiveDate> {
    if days.is_empty() {
        return Vec::new();
    }

    let (last_date, limit) = match bound {
        SeriesBound::Count(count) => {
            let weeks = u64::from(count.div_ceil(days.len()));
            let last_by_weeks = weeks
                .checked_mul(7)
                .and_then(|span| first_date.checked_add_days(Days::new(span)))
                .unwrap_or(NaiveDate::MAX);
            let last_by_interval = first_date
                .checked_add_months(caps.interval_max)
                .unwrap_or(NaiveDate::MAX);

            (
                last_by_weeks.min(last_by_interval),
                (count as usize).min(caps.lessons_max),
            )
        }
        SeriesBound::LastDate(last_date) => (last_date, caps.lessons_max),
    };

    first_date
        .iter_days()
        .take_while(|date| *date <= last_date)
        .filter(|date| days.contains(date.weekday()))
        .take(limit)
        .collect()
}
