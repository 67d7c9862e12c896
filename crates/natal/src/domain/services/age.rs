//! Age arithmetic on calendar dates
//!
//! All functions take `today` explicitly so callers decide where the
//! current date comes from (see [`Clock`](crate::ports::Clock)).

use chrono::{Datelike, Months, NaiveDate};

use crate::domain::value_objects::AgeBreakdown;

/// Month lengths used by [`age_breakdown`]. February is always 28 days.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Shift a date by whole years, clamping Feb 29 to Feb 28 in common years.
///
/// Returns `None` if the result falls outside the representable range.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Completed years between `birth_date` and `today`.
///
/// The naive year difference is corrected by comparing the birth date with
/// `today` moved back by that many years, so a Feb 29 birthday counts as
/// reached on Feb 28 of a common year only once Mar 1 arrives.
/// Future birth dates yield negative ages.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birth_date.year();

    match add_years(today, -age) {
        Some(anniversary) if birth_date > anniversary => age - 1,
        _ => age,
    }
}

/// True if `today` is the anniversary of `birth_date`.
///
/// A birth date later than this year never counts, even when month and day
/// coincide.
pub fn is_birthday_on(birth_date: NaiveDate, today: NaiveDate) -> bool {
    birth_date.month() == today.month()
        && birth_date.day() == today.day()
        && birth_date.year() <= today.year()
}

/// Years, months and days lived as of `today`.
///
/// `days` counts from the last birthday unless the day of month has not been
/// reached yet, in which case it is taken from the length of the previous
/// month in [`DAYS_IN_MONTH`]. The table ignores leap years, so results
/// around February of a leap year are off by one day.
pub fn age_breakdown(birth_date: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let years = calculate_age(birth_date, today);
    let last_birthday = add_years(birth_date, years).unwrap_or(birth_date);
    let mut days = (today - last_birthday).num_days();

    let (birth_month, birth_day) = (birth_date.month() as i32, birth_date.day() as i32);
    let (month, day) = (today.month() as i32, today.day() as i32);

    let mut months = if month < birth_month || (month == birth_month && day < birth_day) {
        12 - (birth_month - month)
    } else {
        month - birth_month
    };

    if day < birth_day {
        months -= 1;
        let previous_month = if month == 1 { 12 } else { month - 1 };
        let days_in_previous = DAYS_IN_MONTH[(previous_month - 1) as usize] as i64;
        days = days_in_previous - i64::from(birth_day - day) + 1;
    }

    AgeBreakdown {
        years,
        months,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_age_on_anniversary() {
        assert_eq!(calculate_age(date(2006, 10, 18), date(2026, 10, 18)), 20);
    }

    #[test]
    fn test_age_day_before_anniversary() {
        // Naive year difference says 20
        assert_eq!(calculate_age(date(2006, 10, 19), date(2026, 10, 18)), 19);
        assert_eq!(calculate_age(date(2006, 12, 31), date(2027, 1, 1)), 20);
    }

    #[test]
    fn test_age_leap_day_birth() {
        assert_eq!(calculate_age(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(calculate_age(date(2000, 2, 29), date(2025, 3, 1)), 25);
        assert_eq!(calculate_age(date(2000, 2, 29), date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_age_future_birth_date() {
        assert_eq!(calculate_age(date(2027, 10, 18), date(2026, 10, 18)), -1);
        assert_eq!(calculate_age(date(2026, 12, 1), date(2026, 10, 18)), -1);
    }

    #[test]
    fn test_birthday_matches_month_and_day() {
        let today = date(2026, 10, 18);
        assert!(is_birthday_on(date(1990, 10, 18), today));
        assert!(is_birthday_on(today, today));
        assert!(!is_birthday_on(date(1990, 10, 17), today));
        assert!(!is_birthday_on(date(1990, 11, 18), today));
    }

    #[test]
    fn test_birthday_never_in_future_year() {
        let today = date(2026, 10, 18);
        assert!(!is_birthday_on(date(2027, 10, 18), today));
        assert!(!is_birthday_on(date(2100, 10, 18), today));
    }

    #[test]
    fn test_breakdown_exact_anniversary() {
        let breakdown = age_breakdown(date(2006, 10, 18), date(2026, 10, 18));
        assert_eq!(breakdown.to_string(), "20 years,\n0 months,\n0 days");
    }

    #[test]
    fn test_breakdown_day_reached_counts_days_since_birthday() {
        let breakdown = age_breakdown(date(1990, 5, 15), date(2026, 10, 18));
        assert_eq!(
            breakdown,
            AgeBreakdown {
                years: 36,
                months: 5,
                days: 156
            }
        );
    }

    #[test]
    fn test_breakdown_day_not_reached() {
        let breakdown = age_breakdown(date(1990, 5, 20), date(2026, 10, 18));
        assert_eq!(breakdown.to_string(), "36 years,\n4 months,\n29 days");
    }

    #[test]
    fn test_breakdown_birthday_later_this_year() {
        let breakdown = age_breakdown(date(1990, 12, 25), date(2026, 10, 18));
        assert_eq!(breakdown.to_string(), "35 years,\n9 months,\n24 days");
    }

    #[test]
    fn test_breakdown_january_uses_december_length() {
        let breakdown = age_breakdown(date(1990, 6, 20), date(2026, 1, 5));
        assert_eq!(breakdown.to_string(), "35 years,\n6 months,\n17 days");
    }

    #[test]
    fn test_breakdown_ignores_leap_february() {
        // February 2024 has 29 days; the table still says 28
        let breakdown = age_breakdown(date(2000, 1, 31), date(2024, 3, 10));
        assert_eq!(breakdown.to_string(), "24 years,\n1 months,\n8 days");
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        assert_eq!(add_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_years(date(2024, 2, 29), -4), Some(date(2020, 2, 29)));
    }
}
