//! Greeting - Birthday greeting shown when a profile's birthday is today
//!
//! Built while the profile's birth date notification is being delivered,
//! before the profile refreshes its own derived fields, so every value here
//! is computed from the birth date directly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Profile;
use crate::domain::services::age;
use crate::domain::value_objects::{AgeBreakdown, ChineseZodiac, WesternZodiac};

/// Read-only birthday greeting for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Greeting {
    pub profile_id: Uuid,
    pub birth_date: NaiveDate,
    pub age: i32,
    pub age_breakdown: AgeBreakdown,
    pub western_zodiac: WesternZodiac,
    pub chinese_zodiac: ChineseZodiac,
    pub zodiac_info: String,
}

impl Greeting {
    /// Greeting for `profile` as of its clock's today
    pub fn for_profile(profile: &Profile) -> Self {
        let birth_date = profile.birth_date();
        let today = profile.clock().today();
        let western_zodiac = WesternZodiac::from_month_day(birth_date.month(), birth_date.day());
        let chinese_zodiac = ChineseZodiac::from_year(birth_date.year());

        Self {
            profile_id: profile.id(),
            birth_date,
            age: age::calculate_age(birth_date, today),
            age_breakdown: age::age_breakdown(birth_date, today),
            western_zodiac,
            chinese_zodiac,
            zodiac_info: Profile::zodiac_info_text(
                profile.lookup(),
                western_zodiac,
                chinese_zodiac,
            ),
        }
    }

    pub fn title(&self) -> &'static str {
        "Happy Birthday!"
    }

    /// e.g. "Happy 21st birthday!"
    pub fn message(&self) -> String {
        format!("Happy {} birthday!", ordinal(self.age))
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FixedClock, ZodiacCatalog};
    use std::sync::Arc;

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (100, "100th"),
            (111, "111th"),
            (123, "123rd"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn test_greeting_for_profile() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let birth_date = NaiveDate::from_ymd_opt(2005, 10, 18).unwrap();
        let profile = Profile::with_birth_date(
            birth_date,
            Arc::new(ZodiacCatalog::new()),
            Arc::new(FixedClock::new(today)),
        );

        let greeting = Greeting::for_profile(&profile);

        assert_eq!(greeting.profile_id, profile.id());
        assert_eq!(greeting.age, 21);
        assert_eq!(greeting.message(), "Happy 21st birthday!");
        assert_eq!(greeting.age_breakdown.to_string(), "21 years,\n0 months,\n0 days");
        assert_eq!(greeting.western_zodiac, WesternZodiac::Libra);
        assert_eq!(greeting.chinese_zodiac, ChineseZodiac::Rooster);
        assert_eq!(greeting.zodiac_info, profile.zodiac_info());
    }
}
