//! Profile - Birthdate and everything derived from it
//!
//! Setting the birth date validates it, keeps it even when invalid, and
//! refreshes the derived fields in a fixed order: age, birthday flag,
//! Chinese sign, Western sign, formatted age notification, zodiac text.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::observable::{EntityState, ObservableEntity};
use crate::domain::services::age;
use crate::domain::value_objects::{ChineseZodiac, ProfileField, WesternZodiac, ZodiacSign};
use crate::ports::{Clock, ZodiacLookup};
use crate::services::{SystemClock, ZodiacCatalog};

/// Youngest accepted age, inclusive
pub const MIN_AGE: i32 = 18;

/// First rejected age at the upper end
pub const MAX_AGE: i32 = 135;

pub const ERROR_TOO_YOUNG: &str = "User age can't be younger than 18";
pub const ERROR_TOO_OLD: &str = "User age must be less than 135 years";

/// Profile - birthdate with derived age, birthday flag and zodiac signs
pub struct Profile {
    id: Uuid,
    birth_date: NaiveDate,
    age: i32,
    is_birthday_today: bool,
    chinese_zodiac: ChineseZodiac,
    western_zodiac: WesternZodiac,
    zodiac_info: String,
    lookup: Arc<dyn ZodiacLookup>,
    clock: Arc<dyn Clock>,
    state: EntityState<Profile>,
}

/// Serializable copy of a profile's current values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub id: Uuid,
    pub birth_date: NaiveDate,
    pub age: i32,
    pub is_birthday_today: bool,
    pub chinese_zodiac: ChineseZodiac,
    pub western_zodiac: WesternZodiac,
    pub formatted_age: String,
    pub zodiac_info: String,
    pub errors: Vec<String>,
}

impl Profile {
    /// Create a profile born today
    pub fn new(lookup: Arc<dyn ZodiacLookup>, clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self::with_birth_date(today, lookup, clock)
    }

    /// Create a profile with the given birth date, validated and fully derived
    pub fn with_birth_date(
        birth_date: NaiveDate,
        lookup: Arc<dyn ZodiacLookup>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut profile = Self {
            id: Uuid::new_v4(),
            birth_date,
            age: 0,
            is_birthday_today: false,
            chinese_zodiac: ChineseZodiac::default(),
            western_zodiac: WesternZodiac::default(),
            zodiac_info: String::new(),
            lookup,
            clock,
            state: EntityState::new(),
        };
        profile.validate_birth_date();
        profile.refresh_derived();
        profile
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn is_birthday_today(&self) -> bool {
        self.is_birthday_today
    }

    pub fn chinese_zodiac(&self) -> ChineseZodiac {
        self.chinese_zodiac
    }

    pub fn western_zodiac(&self) -> WesternZodiac {
        self.western_zodiac
    }

    pub fn zodiac_info(&self) -> &str {
        &self.zodiac_info
    }

    pub fn lookup(&self) -> &dyn ZodiacLookup {
        self.lookup.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Set the birth date.
    ///
    /// The value is stored even if validation flags it. Returns false, with
    /// no notifications at all, if the date is unchanged.
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) -> bool {
        let changed = self.set_field_validated(
            |p| &mut p.birth_date,
            birth_date,
            ProfileField::BirthDate,
            Profile::validate_birth_date,
        );

        if changed {
            self.refresh_derived();
        }
        changed
    }

    /// Age breakdown as `"{years} years,\n{months} months,\n{days} days"`.
    ///
    /// Computed on every call from the birth date and today's date.
    pub fn formatted_age(&self) -> String {
        age::age_breakdown(self.birth_date, self.clock.today()).to_string()
    }

    /// Completed years as of today for an arbitrary birth date
    pub fn calculate_age(&self, birth_date: NaiveDate) -> i32 {
        age::calculate_age(birth_date, self.clock.today())
    }

    /// Whether today is the anniversary of an arbitrary birth date
    pub fn calculate_is_birthday_today(&self, birth_date: NaiveDate) -> bool {
        age::is_birthday_on(birth_date, self.clock.today())
    }

    /// Recompute the descriptive zodiac text from the current signs
    pub fn update_zodiac_info(&mut self) {
        let info =
            Self::zodiac_info_text(self.lookup(), self.western_zodiac, self.chinese_zodiac);
        self.set_field(|p| &mut p.zodiac_info, info, ProfileField::ZodiacInfo);
    }

    /// Western description, a newline, then the Chinese description
    pub fn zodiac_info_text(
        lookup: &dyn ZodiacLookup,
        western: WesternZodiac,
        chinese: ChineseZodiac,
    ) -> String {
        format!(
            "{}\n{}",
            lookup.describe(ZodiacSign::Western(western)),
            lookup.describe(ZodiacSign::Chinese(chinese))
        )
    }

    /// Rebuild the birth date errors from the stored value.
    ///
    /// Both bounds are checked independently.
    pub fn validate_birth_date(&mut self) {
        self.clear_errors(ProfileField::BirthDate);

        let years = self.calculate_age(self.birth_date);
        if years < MIN_AGE {
            self.add_error(ProfileField::BirthDate, ERROR_TOO_YOUNG);
        }
        if years >= MAX_AGE {
            self.add_error(ProfileField::BirthDate, ERROR_TOO_OLD);
        }

        if let Some(errors) = self.field_errors(ProfileField::BirthDate) {
            tracing::warn!(
                birth_date = %self.birth_date,
                age = years,
                errors = ?errors,
                "Birth date flagged by validation"
            );
        }
    }

    /// Errors recorded for the birth date, empty if valid
    pub fn birth_date_errors(&self) -> &[String] {
        self.field_errors(ProfileField::BirthDate).unwrap_or_default()
    }

    /// First birth date error as a [`DomainError::Validation`]
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        match self.birth_date_errors().first() {
            Some(message) => Err(DomainError::Validation(message.clone())),
            None => Ok(()),
        }
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            id: self.id,
            birth_date: self.birth_date,
            age: self.age,
            is_birthday_today: self.is_birthday_today,
            chinese_zodiac: self.chinese_zodiac,
            western_zodiac: self.western_zodiac,
            formatted_age: self.formatted_age(),
            zodiac_info: self.zodiac_info.clone(),
            errors: self.birth_date_errors().to_vec(),
        }
    }

    fn refresh_derived(&mut self) {
        let birth_date = self.birth_date;
        let today = self.clock.today();

        let years = age::calculate_age(birth_date, today);
        self.set_field(|p| &mut p.age, years, ProfileField::Age);

        let birthday = age::is_birthday_on(birth_date, today);
        self.set_field(|p| &mut p.is_birthday_today, birthday, ProfileField::IsBirthdayToday);

        let chinese = ChineseZodiac::from_year(birth_date.year());
        self.set_field(|p| &mut p.chinese_zodiac, chinese, ProfileField::ChineseZodiac);

        let western = WesternZodiac::from_month_day(birth_date.month(), birth_date.day());
        self.set_field(|p| &mut p.western_zodiac, western, ProfileField::WesternZodiac);

        self.notify_field_changed(ProfileField::FormattedAge);
        self.update_zodiac_info();

        tracing::debug!(
            profile_id = %self.id,
            %birth_date,
            age = self.age,
            chinese = %self.chinese_zodiac,
            western = %self.western_zodiac,
            "Profile derived fields refreshed"
        );
    }
}

impl Default for Profile {
    /// Born today, using the built-in zodiac catalog and the system clock
    fn default() -> Self {
        Self::new(Arc::new(ZodiacCatalog::new()), Arc::new(SystemClock))
    }
}

/// Profiles compare by identity, not by value
impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Profile {}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("birth_date", &self.birth_date)
            .field("age", &self.age)
            .field("is_birthday_today", &self.is_birthday_today)
            .field("chinese_zodiac", &self.chinese_zodiac)
            .field("western_zodiac", &self.western_zodiac)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ObservableEntity for Profile {
    type Field = ProfileField;

    fn entity_state(&self) -> &EntityState<Self> {
        &self.state
    }

    fn entity_state_mut(&mut self) -> &mut EntityState<Self> {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    fn profile_born(birth_date: NaiveDate) -> Profile {
        Profile::with_birth_date(
            birth_date,
            Arc::new(ZodiacCatalog::new()),
            Arc::new(FixedClock::new(today())),
        )
    }

    fn record(profile: &mut Profile) -> Rc<RefCell<Vec<ProfileField>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        profile.subscribe(move |_, field| sink.borrow_mut().push(field));
        seen
    }

    #[test]
    fn test_new_defaults_to_today() {
        let profile = Profile::new(
            Arc::new(ZodiacCatalog::new()),
            Arc::new(FixedClock::new(today())),
        );

        assert_eq!(profile.birth_date(), today());
        assert_eq!(profile.age(), 0);
        assert!(profile.is_birthday_today());
        assert_eq!(profile.birth_date_errors(), [ERROR_TOO_YOUNG]);
    }

    #[test]
    fn test_construction_derives_everything() {
        let profile = profile_born(date(1990, 5, 15));

        assert_eq!(profile.age(), 36);
        assert!(!profile.is_birthday_today());
        assert_eq!(profile.chinese_zodiac(), ChineseZodiac::Horse);
        assert_eq!(profile.western_zodiac(), WesternZodiac::Taurus);
        assert!(profile.birth_date_errors().is_empty());
        assert!(!profile.zodiac_info().is_empty());
    }

    #[test]
    fn test_twenty_years_ago_today() {
        let mut profile = profile_born(date(1990, 1, 1));

        profile.set_birth_date(date(2006, 10, 18));

        assert_eq!(profile.age(), 20);
        assert!(profile.is_birthday_today());
        assert_eq!(profile.formatted_age(), "20 years,\n0 months,\n0 days");
        assert!(profile.birth_date_errors().is_empty());
        assert_eq!(profile.ensure_valid(), Ok(()));
    }

    #[test]
    fn test_seventeen_is_flagged_but_kept() {
        let mut profile = profile_born(date(1990, 1, 1));

        assert!(profile.set_birth_date(date(2009, 10, 18)));

        assert_eq!(profile.birth_date(), date(2009, 10, 18));
        assert_eq!(profile.age(), 17);
        assert_eq!(profile.chinese_zodiac(), ChineseZodiac::Ox);
        assert_eq!(profile.western_zodiac(), WesternZodiac::Libra);
        let errors = profile.birth_date_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("younger than 18"));
        assert_eq!(
            profile.ensure_valid(),
            Err(DomainError::Validation(ERROR_TOO_YOUNG.to_string()))
        );
    }

    #[test]
    fn test_upper_age_bound() {
        let mut profile = profile_born(date(1990, 1, 1));

        profile.set_birth_date(date(1891, 10, 18));
        assert_eq!(profile.age(), 135);
        let errors = profile.birth_date_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be less than 135"));

        profile.set_birth_date(date(1891, 10, 19));
        assert_eq!(profile.age(), 134);
        assert!(profile.birth_date_errors().is_empty());
    }

    #[test]
    fn test_lower_age_bound() {
        let mut profile = profile_born(date(1990, 1, 1));

        profile.set_birth_date(date(2008, 10, 18));
        assert_eq!(profile.age(), 18);
        assert!(profile.birth_date_errors().is_empty());

        profile.set_birth_date(date(2008, 10, 19));
        assert_eq!(profile.age(), 17);
        assert_eq!(profile.birth_date_errors(), [ERROR_TOO_YOUNG]);
    }

    #[test]
    fn test_valid_date_clears_previous_errors() {
        let mut profile = profile_born(date(2015, 3, 3));
        assert!(!profile.birth_date_errors().is_empty());

        profile.set_birth_date(date(1980, 3, 3));

        assert!(profile.birth_date_errors().is_empty());
        assert!(!profile.has_errors());
    }

    #[test]
    fn test_future_birthday_is_not_today() {
        let mut profile = profile_born(date(1990, 1, 1));

        profile.set_birth_date(date(2027, 10, 18));

        assert!(!profile.is_birthday_today());
        assert_eq!(profile.age(), -1);
        assert_eq!(profile.birth_date_errors(), [ERROR_TOO_YOUNG]);
    }

    #[test]
    fn test_zodiac_info_is_western_then_chinese() {
        let mut profile = profile_born(date(1990, 1, 1));
        let catalog = ZodiacCatalog::new();

        profile.set_birth_date(date(1988, 7, 30));

        let expected = format!(
            "{}\n{}",
            catalog.describe(ZodiacSign::Western(WesternZodiac::Leo)),
            catalog.describe(ZodiacSign::Chinese(ChineseZodiac::Dragon))
        );
        assert_eq!(profile.zodiac_info(), expected);
    }

    #[test]
    fn test_notification_order() {
        let mut profile = profile_born(date(1990, 5, 15));
        let seen = record(&mut profile);

        profile.set_birth_date(date(1988, 7, 30));

        assert_eq!(
            *seen.borrow(),
            vec![
                ProfileField::BirthDate,
                ProfileField::Age,
                ProfileField::ChineseZodiac,
                ProfileField::WesternZodiac,
                ProfileField::FormattedAge,
                ProfileField::ZodiacInfo,
            ]
        );
    }

    #[test]
    fn test_unchanged_derived_fields_are_not_notified() {
        let mut profile = profile_born(date(1990, 5, 15));
        let seen = record(&mut profile);

        // Same year, same sign, same age
        profile.set_birth_date(date(1990, 5, 16));

        assert_eq!(
            *seen.borrow(),
            vec![ProfileField::BirthDate, ProfileField::FormattedAge]
        );
    }

    #[test]
    fn test_setting_same_date_is_idempotent() {
        let mut profile = profile_born(date(1990, 1, 1));
        profile.set_birth_date(date(1988, 7, 30));
        let before = profile.snapshot();
        let seen = record(&mut profile);

        assert!(!profile.set_birth_date(date(1988, 7, 30)));

        assert_eq!(profile.snapshot(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_profiles_compare_by_identity() {
        let a = profile_born(date(1990, 1, 1));
        let b = profile_born(date(1990, 1, 1));

        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_snapshot_serializes() {
        let profile = profile_born(date(2006, 10, 18));

        let json = serde_json::to_value(profile.snapshot()).unwrap();

        assert_eq!(json["age"], 20);
        assert_eq!(json["is_birthday_today"], true);
        assert_eq!(json["western_zodiac"], "libra");
        assert_eq!(json["chinese_zodiac"], "dog");
        assert_eq!(json["formatted_age"], "20 years,\n0 months,\n0 days");
    }
}
