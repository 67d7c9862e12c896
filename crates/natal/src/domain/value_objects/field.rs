//! Field identifiers for change notifications and validation errors

use serde::{Deserialize, Serialize};

/// Observable fields of a [`Profile`](crate::domain::Profile)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    BirthDate,
    Age,
    IsBirthdayToday,
    ChineseZodiac,
    WesternZodiac,
    /// Computed on read; notified whenever the birth date changes
    FormattedAge,
    ZodiacInfo,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileField::BirthDate => write!(f, "birth_date"),
            ProfileField::Age => write!(f, "age"),
            ProfileField::IsBirthdayToday => write!(f, "is_birthday_today"),
            ProfileField::ChineseZodiac => write!(f, "chinese_zodiac"),
            ProfileField::WesternZodiac => write!(f, "western_zodiac"),
            ProfileField::FormattedAge => write!(f, "formatted_age"),
            ProfileField::ZodiacInfo => write!(f, "zodiac_info"),
        }
    }
}

/// Observable fields of a [`ProfileViewModel`](crate::application::ProfileViewModel)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewModelField {
    Profile,
}

impl std::fmt::Display for ViewModelField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewModelField::Profile => write!(f, "profile"),
        }
    }
}
