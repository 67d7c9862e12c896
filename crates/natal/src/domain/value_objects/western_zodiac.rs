//! WesternZodiac - Tropical sun sign

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Western zodiac sign, derived from the birth month and day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WesternZodiac {
    #[default]
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl WesternZodiac {
    pub const ALL: [WesternZodiac; 12] = [
        WesternZodiac::Aries,
        WesternZodiac::Taurus,
        WesternZodiac::Gemini,
        WesternZodiac::Cancer,
        WesternZodiac::Leo,
        WesternZodiac::Virgo,
        WesternZodiac::Libra,
        WesternZodiac::Scorpio,
        WesternZodiac::Sagittarius,
        WesternZodiac::Capricorn,
        WesternZodiac::Aquarius,
        WesternZodiac::Pisces,
    ];

    /// Sign for a calendar month (1-12) and day of month.
    ///
    /// Each entry is the first day of the sign that starts in that month;
    /// days before it belong to the previous sign.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        const CUSPS: [(u32, WesternZodiac, WesternZodiac); 12] = [
            (20, WesternZodiac::Capricorn, WesternZodiac::Aquarius),
            (19, WesternZodiac::Aquarius, WesternZodiac::Pisces),
            (21, WesternZodiac::Pisces, WesternZodiac::Aries),
            (20, WesternZodiac::Aries, WesternZodiac::Taurus),
            (21, WesternZodiac::Taurus, WesternZodiac::Gemini),
            (21, WesternZodiac::Gemini, WesternZodiac::Cancer),
            (23, WesternZodiac::Cancer, WesternZodiac::Leo),
            (23, WesternZodiac::Leo, WesternZodiac::Virgo),
            (23, WesternZodiac::Virgo, WesternZodiac::Libra),
            (23, WesternZodiac::Libra, WesternZodiac::Scorpio),
            (22, WesternZodiac::Scorpio, WesternZodiac::Sagittarius),
            (22, WesternZodiac::Sagittarius, WesternZodiac::Capricorn),
        ];

        let index = (month.clamp(1, 12) - 1) as usize;
        let (cusp, before, from) = CUSPS[index];
        if day < cusp {
            before
        } else {
            from
        }
    }
}

impl std::fmt::Display for WesternZodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WesternZodiac::Aries => write!(f, "Aries"),
            WesternZodiac::Taurus => write!(f, "Taurus"),
            WesternZodiac::Gemini => write!(f, "Gemini"),
            WesternZodiac::Cancer => write!(f, "Cancer"),
            WesternZodiac::Leo => write!(f, "Leo"),
            WesternZodiac::Virgo => write!(f, "Virgo"),
            WesternZodiac::Libra => write!(f, "Libra"),
            WesternZodiac::Scorpio => write!(f, "Scorpio"),
            WesternZodiac::Sagittarius => write!(f, "Sagittarius"),
            WesternZodiac::Capricorn => write!(f, "Capricorn"),
            WesternZodiac::Aquarius => write!(f, "Aquarius"),
            WesternZodiac::Pisces => write!(f, "Pisces"),
        }
    }
}

impl std::str::FromStr for WesternZodiac {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aries" => Ok(WesternZodiac::Aries),
            "taurus" => Ok(WesternZodiac::Taurus),
            "gemini" => Ok(WesternZodiac::Gemini),
            "cancer" => Ok(WesternZodiac::Cancer),
            "leo" => Ok(WesternZodiac::Leo),
            "virgo" => Ok(WesternZodiac::Virgo),
            "libra" => Ok(WesternZodiac::Libra),
            "scorpio" => Ok(WesternZodiac::Scorpio),
            "sagittarius" => Ok(WesternZodiac::Sagittarius),
            "capricorn" => Ok(WesternZodiac::Capricorn),
            "aquarius" => Ok(WesternZodiac::Aquarius),
            "pisces" => Ok(WesternZodiac::Pisces),
            _ => Err(DomainError::UnknownSign(s.to_string())),
        }
    }
}
