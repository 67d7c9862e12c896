//! ChineseZodiac - Animal sign of the twelve-year cycle

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Chinese zodiac animal, derived from the Gregorian birth year
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChineseZodiac {
    #[default]
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiac {
    /// All animals in cycle order, starting from the Rat
    pub const ALL: [ChineseZodiac; 12] = [
        ChineseZodiac::Rat,
        ChineseZodiac::Ox,
        ChineseZodiac::Tiger,
        ChineseZodiac::Rabbit,
        ChineseZodiac::Dragon,
        ChineseZodiac::Snake,
        ChineseZodiac::Horse,
        ChineseZodiac::Goat,
        ChineseZodiac::Monkey,
        ChineseZodiac::Rooster,
        ChineseZodiac::Dog,
        ChineseZodiac::Pig,
    ];

    /// Animal for a Gregorian year. Year 4 opens a Rat cycle.
    ///
    /// The lunar new year boundary is not taken into account: every date in
    /// a calendar year maps to the same animal.
    pub fn from_year(year: i32) -> Self {
        // rem_euclid keeps the index in 0..12 for years before 4 AD
        Self::ALL[(year - 4).rem_euclid(12) as usize]
    }
}

impl std::fmt::Display for ChineseZodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChineseZodiac::Rat => write!(f, "Rat"),
            ChineseZodiac::Ox => write!(f, "Ox"),
            ChineseZodiac::Tiger => write!(f, "Tiger"),
            ChineseZodiac::Rabbit => write!(f, "Rabbit"),
            ChineseZodiac::Dragon => write!(f, "Dragon"),
            ChineseZodiac::Snake => write!(f, "Snake"),
            ChineseZodiac::Horse => write!(f, "Horse"),
            ChineseZodiac::Goat => write!(f, "Goat"),
            ChineseZodiac::Monkey => write!(f, "Monkey"),
            ChineseZodiac::Rooster => write!(f, "Rooster"),
            ChineseZodiac::Dog => write!(f, "Dog"),
            ChineseZodiac::Pig => write!(f, "Pig"),
        }
    }
}

impl std::str::FromStr for ChineseZodiac {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rat" => Ok(ChineseZodiac::Rat),
            "ox" => Ok(ChineseZodiac::Ox),
            "tiger" => Ok(ChineseZodiac::Tiger),
            "rabbit" => Ok(ChineseZodiac::Rabbit),
            "dragon" => Ok(ChineseZodiac::Dragon),
            "snake" => Ok(ChineseZodiac::Snake),
            "horse" => Ok(ChineseZodiac::Horse),
            "goat" => Ok(ChineseZodiac::Goat),
            "monkey" => Ok(ChineseZodiac::Monkey),
            "rooster" => Ok(ChineseZodiac::Rooster),
            "dog" => Ok(ChineseZodiac::Dog),
            "pig" => Ok(ChineseZodiac::Pig),
            _ => Err(DomainError::UnknownSign(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_year_known_years() {
        assert_eq!(ChineseZodiac::from_year(1900), ChineseZodiac::Rat);
        assert_eq!(ChineseZodiac::from_year(1985), ChineseZodiac::Ox);
        assert_eq!(ChineseZodiac::from_year(2000), ChineseZodiac::Dragon);
        assert_eq!(ChineseZodiac::from_year(2015), ChineseZodiac::Goat);
        assert_eq!(ChineseZodiac::from_year(2019), ChineseZodiac::Pig);
        assert_eq!(ChineseZodiac::from_year(2026), ChineseZodiac::Horse);
    }

    #[test]
    fn test_from_year_before_cycle_origin() {
        assert_eq!(ChineseZodiac::from_year(3), ChineseZodiac::Pig);
        assert_eq!(ChineseZodiac::from_year(-8), ChineseZodiac::Rat);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ROOSTER".parse::<ChineseZodiac>(), Ok(ChineseZodiac::Rooster));
        assert_eq!(" goat ".parse::<ChineseZodiac>(), Ok(ChineseZodiac::Goat));
        assert!("unicorn".parse::<ChineseZodiac>().is_err());
    }
}
