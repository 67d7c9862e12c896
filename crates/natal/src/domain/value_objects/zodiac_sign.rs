//! ZodiacSign - Either kind of sign, as handed to a lookup

use serde::{Deserialize, Serialize};

use super::{ChineseZodiac, WesternZodiac};
use crate::domain::errors::DomainError;

/// A sign from either zodiac
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "system", content = "sign", rename_all = "snake_case")]
pub enum ZodiacSign {
    Western(WesternZodiac),
    Chinese(ChineseZodiac),
}

impl From<WesternZodiac> for ZodiacSign {
    fn from(sign: WesternZodiac) -> Self {
        ZodiacSign::Western(sign)
    }
}

impl From<ChineseZodiac> for ZodiacSign {
    fn from(sign: ChineseZodiac) -> Self {
        ZodiacSign::Chinese(sign)
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZodiacSign::Western(sign) => write!(f, "{}", sign),
            ZodiacSign::Chinese(sign) => write!(f, "{}", sign),
        }
    }
}

/// Sign names do not overlap between the two zodiacs, so a bare name
/// resolves unambiguously.
impl std::str::FromStr for ZodiacSign {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<WesternZodiac>()
            .map(ZodiacSign::Western)
            .or_else(|_| s.parse::<ChineseZodiac>().map(ZodiacSign::Chinese))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_either_zodiac() {
        assert_eq!(
            "leo".parse::<ZodiacSign>(),
            Ok(ZodiacSign::Western(WesternZodiac::Leo))
        );
        assert_eq!(
            "Dragon".parse::<ZodiacSign>(),
            Ok(ZodiacSign::Chinese(ChineseZodiac::Dragon))
        );
    }

    #[test]
    fn test_parse_unknown_sign() {
        assert_eq!(
            "ophiuchus".parse::<ZodiacSign>(),
            Err(DomainError::UnknownSign("ophiuchus".to_string()))
        );
    }

    #[test]
    fn test_sign_names_are_disjoint() {
        for western in WesternZodiac::ALL {
            assert!(western.to_string().parse::<ChineseZodiac>().is_err());
        }
    }
}
