//! Zodiac Catalog - Built-in sign descriptions
//!
//! Default [`ZodiacLookup`] with one short paragraph per sign. Individual
//! descriptions can be replaced, e.g. from user configuration.

use std::collections::HashMap;

use crate::domain::value_objects::{ChineseZodiac, WesternZodiac, ZodiacSign};
use crate::ports::ZodiacLookup;

/// Built-in description tables with optional per-sign overrides
#[derive(Debug, Clone, Default)]
pub struct ZodiacCatalog {
    overrides: HashMap<ZodiacSign, String>,
}

impl ZodiacCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description of one sign
    pub fn with_description(mut self, sign: impl Into<ZodiacSign>, text: impl Into<String>) -> Self {
        self.overrides.insert(sign.into(), text.into());
        self
    }

    /// Number of overridden descriptions
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn western(sign: WesternZodiac) -> &'static str {
        match sign {
            WesternZodiac::Aries => {
                "Aries (Mar 21 - Apr 19): a fire sign ruled by Mars. Bold, energetic and quick to start new things."
            }
            WesternZodiac::Taurus => {
                "Taurus (Apr 20 - May 20): an earth sign ruled by Venus. Patient, reliable and fond of comfort."
            }
            WesternZodiac::Gemini => {
                "Gemini (May 21 - Jun 20): an air sign ruled by Mercury. Curious, talkative and adaptable."
            }
            WesternZodiac::Cancer => {
                "Cancer (Jun 21 - Jul 22): a water sign ruled by the Moon. Caring, protective and loyal to home."
            }
            WesternZodiac::Leo => {
                "Leo (Jul 23 - Aug 22): a fire sign ruled by the Sun. Generous, confident and warm-hearted."
            }
            WesternZodiac::Virgo => {
                "Virgo (Aug 23 - Sep 22): an earth sign ruled by Mercury. Precise, practical and helpful."
            }
            WesternZodiac::Libra => {
                "Libra (Sep 23 - Oct 22): an air sign ruled by Venus. Diplomatic, fair-minded and sociable."
            }
            WesternZodiac::Scorpio => {
                "Scorpio (Oct 23 - Nov 21): a water sign ruled by Pluto. Intense, determined and perceptive."
            }
            WesternZodiac::Sagittarius => {
                "Sagittarius (Nov 22 - Dec 21): a fire sign ruled by Jupiter. Optimistic, adventurous and candid."
            }
            WesternZodiac::Capricorn => {
                "Capricorn (Dec 22 - Jan 19): an earth sign ruled by Saturn. Disciplined, ambitious and steady."
            }
            WesternZodiac::Aquarius => {
                "Aquarius (Jan 20 - Feb 18): an air sign ruled by Uranus. Independent, inventive and humane."
            }
            WesternZodiac::Pisces => {
                "Pisces (Feb 19 - Mar 20): a water sign ruled by Neptune. Imaginative, gentle and intuitive."
            }
        }
    }

    fn chinese(sign: ChineseZodiac) -> &'static str {
        match sign {
            ChineseZodiac::Rat => "Year of the Rat: quick-witted, resourceful and versatile.",
            ChineseZodiac::Ox => "Year of the Ox: diligent, dependable and determined.",
            ChineseZodiac::Tiger => "Year of the Tiger: brave, competitive and confident.",
            ChineseZodiac::Rabbit => "Year of the Rabbit: quiet, elegant and kind.",
            ChineseZodiac::Dragon => "Year of the Dragon: confident, intelligent and enthusiastic.",
            ChineseZodiac::Snake => "Year of the Snake: wise, enigmatic and intuitive.",
            ChineseZodiac::Horse => "Year of the Horse: animated, active and energetic.",
            ChineseZodiac::Goat => "Year of the Goat: calm, gentle and sympathetic.",
            ChineseZodiac::Monkey => "Year of the Monkey: sharp, smart and curious.",
            ChineseZodiac::Rooster => "Year of the Rooster: observant, hardworking and courageous.",
            ChineseZodiac::Dog => "Year of the Dog: loyal, honest and prudent.",
            ChineseZodiac::Pig => "Year of the Pig: compassionate, generous and diligent.",
        }
    }
}

impl ZodiacLookup for ZodiacCatalog {
    fn describe(&self, sign: ZodiacSign) -> String {
        if let Some(text) = self.overrides.get(&sign) {
            return text.clone();
        }

        match sign {
            ZodiacSign::Western(sign) => Self::western(sign).to_string(),
            ZodiacSign::Chinese(sign) => Self::chinese(sign).to_string(),
        }
    }
}
