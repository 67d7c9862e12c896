//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod age_breakdown;
mod chinese_zodiac;
mod field;
mod western_zodiac;
mod zodiac_sign;

pub use age_breakdown::*;
pub use chinese_zodiac::*;
pub use field::*;
pub use western_zodiac::*;
pub use zodiac_sign::*;
