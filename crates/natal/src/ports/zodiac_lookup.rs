//! Zodiac Lookup Port
//!
//! Abstract interface for descriptive zodiac text.

use crate::domain::value_objects::ZodiacSign;

/// Maps a sign to human-readable descriptive text.
///
/// Implementations must be pure: the same sign always yields the same text.
pub trait ZodiacLookup: Send + Sync {
    fn describe(&self, sign: ZodiacSign) -> String;
}
