//! Default adapters for the domain ports

pub mod clock;
pub mod zodiac_catalog;

// Re-exports
pub use clock::{FixedClock, SystemClock};
pub use zodiac_catalog::ZodiacCatalog;
