//! Domain Entities
//!
//! - Profile: birthdate with its derived age and zodiac fields
//! - Greeting: read-only view of a profile on its birthday

mod greeting;
mod profile;

pub use greeting::*;
pub use profile::*;
