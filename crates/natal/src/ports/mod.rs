//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with collaborators outside of it: the zodiac description
//! tables, the current date, and the presentation layer.
//!
//! Default implementations of the first two live in [`crate::services`];
//! presenters live with the front-end.

mod clock;
mod presenter;
mod zodiac_lookup;

pub use clock::*;
pub use presenter::*;
pub use zodiac_lookup::*;
