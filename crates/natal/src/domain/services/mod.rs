//! Domain Services
//!
//! Stateless calculations shared by entities and view models.

pub mod age;
pub mod date_input;

pub use age::*;
pub use date_input::*;
