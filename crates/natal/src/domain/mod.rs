//! Domain Layer
//!
//! Pure domain logic without presentation dependencies.
//! Contains the observable entity base, entities, value objects,
//! domain services, and errors.

pub mod entities;
pub mod errors;
pub mod observable;
pub mod services;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use observable::*;
pub use services::*;
pub use value_objects::*;
