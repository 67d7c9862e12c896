//! Natal Domain Library
//!
//! Birthdate profile model: age, age breakdown, Chinese and Western zodiac
//! signs, and birthday detection, with change notification for a
//! data-bound front-end.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `observable`: change notification and per-field validation errors
//!   - `entities/`: Profile, Greeting
//!   - `value_objects/`: ChineseZodiac, WesternZodiac, ZodiacSign, fields
//!   - `services/`: age arithmetic
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): ZodiacLookup, Clock, Presenter
//!
//! - **Services** (`services/`): built-in adapters for the ports
//!
//! - **Application** (`application/`): ProfileViewModel
//!
//! # Usage
//!
//! ```rust,ignore
//! use natal::{ObservableEntity, Profile, ProfileViewModel};
//!
//! let mut view_model = ProfileViewModel::with_default_profile(presenter);
//! view_model.set_birth_date(birth_date);
//! println!("{}", view_model.profile().formatted_age());
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use application::ProfileViewModel;
pub use domain::{
    age_breakdown, calculate_age, is_birthday_on, parse_date, AgeBreakdown, ChineseZodiac,
    DomainError, EntityState, Greeting, ObservableEntity, Profile, ProfileField,
    ProfileSnapshot, SubscriptionId, ViewModelField, WesternZodiac, ZodiacSign,
    DEFAULT_DATE_FORMAT, ERROR_TOO_OLD, ERROR_TOO_YOUNG, MAX_AGE, MIN_AGE,
};
pub use ports::{Alert, AlertKind, Clock, Presenter, ZodiacLookup};
pub use services::{FixedClock, SystemClock, ZodiacCatalog};
