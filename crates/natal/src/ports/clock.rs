//! Clock Port
//!
//! Source of the current calendar date.

use chrono::NaiveDate;

/// Provides "today" for age and birthday calculations
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
