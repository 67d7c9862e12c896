//! AgeBreakdown - Years, months and days lived

use serde::{Deserialize, Serialize};

/// Age split into completed years, months and days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

/// Renders as `"{years} years,\n{months} months,\n{days} days"`
impl std::fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years,\n{} months,\n{} days",
            self.years, self.months, self.days
        )
    }
}
