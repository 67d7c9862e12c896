//! Parsing of user-entered dates

use chrono::NaiveDate;

use crate::domain::errors::DomainError;

/// Format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `input` with a chrono format string, ignoring surrounding whitespace
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), format)
        .map_err(|_| DomainError::invalid_date(input.trim(), format))
}
