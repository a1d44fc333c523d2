//! Domain-level errors.
//!
//! Independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A non-nullable field was absent from a record about to be written
    #[error("{0} must not be null")]
    MissingField(&'static str),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Unwrap a required draft field, reporting the column name when absent.
pub fn required<T>(field: &'static str, value: Option<T>) -> DomainResult<T> {
    value.ok_or(DomainError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_passes_present_values_through() {
        assert_eq!(required("name", Some("Alpha")), Ok("Alpha"));
    }

    #[test]
    fn required_names_the_missing_column() {
        let err = required::<String>("group_id", None).unwrap_err();
        assert_eq!(err, DomainError::MissingField("group_id"));
        assert_eq!(err.to_string(), "group_id must not be null");
    }
}
