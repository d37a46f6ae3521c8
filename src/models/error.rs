use chrono::NaiveDate;
use thiserror::Error;

/// A field that failed its domain constraint while building an entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Size must be greater than zero.")]
    NonPositiveSize,

    #[error("Number of {field} cannot be negative.")]
    NegativeCount { field: &'static str },

    #[error("Price cannot be negative.")]
    NegativePrice,

    #[error("Invalid date format for {field}, expected YYYY-MM-DD.")]
    InvalidDate { field: &'static str },

    #[error("{field} must be between {earliest} and {latest}.")]
    DateOutOfRange {
        field: &'static str,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,

    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    InvalidPhone,

    #[error(
        "Emails should be of the format local-part@domain. The local-part may contain \
         alphanumerics and + _ . - but may not start or end with a special character. \
         The domain is made of labels separated by periods; each label starts and ends \
         with an alphanumeric, may contain hyphens, and the last label is at least 2 characters long."
    )]
    InvalidEmail,

    #[error("Tags names should be alphanumeric")]
    InvalidTag,
}
