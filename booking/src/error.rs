//! Error types for the booking flow.

use crate::types::{FormField, SeatId};
use thiserror::Error;

/// Why a participant record was rejected.
///
/// Validation stops at the first failing rule, so a record is only ever
/// reported with one violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// A field was left empty
    #[error("All fields are required")]
    MissingField {
        /// The first empty field, in form order
        field: FormField,
    },

    /// National ID is not exactly 8 decimal digits
    #[error("National ID must be exactly 8 digits")]
    NationalId,

    /// Mobile number is not exactly 9 decimal digits
    #[error("Mobile number must be exactly 9 digits")]
    Mobile,

    /// Email does not look like `name@domain.tld`
    #[error("Enter a valid email address")]
    Email,
}

impl FieldViolation {
    /// Short stable name, used as a metrics label
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::NationalId => "national_id",
            Self::Mobile => "mobile",
            Self::Email => "email",
        }
    }
}

/// Errors surfaced to the user by the booking flow.
///
/// None of these are fatal: the session stays on its current screen (or, for
/// [`BookingError::SeatUnavailable`], returns to seat selection) and the user
/// can correct the input and resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The submitted access code is not on the allow-list
    #[error("Invalid access code")]
    InvalidAccessCode,

    /// The participant record failed validation
    #[error("{0}")]
    InvalidParticipantField(#[from] FieldViolation),

    /// The seat was reserved by someone else before this booking committed
    #[error("Seat {0} is no longer available")]
    SeatUnavailable(SeatId),
}

/// Error parsing a seat identifier from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatIdParseError {
    /// Text is not of the form `M<table>-A<seat>`
    #[error("seat id must look like M<table>-A<seat>, got {0:?}")]
    Malformed(String),
}

/// Invalid configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The venue must have at least one table
    #[error("venue must have at least one table")]
    NoTables,

    /// Each table must have at least one seat
    #[error("tables must have at least one seat")]
    NoSeats,

    /// A length that must be positive is zero, negative or not finite
    #[error("{name} must be a positive number, got {value}")]
    NonPositive {
        /// Configuration key
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A coordinate or angle is not finite
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Configuration key
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Nobody could ever get past the access screen
    #[error("at least one access code must be configured")]
    EmptyAccessList,
}
