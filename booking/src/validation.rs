//! Input validation for the booking flow.
//!
//! Two independent rule sets, both pure:
//!
//! - [`AccessCodes::validate`] gates the access screen against an allow-list.
//! - [`validate_participant`] checks the participant form before a seat is
//!   committed, stopping at the first rule that fails.

use crate::error::{BookingError, FieldViolation};
use crate::types::{FormField, ParticipantForm};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Required length of a national ID
pub const NATIONAL_ID_LEN: usize = 8;

/// Required length of a mobile number
pub const MOBILE_LEN: usize = 9;

/// Codes accepted when no allow-list is configured
pub const DEFAULT_ACCESS_CODES: [&str; 3] = ["FIGMM2025", "EGRESADO001", "REENCUENTRO01"];

// Matches `x@y.z` anywhere in the text.
#[allow(clippy::expect_used)] // Literal pattern
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// The allow-list of access codes.
///
/// Matching is case-insensitive: codes are stored upper-cased and the
/// candidate is upper-cased before lookup. Surrounding whitespace is *not*
/// stripped, so `"  FIGMM2025"` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCodes {
    codes: BTreeSet<String>,
}

impl AccessCodes {
    /// Build an allow-list from any collection of codes
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|code| code.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Number of distinct codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the allow-list is empty (nobody can get in)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `candidate` matches a code on the list
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        self.codes.contains(&candidate.to_uppercase())
    }

    /// Check a submitted access code
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidAccessCode`] if the code is not on the list.
    pub fn validate(&self, candidate: &str) -> Result<(), BookingError> {
        if self.accepts(candidate) {
            Ok(())
        } else {
            Err(BookingError::InvalidAccessCode)
        }
    }
}

impl Default for AccessCodes {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODES)
    }
}

/// Check a participant record
///
/// Rules, in order: every field present, national ID of exactly
/// [`NATIONAL_ID_LEN`] digits, mobile of exactly [`MOBILE_LEN`] digits,
/// email matching `\S+@\S+\.\S+`.
///
/// # Errors
///
/// Returns the [`FieldViolation`] of the first rule that fails.
pub fn validate_participant(form: &ParticipantForm) -> Result<(), FieldViolation> {
    if let Some(field) = FormField::ALL.into_iter().find(|f| form.get(*f).is_empty()) {
        return Err(FieldViolation::MissingField { field });
    }

    if !is_digits_of_len(&form.national_id, NATIONAL_ID_LEN) {
        return Err(FieldViolation::NationalId);
    }

    if !is_digits_of_len(&form.mobile, MOBILE_LEN) {
        return Err(FieldViolation::Mobile);
    }

    if !EMAIL_PATTERN.is_match(&form.email) {
        return Err(FieldViolation::Email);
    }

    Ok(())
}

fn is_digits_of_len(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
