//! Domain types for the seating reservation flow.
//!
//! Value objects shared by the layout, validation and booking modules:
//! seat identifiers, venue coordinates, the participant form and the ticket
//! issued on confirmation.

use crate::error::SeatIdParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a seat: its table and its position at that table.
///
/// Both numbers are 1-based. The canonical text form is `M<table>-A<seat>`,
/// e.g. `M12-A3`. Ordering is table-major, then seat-minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    table: u16,
    seat: u16,
}

impl SeatId {
    /// Creates a seat identifier from its table and seat numbers
    #[must_use]
    pub const fn new(table: u16, seat: u16) -> Self {
        Self { table, seat }
    }

    /// Table number (1-based)
    #[must_use]
    pub const fn table(&self) -> u16 {
        self.table
    }

    /// Seat number within the table (1-based)
    #[must_use]
    pub const fn seat(&self) -> u16 {
        self.seat
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}-A{}", self.table, self.seat)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SeatIdParseError::Malformed(s.to_string());

        let (table, seat) = s
            .strip_prefix('M')
            .and_then(|rest| rest.split_once("-A"))
            .ok_or_else(malformed)?;

        let table = parse_ordinal(table).ok_or_else(malformed)?;
        let seat = parse_ordinal(seat).ok_or_else(malformed)?;
        Ok(Self::new(table, seat))
    }
}

/// Parses a positive decimal number written without sign or leading zeros.
fn parse_ordinal(digits: &str) -> Option<u16> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A point on the venue plan, in plan units (the plan is 800 × 600 by default).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downwards, like the rendered plan)
    pub y: f64,
}

impl Point {
    /// Creates a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One bookable seat of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Seat {
    /// Seat identifier
    pub id: SeatId,
    /// Angular offset around the table, in degrees (seat 1 is at 0°)
    pub angle: f64,
}

impl Seat {
    /// Table this seat belongs to
    #[must_use]
    pub const fn table(&self) -> u16 {
        self.id.table()
    }

    /// Seat number within its table
    #[must_use]
    pub const fn number(&self) -> u16 {
        self.id.seat()
    }
}

// ============================================================================
// Participant
// ============================================================================

/// One field of the participant form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Given names
    GivenNames,
    /// Surnames
    Surnames,
    /// National identity document number
    NationalId,
    /// Mobile phone number
    Mobile,
    /// Contact email
    Email,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [Self; 5] = [
        Self::GivenNames,
        Self::Surnames,
        Self::NationalId,
        Self::Mobile,
        Self::Email,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GivenNames => "given names",
            Self::Surnames => "surnames",
            Self::NationalId => "national ID",
            Self::Mobile => "mobile number",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = String;

    /// Accepts the English field names and the names printed on the paper
    /// form (`nombres`, `apellidos`, `dni`, `celular`, `email`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "given_names" | "names" | "nombres" => Ok(Self::GivenNames),
            "surnames" | "apellidos" => Ok(Self::Surnames),
            "national_id" | "dni" => Ok(Self::NationalId),
            "mobile" | "celular" => Ok(Self::Mobile),
            "email" | "correo" => Ok(Self::Email),
            other => Err(format!("unknown form field: {other}")),
        }
    }
}

/// The participant record typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantForm {
    /// Given names
    pub given_names: String,
    /// Surnames
    pub surnames: String,
    /// National ID (8 digits)
    pub national_id: String,
    /// Mobile number (9 digits)
    pub mobile: String,
    /// Contact email
    pub email: String,
}

impl ParticipantForm {
    /// Name recorded against the seat: given names, a space, surnames
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
    }

    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::GivenNames => &self.given_names,
            FormField::Surnames => &self.surnames,
            FormField::NationalId => &self.national_id,
            FormField::Mobile => &self.mobile,
            FormField::Email => &self.email,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::GivenNames => &mut self.given_names,
            FormField::Surnames => &mut self.surnames,
            FormField::NationalId => &mut self.national_id,
            FormField::Mobile => &mut self.mobile,
            FormField::Email => &mut self.email,
        };
        *slot = value;
    }
}

// ============================================================================
// Confirmation
// ============================================================================

/// The reservation ticket shown once a booking is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Holder name (`given names` + `surnames`)
    pub holder_name: String,
    /// Holder national ID
    pub national_id: String,
    /// Reserved seat
    pub seat: SeatId,
    /// Event the ticket admits to
    pub event_label: String,
    /// Address the confirmation notice goes to
    pub email: String,
    /// When the reservation was committed
    pub issued_at: DateTime<Utc>,
}

/// Which screen of the flow is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Access code entry
    Access,
    /// Seat selection
    Seats,
    /// Participant form
    Form,
    /// Ticket
    Confirmation,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Access => "access",
            Self::Seats => "seats",
            Self::Form => "form",
            Self::Confirmation => "confirmation",
        };
        f.write_str(name)
    }
}
