//! Seatbook - event seating reservations
//!
//! A single booking session for a banquet-style venue: the guest enters an
//! access code, picks one free seat around one of the tables, fills in their
//! details and receives a ticket.
//!
//! # Architecture
//!
//! ```text
//!   Config ──► VenueGeometry ──► layout ──► VenueMap (static seat map)
//!                                              │
//!   BookingAction ──► BookingReducer ◄── BookingEnvironment
//!                         │               (clock, reservations, notifier,
//!                         ▼                access codes, venue map)
//!                   SessionState ──► Access → Seats → Form → Confirmation
//! ```
//!
//! - [`layout`] enumerates every seat and its angle around the table.
//! - [`venue`] turns table numbers and seat angles into plan coordinates.
//! - [`validation`] holds the access-code and participant-form rules.
//! - [`store`] is the seat → occupant bookkeeping, behind a trait.
//! - [`session`] is the booking state machine, written as a reducer.
//! - [`seat_map`] renders occupancy and selection onto the static map.
//!
//! # Usage
//!
//! Run the reducer inside a `seatbook_runtime::Store`, or drive it with
//! `seatbook_testing::ReducerTest` in tests. The `kiosk` binary is a
//! terminal front end over the same store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod layout;
pub mod notifier;
pub mod seat_map;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;
pub mod venue;

pub use config::Config;
pub use error::{BookingError, ConfigError, FieldViolation, SeatIdParseError};
pub use notifier::{ConfirmationNotifier, LogNotifier};
pub use seat_map::{SeatStatus, SeatView, TableView, VenueMap};
pub use session::{
    BookingAction, BookingEnvironment, BookingReducer, Phase, SessionSnapshot, SessionState,
};
pub use store::{InMemoryReservationStore, ReservationStore};
pub use types::*;
pub use validation::AccessCodes;
pub use venue::VenueGeometry;
