//! The reservation store: which seats are taken, and by whom.
//!
//! The booking reducer only sees the [`ReservationStore`] trait through its
//! environment, so the in-memory map here can be swapped for a shared or
//! persistent backend without touching the state machine.

use crate::error::BookingError;
use crate::types::SeatId;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Seat → occupant bookkeeping.
///
/// A seat is present iff a booking for it has been confirmed. Entries are
/// never removed.
pub trait ReservationStore: Send + Sync {
    /// Whether the seat has been booked
    fn is_occupied(&self, seat: SeatId) -> bool;

    /// Record a booking
    ///
    /// Occupancy is re-checked here, at commit time, so two sessions that
    /// both selected the same seat cannot both confirm it.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::SeatUnavailable`] if the seat is already booked;
    /// the existing entry is left untouched.
    fn reserve(&self, seat: SeatId, occupant: String) -> Result<(), BookingError>;

    /// Name the seat was booked under, if any
    fn occupant_of(&self, seat: SeatId) -> Option<String>;

    /// Snapshot of every booking, ordered by seat
    fn reservations(&self) -> BTreeMap<SeatId, String>;

    /// Number of booked seats
    fn len(&self) -> usize {
        self.reservations().len()
    }

    /// Whether nothing has been booked yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local reservation store.
///
/// Clones share the same map, so several sessions in one process can be
/// handed the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationStore {
    seats: Arc<RwLock<BTreeMap<SeatId, String>>>,
}

impl InMemoryReservationStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn is_occupied(&self, seat: SeatId) -> bool {
        self.seats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&seat)
    }

    fn reserve(&self, seat: SeatId, occupant: String) -> Result<(), BookingError> {
        let mut seats = self.seats.write().unwrap_or_else(PoisonError::into_inner);
        if seats.contains_key(&seat) {
            return Err(BookingError::SeatUnavailable(seat));
        }
        seats.insert(seat, occupant);
        Ok(())
    }

    fn occupant_of(&self, seat: SeatId) -> Option<String> {
        self.seats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&seat)
            .cloned()
    }

    fn reservations(&self) -> BTreeMap<SeatId, String> {
        self.seats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.seats.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
