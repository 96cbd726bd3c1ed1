//! The seat map handed to the rendering layer.
//!
//! [`VenueMap`] is computed once from the venue geometry (layout plus
//! positions). Occupancy and selection change during a session, so they are
//! merged in on every [`VenueMap::seat_views`] call.

use crate::layout::generate_seats;
use crate::store::ReservationStore;
use crate::types::{Point, Seat, SeatId};
use crate::venue::VenueGeometry;
use serde::Serialize;

/// How a seat should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Free to pick
    Available,
    /// Picked in this session
    Selected,
    /// Booked; clicks on it are ignored
    Occupied,
}

/// A seat as the plan shows it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeatView {
    /// Seat identifier
    pub id: SeatId,
    /// Table number
    pub table: u16,
    /// Seat number at the table
    pub number: u16,
    /// Position on the plan
    pub position: Point,
    /// Current status
    pub status: SeatStatus,
    /// First word of the occupant's name, printed under occupied seats
    pub occupant_label: Option<String>,
}

/// A table as the plan shows it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    /// Table number
    pub number: u16,
    /// Centre on the plan
    pub center: Point,
    /// Printed label (`M<number>`)
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
struct PlacedSeat {
    seat: Seat,
    position: Point,
}

/// Static seat map of the venue.
#[derive(Clone, Debug, PartialEq)]
pub struct VenueMap {
    geometry: VenueGeometry,
    seats: Vec<PlacedSeat>,
    tables: Vec<TableView>,
}

impl VenueMap {
    /// Lay out every table and seat of the venue
    #[must_use]
    pub fn new(geometry: VenueGeometry) -> Self {
        let tables = (1..=geometry.tables)
            .map(|number| TableView {
                number,
                center: geometry.table_center(number),
                label: format!("M{number}"),
            })
            .collect();

        let seats = generate_seats(geometry.tables, geometry.seats_per_table)
            .into_iter()
            .map(|seat| PlacedSeat {
                position: geometry.seat_point(&seat),
                seat,
            })
            .collect();

        Self { geometry, seats, tables }
    }

    /// Geometry the map was built from
    #[must_use]
    pub const fn geometry(&self) -> &VenueGeometry {
        &self.geometry
    }

    /// Number of seats in the venue
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Whether the seat exists in this venue
    #[must_use]
    pub fn contains(&self, seat: SeatId) -> bool {
        (1..=self.geometry.tables).contains(&seat.table())
            && (1..=self.geometry.seats_per_table).contains(&seat.seat())
    }

    /// Every seat, table-major
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().map(|placed| &placed.seat)
    }

    /// Tables with their centres and labels
    #[must_use]
    pub fn tables(&self) -> &[TableView] {
        &self.tables
    }

    /// Position of a seat on the plan
    #[must_use]
    pub fn position_of(&self, seat: SeatId) -> Option<Point> {
        self.index_of(seat).map(|i| self.seats[i].position)
    }

    /// Current view of every seat
    ///
    /// A seat that is both selected and occupied is shown as selected.
    #[must_use]
    pub fn seat_views(
        &self,
        selected: Option<SeatId>,
        reservations: &dyn ReservationStore,
    ) -> Vec<SeatView> {
        let booked = reservations.reservations();
        self.seats
            .iter()
            .map(|placed| {
                let id = placed.seat.id;
                let occupant = booked.get(&id);
                let status = if selected == Some(id) {
                    SeatStatus::Selected
                } else if occupant.is_some() {
                    SeatStatus::Occupied
                } else {
                    SeatStatus::Available
                };
                SeatView {
                    id,
                    table: id.table(),
                    number: id.seat(),
                    position: placed.position,
                    status,
                    occupant_label: occupant.map(|name| short_label(name)),
                }
            })
            .collect()
    }

    /// Seats still free to book
    #[must_use]
    pub fn available_count(&self, reservations: &dyn ReservationStore) -> usize {
        self.seats
            .iter()
            .filter(|placed| !reservations.is_occupied(placed.seat.id))
            .count()
    }

    fn index_of(&self, seat: SeatId) -> Option<usize> {
        if !self.contains(seat) {
            return None;
        }
        let per_table = usize::from(self.geometry.seats_per_table);
        Some(usize::from(seat.table() - 1) * per_table + usize::from(seat.seat() - 1))
    }
}

fn short_label(name: &str) -> String {
    name.split(' ').next().unwrap_or_default().to_string()
}
