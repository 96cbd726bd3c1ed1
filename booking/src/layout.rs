//! Seat layout generation.
//!
//! The venue is a fixed grid of round tables with the same number of seats
//! each. Seats are spread evenly around their table; seat 1 sits at 0° and
//! the rest follow at `360 / seats_per_table` degree steps.

use crate::types::{Seat, SeatId};

/// Angular offset of a seat around its table, in degrees.
///
/// `(seat - 1) * 360 / seats_per_table`, so with ten seats per table the
/// offsets are 0°, 36°, …, 324°.
#[must_use]
pub fn seat_angle(seat: u16, seats_per_table: u16) -> f64 {
    let step = 360.0 / f64::from(seats_per_table);
    f64::from(seat.saturating_sub(1)) * step
}

/// Every seat of the venue, table-major then seat-minor.
///
/// Deterministic: the same dimensions always produce the same sequence.
#[must_use]
pub fn generate_seats(tables: u16, seats_per_table: u16) -> Vec<Seat> {
    (1..=tables)
        .flat_map(|table| {
            (1..=seats_per_table).map(move |seat| Seat {
                id: SeatId::new(table, seat),
                angle: seat_angle(seat, seats_per_table),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_venue_has_three_hundred_unique_seats() {
        let seats = generate_seats(30, 10);
        assert_eq!(seats.len(), 300);

        let ids: HashSet<_> = seats.iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids.len(), 300);
    }

    #[test]
    fn seats_are_table_major() {
        let seats = generate_seats(30, 10);
        assert_eq!(seats[0].id.to_string(), "M1-A1");
        assert_eq!(seats[9].id.to_string(), "M1-A10");
        assert_eq!(seats[10].id.to_string(), "M2-A1");
        assert_eq!(seats[299].id.to_string(), "M30-A10");
        assert!(seats.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn every_table_spans_the_full_circle_in_36_degree_steps() {
        let seats = generate_seats(30, 10);
        let expected: Vec<f64> = (0..10).map(|k| f64::from(k) * 36.0).collect();

        for table in 1..=30 {
            let angles: Vec<f64> = seats
                .iter()
                .filter(|s| s.table() == table)
                .map(|s| s.angle)
                .collect();
            assert_eq!(angles, expected, "table {table}");
        }
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(generate_seats(30, 10), generate_seats(30, 10));
    }

    #[test]
    fn other_dimensions_divide_the_circle_evenly() {
        let seats = generate_seats(2, 8);
        assert_eq!(seats.len(), 16);
        assert!((seats[1].angle - 45.0).abs() < f64::EPSILON);
        assert!((seats[7].angle - 315.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_venue_yields_no_seats() {
        assert!(generate_seats(0, 10).is_empty());
        assert!(generate_seats(5, 0).is_empty());
    }
}
