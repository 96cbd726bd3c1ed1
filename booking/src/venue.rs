//! Venue geometry: where tables and seats sit on the plan.
//!
//! Tables are placed along an arc around the arrangement centre. With the
//! default geometry the arc opens 180° starting at 180°, so the tables form a
//! half circle curving up towards the stage at the top of the plan:
//!
//! ```text
//! angle(table)  = (table - 1) / tables * arc + start        (degrees)
//! centre(table) = centre + radius * (cos angle, sin angle)
//!
//! θ(seat)       = seat.angle - 90°                          (seat 1 points up)
//! seat          = table centre + (table_radius + seat_gap) * (cos θ, sin θ)
//! ```
//!
//! Table numbers outside `1..=tables` are not rejected: the formula keeps
//! going along the same circle.

use crate::error::ConfigError;
use crate::types::{Point, Seat};
use serde::{Deserialize, Serialize};

/// Venue dimensions and the constants of the arrangement curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueGeometry {
    /// Number of tables
    pub tables: u16,
    /// Seats around each table
    pub seats_per_table: u16,
    /// Radius of the arc the table centres sit on
    pub arrangement_radius: f64,
    /// Centre of that arc
    pub center: Point,
    /// How far the arc opens, in degrees
    pub arc_degrees: f64,
    /// Angle of the first table, in degrees
    pub start_degrees: f64,
    /// Radius of a table
    pub table_radius: f64,
    /// Distance between a table's edge and its seats
    pub seat_gap: f64,
}

impl Default for VenueGeometry {
    fn default() -> Self {
        Self {
            tables: 30,
            seats_per_table: 10,
            arrangement_radius: 200.0,
            center: Point::new(400.0, 300.0),
            arc_degrees: 180.0,
            start_degrees: 180.0,
            table_radius: 40.0,
            seat_gap: 20.0,
        }
    }
}

impl VenueGeometry {
    /// Total number of seats
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.tables) * usize::from(self.seats_per_table)
    }

    /// Angle of a table's centre around the arrangement centre, in degrees
    #[must_use]
    pub fn table_angle(&self, table: u16) -> f64 {
        let index = f64::from(i32::from(table) - 1);
        index / f64::from(self.tables) * self.arc_degrees + self.start_degrees
    }

    /// Centre of a table on the plan
    #[must_use]
    pub fn table_center(&self, table: u16) -> Point {
        polar(self.center, self.arrangement_radius, self.table_angle(table))
    }

    /// Distance from a table centre to its seats
    #[must_use]
    pub fn seat_distance(&self) -> f64 {
        self.table_radius + self.seat_gap
    }

    /// Position of a seat given its angular offset and its table's centre
    #[must_use]
    pub fn seat_position(&self, table_center: Point, angle: f64) -> Point {
        polar(table_center, self.seat_distance(), angle - 90.0)
    }

    /// Position of a seat on the plan
    #[must_use]
    pub fn seat_point(&self, seat: &Seat) -> Point {
        self.seat_position(self.table_center(seat.table()), seat.angle)
    }

    /// Check the geometry can be laid out
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when there are no tables or seats, when a
    /// radius or gap is not positive, or when an angle or coordinate is not
    /// finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tables == 0 {
            return Err(ConfigError::NoTables);
        }
        if self.seats_per_table == 0 {
            return Err(ConfigError::NoSeats);
        }
        for (name, value) in [
            ("VENUE_RADIUS", self.arrangement_radius),
            ("TABLE_RADIUS", self.table_radius),
            ("SEAT_GAP", self.seat_gap),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("VENUE_CENTER_X", self.center.x),
            ("VENUE_CENTER_Y", self.center.y),
            ("VENUE_ARC_DEGREES", self.arc_degrees),
            ("VENUE_START_DEGREES", self.start_degrees),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }
}

fn polar(origin: Point, distance: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        distance.mul_add(radians.cos(), origin.x),
        distance.mul_add(radians.sin(), origin.y),
    )
}
