//! Configuration management for the booking flow.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use crate::types::Point;
use crate::validation::DEFAULT_ACCESS_CODES;
use crate::venue::VenueGeometry;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default event label printed on tickets
pub const DEFAULT_EVENT_LABEL: &str = "Reencuentro FIGMM 2025";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Event configuration
    pub event: EventConfig,
    /// Venue geometry
    pub venue: VenueGeometry,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Event configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Label printed on tickets
    pub label: String,
    /// Access codes accepted on the access screen
    pub access_codes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event: EventConfig {
                label: DEFAULT_EVENT_LABEL.to_string(),
                access_codes: DEFAULT_ACCESS_CODES.iter().map(ToString::to_string).collect(),
            },
            venue: VenueGeometry::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// `ACCESS_CODES` is a comma-separated list; blank entries are skipped and
    /// each code is trimmed (the comma list is configuration, not user input).
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let venue = defaults.venue;

        let number = |key: &str, default: f64| parse_or(&lookup, key, default);

        Self {
            event: EventConfig {
                label: lookup("EVENT_LABEL").unwrap_or(defaults.event.label),
                access_codes: lookup("ACCESS_CODES").map_or(defaults.event.access_codes, |raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(ToString::to_string)
                        .collect()
                }),
            },
            venue: VenueGeometry {
                tables: parse_or(&lookup, "VENUE_TABLES", venue.tables),
                seats_per_table: parse_or(&lookup, "VENUE_SEATS_PER_TABLE", venue.seats_per_table),
                arrangement_radius: number("VENUE_RADIUS", venue.arrangement_radius),
                center: Point::new(
                    number("VENUE_CENTER_X", venue.center.x),
                    number("VENUE_CENTER_Y", venue.center.y),
                ),
                arc_degrees: number("VENUE_ARC_DEGREES", venue.arc_degrees),
                start_degrees: number("VENUE_START_DEGREES", venue.start_degrees),
                table_radius: number("TABLE_RADIUS", venue.table_radius),
                seat_gap: number("SEAT_GAP", venue.seat_gap),
            },
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Check the configuration can run a booking session
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessList`] when no access code is
    /// configured, or the venue's own validation error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event.access_codes.is_empty() {
            return Err(ConfigError::EmptyAccessList);
        }
        self.venue.validate()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
