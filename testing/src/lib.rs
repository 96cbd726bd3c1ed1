//! # Seatbook Testing
//!
//! Testing utilities and helpers for the Seatbook reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - proptest strategies for the string inputs the booking forms accept
//!
//! ## Example
//!
//! ```ignore
//! use seatbook_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(BookingReducer::new())
//!     .with_env(test_environment())
//!     .given_state(SessionState::new())
//!     .when_action(BookingAction::SubmitAccessCode("FIGMM2025".into()))
//!     .then_state(|state| assert_eq!(state.screen(), Screen::Seats))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use seatbook_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use seatbook_testing::mocks::FixedClock;
    /// use seatbook_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs anything.
    /// Honours `RUST_LOG`, defaulting to `debug` for Seatbook crates.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "seatbook=debug,seatbook_runtime=debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities
///
/// Strategies for the shapes of text a booking form receives: fixed-length
/// digit strings (national IDs, phone numbers) and their near misses.
pub mod properties {
    use proptest::prelude::*;

    /// Strings of exactly `len` ASCII decimal digits
    pub fn digits(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('0', '9'), len)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Digit strings whose length is anything in `lengths` except `excluded`
    pub fn digits_not_of_len(
        lengths: std::ops::Range<usize>,
        excluded: usize,
    ) -> impl Strategy<Value = String> {
        lengths
            .prop_filter("length must differ", move |len| *len != excluded)
            .prop_flat_map(digits)
    }

    /// `len`-character strings with at least one non-digit character
    pub fn digits_with_intruder(len: usize) -> impl Strategy<Value = String> {
        (digits(len), 0..len.max(1), "[a-zA-Z .+-]")
            .prop_filter("need room for an intruder", move |_| len > 0)
            .prop_map(|(base, at, intruder)| {
                base.chars()
                    .enumerate()
                    .map(|(i, c)| if i == at { intruder.clone() } else { c.to_string() })
                    .collect()
            })
    }

    /// Short lowercase words, never empty
    pub fn word() -> impl Strategy<Value = String> {
        "[a-z]{1,12}"
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
