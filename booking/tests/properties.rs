//! Property tests for layout, geometry and validation.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use seatbook::layout::{generate_seats, seat_angle};
use seatbook::validation::validate_participant;
use seatbook::{AccessCodes, BookingError, FieldViolation, ParticipantForm, SeatId, VenueGeometry};
use seatbook_testing::properties::{digits, digits_not_of_len, digits_with_intruder, word};
use std::collections::HashSet;

fn form_with(national_id: String, mobile: String) -> ParticipantForm {
    ParticipantForm {
        given_names: "Ana".into(),
        surnames: "Lima".into(),
        national_id,
        mobile,
        email: "ana@x.com".into(),
    }
}

proptest! {
    #[test]
    fn layout_has_one_unique_seat_per_slot(tables in 1u16..40, seats in 1u16..16) {
        let layout = generate_seats(tables, seats);
        prop_assert_eq!(layout.len(), usize::from(tables) * usize::from(seats));

        let ids: HashSet<SeatId> = layout.iter().map(|s| s.id).collect();
        prop_assert_eq!(ids.len(), layout.len());
        prop_assert!(layout.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn seat_angles_stay_within_a_turn(
        (seats, seat) in (1u16..64).prop_flat_map(|n| (Just(n), 1..=n)),
    ) {
        let angle = seat_angle(seat, seats);
        prop_assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn seat_ids_survive_their_text_form(table in 1u16..=u16::MAX, seat in 1u16..=u16::MAX) {
        let id = SeatId::new(table, seat);
        prop_assert_eq!(id.to_string().parse::<SeatId>().unwrap(), id);
    }

    #[test]
    fn seats_keep_their_distance_from_the_table(
        tables in 1u16..40,
        seats in 1u16..16,
        radius in 1.0f64..500.0,
        gap in 1.0f64..50.0,
    ) {
        let venue = VenueGeometry {
            tables,
            seats_per_table: seats,
            table_radius: radius,
            seat_gap: gap,
            ..VenueGeometry::default()
        };
        for seat in generate_seats(tables, seats) {
            let center = venue.table_center(seat.table());
            let d = venue.seat_point(&seat).distance_to(center);
            prop_assert!((d - (radius + gap)).abs() < 1e-6);
        }
    }

    #[test]
    fn eight_digit_national_ids_pass(id in digits(8), mobile in digits(9)) {
        prop_assert_eq!(validate_participant(&form_with(id, mobile)), Ok(()));
    }

    #[test]
    fn national_ids_of_other_lengths_fail(id in digits_not_of_len(1..20, 8), mobile in digits(9)) {
        prop_assert_eq!(
            validate_participant(&form_with(id, mobile)),
            Err(FieldViolation::NationalId)
        );
    }

    #[test]
    fn non_digit_national_ids_fail(id in digits_with_intruder(8), mobile in digits(9)) {
        prop_assert_eq!(
            validate_participant(&form_with(id, mobile)),
            Err(FieldViolation::NationalId)
        );
    }

    #[test]
    fn mobiles_must_be_nine_digits(
        id in digits(8),
        short in digits_not_of_len(1..20, 9),
        mixed in digits_with_intruder(9),
    ) {
        prop_assert_eq!(
            validate_participant(&form_with(id.clone(), short)),
            Err(FieldViolation::Mobile)
        );
        prop_assert_eq!(
            validate_participant(&form_with(id, mixed)),
            Err(FieldViolation::Mobile)
        );
    }

    #[test]
    fn emails_shaped_like_addresses_pass(user in word(), host in word(), tld in word()) {
        let form = ParticipantForm {
            email: format!("{user}@{host}.{tld}"),
            ..form_with("12345678".into(), "987654321".into())
        };
        prop_assert_eq!(validate_participant(&form), Ok(()));
    }

    #[test]
    fn emails_without_at_sign_fail(text in word()) {
        let form = ParticipantForm {
            email: text,
            ..form_with("12345678".into(), "987654321".into())
        };
        prop_assert_eq!(validate_participant(&form), Err(FieldViolation::Email));
    }

    #[test]
    fn access_codes_ignore_case(code in "[A-Z0-9]{1,16}") {
        let codes = AccessCodes::new([code.as_str()]);
        prop_assert_eq!(codes.validate(&code.to_lowercase()), Ok(()));
        prop_assert_eq!(
            codes.validate(&format!(" {code}")),
            Err(BookingError::InvalidAccessCode)
        );
    }
}
