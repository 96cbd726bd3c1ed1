//! The booking session: one user going from access code to ticket.
//!
//! Screens advance `access → seats → form → confirmation`:
//!
//! 1. Submit an access code from the allow-list
//! 2. Pick one free seat on the venue map
//! 3. Fill in the participant form and confirm
//! 4. Read the ticket; start over for the next participant
//!
//! Rejected codes and forms are reported through [`SessionState::last_error`].
//! Clicks on occupied or unknown seats, and any action that does not apply to
//! the current screen, are ignored without an error.

use crate::config::Config;
use crate::error::BookingError;
use crate::notifier::ConfirmationNotifier;
use crate::seat_map::VenueMap;
use crate::store::ReservationStore;
use crate::types::{FormField, ParticipantForm, Screen, SeatId, Ticket};
use crate::validation::{validate_participant, AccessCodes};
use seatbook_core::{effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ============================================================================
// State
// ============================================================================

/// The current screen together with the data it needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for an access code
    Access,
    /// Choosing a seat
    Seats {
        /// Seat picked so far
        selected: Option<SeatId>,
    },
    /// Filling in the participant form for a chosen seat
    Form {
        /// Seat being booked
        seat: SeatId,
    },
    /// Booking committed
    Confirmation {
        /// The issued ticket
        ticket: Ticket,
    },
}

impl Phase {
    /// Screen this phase is shown on
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Access => Screen::Access,
            Self::Seats { .. } => Screen::Seats,
            Self::Form { .. } => Screen::Form,
            Self::Confirmation { .. } => Screen::Confirmation,
        }
    }
}

/// State of one booking session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    phase: Phase,
    access_code: String,
    form: ParticipantForm,
    last_error: Option<BookingError>,
}

impl SessionState {
    /// A fresh session on the access screen with every field empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Access,
            access_code: String::new(),
            form: ParticipantForm::default(),
            last_error: None,
        }
    }

    /// Screen currently showing
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.phase.screen()
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Access code as typed
    #[must_use]
    pub fn access_code(&self) -> &str {
        &self.access_code
    }

    /// Seat picked in this session, if any
    #[must_use]
    pub const fn selected_seat(&self) -> Option<SeatId> {
        match &self.phase {
            Phase::Seats { selected } => *selected,
            Phase::Form { seat } => Some(*seat),
            Phase::Confirmation { ticket } => Some(ticket.seat),
            Phase::Access => None,
        }
    }

    /// Participant form as typed
    #[must_use]
    pub const fn form(&self) -> &ParticipantForm {
        &self.form
    }

    /// Error from the last rejected submission
    #[must_use]
    pub const fn last_error(&self) -> Option<&BookingError> {
        self.last_error.as_ref()
    }

    /// Display text of [`Self::last_error`]
    #[must_use]
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    /// Ticket, once the booking is confirmed
    #[must_use]
    pub const fn ticket(&self) -> Option<&Ticket> {
        match &self.phase {
            Phase::Confirmation { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Serializable copy of what the screens render
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen(),
            access_code: self.access_code.clone(),
            selected_seat: self.selected_seat(),
            form: self.form.clone(),
            error: self.last_error_message(),
            ticket: self.ticket().cloned(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a session for rendering or export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Screen currently showing
    pub screen: Screen,
    /// Access code as typed
    pub access_code: String,
    /// Seat picked in this session
    pub selected_seat: Option<SeatId>,
    /// Participant form as typed
    pub form: ParticipantForm,
    /// Message of the last rejected submission
    pub error: Option<String>,
    /// Ticket, once confirmed
    pub ticket: Option<Ticket>,
}

// ============================================================================
// Actions
// ============================================================================

/// Inputs of the booking flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingAction {
    /// Access code text changed (access screen)
    EditAccessCode(String),
    /// Access code submitted (access screen)
    SubmitAccessCode(String),
    /// Seat clicked (seat screen)
    SelectSeat(SeatId),
    /// Move on to the form with the selected seat (seat screen)
    ContinueToForm,
    /// Return to the seat map keeping the selection and draft (form screen)
    BackToSeats,
    /// One form field changed (form screen)
    EditField {
        /// Field being edited
        field: FormField,
        /// New value
        value: String,
    },
    /// Replace the whole form and confirm it (form screen)
    SubmitForm(ParticipantForm),
    /// Confirm the form as currently typed (form screen)
    ConfirmReservation,
    /// Start over for the next participant (confirmation screen)
    NewReservation,
}

impl BookingAction {
    /// Short action name for logs and metrics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EditAccessCode(_) => "edit_access_code",
            Self::SubmitAccessCode(_) => "submit_access_code",
            Self::SelectSeat(_) => "select_seat",
            Self::ContinueToForm => "continue_to_form",
            Self::BackToSeats => "back_to_seats",
            Self::EditField { .. } => "edit_field",
            Self::SubmitForm(_) => "submit_form",
            Self::ConfirmReservation => "confirm_reservation",
            Self::NewReservation => "new_reservation",
        }
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Environment dependencies for the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Clock stamping issued tickets
    pub clock: Arc<dyn Clock>,
    /// Seat occupancy
    pub reservations: Arc<dyn ReservationStore>,
    /// Confirmation delivery
    pub notifier: Arc<dyn ConfirmationNotifier>,
    /// Accepted access codes
    pub access_codes: AccessCodes,
    /// Static seat map
    pub venue: Arc<VenueMap>,
    /// Label printed on tickets
    pub event_label: String,
}

impl BookingEnvironment {
    /// Creates a new `BookingEnvironment` for the configured event and venue
    #[must_use]
    pub fn new(
        config: &Config,
        clock: Arc<dyn Clock>,
        reservations: Arc<dyn ReservationStore>,
        notifier: Arc<dyn ConfirmationNotifier>,
    ) -> Self {
        Self {
            clock,
            reservations,
            notifier,
            access_codes: AccessCodes::new(&config.event.access_codes),
            venue: Arc::new(VenueMap::new(config.venue.clone())),
            event_label: config.event.label.clone(),
        }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Reducer for the booking session
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn ignore(state: &SessionState, action: &'static str) -> SmallVec<[Effect<BookingAction>; 4]> {
        debug!(action, screen = %state.screen(), "Ignoring action on this screen");
        SmallVec::new()
    }

    fn submit_access_code(
        state: &mut SessionState,
        code: String,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        match env.access_codes.validate(&code) {
            Ok(()) => {
                info!("Access code accepted");
                state.phase = Phase::Seats { selected: None };
                state.last_error = None;
            },
            Err(error) => {
                warn!(length = code.len(), "Access code rejected");
                metrics::counter!("booking.access.rejected").increment(1);
                state.last_error = Some(error);
            },
        }
        state.access_code = code;
        SmallVec::new()
    }

    fn select_seat(
        state: &mut SessionState,
        seat: SeatId,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        let Phase::Seats { selected } = &mut state.phase else {
            return Self::ignore(state, "select_seat");
        };

        if !env.venue.contains(seat) {
            debug!(%seat, "Ignoring click on unknown seat");
        } else if env.reservations.is_occupied(seat) {
            debug!(%seat, "Ignoring click on occupied seat");
        } else {
            *selected = Some(seat);
            state.last_error = None;
        }
        SmallVec::new()
    }

    /// Validate the form, commit the seat and issue the ticket
    fn confirm(
        state: &mut SessionState,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        let Phase::Form { seat } = state.phase else {
            return Self::ignore(state, "confirm_reservation");
        };

        if let Err(violation) = validate_participant(&state.form) {
            warn!(%seat, reason = violation.kind(), "Participant form rejected");
            metrics::counter!("booking.form.rejected", "reason" => violation.kind()).increment(1);
            state.last_error = Some(violation.into());
            return SmallVec::new();
        }

        let holder_name = state.form.full_name();
        if let Err(error) = env.reservations.reserve(seat, holder_name.clone()) {
            warn!(%seat, "Seat was taken before the booking committed");
            metrics::counter!("booking.reservations.conflicts").increment(1);
            state.phase = Phase::Seats { selected: None };
            state.last_error = Some(error);
            return SmallVec::new();
        }

        let ticket = Ticket {
            holder_name,
            national_id: state.form.national_id.clone(),
            seat,
            event_label: env.event_label.clone(),
            email: state.form.email.clone(),
            issued_at: env.clock.now(),
        };
        info!(%seat, holder = %ticket.holder_name, "Reservation confirmed");
        metrics::counter!("booking.reservations.confirmed").increment(1);

        state.phase = Phase::Confirmation { ticket: ticket.clone() };
        state.last_error = None;

        let notifier = Arc::clone(&env.notifier);
        smallvec![Effect::Future(Box::pin(async move {
            notifier.ticket_issued(&ticket);
            None
        }))]
    }
}

impl Reducer for BookingReducer {
    type State = SessionState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let name = action.name();

        match (state.screen(), action) {
            (Screen::Access, BookingAction::EditAccessCode(code)) => {
                state.access_code = code;
                SmallVec::new()
            },

            (Screen::Access, BookingAction::SubmitAccessCode(code)) => {
                Self::submit_access_code(state, code, env)
            },

            (_, BookingAction::SelectSeat(seat)) => Self::select_seat(state, seat, env),

            (Screen::Seats, BookingAction::ContinueToForm) => {
                if let Phase::Seats { selected: Some(seat) } = state.phase {
                    state.phase = Phase::Form { seat };
                    state.last_error = None;
                    SmallVec::new()
                } else {
                    debug!("Continue pressed with no seat selected");
                    SmallVec::new()
                }
            },

            (Screen::Form, BookingAction::BackToSeats) => {
                if let Phase::Form { seat } = state.phase {
                    state.phase = Phase::Seats { selected: Some(seat) };
                    state.last_error = None;
                }
                SmallVec::new()
            },

            (Screen::Form, BookingAction::EditField { field, value }) => {
                state.form.set(field, value);
                SmallVec::new()
            },

            (Screen::Form, BookingAction::SubmitForm(form)) => {
                state.form = form;
                Self::confirm(state, env)
            },

            (_, BookingAction::ConfirmReservation) => Self::confirm(state, env),

            (Screen::Confirmation, BookingAction::NewReservation) => {
                info!("Starting a new reservation");
                *state = SessionState::new();
                SmallVec::new()
            },

            _ => Self::ignore(state, name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FieldViolation;
    use crate::store::InMemoryReservationStore;
    use seatbook_testing::{assertions, test_clock, ReducerTest};
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    struct RecordingNotifier {
        tickets: Mutex<Vec<Ticket>>,
    }

    impl ConfirmationNotifier for RecordingNotifier {
        fn ticket_issued(&self, ticket: &Ticket) {
            self.tickets
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(ticket.clone());
        }
    }

    fn env_with(store: &InMemoryReservationStore) -> BookingEnvironment {
        BookingEnvironment::new(
            &Config::default(),
            Arc::new(test_clock()),
            Arc::new(store.clone()),
            Arc::new(RecordingNotifier::default()),
        )
    }

    fn test_env() -> BookingEnvironment {
        env_with(&InMemoryReservationStore::new())
    }

    fn seat(id: &str) -> SeatId {
        id.parse().unwrap()
    }

    fn ana() -> ParticipantForm {
        ParticipantForm {
            given_names: "Ana".into(),
            surnames: "Lima".into(),
            national_id: "87654321".into(),
            mobile: "912345678".into(),
            email: "ana@x.com".into(),
        }
    }

    fn on_seats(selected: Option<SeatId>) -> SessionState {
        SessionState {
            phase: Phase::Seats { selected },
            access_code: "FIGMM2025".into(),
            ..SessionState::new()
        }
    }

    fn on_form(seat_id: SeatId, form: ParticipantForm) -> SessionState {
        SessionState {
            phase: Phase::Form { seat: seat_id },
            access_code: "FIGMM2025".into(),
            form,
            last_error: None,
        }
    }

    #[test]
    fn new_session_starts_empty_on_access() {
        let state = SessionState::new();
        assert_eq!(state.screen(), Screen::Access);
        assert_eq!(state.access_code(), "");
        assert_eq!(state.selected_seat(), None);
        assert_eq!(state.form(), &ParticipantForm::default());
        assert_eq!(state.last_error(), None);
        assert_eq!(state.ticket(), None);
    }

    #[test]
    fn accepted_code_moves_to_seats() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(SessionState::new())
            .when_action(BookingAction::SubmitAccessCode("figmm2025".into()))
            .then_state(|state| {
                assert_eq!(state.phase(), &Phase::Seats { selected: None });
                assert_eq!(state.access_code(), "figmm2025");
                assert_eq!(state.last_error(), None);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn rejected_code_stays_on_access_with_error() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(SessionState::new())
            .when_action(BookingAction::SubmitAccessCode("  FIGMM2025".into()))
            .then_state(|state| {
                assert_eq!(state.screen(), Screen::Access);
                assert_eq!(state.last_error(), Some(&BookingError::InvalidAccessCode));
                assert_eq!(state.last_error_message().as_deref(), Some("Invalid access code"));
            })
            .run();
    }

    #[test]
    fn second_submit_on_seats_is_ignored() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(SessionState::new())
            .when_action(BookingAction::SubmitAccessCode("EGRESADO001".into()))
            .when_action(BookingAction::SelectSeat(seat("M2-A2")))
            .when_action(BookingAction::SubmitAccessCode("EGRESADO001".into()))
            .then_state(|state| {
                assert_eq!(state.phase(), &Phase::Seats { selected: Some(seat("M2-A2")) });
            })
            .run();
    }

    #[test]
    fn selecting_free_seats_replaces_the_selection() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_seats(None))
            .when_action(BookingAction::SelectSeat(seat("M1-A1")))
            .when_action(BookingAction::SelectSeat(seat("M4-A7")))
            .then_state(|state| assert_eq!(state.selected_seat(), Some(seat("M4-A7"))))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn occupied_seat_clicks_are_silent() {
        let store = InMemoryReservationStore::new();
        store.reserve(seat("M1-A1"), "Luis Paz".into()).unwrap();

        ReducerTest::new(BookingReducer::new())
            .with_env(env_with(&store))
            .given_state(on_seats(Some(seat("M3-A3"))))
            .when_action(BookingAction::SelectSeat(seat("M1-A1")))
            .then_state(|state| {
                assert_eq!(state.selected_seat(), Some(seat("M3-A3")));
                assert_eq!(state.last_error(), None);
            })
            .run();
    }

    #[test]
    fn unknown_seats_are_ignored() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_seats(None))
            .when_action(BookingAction::SelectSeat(SeatId::new(31, 1)))
            .when_action(BookingAction::SelectSeat(SeatId::new(1, 11)))
            .then_state(|state| assert_eq!(state.selected_seat(), None))
            .run();
    }

    #[test]
    fn continue_requires_a_selection() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_seats(None))
            .when_action(BookingAction::ContinueToForm)
            .then_state(|state| assert_eq!(state.screen(), Screen::Seats))
            .run();

        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_seats(Some(seat("M5-A2"))))
            .when_action(BookingAction::ContinueToForm)
            .then_state(|state| {
                assert_eq!(state.phase(), &Phase::Form { seat: seat("M5-A2") });
            })
            .run();
    }

    #[test]
    fn back_keeps_selection_and_draft() {
        let draft = ParticipantForm { given_names: "Ana".into(), ..ParticipantForm::default() };
        let expected = draft.clone();

        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_form(seat("M5-A2"), draft))
            .when_action(BookingAction::BackToSeats)
            .then_state(move |state| {
                assert_eq!(state.phase(), &Phase::Seats { selected: Some(seat("M5-A2")) });
                assert_eq!(state.form(), &expected);
            })
            .run();
    }

    #[test]
    fn editing_fields_fills_the_form() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_form(seat("M1-A1"), ParticipantForm::default()))
            .when_action(BookingAction::EditField {
                field: FormField::GivenNames,
                value: "Ana".into(),
            })
            .when_action(BookingAction::EditField {
                field: FormField::Email,
                value: "ana@x.com".into(),
            })
            .then_state(|state| {
                assert_eq!(state.form().given_names, "Ana");
                assert_eq!(state.form().email, "ana@x.com");
                assert_eq!(state.screen(), Screen::Form);
            })
            .run();
    }

    #[test]
    fn invalid_form_stays_on_form_with_first_violation() {
        let store = InMemoryReservationStore::new();
        let form = ParticipantForm { national_id: "1234567".into(), mobile: "1".into(), ..ana() };

        let check = store.clone();
        ReducerTest::new(BookingReducer::new())
            .with_env(env_with(&store))
            .given_state(on_form(seat("M1-A1"), ParticipantForm::default()))
            .when_action(BookingAction::SubmitForm(form))
            .then_state(move |state| {
                assert_eq!(state.screen(), Screen::Form);
                assert_eq!(
                    state.last_error(),
                    Some(&BookingError::InvalidParticipantField(FieldViolation::NationalId))
                );
                assert!(check.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn valid_form_commits_seat_and_issues_ticket() {
        let store = InMemoryReservationStore::new();
        let check = store.clone();

        ReducerTest::new(BookingReducer::new())
            .with_env(env_with(&store))
            .given_state(on_form(seat("M1-A1"), ParticipantForm::default()))
            .when_action(BookingAction::SubmitForm(ana()))
            .then_state(move |state| {
                assert_eq!(state.screen(), Screen::Confirmation);
                let ticket = state.ticket().unwrap();
                assert_eq!(ticket.holder_name, "Ana Lima");
                assert_eq!(ticket.national_id, "87654321");
                assert_eq!(ticket.seat, seat("M1-A1"));
                assert_eq!(ticket.event_label, "Reencuentro FIGMM 2025");
                assert_eq!(ticket.issued_at, test_clock().now());
                assert_eq!(check.len(), 1);
                assert_eq!(check.occupant_of(seat("M1-A1")).as_deref(), Some("Ana Lima"));
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn confirm_uses_the_typed_draft() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(on_form(seat("M2-A9"), ana()))
            .when_action(BookingAction::ConfirmReservation)
            .then_state(|state| {
                assert_eq!(state.ticket().map(|t| t.seat), Some(seat("M2-A9")));
            })
            .run();
    }

    #[test]
    fn seat_taken_at_commit_returns_to_seats() {
        let store = InMemoryReservationStore::new();
        store.reserve(seat("M1-A1"), "Luis Paz".into()).unwrap();
        let check = store.clone();

        ReducerTest::new(BookingReducer::new())
            .with_env(env_with(&store))
            .given_state(on_form(seat("M1-A1"), ana()))
            .when_action(BookingAction::ConfirmReservation)
            .then_state(move |state| {
                assert_eq!(state.phase(), &Phase::Seats { selected: None });
                assert_eq!(
                    state.last_error(),
                    Some(&BookingError::SeatUnavailable(seat("M1-A1")))
                );
                assert_eq!(check.occupant_of(seat("M1-A1")).as_deref(), Some("Luis Paz"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn new_reservation_resets_everything_but_the_store() {
        let store = InMemoryReservationStore::new();
        let check = store.clone();

        ReducerTest::new(BookingReducer::new())
            .with_env(env_with(&store))
            .given_state(on_form(seat("M1-A1"), ana()))
            .when_action(BookingAction::ConfirmReservation)
            .when_action(BookingAction::NewReservation)
            .then_state(move |state| {
                assert_eq!(state, &SessionState::new());
                assert!(check.is_occupied(seat("M1-A1")));
            })
            .run();
    }

    #[test]
    fn out_of_place_actions_change_nothing() {
        let cases = [
            (SessionState::new(), BookingAction::SelectSeat(seat("M1-A1"))),
            (SessionState::new(), BookingAction::ConfirmReservation),
            (SessionState::new(), BookingAction::NewReservation),
            (on_seats(None), BookingAction::EditAccessCode("X".into())),
            (on_seats(None), BookingAction::BackToSeats),
            (on_seats(None), BookingAction::SubmitForm(ana())),
            (on_form(seat("M1-A1"), ana()), BookingAction::ContinueToForm),
            (on_form(seat("M1-A1"), ana()), BookingAction::SelectSeat(seat("M2-A2"))),
        ];

        for (given, action) in cases {
            let expected = given.clone();
            ReducerTest::new(BookingReducer::new())
                .with_env(test_env())
                .given_state(given)
                .when_action(action)
                .then_state(move |state| assert_eq!(state, &expected))
                .then_effects(assertions::assert_no_effects)
                .run();
        }
    }

    #[tokio::test]
    async fn confirmation_effect_notifies_once() {
        let notifier = Arc::new(RecordingNotifier::default());
        let env = BookingEnvironment {
            notifier: notifier.clone(),
            ..test_env()
        };
        let mut state = on_form(seat("M1-A1"), ana());

        let effects = BookingReducer::new().reduce(&mut state, BookingAction::ConfirmReservation, &env);
        for effect in effects {
            if let Effect::Future(fut) = effect {
                assert_eq!(fut.await, None);
            }
        }

        let sent = notifier.tickets.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ana@x.com");
    }

    #[test]
    fn snapshot_mirrors_state() {
        let state = on_form(seat("M3-A1"), ana());
        let snapshot = state.snapshot();
        assert_eq!(snapshot.screen, Screen::Form);
        assert_eq!(snapshot.selected_seat, Some(seat("M3-A1")));
        assert_eq!(snapshot.form, ana());
        assert_eq!(snapshot.ticket, None);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["screen"], "form");
        assert_eq!(json["selected_seat"], "M3-A1");
    }
}
