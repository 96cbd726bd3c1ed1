//! Confirmation notices.
//!
//! Once a booking commits, the ticket holder is told their confirmation will
//! be sent to the email on the form. Delivery sits behind
//! [`ConfirmationNotifier`]; the default implementation only logs.

use crate::types::Ticket;
use tracing::info;

/// Delivers the confirmation for an issued ticket.
pub trait ConfirmationNotifier: Send + Sync {
    /// Called once per confirmed booking, after the seat is committed
    fn ticket_issued(&self, ticket: &Ticket);
}

/// Notifier that writes the confirmation to the log (demo/development)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl ConfirmationNotifier for LogNotifier {
    fn ticket_issued(&self, ticket: &Ticket) {
        info!(
            seat = %ticket.seat,
            to = %ticket.email,
            event = %ticket.event_label,
            "Reservation confirmation for {} queued for delivery",
            ticket.holder_name
        );
    }
}
