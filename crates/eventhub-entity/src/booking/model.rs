//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::{AttendeeId, BookingId, EventId};

/// An admitted seat for one attendee at one event.
///
/// Bookings are immutable once created and disappear only when their
/// event or attendee is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The booked event.
    pub event_id: EventId,
    /// The attendee holding the booking.
    pub attendee_id: AttendeeId,
    /// When the booking was admitted.
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at`; bookings are never updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new booking row for the given pair.
    pub fn new(event_id: EventId, attendee_id: AttendeeId) -> Self {
        let now = Utc::now();
        Self {
            id: BookingId::new(),
            event_id,
            attendee_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this booking is for the given (event, attendee) pair.
    pub fn is_pair(&self, event_id: EventId, attendee_id: AttendeeId) -> bool {
        self.event_id == event_id && self.attendee_id == attendee_id
    }
}
