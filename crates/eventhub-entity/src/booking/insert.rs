//! Outcome of a guarded booking insert.

use serde::{Deserialize, Serialize};

use super::model::Booking;

/// Result of writing a booking after re-validating the admission rules
/// inside the store's own atomic section.
///
/// Anything other than `Inserted` means nothing was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookingInsert {
    /// The booking was written.
    Inserted(Booking),
    /// A booking for the same (event, attendee) pair already exists.
    Duplicate,
    /// The event already holds `capacity` bookings.
    CapacityReached {
        /// Capacity of the event at commit time.
        capacity: i32,
    },
    /// The event no longer exists.
    MissingEvent,
    /// The attendee no longer exists.
    MissingAttendee,
}
