//! Rejection reasons returned by the admission engine.

use thiserror::Error;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::types::{AttendeeId, EventId};

/// Why a booking request was not admitted.
#[derive(Debug, Error)]
pub enum AdmissionError {
    /// The referenced event or attendee does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// "Event" or "Attendee".
        entity: &'static str,
        /// The id that was looked up.
        id: Uuid,
    },

    /// The attendee already holds a booking for this event.
    #[error("attendee {attendee_id} has already booked event {event_id}")]
    AlreadyBooked {
        event_id: EventId,
        attendee_id: AttendeeId,
    },

    /// The event holds as many bookings as its capacity allows.
    #[error("event {event_id} is fully booked (capacity {capacity})")]
    CapacityExceeded { event_id: EventId, capacity: i32 },

    /// The store could not complete the operation. Safe to retry with backoff.
    #[error("entity store unavailable: {0}")]
    StoreUnavailable(#[source] AppError),
}

impl AdmissionError {
    pub(crate) fn missing_event(id: EventId) -> Self {
        Self::NotFound {
            entity: "Event",
            id: id.into_uuid(),
        }
    }

    pub(crate) fn missing_attendee(id: AttendeeId) -> Self {
        Self::NotFound {
            entity: "Attendee",
            id: id.into_uuid(),
        }
    }

    /// Whether the caller may retry the same request later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<AppError> for AdmissionError {
    fn from(err: AppError) -> Self {
        Self::StoreUnavailable(err)
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::NotFound { entity, .. } => {
                AppError::not_found(format!("{entity} not found."))
            }
            AdmissionError::AlreadyBooked { .. } => {
                AppError::conflict("Attendee has already booked this event.")
            }
            AdmissionError::CapacityExceeded { .. } => {
                AppError::forbidden("Event is fully booked.")
            }
            AdmissionError::StoreUnavailable(source) => AppError::with_source(
                ErrorKind::ServiceUnavailable,
                "Failed to create booking.",
                source,
            ),
        }
    }
}
