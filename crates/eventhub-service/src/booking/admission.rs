//! Booking admission engine.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use eventhub_core::config::AdmissionConfig;
use eventhub_core::error::AppError;
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::booking::{Booking, BookingInsert};
use eventhub_store::EntityStore;

use super::error::AdmissionError;
use super::locks::EventLocks;

/// Admits bookings for events.
///
/// Checks run in a fixed order: event exists, attendee exists, pair not
/// already booked, event not full. All of them, plus the insert, happen
/// while holding the event's lock, and the store re-checks them when it
/// writes. Rejections are returned, never retried.
#[derive(Debug, Clone)]
pub struct BookingAdmission {
    /// Entity store.
    store: Arc<dyn EntityStore>,
    /// Per-event serialization.
    locks: Arc<EventLocks>,
    /// Maximum wait for an event's lock.
    lock_timeout: Duration,
}

impl BookingAdmission {
    /// Creates an admission engine from configuration.
    pub fn new(store: Arc<dyn EntityStore>, config: &AdmissionConfig) -> Self {
        Self::with_lock_timeout(store, config.lock_timeout())
    }

    /// Creates an admission engine with an explicit lock timeout.
    pub fn with_lock_timeout(store: Arc<dyn EntityStore>, lock_timeout: Duration) -> Self {
        Self {
            store,
            locks: Arc::new(EventLocks::new()),
            lock_timeout,
        }
    }

    /// The lock registry shared by every clone of this engine.
    pub fn locks(&self) -> &EventLocks {
        &self.locks
    }

    /// Books `attendee_id` onto `event_id`.
    ///
    /// On success exactly one booking has been written. On any error
    /// nothing has been written.
    pub async fn request_booking(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> Result<Booking, AdmissionError> {
        let _slot = self
            .locks
            .acquire(event_id, self.lock_timeout)
            .await
            .map_err(|_| {
                warn!(
                    event_id = %event_id,
                    timeout_ms = self.lock_timeout.as_millis() as u64,
                    "Timed out waiting for event booking lock"
                );
                AdmissionError::StoreUnavailable(AppError::service_unavailable(
                    "Timed out waiting for event booking lock",
                ))
            })?;

        let result = self.admit(event_id, attendee_id).await;

        match &result {
            Ok(booking) => info!(
                booking_id = %booking.id,
                event_id = %event_id,
                attendee_id = %attendee_id,
                "Booking admitted"
            ),
            Err(err) if err.is_transient() => warn!(
                event_id = %event_id,
                attendee_id = %attendee_id,
                error = %err,
                "Booking admission failed"
            ),
            Err(err) => info!(
                event_id = %event_id,
                attendee_id = %attendee_id,
                reason = %err,
                "Booking rejected"
            ),
        }

        result
    }

    async fn admit(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> Result<Booking, AdmissionError> {
        let event = self
            .store
            .get_event(event_id)
            .await?
            .ok_or_else(|| AdmissionError::missing_event(event_id))?;

        self.store
            .get_attendee(attendee_id)
            .await?
            .ok_or_else(|| AdmissionError::missing_attendee(attendee_id))?;

        if self.store.booking_exists(event_id, attendee_id).await? {
            return Err(AdmissionError::AlreadyBooked {
                event_id,
                attendee_id,
            });
        }

        let booked = self.store.count_bookings(event_id).await?;
        if !event.has_room_for(booked) {
            return Err(AdmissionError::CapacityExceeded {
                event_id,
                capacity: event.capacity,
            });
        }

        match self.store.insert_booking(event_id, attendee_id).await? {
            BookingInsert::Inserted(booking) => Ok(booking),
            BookingInsert::Duplicate => Err(AdmissionError::AlreadyBooked {
                event_id,
                attendee_id,
            }),
            BookingInsert::CapacityReached { capacity } => {
                Err(AdmissionError::CapacityExceeded { event_id, capacity })
            }
            BookingInsert::MissingEvent => Err(AdmissionError::missing_event(event_id)),
            BookingInsert::MissingAttendee => Err(AdmissionError::missing_attendee(attendee_id)),
        }
    }
}
