//! Entity store trait for pluggable persistence backends.

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use eventhub_entity::booking::BookingInsert;
use eventhub_entity::event::{CreateEvent, Event, UpdateEvent};

/// Persistence boundary for events, attendees, and bookings.
///
/// Deleting an event or an attendee removes its bookings in the same
/// atomic step. Attendee emails are unique (case-insensitive); a write
/// that would break that fails with a `Conflict` error.
#[async_trait]
pub trait EntityStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name for logs and health output.
    fn name(&self) -> &'static str;

    /// Look up an event.
    async fn get_event(&self, id: EventId) -> AppResult<Option<Event>>;

    /// List events in creation order.
    async fn list_events(&self, page: &PageRequest) -> AppResult<PageResponse<Event>>;

    /// Create an event.
    async fn create_event(&self, data: CreateEvent) -> AppResult<Event>;

    /// Partially update an event. `None` if it does not exist.
    async fn update_event(&self, id: EventId, data: UpdateEvent) -> AppResult<Option<Event>>;

    /// Delete an event and its bookings. `false` if it did not exist.
    async fn delete_event(&self, id: EventId) -> AppResult<bool>;

    /// Look up an attendee.
    async fn get_attendee(&self, id: AttendeeId) -> AppResult<Option<Attendee>>;

    /// List attendees in creation order.
    async fn list_attendees(&self, page: &PageRequest) -> AppResult<PageResponse<Attendee>>;

    /// Create an attendee.
    async fn create_attendee(&self, data: CreateAttendee) -> AppResult<Attendee>;

    /// Partially update an attendee. `None` if it does not exist.
    async fn update_attendee(
        &self,
        id: AttendeeId,
        data: UpdateAttendee,
    ) -> AppResult<Option<Attendee>>;

    /// Delete an attendee and their bookings. `false` if they did not exist.
    async fn delete_attendee(&self, id: AttendeeId) -> AppResult<bool>;

    /// Whether a booking exists for the exact (event, attendee) pair.
    async fn booking_exists(&self, event_id: EventId, attendee_id: AttendeeId) -> AppResult<bool>;

    /// Number of bookings held by an event.
    async fn count_bookings(&self, event_id: EventId) -> AppResult<u64>;

    /// Write a booking after re-checking existence, uniqueness, and
    /// capacity atomically. Nothing is written unless the result is
    /// [`BookingInsert::Inserted`].
    async fn insert_booking(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> AppResult<BookingInsert>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
