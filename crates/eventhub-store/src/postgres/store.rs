//! PostgreSQL entity store backed by the sqlx repositories.

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_database::DatabasePool;
use eventhub_database::repositories::{AttendeeRepository, BookingRepository, EventRepository};
use eventhub_entity::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use eventhub_entity::booking::BookingInsert;
use eventhub_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::store::EntityStore;

/// Entity store that persists to PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgEntityStore {
    db: DatabasePool,
    events: EventRepository,
    attendees: AttendeeRepository,
    bookings: BookingRepository,
}

impl PgEntityStore {
    /// Creates a store over an open pool.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            events: EventRepository::new(pool.clone()),
            attendees: AttendeeRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
            db,
        }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn get_event(&self, id: EventId) -> AppResult<Option<Event>> {
        self.events.find_by_id(id).await
    }

    async fn list_events(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        self.events.find_all(page).await
    }

    async fn create_event(&self, data: CreateEvent) -> AppResult<Event> {
        self.events.create(&Event::from_create(data)).await
    }

    async fn update_event(&self, id: EventId, data: UpdateEvent) -> AppResult<Option<Event>> {
        self.events.update(id, &data).await
    }

    async fn delete_event(&self, id: EventId) -> AppResult<bool> {
        self.events.delete(id).await
    }

    async fn get_attendee(&self, id: AttendeeId) -> AppResult<Option<Attendee>> {
        self.attendees.find_by_id(id).await
    }

    async fn list_attendees(&self, page: &PageRequest) -> AppResult<PageResponse<Attendee>> {
        self.attendees.find_all(page).await
    }

    async fn create_attendee(&self, data: CreateAttendee) -> AppResult<Attendee> {
        self.attendees.create(&Attendee::from_create(data)).await
    }

    async fn update_attendee(
        &self,
        id: AttendeeId,
        data: UpdateAttendee,
    ) -> AppResult<Option<Attendee>> {
        self.attendees.update(id, &data).await
    }

    async fn delete_attendee(&self, id: AttendeeId) -> AppResult<bool> {
        self.attendees.delete(id).await
    }

    async fn booking_exists(&self, event_id: EventId, attendee_id: AttendeeId) -> AppResult<bool> {
        self.bookings.exists(event_id, attendee_id).await
    }

    async fn count_bookings(&self, event_id: EventId) -> AppResult<u64> {
        self.bookings.count_for_event(event_id).await
    }

    async fn insert_booking(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> AppResult<BookingInsert> {
        self.bookings.insert_guarded(event_id, attendee_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }
}
