//! In-memory entity store using a Tokio read-write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AttendeeId, BookingId, EventId};
use eventhub_entity::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use eventhub_entity::booking::{Booking, BookingInsert};
use eventhub_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::store::EntityStore;

/// Message reported when an email is already used by another attendee.
const EMAIL_TAKEN: &str = "The email has already been taken.";

#[derive(Debug, Default)]
struct InnerState {
    events: HashMap<EventId, Event>,
    attendees: HashMap<AttendeeId, Attendee>,
    bookings: HashMap<BookingId, Booking>,
}

impl InnerState {
    fn email_taken(&self, email: &str, except: Option<AttendeeId>) -> bool {
        self.attendees
            .values()
            .any(|a| Some(a.id) != except && a.has_email(email))
    }

    fn booked(&self, event_id: EventId) -> u64 {
        self.bookings
            .values()
            .filter(|b| b.event_id == event_id)
            .count() as u64
    }

    fn has_pair(&self, event_id: EventId, attendee_id: AttendeeId) -> bool {
        self.bookings
            .values()
            .any(|b| b.is_pair(event_id, attendee_id))
    }
}

/// In-memory entity store.
///
/// Every operation runs under one lock, so multi-record operations
/// (guarded inserts, cascading deletes) are atomic. Suitable for tests
/// and single-node demos; data is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryEntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone + serde::Serialize>(
    mut rows: Vec<T>,
    page: &PageRequest,
    key: impl Fn(&T) -> (chrono::DateTime<chrono::Utc>, uuid::Uuid),
) -> PageResponse<T> {
    rows.sort_by_key(&key);
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
        .collect();
    PageResponse::new(items, page.page, page.page_size, total)
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_event(&self, id: EventId) -> AppResult<Option<Event>> {
        Ok(self.state.read().await.events.get(&id).cloned())
    }

    async fn list_events(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        let rows = self.state.read().await.events.values().cloned().collect();
        Ok(paginate(rows, page, |e: &Event| (e.created_at, e.id.0)))
    }

    async fn create_event(&self, data: CreateEvent) -> AppResult<Event> {
        let event = Event::from_create(data);
        self.state
            .write()
            .await
            .events
            .insert(event.id, event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, data: UpdateEvent) -> AppResult<Option<Event>> {
        let mut state = self.state.write().await;
        Ok(state.events.get_mut(&id).map(|event| {
            event.apply(data);
            event.clone()
        }))
    }

    async fn delete_event(&self, id: EventId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.events.remove(&id).is_none() {
            return Ok(false);
        }
        state.bookings.retain(|_, b| b.event_id != id);
        debug!(event_id = %id, "Event and its bookings removed");
        Ok(true)
    }

    async fn get_attendee(&self, id: AttendeeId) -> AppResult<Option<Attendee>> {
        Ok(self.state.read().await.attendees.get(&id).cloned())
    }

    async fn list_attendees(&self, page: &PageRequest) -> AppResult<PageResponse<Attendee>> {
        let rows = self.state.read().await.attendees.values().cloned().collect();
        Ok(paginate(rows, page, |a: &Attendee| (a.created_at, a.id.0)))
    }

    async fn create_attendee(&self, data: CreateAttendee) -> AppResult<Attendee> {
        let mut state = self.state.write().await;
        if state.email_taken(&data.email, None) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }
        let attendee = Attendee::from_create(data);
        state.attendees.insert(attendee.id, attendee.clone());
        Ok(attendee)
    }

    async fn update_attendee(
        &self,
        id: AttendeeId,
        data: UpdateAttendee,
    ) -> AppResult<Option<Attendee>> {
        let mut state = self.state.write().await;
        if !state.attendees.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = &data.email {
            if state.email_taken(email, Some(id)) {
                return Err(AppError::conflict(EMAIL_TAKEN));
            }
        }
        Ok(state.attendees.get_mut(&id).map(|attendee| {
            attendee.apply(data);
            attendee.clone()
        }))
    }

    async fn delete_attendee(&self, id: AttendeeId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.attendees.remove(&id).is_none() {
            return Ok(false);
        }
        state.bookings.retain(|_, b| b.attendee_id != id);
        debug!(attendee_id = %id, "Attendee and their bookings removed");
        Ok(true)
    }

    async fn booking_exists(&self, event_id: EventId, attendee_id: AttendeeId) -> AppResult<bool> {
        Ok(self.state.read().await.has_pair(event_id, attendee_id))
    }

    async fn count_bookings(&self, event_id: EventId) -> AppResult<u64> {
        Ok(self.state.read().await.booked(event_id))
    }

    async fn insert_booking(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> AppResult<BookingInsert> {
        let mut state = self.state.write().await;

        let Some(capacity) = state.events.get(&event_id).map(|e| e.capacity) else {
            return Ok(BookingInsert::MissingEvent);
        };
        if !state.attendees.contains_key(&attendee_id) {
            return Ok(BookingInsert::MissingAttendee);
        }
        if state.has_pair(event_id, attendee_id) {
            return Ok(BookingInsert::Duplicate);
        }
        if state.booked(event_id) >= capacity.max(0) as u64 {
            return Ok(BookingInsert::CapacityReached { capacity });
        }

        let booking = Booking::new(event_id, attendee_id);
        state.bookings.insert(booking.id, booking.clone());
        Ok(BookingInsert::Inserted(booking))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
