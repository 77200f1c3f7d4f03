//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use eventhub_entity::booking::BookingInsert;
use eventhub_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::store::EntityStore;

/// Store manager that wraps the configured entity store.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn EntityStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    ///
    /// The PostgreSQL provider connects (and migrates) before returning.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let inner: Arc<dyn EntityStore> = match config.store.provider.as_str() {
            #[cfg(feature = "postgres")]
            "postgres" => {
                info!("Initializing PostgreSQL entity store");
                let db = eventhub_database::DatabasePool::connect(&config.database).await?;
                Arc::new(crate::postgres::PgEntityStore::new(db))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory entity store");
                Arc::new(crate::memory::MemoryEntityStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: postgres, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn EntityStore>) -> Self {
        Self { inner: store }
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn EntityStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl EntityStore for StoreManager {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn get_event(&self, id: EventId) -> AppResult<Option<Event>> {
        self.inner.get_event(id).await
    }

    async fn list_events(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        self.inner.list_events(page).await
    }

    async fn create_event(&self, data: CreateEvent) -> AppResult<Event> {
        self.inner.create_event(data).await
    }

    async fn update_event(&self, id: EventId, data: UpdateEvent) -> AppResult<Option<Event>> {
        self.inner.update_event(id, data).await
    }

    async fn delete_event(&self, id: EventId) -> AppResult<bool> {
        self.inner.delete_event(id).await
    }

    async fn get_attendee(&self, id: AttendeeId) -> AppResult<Option<Attendee>> {
        self.inner.get_attendee(id).await
    }

    async fn list_attendees(&self, page: &PageRequest) -> AppResult<PageResponse<Attendee>> {
        self.inner.list_attendees(page).await
    }

    async fn create_attendee(&self, data: CreateAttendee) -> AppResult<Attendee> {
        self.inner.create_attendee(data).await
    }

    async fn update_attendee(
        &self,
        id: AttendeeId,
        data: UpdateAttendee,
    ) -> AppResult<Option<Attendee>> {
        self.inner.update_attendee(id, data).await
    }

    async fn delete_attendee(&self, id: AttendeeId) -> AppResult<bool> {
        self.inner.delete_attendee(id).await
    }

    async fn booking_exists(&self, event_id: EventId, attendee_id: AttendeeId) -> AppResult<bool> {
        self.inner.booking_exists(event_id, attendee_id).await
    }

    async fn count_bookings(&self, event_id: EventId) -> AppResult<u64> {
        self.inner.count_bookings(event_id).await
    }

    async fn insert_booking(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> AppResult<BookingInsert> {
        self.inner.insert_booking(event_id, attendee_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
