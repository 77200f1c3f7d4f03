//! Event CRUD operations.

use std::sync::Arc;

use tracing::info;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::EventId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_entity::event::{CreateEvent, Event, UpdateEvent};
use eventhub_store::EntityStore;

/// Message for lookups of an unknown event.
pub const EVENT_NOT_FOUND: &str = "Event not found.";

/// Manages event CRUD operations.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Entity store.
    store: Arc<dyn EntityStore>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Lists events in creation order.
    pub async fn list_events(&self, page: PageRequest) -> AppResult<PageResponse<Event>> {
        self.store.list_events(&page).await
    }

    /// Gets an event by ID.
    pub async fn get_event(&self, id: EventId) -> AppResult<Event> {
        self.store
            .get_event(id)
            .await?
            .ok_or_else(|| AppError::not_found(EVENT_NOT_FOUND))
    }

    /// Creates an event.
    pub async fn create_event(&self, data: CreateEvent) -> AppResult<Event> {
        let event = self.store.create_event(data).await?;
        info!(event_id = %event.id, title = %event.title, capacity = event.capacity, "Event created");
        Ok(event)
    }

    /// Applies a partial update to an event.
    pub async fn update_event(&self, id: EventId, data: UpdateEvent) -> AppResult<Event> {
        let event = self
            .store
            .update_event(id, data)
            .await?
            .ok_or_else(|| AppError::not_found(EVENT_NOT_FOUND))?;
        info!(event_id = %id, "Event updated");
        Ok(event)
    }

    /// Deletes an event together with its bookings.
    pub async fn delete_event(&self, id: EventId) -> AppResult<()> {
        if !self.store.delete_event(id).await? {
            return Err(AppError::not_found(EVENT_NOT_FOUND));
        }
        info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
