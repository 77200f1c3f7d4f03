//! Attendee CRUD operations.

use std::sync::Arc;

use tracing::info;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::AttendeeId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_entity::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use eventhub_store::EntityStore;

/// Message for lookups of an unknown attendee.
pub const ATTENDEE_NOT_FOUND: &str = "Attendee not found.";

/// Manages attendee CRUD operations.
///
/// Email uniqueness is enforced by the store, which reports a taken
/// address as a `Conflict`.
#[derive(Debug, Clone)]
pub struct AttendeeService {
    store: Arc<dyn EntityStore>,
}

impl AttendeeService {
    /// Creates a new attendee service.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Lists attendees in creation order.
    pub async fn list_attendees(&self, page: PageRequest) -> AppResult<PageResponse<Attendee>> {
        self.store.list_attendees(&page).await
    }

    /// Gets an attendee by ID.
    pub async fn get_attendee(&self, id: AttendeeId) -> AppResult<Attendee> {
        self.store
            .get_attendee(id)
            .await?
            .ok_or_else(|| AppError::not_found(ATTENDEE_NOT_FOUND))
    }

    /// Registers an attendee.
    pub async fn create_attendee(&self, data: CreateAttendee) -> AppResult<Attendee> {
        let attendee = self.store.create_attendee(data).await?;
        info!(attendee_id = %attendee.id, "Attendee created");
        Ok(attendee)
    }

    /// Applies a partial update to an attendee.
    pub async fn update_attendee(
        &self,
        id: AttendeeId,
        data: UpdateAttendee,
    ) -> AppResult<Attendee> {
        let attendee = self
            .store
            .update_attendee(id, data)
            .await?
            .ok_or_else(|| AppError::not_found(ATTENDEE_NOT_FOUND))?;
        info!(attendee_id = %id, "Attendee updated");
        Ok(attendee)
    }

    /// Deletes an attendee together with their bookings.
    pub async fn delete_attendee(&self, id: AttendeeId) -> AppResult<()> {
        if !self.store.delete_attendee(id).await? {
            return Err(AppError::not_found(ATTENDEE_NOT_FOUND));
        }
        info!(attendee_id = %id, "Attendee deleted");
        Ok(())
    }
}
