//! Event repository implementation.

use sqlx::PgPool;

use eventhub_core::result::AppResult;
use eventhub_core::types::EventId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_entity::event::{Event, UpdateEvent};

use super::{db_error, to_bigint};

/// Repository for event CRUD operations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find event"))
    }

    /// List events in creation order.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count events"))?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(to_bigint(page.limit()))
        .bind(to_bigint(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list events"))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a fully-built event row.
    pub async fn create(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, title, description, date, country, capacity, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.country)
        .bind(event.capacity)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create event"))
    }

    /// Apply a partial update. Returns `None` if the event does not exist.
    pub async fn update(&self, id: EventId, data: &UpdateEvent) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET \
               title = COALESCE($2, title), \
               description = CASE WHEN $3 THEN $4 ELSE description END, \
               date = COALESCE($5, date), \
               country = COALESCE($6, country), \
               capacity = COALESCE($7, capacity), \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.description.is_some())
        .bind(data.description.clone().flatten())
        .bind(data.date)
        .bind(&data.country)
        .bind(data.capacity)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update event"))
    }

    /// Delete an event; its bookings go with it via `ON DELETE CASCADE`.
    pub async fn delete(&self, id: EventId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete event"))?;
        Ok(result.rows_affected() > 0)
    }
}
