//! Attendee repository implementation.

use sqlx::PgPool;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::types::AttendeeId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_entity::attendee::{Attendee, UpdateAttendee};

use super::{db_error, to_bigint};

/// Message reported when an email is already used by another attendee.
pub const EMAIL_TAKEN: &str = "The email has already been taken.";

/// Repository for attendee CRUD operations.
#[derive(Debug, Clone)]
pub struct AttendeeRepository {
    pool: PgPool,
}

impl AttendeeRepository {
    /// Create a new attendee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an attendee by ID.
    pub async fn find_by_id(&self, id: AttendeeId) -> AppResult<Option<Attendee>> {
        sqlx::query_as::<_, Attendee>("SELECT * FROM attendees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find attendee"))
    }

    /// List attendees in creation order.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Attendee>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendees")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count attendees"))?;

        let attendees = sqlx::query_as::<_, Attendee>(
            "SELECT * FROM attendees ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(to_bigint(page.limit()))
        .bind(to_bigint(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list attendees"))?;

        Ok(PageResponse::new(
            attendees,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a fully-built attendee row.
    pub async fn create(&self, attendee: &Attendee) -> AppResult<Attendee> {
        sqlx::query_as::<_, Attendee>(
            "INSERT INTO attendees (id, name, email, phone, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(attendee.id)
        .bind(&attendee.name)
        .bind(&attendee.email)
        .bind(&attendee.phone)
        .bind(attendee.created_at)
        .bind(attendee.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create attendee"))
    }

    /// Apply a partial update. Returns `None` if the attendee does not exist.
    pub async fn update(
        &self,
        id: AttendeeId,
        data: &UpdateAttendee,
    ) -> AppResult<Option<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "UPDATE attendees SET \
               name = COALESCE($2, name), \
               email = COALESCE($3, email), \
               phone = CASE WHEN $4 THEN $5 ELSE phone END, \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.phone.is_some())
        .bind(data.phone.clone().flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update attendee"))
    }

    /// Delete an attendee; their bookings go with them via `ON DELETE CASCADE`.
    pub async fn delete(&self, id: AttendeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete attendee"))?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(err: sqlx::Error, context: &'static str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::conflict(EMAIL_TAKEN);
        }
    }
    AppError::with_source(ErrorKind::Database, context, err)
}
