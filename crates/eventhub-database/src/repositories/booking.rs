//! Booking repository implementation.

use sqlx::PgPool;
use tracing::debug;

use eventhub_core::result::AppResult;
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::booking::{Booking, BookingInsert};

use super::db_error;

/// Repository for booking lookups and guarded inserts.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether a booking exists for the exact (event, attendee) pair.
    pub async fn exists(&self, event_id: EventId, attendee_id: AttendeeId) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM bookings WHERE event_id = $1 AND attendee_id = $2)",
        )
        .bind(event_id)
        .bind(attendee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check booking"))
    }

    /// Number of bookings held by an event.
    pub async fn count_for_event(&self, event_id: EventId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count bookings"))?;
        Ok(count as u64)
    }

    /// Insert a booking inside a transaction that re-checks every admission
    /// rule.
    ///
    /// The event row is locked `FOR UPDATE`, which serializes concurrent
    /// admissions for the same event across processes; the attendee row is
    /// locked `FOR SHARE` so it cannot be deleted before commit. The unique
    /// `(event_id, attendee_id)` constraint backs the duplicate check.
    /// Every early return drops the transaction, which rolls it back.
    pub async fn insert_guarded(
        &self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> AppResult<BookingInsert> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin booking transaction"))?;

        let capacity: Option<i32> =
            sqlx::query_scalar("SELECT capacity FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to lock event"))?;
        let Some(capacity) = capacity else {
            return Ok(BookingInsert::MissingEvent);
        };

        let attendee: Option<AttendeeId> =
            sqlx::query_scalar("SELECT id FROM attendees WHERE id = $1 FOR SHARE")
                .bind(attendee_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to lock attendee"))?;
        if attendee.is_none() {
            return Ok(BookingInsert::MissingAttendee);
        }

        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM bookings WHERE event_id = $1 AND attendee_id = $2)",
        )
        .bind(event_id)
        .bind(attendee_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to check booking"))?;
        if duplicate {
            return Ok(BookingInsert::Duplicate);
        }

        let booked: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to count bookings"))?;
        if booked >= i64::from(capacity) {
            debug!(%event_id, booked, capacity, "Capacity reached at commit time");
            return Ok(BookingInsert::CapacityReached { capacity });
        }

        let booking = Booking::new(event_id, attendee_id);
        let inserted = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, event_id, attendee_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (event_id, attendee_id) DO NOTHING RETURNING *",
        )
        .bind(booking.id)
        .bind(booking.event_id)
        .bind(booking.attendee_id)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to insert booking"))?;

        let Some(booking) = inserted else {
            return Ok(BookingInsert::Duplicate);
        };

        tx.commit()
            .await
            .map_err(db_error("Failed to commit booking"))?;

        Ok(BookingInsert::Inserted(booking))
    }
}
