//! Database migration runner.
//!
//! Applies the `events`, `attendees`, and `bookings` schema from the
//! workspace `migrations/` directory, including the cascade foreign keys
//! and the unique constraints booking admission relies on.

use sqlx::PgPool;
use tracing::info;

use eventhub_core::error::{AppError, ErrorKind};

/// Run all pending EventHub schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
