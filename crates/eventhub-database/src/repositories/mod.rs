//! Repository implementations for all EventHub entities.

pub mod attendee;
pub mod booking;
pub mod event;

pub use attendee::AttendeeRepository;
pub use booking::BookingRepository;
pub use event::EventRepository;

use eventhub_core::error::{AppError, ErrorKind};

/// Convert a page bound to a Postgres `BIGINT`, saturating at `i64::MAX`.
pub(crate) fn to_bigint(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Map a sqlx error to a database `AppError`, keeping the cause.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}
