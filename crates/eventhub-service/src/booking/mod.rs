//! Booking admission: duplicate and capacity checks under a per-event lock.

pub mod admission;
pub mod error;
pub mod locks;

pub use admission::BookingAdmission;
pub use error::AdmissionError;
pub use locks::{EventLockGuard, EventLocks};
