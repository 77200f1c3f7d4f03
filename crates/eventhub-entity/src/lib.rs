//! # eventhub-entity
//!
//! Domain entity models for EventHub. Every struct in this crate
//! represents a database table row or a write payload for one. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and row
//! types additionally derive `sqlx::FromRow`.

pub mod attendee;
pub mod booking;
pub mod event;

pub use attendee::{Attendee, CreateAttendee, UpdateAttendee};
pub use booking::{Booking, BookingInsert};
pub use event::{CreateEvent, Event, UpdateEvent};
