//! # eventhub-service
//!
//! Business logic service layer for EventHub. The booking admission engine
//! decides whether an (event, attendee) pair may be booked; the event and
//! attendee services wrap plain CRUD against the entity store.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod attendee;
pub mod booking;
pub mod event;

pub use attendee::AttendeeService;
pub use booking::{AdmissionError, BookingAdmission, EventLocks};
pub use event::EventService;
