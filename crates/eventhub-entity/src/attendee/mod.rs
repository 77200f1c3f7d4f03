//! Attendee domain entities.

pub mod model;

pub use model::{Attendee, CreateAttendee, UpdateAttendee};
