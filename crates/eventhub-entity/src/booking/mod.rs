//! Booking domain entities.

pub mod insert;
pub mod model;

pub use insert::BookingInsert;
pub use model::Booking;
