//! Route handlers organized by domain.

pub mod attendee;
pub mod booking;
pub mod event;
pub mod health;
