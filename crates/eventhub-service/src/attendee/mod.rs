//! Attendee CRUD.

pub mod service;

pub use service::AttendeeService;
