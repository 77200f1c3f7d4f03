//! Event CRUD.

pub mod service;

pub use service::EventService;
