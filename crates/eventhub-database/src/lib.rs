//! # eventhub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for events, attendees, and bookings.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
