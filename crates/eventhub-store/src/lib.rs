//! # eventhub-store
//!
//! Entity store implementations for EventHub. Supports two modes:
//!
//! - **postgres**: PostgreSQL via the repositories in `eventhub-database`
//! - **memory**: In-process store guarded by a single `tokio` lock
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod provider;
pub mod store;

pub use provider::StoreManager;
pub use store::EntityStore;
