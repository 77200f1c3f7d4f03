//! PostgreSQL entity store.

pub mod store;

pub use store::PgEntityStore;
