//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use eventhub_core::config::AppConfig;
use eventhub_service::{AttendeeService, BookingAdmission, EventService};
use eventhub_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Entity store (PostgreSQL or in-memory)
    pub store: Arc<StoreManager>,
    /// Event CRUD
    pub event_service: Arc<EventService>,
    /// Attendee CRUD
    pub attendee_service: Arc<AttendeeService>,
    /// Booking admission engine
    pub admission: Arc<BookingAdmission>,
}

impl AppState {
    /// Wires the services on top of an initialized store.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        let entities = store.store();
        let admission = BookingAdmission::new(Arc::clone(&entities), &config.admission);

        Self {
            event_service: Arc::new(EventService::new(Arc::clone(&entities))),
            attendee_service: Arc::new(AttendeeService::new(entities)),
            admission: Arc::new(admission),
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
