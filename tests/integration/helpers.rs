//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use eventhub_api::{AppState, build_app};
use eventhub_core::config::{AppConfig, DatabaseConfig};
use eventhub_database::DatabasePool;
use eventhub_entity::attendee::{Attendee, CreateAttendee};
use eventhub_entity::event::{CreateEvent, Event};
use eventhub_store::memory::MemoryEntityStore;
use eventhub_store::postgres::PgEntityStore;
use eventhub_store::{EntityStore, StoreManager};

/// Test application context backed by the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding and inspecting the store directly
    pub state: AppState,
}

/// Response wrapper for tests
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();

        let store = StoreManager::from_store(Arc::new(MemoryEntityStore::new()));
        let state = AppState::new(config, store);
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Make a JSON request against the router
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request("POST", uri, Some(body)).await
    }

    /// Insert an event directly into the store
    pub async fn create_event(&self, capacity: i32) -> Event {
        self.state
            .store
            .create_event(CreateEvent {
                description: Some("Seeded".to_string()),
                ..new_event(capacity)
            })
            .await
            .unwrap()
    }

    /// Insert an attendee with a unique email directly into the store
    pub async fn create_attendee(&self) -> Attendee {
        self.state
            .store
            .create_attendee(new_attendee())
            .await
            .unwrap()
    }

    /// Book directly through the store, bypassing the HTTP layer
    pub async fn seed_booking(&self, event: &Event, attendee: &Attendee) {
        self.state
            .store
            .insert_booking(event.id, attendee.id)
            .await
            .unwrap();
    }
}

/// A date `days` from today in `YYYY-MM-DD` form
pub fn date_in(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

/// Connect a PostgreSQL store to `DATABASE_URL` and apply migrations.
///
/// Returns `None` when `DATABASE_URL` is unset so the suite can run
/// without a database.
pub async fn pg_store() -> Option<PgEntityStore> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };
    let config = DatabaseConfig {
        url,
        max_connections: 10,
        min_connections: 0,
        ..DatabaseConfig::default()
    };
    let db = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    Some(PgEntityStore::new(db))
}

/// Event payload with the given capacity, a month from today.
pub fn new_event(capacity: i32) -> CreateEvent {
    CreateEvent {
        title: "Factory Event".to_string(),
        description: None,
        date: Utc::now().date_naive() + Duration::days(30),
        country: "Kenya".to_string(),
        capacity,
    }
}

/// Attendee payload with a unique email.
pub fn new_attendee() -> CreateAttendee {
    CreateAttendee {
        name: "Factory Attendee".to_string(),
        email: format!("{}@example.com", Uuid::new_v4().simple()),
        phone: None,
    }
}
