//! Event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::EventId;

/// A scheduled event that attendees can book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Calendar date the event takes place on.
    pub date: NaiveDate,
    /// Country the event takes place in.
    pub country: String,
    /// Maximum number of bookings the event accepts.
    pub capacity: i32,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build a new event row from a create payload.
    pub fn from_create(data: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: EventId::new(),
            title: data.title,
            description: data.description,
            date: data.date,
            country: data.country,
            capacity: data.capacity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place and bump `updated_at`.
    pub fn apply(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
        self.updated_at = Utc::now();
    }

    /// Whether `booked` existing bookings leave room for one more.
    pub fn has_room_for(&self, booked: u64) -> bool {
        booked < self.capacity.max(0) as u64
    }
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Event date.
    pub date: NaiveDate,
    /// Country.
    pub country: String,
    /// Maximum number of bookings (positive).
    pub capacity: i32,
}

/// Partial update of an event. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New title.
    pub title: Option<String>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New country.
    pub country: Option<String>,
    /// New capacity.
    pub capacity: Option<i32>,
}
