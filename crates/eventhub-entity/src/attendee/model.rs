//! Attendee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::AttendeeId;

/// A person who can book events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    /// Unique attendee identifier.
    pub id: AttendeeId,
    /// Full name.
    pub name: String,
    /// Email address, unique across attendees (case-insensitive).
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// When the attendee was created.
    pub created_at: DateTime<Utc>,
    /// When the attendee was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Attendee {
    /// Build a new attendee row from a create payload.
    pub fn from_create(data: CreateAttendee) -> Self {
        let now = Utc::now();
        Self {
            id: AttendeeId::new(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place and bump `updated_at`.
    pub fn apply(&mut self, update: UpdateAttendee) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }

    /// Case-insensitive email comparison used for uniqueness checks.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Data required to create a new attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendee {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// Partial update of an attendee. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAttendee {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone; `Some(None)` clears it.
    pub phone: Option<Option<String>>,
}
