//! Request DTOs with validation.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::attendee::{CreateAttendee, UpdateAttendee};
use eventhub_entity::event::{CreateEvent, UpdateEvent};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < Utc::now().date_naive() {
        let mut err = ValidationError::new("after_or_equal");
        err.message = Some("The date must be a date after or equal to today.".into());
        return Err(err);
    }
    Ok(())
}

/// Create event request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "The title must be 1 to 255 characters."))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Event date (`YYYY-MM-DD`), today or later.
    #[validate(custom(function = "not_in_past"))]
    pub date: NaiveDate,
    /// Country.
    #[validate(length(min = 1, max = 255, message = "The country must be 1 to 255 characters."))]
    pub country: String,
    /// Capacity.
    #[validate(range(min = 1, message = "The capacity must be at least 1."))]
    pub capacity: i32,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            country: req.country,
            capacity: req.capacity,
        }
    }
}

/// Update event request body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "The title must be 1 to 255 characters."))]
    pub title: Option<String>,
    /// Description; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// Event date.
    #[validate(custom(function = "not_in_past"))]
    pub date: Option<NaiveDate>,
    /// Country.
    #[validate(length(min = 1, max = 255, message = "The country must be 1 to 255 characters."))]
    pub country: Option<String>,
    /// Capacity.
    #[validate(range(min = 1, message = "The capacity must be at least 1."))]
    pub capacity: Option<i32>,
}

impl From<UpdateEventRequest> for UpdateEvent {
    fn from(req: UpdateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            country: req.country,
            capacity: req.capacity,
        }
    }
}

/// Create attendee request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAttendeeRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "The name must be 1 to 255 characters."))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    /// Phone number.
    #[validate(length(max = 20, message = "The phone may not be greater than 20 characters."))]
    pub phone: Option<String>,
}

impl From<CreateAttendeeRequest> for CreateAttendee {
    fn from(req: CreateAttendeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Update attendee request body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAttendeeRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "The name must be 1 to 255 characters."))]
    pub name: Option<String>,
    /// Email address.
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    /// Phone number; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20, message = "The phone may not be greater than 20 characters."))]
    pub phone: Option<Option<String>>,
}

impl From<UpdateAttendeeRequest> for UpdateAttendee {
    fn from(req: UpdateAttendeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Create booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Event to book.
    pub event_id: EventId,
    /// Attendee making the booking.
    pub attendee_id: AttendeeId,
}
