//! Route definitions for the EventHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes and no middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(event_routes())
        .merge(attendee_routes())
        .merge(booking_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Event CRUD
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route(
            "/events/{id}",
            get(handlers::event::get_event)
                .put(handlers::event::update_event)
                .patch(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )
}

/// Attendee CRUD
fn attendee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/attendees",
            get(handlers::attendee::list_attendees).post(handlers::attendee::create_attendee),
        )
        .route(
            "/attendees/{id}",
            get(handlers::attendee::get_attendee)
                .put(handlers::attendee::update_attendee)
                .patch(handlers::attendee::update_attendee)
                .delete(handlers::attendee::delete_attendee),
        )
}

/// Booking admission
fn booking_routes() -> Router<AppState> {
    Router::new().route("/bookings", post(handlers::booking::create_booking))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
