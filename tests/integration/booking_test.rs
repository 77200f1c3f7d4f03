//! Integration tests for booking admission over HTTP.

mod helpers;

use futures::future::join_all;
use http::StatusCode;
use serde_json::json;

use eventhub_store::EntityStore;

#[tokio::test]
async fn test_create_booking() {
    let app = helpers::TestApp::new();
    let event = app.create_event(2).await;
    let attendee = app.create_attendee().await;

    let response = app
        .post(
            "/api/bookings",
            json!({ "event_id": event.id, "attendee_id": attendee.id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Booking created successfully.");
    assert_eq!(response.body["data"]["event_id"], event.id.to_string());
    assert_eq!(response.body["data"]["attendee_id"], attendee.id.to_string());
}

#[tokio::test]
async fn test_prevents_duplicate_booking() {
    let app = helpers::TestApp::new();
    let event = app.create_event(2).await;
    let attendee = app.create_attendee().await;
    app.seed_booking(&event, &attendee).await;

    let response = app
        .post(
            "/api/bookings",
            json!({ "event_id": event.id, "attendee_id": attendee.id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        "Attendee has already booked this event."
    );
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_prevents_overbooking() {
    let app = helpers::TestApp::new();
    let event = app.create_event(1).await;
    let first = app.create_attendee().await;
    let second = app.create_attendee().await;
    app.seed_booking(&event, &first).await;

    let response = app
        .post(
            "/api/bookings",
            json!({ "event_id": event.id, "attendee_id": second.id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Event is fully booked.");
}

#[tokio::test]
async fn test_booking_unknown_references() {
    let app = helpers::TestApp::new();
    let event = app.create_event(1).await;
    let attendee = app.create_attendee().await;

    let response = app
        .post(
            "/api/bookings",
            json!({ "event_id": uuid::Uuid::new_v4(), "attendee_id": attendee.id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Event not found.");

    let response = app
        .post(
            "/api/bookings",
            json!({ "event_id": event.id, "attendee_id": uuid::Uuid::new_v4() }),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Attendee not found.");
}

#[tokio::test]
async fn test_booking_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app
        .post("/api/bookings", json!({ "event_id": "abc" }))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_for_last_seat() {
    let app = helpers::TestApp::new();
    let event = app.create_event(1).await;
    let first = app.create_attendee().await;
    let second = app.create_attendee().await;

    let body = |attendee: &eventhub_entity::attendee::Attendee| {
        json!({ "event_id": event.id, "attendee_id": attendee.id })
    };
    let (a, b) = tokio::join!(
        app.post("/api/bookings", body(&first)),
        app.post("/api/bookings", body(&second)),
    );

    let mut statuses = [a.status, b.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::FORBIDDEN]);
    assert_eq!(app.state.store.count_bookings(event.id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_concurrent_requests_respect_capacity() {
    let app = std::sync::Arc::new(helpers::TestApp::new());
    let event = app.create_event(3).await;
    let mut attendees = Vec::new();
    for _ in 0..20 {
        attendees.push(app.create_attendee().await);
    }

    let event_id = event.id;
    let handles = attendees.into_iter().map(|attendee| {
        let app = std::sync::Arc::clone(&app);
        tokio::spawn(async move {
            app.post(
                "/api/bookings",
                json!({ "event_id": event_id, "attendee_id": attendee.id }),
            )
            .await
            .status
        })
    });
    let statuses: Vec<StatusCode> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CREATED).count(),
        3
    );
    assert!(
        statuses
            .iter()
            .all(|s| *s == StatusCode::CREATED || *s == StatusCode::FORBIDDEN)
    );
    assert_eq!(app.state.store.count_bookings(event_id).await.unwrap(), 3);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");
}
