//! Integration tests for attendee CRUD.

mod helpers;

use http::StatusCode;
use serde_json::json;

use eventhub_store::EntityStore;

#[tokio::test]
async fn test_list_attendees_with_pagination() {
    let app = helpers::TestApp::new();
    for _ in 0..15 {
        app.create_attendee().await;
    }

    let response = app.get("/api/attendees?per_page=10").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Attendees fetched successfully.");
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);
    assert_eq!(response.body["meta"]["total"], 15);
    assert_eq!(response.body["meta"]["last_page"], 2);
}

#[tokio::test]
async fn test_create_attendee() {
    let app = helpers::TestApp::new();

    let response = app
        .post(
            "/api/attendees",
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "phone": "1234567890",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Attendee created successfully.");
    assert_eq!(response.body["data"]["email"], "john@example.com");
}

#[tokio::test]
async fn test_create_attendee_duplicate_email() {
    let app = helpers::TestApp::new();
    let body = json!({ "name": "John Doe", "email": "john@example.com" });

    assert_eq!(
        app.post("/api/attendees", body.clone()).await.status,
        StatusCode::CREATED
    );
    let response = app.post("/api/attendees", body).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "The email has already been taken.");
}

#[tokio::test]
async fn test_create_attendee_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .post(
            "/api/attendees",
            json!({ "name": "John Doe", "email": "nope", "phone": "1".repeat(21) }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["details"]["email"].is_array());
    assert!(response.body["details"]["phone"].is_array());
}

#[tokio::test]
async fn test_show_attendee() {
    let app = helpers::TestApp::new();
    let attendee = app.create_attendee().await;

    let response = app.get(&format!("/api/attendees/{}", attendee.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], attendee.id.to_string());
}

#[tokio::test]
async fn test_update_attendee() {
    let app = helpers::TestApp::new();
    let attendee = app.create_attendee().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/attendees/{}", attendee.id),
            Some(json!({ "name": "Jane Doe" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Attendee updated successfully.");
    assert_eq!(response.body["data"]["name"], "Jane Doe");
    assert_eq!(response.body["data"]["email"], attendee.email);
}

#[tokio::test]
async fn test_update_attendee_to_taken_email() {
    let app = helpers::TestApp::new();
    let first = app.create_attendee().await;
    let second = app.create_attendee().await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/attendees/{}", second.id),
            Some(json!({ "email": first.email })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_attendee() {
    let app = helpers::TestApp::new();
    let event = app.create_event(5).await;
    let attendee = app.create_attendee().await;
    app.seed_booking(&event, &attendee).await;

    let response = app
        .request("DELETE", &format!("/api/attendees/{}", attendee.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Attendee deleted successfully.");
    assert_eq!(app.state.store.count_bookings(event.id).await.unwrap(), 0);

    let response = app
        .request("DELETE", &format!("/api/attendees/{}", attendee.id), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Attendee not found.");
}
