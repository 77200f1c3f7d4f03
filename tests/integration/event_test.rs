//! Integration tests for event CRUD.

mod helpers;

use http::StatusCode;
use serde_json::json;

use eventhub_store::EntityStore;

#[tokio::test]
async fn test_list_events_with_pagination() {
    let app = helpers::TestApp::new();
    for _ in 0..15 {
        app.create_event(10).await;
    }

    let response = app.get("/api/events?per_page=10").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Events fetched successfully.");
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);
    let meta = &response.body["meta"];
    assert_eq!(meta["current_page"], 1);
    assert_eq!(meta["last_page"], 2);
    assert_eq!(meta["per_page"], 10);
    assert_eq!(meta["total"], 15);

    let response = app.get("/api/events?per_page=10&page=2").await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_events_past_last_page() {
    let app = helpers::TestApp::new();
    app.create_event(10).await;

    let response = app
        .get("/api/events?page=18446744073709551615&per_page=100")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());
    assert_eq!(response.body["meta"]["total"], 1);
}

#[tokio::test]
async fn test_create_event() {
    let app = helpers::TestApp::new();

    let response = app
        .post(
            "/api/events",
            json!({
                "title": "Test Event",
                "description": "Test Description",
                "date": helpers::date_in(1),
                "country": "Test Country",
                "capacity": 100,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Event created successfully.");
    assert_eq!(response.body["data"]["title"], "Test Event");
    assert_eq!(response.body["data"]["capacity"], 100);
    assert!(response.body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_create_event_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .post(
            "/api/events",
            json!({
                "title": "Past Event",
                "date": helpers::date_in(-1),
                "country": "Test Country",
                "capacity": 0,
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["date"].is_array());
    assert!(response.body["details"]["capacity"].is_array());

    let response = app.post("/api/events", json!({ "title": "No date" })).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_show_event() {
    let app = helpers::TestApp::new();
    let event = app.create_event(5).await;

    let response = app.get(&format!("/api/events/{}", event.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], event.id.to_string());
}

#[tokio::test]
async fn test_show_missing_event() {
    let app = helpers::TestApp::new();

    for uri in [
        format!("/api/events/{}", uuid::Uuid::new_v4()),
        "/api/events/not-a-uuid".to_string(),
    ] {
        let response = app.get(&uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Event not found.");
        assert!(response.body["data"].is_null());
    }
}

#[tokio::test]
async fn test_update_event() {
    let app = helpers::TestApp::new();
    let event = app.create_event(5).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", event.id),
            Some(json!({ "title": "Updated Title" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Event updated successfully.");
    assert_eq!(response.body["data"]["title"], "Updated Title");
    assert_eq!(response.body["data"]["capacity"], 5);

    let response = app
        .request(
            "PATCH",
            &format!("/api/events/{}", event.id),
            Some(json!({ "description": null })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["description"].is_null());
    assert_eq!(response.body["data"]["title"], "Updated Title");
}

#[tokio::test]
async fn test_update_event_rejects_invalid_capacity() {
    let app = helpers::TestApp::new();
    let event = app.create_event(5).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/events/{}", event.id),
            Some(json!({ "capacity": -3 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let stored = app.state.store.get_event(event.id).await.unwrap().unwrap();
    assert_eq!(stored.capacity, 5);
}

#[tokio::test]
async fn test_delete_event() {
    let app = helpers::TestApp::new();
    let event = app.create_event(5).await;
    let attendee = app.create_attendee().await;
    app.seed_booking(&event, &attendee).await;

    let response = app
        .request("DELETE", &format!("/api/events/{}", event.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Event deleted successfully.");
    assert!(response.body["data"].is_null());

    let response = app.get(&format!("/api/events/{}", event.id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.state.store.count_bookings(event.id).await.unwrap(), 0);
}
