//! Integration tests for the PostgreSQL entity store.
//!
//! These run against the database named by `DATABASE_URL` and are skipped
//! when it is unset. Every test works on freshly created rows, so the suite
//! can share one database.

mod helpers;

use std::sync::Arc;

use futures::future::join_all;

use eventhub_core::error::ErrorKind;
use eventhub_core::types::pagination::PageRequest;
use eventhub_core::types::{AttendeeId, EventId};
use eventhub_entity::attendee::UpdateAttendee;
use eventhub_entity::booking::BookingInsert;
use eventhub_entity::event::UpdateEvent;
use eventhub_store::EntityStore;

#[tokio::test]
async fn test_insert_booking_outcomes() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let event = store.create_event(helpers::new_event(1)).await.unwrap();
    let first = store.create_attendee(helpers::new_attendee()).await.unwrap();
    let second = store.create_attendee(helpers::new_attendee()).await.unwrap();

    assert_eq!(
        store.insert_booking(EventId::new(), first.id).await.unwrap(),
        BookingInsert::MissingEvent
    );
    assert_eq!(
        store.insert_booking(event.id, AttendeeId::new()).await.unwrap(),
        BookingInsert::MissingAttendee
    );

    let BookingInsert::Inserted(booking) = store.insert_booking(event.id, first.id).await.unwrap()
    else {
        panic!("expected the first booking to be inserted");
    };
    assert!(booking.is_pair(event.id, first.id));
    assert!(store.booking_exists(event.id, first.id).await.unwrap());

    assert_eq!(
        store.insert_booking(event.id, first.id).await.unwrap(),
        BookingInsert::Duplicate
    );
    assert_eq!(
        store.insert_booking(event.id, second.id).await.unwrap(),
        BookingInsert::CapacityReached { capacity: 1 }
    );
    assert_eq!(store.count_bookings(event.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_insert_booking_after_capacity_lowered() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let event = store.create_event(helpers::new_event(3)).await.unwrap();
    let mut attendees = Vec::new();
    for _ in 0..3 {
        attendees.push(store.create_attendee(helpers::new_attendee()).await.unwrap());
    }
    store.insert_booking(event.id, attendees[0].id).await.unwrap();
    store.insert_booking(event.id, attendees[1].id).await.unwrap();

    store
        .update_event(
            event.id,
            UpdateEvent {
                capacity: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        store.insert_booking(event.id, attendees[2].id).await.unwrap(),
        BookingInsert::CapacityReached { capacity: 1 }
    );
    assert_eq!(store.count_bookings(event.id).await.unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_for_last_seat() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let store = Arc::new(store);
    let event = store.create_event(helpers::new_event(1)).await.unwrap();
    let mut attendees = Vec::new();
    for _ in 0..8 {
        attendees.push(store.create_attendee(helpers::new_attendee()).await.unwrap());
    }

    // Straight to the store: only the row lock and re-count stand between
    // these inserts.
    let event_id = event.id;
    let handles = attendees.iter().map(|attendee| {
        let store = Arc::clone(&store);
        let attendee_id = attendee.id;
        tokio::spawn(async move { store.insert_booking(event_id, attendee_id).await })
    });
    let outcomes: Vec<BookingInsert> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect();

    assert_eq!(
        outcomes
            .iter()
            .filter(|o| matches!(o, BookingInsert::Inserted(_)))
            .count(),
        1
    );
    assert!(
        outcomes.iter().all(|o| matches!(
            o,
            BookingInsert::Inserted(_) | BookingInsert::CapacityReached { capacity: 1 }
        ))
    );
    assert_eq!(store.count_bookings(event_id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_inserts() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let store = Arc::new(store);
    let event = store.create_event(helpers::new_event(10)).await.unwrap();
    let attendee = store.create_attendee(helpers::new_attendee()).await.unwrap();

    let (event_id, attendee_id) = (event.id, attendee.id);
    let handles = (0..8).map(|_| {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.insert_booking(event_id, attendee_id).await })
    });
    let outcomes: Vec<BookingInsert> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect();

    assert_eq!(
        outcomes
            .iter()
            .filter(|o| matches!(o, BookingInsert::Inserted(_)))
            .count(),
        1
    );
    assert!(
        outcomes
            .iter()
            .all(|o| matches!(o, BookingInsert::Inserted(_) | BookingInsert::Duplicate))
    );
    assert_eq!(store.count_bookings(event_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deletes_cascade_to_bookings() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let first = store.create_event(helpers::new_event(3)).await.unwrap();
    let second = store.create_event(helpers::new_event(3)).await.unwrap();
    let a = store.create_attendee(helpers::new_attendee()).await.unwrap();
    let b = store.create_attendee(helpers::new_attendee()).await.unwrap();
    for (event_id, attendee_id) in [(first.id, a.id), (first.id, b.id), (second.id, a.id)] {
        store.insert_booking(event_id, attendee_id).await.unwrap();
    }

    assert!(store.delete_attendee(a.id).await.unwrap());
    assert!(!store.delete_attendee(a.id).await.unwrap());
    assert_eq!(store.count_bookings(first.id).await.unwrap(), 1);
    assert_eq!(store.count_bookings(second.id).await.unwrap(), 0);

    assert!(store.delete_event(first.id).await.unwrap());
    assert!(store.get_event(first.id).await.unwrap().is_none());
    assert!(!store.booking_exists(first.id, b.id).await.unwrap());
    assert_eq!(store.count_bookings(first.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_email_unique_ignoring_case() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let john = store.create_attendee(helpers::new_attendee()).await.unwrap();

    let mut shouting = helpers::new_attendee();
    shouting.email = john.email.to_uppercase();
    let err = store.create_attendee(shouting).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "The email has already been taken.");

    let jane = store.create_attendee(helpers::new_attendee()).await.unwrap();
    let err = store
        .update_attendee(
            jane.id,
            UpdateAttendee {
                email: Some(john.email.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let same = store
        .update_attendee(
            john.id,
            UpdateAttendee {
                email: Some(john.email.clone()),
                phone: Some(Some("1234567890".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(same.phone.as_deref(), Some("1234567890"));
}

#[tokio::test]
async fn test_event_crud_and_partial_update() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    let mut data = helpers::new_event(5);
    data.description = Some("Talks".to_string());
    let event = store.create_event(data).await.unwrap();
    assert_eq!(store.get_event(event.id).await.unwrap().unwrap().title, event.title);

    let updated = store
        .update_event(
            event.id,
            UpdateEvent {
                title: Some("Renamed".to_string()),
                description: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.capacity, 5);

    assert!(
        store
            .update_event(EventId::new(), UpdateEvent::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_list_past_last_page_is_empty() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    store.create_event(helpers::new_event(1)).await.unwrap();

    let page = store
        .list_events(&PageRequest::new(u64::MAX, 100))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(page.total_items >= 1);

    let page = store
        .list_attendees(&PageRequest::new(u64::MAX, 100))
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let Some(store) = helpers::pg_store().await else {
        return;
    };
    assert_eq!(store.name(), "postgres");
    assert!(store.health_check().await.unwrap());
}
