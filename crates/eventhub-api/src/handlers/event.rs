//! Event CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use eventhub_core::types::EventId;
use eventhub_entity::event::Event;
use eventhub_service::event::service::EVENT_NOT_FOUND;

use crate::dto::request::{CreateEventRequest, UpdateEventRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{Pagination, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<Vec<Event>>>> {
    let events = state.event_service.list_events(page).await?;
    Ok(Json(ApiResponse::paginated(
        "Events fetched successfully.",
        events,
    )))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Event>>)> {
    let event = state.event_service.create_event(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Event created successfully.", event)),
    ))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Event>>> {
    let id: EventId = parse_id(&id, EVENT_NOT_FOUND)?;
    let event = state.event_service.get_event(id).await?;
    Ok(Json(ApiResponse::ok("Event fetched successfully.", event)))
}

/// PUT|PATCH /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<ApiResponse<Event>>> {
    let id: EventId = parse_id(&id, EVENT_NOT_FOUND)?;
    let event = state.event_service.update_event(id, req.into()).await?;
    Ok(Json(ApiResponse::ok("Event updated successfully.", event)))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id: EventId = parse_id(&id, EVENT_NOT_FOUND)?;
    state.event_service.delete_event(id).await?;
    Ok(Json(ApiResponse::ok("Event deleted successfully.", ())))
}
