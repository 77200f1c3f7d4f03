//! Attendee CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use eventhub_core::types::AttendeeId;
use eventhub_entity::attendee::Attendee;
use eventhub_service::attendee::service::ATTENDEE_NOT_FOUND;

use crate::dto::request::{CreateAttendeeRequest, UpdateAttendeeRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{Pagination, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/attendees
pub async fn list_attendees(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<Vec<Attendee>>>> {
    let attendees = state.attendee_service.list_attendees(page).await?;
    Ok(Json(ApiResponse::paginated(
        "Attendees fetched successfully.",
        attendees,
    )))
}

/// POST /api/attendees
pub async fn create_attendee(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateAttendeeRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Attendee>>)> {
    let attendee = state.attendee_service.create_attendee(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Attendee created successfully.", attendee)),
    ))
}

/// GET /api/attendees/{id}
pub async fn get_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Attendee>>> {
    let id: AttendeeId = parse_id(&id, ATTENDEE_NOT_FOUND)?;
    let attendee = state.attendee_service.get_attendee(id).await?;
    Ok(Json(ApiResponse::ok("Attendee fetched successfully.", attendee)))
}

/// PUT|PATCH /api/attendees/{id}
pub async fn update_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateAttendeeRequest>,
) -> ApiResult<Json<ApiResponse<Attendee>>> {
    let id: AttendeeId = parse_id(&id, ATTENDEE_NOT_FOUND)?;
    let attendee = state
        .attendee_service
        .update_attendee(id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok("Attendee updated successfully.", attendee)))
}

/// DELETE /api/attendees/{id}
pub async fn delete_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id: AttendeeId = parse_id(&id, ATTENDEE_NOT_FOUND)?;
    state.attendee_service.delete_attendee(id).await?;
    Ok(Json(ApiResponse::ok("Attendee deleted successfully.", ())))
}
