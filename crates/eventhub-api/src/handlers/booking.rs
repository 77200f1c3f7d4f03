//! Booking handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eventhub_entity::booking::Booking;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let booking = state
        .admission
        .request_booking(req.event_id, req.attendee_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Booking created successfully.", booking)),
    ))
}
