use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::middleware::{ApiError, ApiResult, AppState},
    models::{Holiday, HolidayPayload, PaginationEnvelope},
    services::{HolidayService, PageRequest},
};

// The id segment is extracted as a string so a non-numeric id maps to the
// standard error body instead of the framework's plain-text rejection.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::invalid_argument("id", "must be a number"))
}

/// POST /holidays - Create a new holiday
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(payload): Json<HolidayPayload>,
) -> ApiResult<(StatusCode, Json<Holiday>)> {
    let service = HolidayService::new(state.db.clone());

    let created = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /holidays - List holidays with pagination and sorting
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<PaginationEnvelope<Holiday>>> {
    let service = HolidayService::new(state.db.clone());

    let request = PageRequest::from_query(&params)?;
    let page = service.find_all(request).await?;

    Ok(Json(page))
}

/// GET /holidays/:id - Get holiday by id
pub async fn get_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Holiday>> {
    let service = HolidayService::new(state.db.clone());

    let holiday = service.get(parse_id(&id)?).await?;

    Ok(Json(holiday))
}

/// PATCH /holidays/:id - Partially update a holiday
pub async fn patch_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HolidayPayload>,
) -> ApiResult<Json<Holiday>> {
    let service = HolidayService::new(state.db.clone());

    let updated = service.patch(parse_id(&id)?, payload).await?;

    Ok(Json(updated))
}

/// DELETE /holidays/:id - Delete a holiday
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let service = HolidayService::new(state.db.clone());

    service.delete(parse_id(&id)?).await?;

    Ok(StatusCode::NO_CONTENT)
}
