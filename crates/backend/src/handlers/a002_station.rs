use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_station::aggregate::{Station, StationDto};
use serde_json::{json, Value};

use super::service_error_response;
use crate::domain::a002_station;

/// GET /api/station
pub async fn list_all() -> Result<Json<Vec<Station>>, (StatusCode, Json<Value>)> {
    a002_station::service::list_all()
        .await
        .map(Json)
        .map_err(service_error_response)
}

/// GET /api/station/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<Station>, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid station id"}))))?;
    match a002_station::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Station not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}

/// POST /api/station
pub async fn upsert(
    Json(dto): Json<StationDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let result = if dto.id.is_some() {
        a002_station::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a002_station::service::create(dto).await.map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(service_error_response(e)),
    }
}

/// DELETE /api/station/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid station id"}))))?;
    match a002_station::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Station not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}
