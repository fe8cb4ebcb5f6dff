use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_officer::aggregate::{Officer, OfficerDto};
use serde_json::{json, Value};

use super::service_error_response;
use crate::domain::a001_officer;

/// GET /api/officer
pub async fn list_all() -> Result<Json<Vec<Officer>>, (StatusCode, Json<Value>)> {
    a001_officer::service::list_all()
        .await
        .map(Json)
        .map_err(service_error_response)
}

/// GET /api/officer/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<Officer>, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid officer id"}))))?;
    match a001_officer::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Officer not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}

/// POST /api/officer
pub async fn upsert(
    Json(dto): Json<OfficerDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let result = if dto.id.is_some() {
        a001_officer::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a001_officer::service::create(dto).await.map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(service_error_response(e)),
    }
}

/// DELETE /api/officer/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid officer id"}))))?;
    match a001_officer::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Officer not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}
