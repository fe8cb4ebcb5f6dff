use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_payment_code::aggregate::{PaymentCode, PaymentCodeDto};
use serde_json::{json, Value};

use super::service_error_response;
use crate::domain::a003_payment_code;

/// GET /api/payment_code
pub async fn list_all() -> Result<Json<Vec<PaymentCode>>, (StatusCode, Json<Value>)> {
    a003_payment_code::service::list_all()
        .await
        .map(Json)
        .map_err(service_error_response)
}

/// GET /api/payment_code/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<PaymentCode>, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid payment code id"})),
        )
    })?;
    match a003_payment_code::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Payment code not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}

/// POST /api/payment_code
pub async fn upsert(
    Json(dto): Json<PaymentCodeDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let result = if dto.id.is_some() {
        a003_payment_code::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a003_payment_code::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(service_error_response(e)),
    }
}

/// DELETE /api/payment_code/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid payment code id"})),
        )
    })?;
    match a003_payment_code::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Payment code not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}
