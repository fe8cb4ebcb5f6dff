use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a004_salary_item::aggregate::{
    SalaryItem, SalaryItemAmountDto, SalaryItemDto, SalaryItemQuery,
};
use serde_json::{json, Value};

use super::service_error_response;
use crate::domain::a004_salary_item;
use crate::shared::access::AccessScope;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/salary_item?yearcd=..&monthcd=..[&perscode=..][&stationCd=..]
/// Results are narrowed to the caller's scope before any other filter.
pub async fn list_for_period(
    CurrentUser(claims): CurrentUser,
    Query(query): Query<SalaryItemQuery>,
) -> Result<Json<Vec<SalaryItem>>, (StatusCode, Json<Value>)> {
    let scope = AccessScope::from_claims(&claims);
    a004_salary_item::service::list_for_period(&scope, &query)
        .await
        .map(Json)
        .map_err(service_error_response)
}

/// POST /api/salary_item
pub async fn create(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<SalaryItemDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let scope = AccessScope::from_claims(&claims);
    match a004_salary_item::service::create(&scope, dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => Err(service_error_response(e)),
    }
}

/// PUT /api/salary_item/:id/amount
pub async fn update_amount(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<SalaryItemAmountDto>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let scope = AccessScope::from_claims(&claims);

    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid salary item id"})),
        )
    })?;

    match a004_salary_item::service::update_amount(&scope, uuid, dto).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        // absent or outside the caller's scope: same answer either way
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Salary item not found"})),
        )),
        Err(e) => Err(service_error_response(e)),
    }
}
