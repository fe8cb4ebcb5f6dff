use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::usecases::u102_export_bank_transfer::BankTransferQuery;
use serde_json::json;

use crate::usecases::u102_export_bank_transfer::executor;

/// GET /api/u102/bank-transfer?yearcd=..&monthcd=..
/// Streams the period's bank-transfer CSV as a file download.
pub async fn export_bank_transfer(
    Query(query): Query<BankTransferQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    if query.yearcd.trim().is_empty() || query.monthcd.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "yearcd and monthcd are required"})),
        ));
    }

    match executor::run(&query).await {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"{}\"", executor::file_name(&query));
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "bank transfer export failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate bank transfer file"})),
            ))
        }
    }
}
