use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::domain::error::ServiceError;

pub mod a001_officer;
pub mod a002_station;
pub mod a003_payment_code;
pub mod a004_salary_item;
pub mod u101_import_payroll_file;
pub mod u102_export_bank_transfer;

/// Translate a domain service error into the HTTP error envelope.
/// Store errors are logged and answered generically so db details never
/// reach the client.
pub(crate) fn service_error_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    match &err {
        ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, Json(json!({"error": err.to_string()}))),
        ServiceError::Forbidden(_) => (StatusCode::FORBIDDEN, Json(json!({"error": err.to_string()}))),
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, Json(json!({"error": err.to_string()}))),
        ServiceError::Store(_) => {
            tracing::error!(error = %err, "service call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400_with_envelope() {
        let (status, Json(body)) =
            service_error_response(ServiceError::Validation("Surname must not be empty".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Surname must not be empty");
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let (status, Json(body)) =
            service_error_response(ServiceError::Forbidden("Read-only principal".into()));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Read-only principal");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, Json(body)) = service_error_response(ServiceError::NotFound("Officer"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Officer not found");
    }

    #[test]
    fn test_store_error_maps_to_500_without_detail_leak() {
        let (status, Json(body)) =
            service_error_response(ServiceError::Store(anyhow::anyhow!("database is locked")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
