use std::sync::Arc;

use axum::{extract::Multipart, http::StatusCode, Json};
use contracts::usecases::u101_import_payroll_file::ImportReport;
use serde_json::json;

use crate::domain::a005_payroll_record::repository::PayrollRecordRepository;
use crate::usecases::u101_import_payroll_file::{ImportError, ImportExecutor, UploadedFile};

/// POST /api/u101/import-payroll-file
///
/// Expects a multipart form with one `file` part holding the flat payroll
/// text file. Returns the full import report, including a diagnostic entry
/// per skipped row.
pub async fn import_payroll_file(
    mut multipart: Multipart,
) -> Result<Json<ImportReport>, (StatusCode, Json<serde_json::Value>)> {
    let mut file: Option<UploadedFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read multipart upload");
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to read uploaded file"})),
                ));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or("payroll.txt").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::error!(error = %e, "failed to read uploaded file body");
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to read uploaded file"})),
                ));
            }
        };

        file = Some(UploadedFile {
            name,
            content_type,
            bytes,
        });
    }

    let executor = ImportExecutor::new(Arc::new(PayrollRecordRepository));
    match executor.run(file).await {
        Ok(report) => Ok(Json(report)),
        Err(e @ (ImportError::MissingFile | ImportError::InvalidEncoding)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )),
    }
}
