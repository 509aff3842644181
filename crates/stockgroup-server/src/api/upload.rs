use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Extension, Json,
};
use stockgroup_core::AggregateResult;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Multipart field name used by upload forms when no filename is sent.
const FILE_FIELD: &str = "file";

/// Accepts one spreadsheet upload and returns its product grouping.
pub(super) async fn upload(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AggregateResult>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "upload without multipart body");
        ApiError::new("bad_request", "No file uploaded")
    })?;

    let bytes = match read_file_field(multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::warn!(request_id = %req_id.0, "multipart body has no file part");
            return Err(ApiError::new(
                "bad_request",
                "Could not extract file from upload",
            ));
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(request_id = %req_id.0, error = %e, "upload exceeds body limit");
            return Err(ApiError::new("payload_too_large", "Uploaded file is too large"));
        }
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "failed to read multipart body");
            return Err(ApiError::new(
                "bad_request",
                "Could not extract file from upload",
            ));
        }
    };

    tracing::debug!(request_id = %req_id.0, bytes = bytes.len(), "received upload");

    let category = state.category.clone();
    let result = tokio::task::spawn_blocking(move || {
        stockgroup_sheet::decode_spreadsheet(&bytes)
            .map(|records| stockgroup_core::process(records, &category))
    })
    .await
    .map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "upload processing task failed");
        ApiError::new("internal_error", format!("Failed to process file: {e}"))
    })?
    .map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "failed to decode spreadsheet");
        ApiError::new("internal_error", format!("Failed to process file: {e}"))
    })?;

    Ok(Json(result))
}

/// Returns the contents of the first part that carries a filename or is
/// named `file`.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() || field.name() == Some(FILE_FIELD) {
            return field.bytes().await.map(Some);
        }
    }
    Ok(None)
}
