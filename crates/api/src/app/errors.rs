use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pressroom_lineage::LineageError;

pub fn lineage_error_to_response(err: LineageError) -> axum::response::Response {
    match err {
        LineageError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "document not found")
        }
        LineageError::Store(e) => {
            tracing::error!(error = %e, "read model backend failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                e.to_string(),
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
