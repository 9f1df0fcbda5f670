use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::KnownStoreError;

impl IntoResponse for KnownStoreError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
