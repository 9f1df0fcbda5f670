use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::QuizError;

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = match self {
            QuizError::InvalidDirection(_) => StatusCode::BAD_REQUEST,
            QuizError::NoVocabulary | QuizError::AllKnown | QuizError::RoundExhausted => {
                StatusCode::NOT_FOUND
            }
        };

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
