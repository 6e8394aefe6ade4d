use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error envelope returned by every API handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<mobility_core::Error> for ApiError {
    fn from(err: mobility_core::Error) -> Self {
        use mobility_core::Error;

        let status = match &err {
            // Request-level failures the caller can fix
            Error::InvalidPerson(_) | Error::NoFeasibleMeetingPoint => StatusCode::BAD_REQUEST,
            // Missing data files surface as not-found
            Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Error::Io(_) | Error::Json(_) | Error::UnknownNode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "status": "error", "message": self.message }));
        (self.status, body).into_response()
    }
}
