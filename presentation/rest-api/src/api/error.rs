use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Body of every error response: `name` is the error kind, `error` the
/// code-style identifier of the specific failure.
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(name: &str, error: &str) -> Self {
        Self {
            name: name.to_string(),
            error: error.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders errors raised before a handler runs (failed API-key check,
/// unparseable body, unknown route) in the same JSON shape handlers use.
pub async fn render_framework_error(err: poem::Error) -> Response {
    let status = err.status();
    let (name, error) = match status {
        StatusCode::UNAUTHORIZED => ("AuthenticationError", "auth.invalid_api_key"),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ("ValidationError", "request.malformed")
        }
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("ValidationError", "request.unsupported_media_type"),
        StatusCode::NOT_FOUND => ("NotFound", "route.not_found"),
        StatusCode::METHOD_NOT_ALLOWED => ("MethodNotAllowed", "route.method_not_allowed"),
        _ => ("InternalError", "server.internal"),
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {err}");
    } else {
        tracing::debug!("Request rejected with {status}: {err}");
    }

    (status, poem::web::Json(ErrorResponse::new(name, error))).into_response()
}
