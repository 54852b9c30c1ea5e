use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The uniform JSON wrapper returned by every endpoint. Empty fields are
/// omitted, so an error body carries no `data` and a success body no `error`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    let body = Envelope {
        success: true,
        message: Some(message.to_string()),
        data: Some(data),
        error: None,
    };
    (status, Json(body)).into_response()
}

pub fn failure(status: StatusCode, message: &str, err: impl std::fmt::Display) -> Response {
    let body = Envelope::<()> {
        success: false,
        message: Some(message.to_string()),
        data: None,
        error: Some(err.to_string()),
    };
    (status, Json(body)).into_response()
}
