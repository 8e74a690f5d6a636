//! Error responses.
//!
//! Every error leaves the service as JSON with a `detail` member: a string
//! for routing errors, a list of [`FieldError`] for input validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::classification::ReadingError;

/// One invalid input, located by where it came from and its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<&'static str>,
    pub msg: String,
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<serde_json::Value>,
}

impl FieldError {
    /// A required query parameter was absent.
    pub fn missing_query(name: &'static str) -> Self {
        Self {
            kind: "missing",
            loc: vec!["query", name],
            msg: "Field required".to_string(),
            input: None,
            ctx: None,
        }
    }

    /// A query parameter was present but not an acceptable reading.
    pub fn invalid_query(name: &'static str, input: &str, err: ReadingError) -> Self {
        let (kind, ctx) = match err {
            ReadingError::NotANumber => ("float_parsing", None),
            ReadingError::NotFinite => ("finite_number", None),
            ReadingError::NotPositive => ("greater_than", Some(json!({ "gt": 0 }))),
        };
        Self {
            kind,
            loc: vec!["query", name],
            msg: err.to_string(),
            input: Some(input.to_string()),
            ctx,
        }
    }
}

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed")]
    Validation(Vec<FieldError>),
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
