use crate::functions::responses::FunctionErrorResponse;
use axum::response::{IntoResponse, Json, Response};
use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use std::any::Any;

pub const UNKNOWN_INTERNAL_ERROR: &str = "Unknown Internal Error";

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("The `{function}` function has no request handler deployed.")]
    NotImplemented { function: &'static str },
    #[error("{0}")]
    Internal(String),
}

impl FunctionError {
    pub fn status(&self) -> StatusCode {
        match self {
            FunctionError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            FunctionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), "{}", self);
        let body = FunctionErrorResponse {
            error: self.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the standard error response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        String::from(UNKNOWN_INTERNAL_ERROR)
    };
    FunctionError::Internal(message).into_response()
}
