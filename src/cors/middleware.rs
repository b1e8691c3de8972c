use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{Method, StatusCode};

/// What an endpoint answers to a CORS preflight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightBody {
    /// A plain-text `ok`.
    Ok,
    /// No body at all.
    Empty,
}

impl IntoResponse for PreflightBody {
    fn into_response(self) -> Response {
        match self {
            PreflightBody::Ok => (StatusCode::OK, "ok").into_response(),
            PreflightBody::Empty => StatusCode::OK.into_response(),
        }
    }
}

pub async fn preflight(
    State(body): State<PreflightBody>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!(endpoint = %request.uri().path(), "Answering CORS preflight.");
        return body.into_response();
    }
    next.run(request).await
}
