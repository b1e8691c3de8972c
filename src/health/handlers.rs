use crate::functions;
use crate::health::responses::HealthCheckResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    let functions = functions::registry()
        .iter()
        .map(|function| function.name.to_string())
        .collect();
    Json(HealthCheckResponse {
        error: false,
        functions,
    })
}
