use crate::cli::Args;
use crate::cors::{self, PreflightBody, SUPABASE_CLIENT_POLICY};
use crate::functions::{self, errors, handlers, EdgeFunction};
use crate::health;
use axum::routing::{any, get, MethodRouter};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub fn new(args: &Args) -> Router {
    let health_routes = cors::apply(
        Router::new().route("/check", get(health::handlers::healthcheck)),
        &SUPABASE_CLIENT_POLICY,
        PreflightBody::Empty,
    );

    let router = functions::registry()
        .iter()
        .fold(Router::new(), |router, function| {
            tracing::info!(
                function = function.name,
                path = %function.path(&args.path_prefix),
                allow_origin = ?function.policy.allow_origin(),
                allow_headers = ?function.policy.allow_headers(),
                "Mounted edge function."
            );
            router.merge(function_router(
                &args.path_prefix,
                function,
                any(move || handlers::not_implemented(function)),
            ))
        });
    tracing::info!("Initialized HTTP configuration.");

    router
        .nest("/health", health_routes)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}

/// Mounts `handler` at the route of `function`, wrapped with the function's CORS policy.
///
/// Panics inside `handler` are answered with the standard error response, which still carries
/// the CORS headers.
pub fn function_router(prefix: &str, function: &EdgeFunction, handler: MethodRouter) -> Router {
    let router = Router::new()
        .route(&function.path(prefix), handler)
        .layer(CatchPanicLayer::custom(errors::panic_response));
    cors::apply(router, function.policy, function.preflight)
}
