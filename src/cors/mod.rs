use axum::Router;
use once_cell::sync::Lazy;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod middleware;
pub mod policy;
#[cfg(test)]
mod tests;

pub use middleware::PreflightBody;
pub use policy::{CorsPolicy, CorsPolicyBuilder};

pub const ANY_ORIGIN: &str = "*";
pub const X_FIRECRAWL_SECRET: &str = "x-firecrawl-secret";

/// Request headers the Supabase JS client sends with every function invocation.
const SUPABASE_CLIENT_HEADERS: [&str; 4] =
    ["authorization", "x-client-info", "apikey", "content-type"];

fn supabase_client_policy() -> CorsPolicyBuilder {
    SUPABASE_CLIENT_HEADERS
        .iter()
        .fold(CorsPolicy::builder().allow_origin(ANY_ORIGIN), |builder, name| {
            builder.allow_header(name)
        })
}

pub static SUPABASE_CLIENT_POLICY: Lazy<CorsPolicy> = Lazy::new(|| {
    supabase_client_policy()
        .build()
        .expect("Failed to build the Supabase client CORS policy!")
});

pub static FIRECRAWL_WEBHOOK_POLICY: Lazy<CorsPolicy> = Lazy::new(|| {
    supabase_client_policy()
        .allow_header(X_FIRECRAWL_SECRET)
        .build()
        .expect("Failed to build the Firecrawl webhook CORS policy!")
});

/// Wraps every route of `router` with `policy`.
///
/// `OPTIONS` requests are answered with `preflight` before they reach a handler, and each policy
/// header is added to a response only if the handler did not set it already.
pub fn apply(router: Router, policy: &CorsPolicy, preflight: PreflightBody) -> Router {
    let router = router.layer(axum::middleware::from_fn_with_state(
        preflight,
        middleware::preflight,
    ));
    policy
        .headers()
        .iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name.clone(),
                value.clone(),
            ))
        })
}
