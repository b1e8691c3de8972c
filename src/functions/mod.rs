use crate::cors::{CorsPolicy, PreflightBody, FIRECRAWL_WEBHOOK_POLICY, SUPABASE_CLIENT_POLICY};
use once_cell::sync::Lazy;

pub mod errors;
pub mod handlers;
pub mod responses;

/// A serverless HTTP function hosted under its own route with its own CORS policy.
#[derive(Debug)]
pub struct EdgeFunction {
    pub name: &'static str,
    pub policy: &'static CorsPolicy,
    pub preflight: PreflightBody,
}

impl EdgeFunction {
    /// Route of this function under `prefix`, always rooted at `/` whatever slashes the prefix
    /// carries.
    pub fn path(&self, prefix: &str) -> String {
        match prefix.trim_matches('/') {
            "" => format!("/{}", self.name),
            prefix => format!("/{}/{}", prefix, self.name),
        }
    }
}

static REGISTRY: Lazy<[EdgeFunction; 2]> = Lazy::new(|| {
    [
        EdgeFunction {
            name: "firecrawl-webhook",
            policy: &FIRECRAWL_WEBHOOK_POLICY,
            preflight: PreflightBody::Ok,
        },
        EdgeFunction {
            name: "sniper-decision-maker",
            policy: &SUPABASE_CLIENT_POLICY,
            preflight: PreflightBody::Empty,
        },
    ]
});

pub fn registry() -> &'static [EdgeFunction] {
    REGISTRY.as_slice()
}
