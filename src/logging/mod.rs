use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let env_filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &args.log_filter);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_timer(UtcTime::rfc_3339()))
        .init();
}

/// `rust_log` wins over `fallback` unless it fails to parse.
fn env_filter(rust_log: Option<String>, fallback: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
