use clap::Parser;
use tokio::net::TcpListener;

mod cli;
mod cors;
mod functions;
mod health;
mod http;
mod logging;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);
    let router = http::router::new(&args);

    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {}.", error);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections.");
}
