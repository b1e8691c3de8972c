use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(about = "Hosts edge functions behind their per-endpoint CORS policies.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:8000")]
    pub listen_address: SocketAddr,
    /// Route prefix every edge function is mounted under.
    #[arg(long)]
    #[arg(default_value = "/functions/v1")]
    pub path_prefix: String,
    /// Used when `RUST_LOG` isn't set.
    #[arg(long)]
    #[arg(default_value = "edge_functions=info")]
    pub log_filter: String,
}
