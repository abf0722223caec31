//! Serve command implementation

use std::net::SocketAddr;

use super::common::{shutdown_signal, CommandContext};
use crate::{proxy, Result};

/// Handle the serve command: run the proxy on all interfaces until Ctrl-C
pub async fn handle_serve(ctx: &CommandContext, port: u16) -> Result<()> {
    ctx.require_api_key()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("Proxy server running on port {port}");
    // tarpaulin::skip - long-running server
    proxy::serve(ctx.client.clone(), addr, shutdown_signal()).await
}
