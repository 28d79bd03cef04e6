//! Liveness endpoint for hosted deployments.
//!
//! Answers every HTTP request with `200 OK` and the body `OK`. Hosting
//! platforms use it to decide that the bot process is alive.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::error::Result;

const RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK";

/// Port from `HEALTH_PORT`, falling back to `PORT`.
#[must_use]
pub fn port_from_env() -> Option<u16> {
    ["HEALTH_PORT", "PORT"]
        .iter()
        .find_map(|name| std::env::var(name).ok()?.trim().parse().ok())
}

/// Bind the health endpoint on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    info!(port, "Health endpoint listening");
    Ok(listener)
}

/// Serve health checks until the task is dropped.
pub async fn serve(listener: TcpListener) {
    loop {
        let (mut socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "Health endpoint accept failed");
                continue;
            }
        };
        tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            if let Err(e) = socket.write_all(RESPONSE).await {
                debug!(%peer, error = %e, "Health response not delivered");
            }
            let _ = socket.shutdown().await;
        });
    }
}
