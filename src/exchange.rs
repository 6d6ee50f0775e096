//! Client and server in one process
//!
//! The server is bound before the client is told where to connect, and the
//! client waits on a oneshot readiness signal instead of racing the listener.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tracing::info;

use crate::client::WeatherClient;
use crate::codec;
use crate::config::{ClientConfig, ServerConfig};
use crate::models::{Location, WeatherReport};
use crate::server::WeatherServer;
use crate::{Result, WxJsonError};

/// Outcome of one in-process exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// Raw response body as printed by the client role
    pub body: String,
    /// The body decoded into a report
    pub report: WeatherReport,
}

/// Run one request/response cycle against a server on an ephemeral port.
///
/// The server task binds, reports its address through a oneshot, and only
/// then does the client send its request.
pub async fn run_demo(
    location: &Location,
    server: &ServerConfig,
    client: &ClientConfig,
) -> Result<Exchange> {
    let (ready_tx, ready_rx) = oneshot::channel::<Result<SocketAddr>>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let max_body_bytes = server.max_body_bytes;

    let task = tokio::spawn(async move {
        let bound =
            match WeatherServer::bind(SocketAddr::from(([127, 0, 0, 1], 0)), max_body_bytes).await {
                Ok(bound) => bound,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return Ok(());
                }
            };
        let _ = ready_tx.send(Ok(bound.local_addr()));
        bound
            .serve_until(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let addr = ready_rx
        .await
        .map_err(|_| WxJsonError::transport("Server exited before it became ready"))??;
    info!("Server ready on {addr}, running client");

    let outcome = match WeatherClient::new(&ClientConfig {
        server_url: format!("http://{addr}"),
        ..client.clone()
    }) {
        Ok(client) => client.post_location(location).await,
        Err(e) => Err(e),
    };

    let _ = shutdown_tx.send(());
    task.await.map_err(|e| WxJsonError::Io {
        source: std::io::Error::other(e),
    })??;

    let body = outcome?;
    let report = codec::decode(body.as_bytes())?;
    Ok(Exchange { body, report })
}
