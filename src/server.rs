//! Weather server: answers a posted location with a weather report
//!
//! The listener is an owned [`WeatherServer`] handle rather than a global
//! registration, so tests can bind an ephemeral port and shut it down again.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

use crate::codec;
use crate::models::{Location, WeatherReport};
use crate::{Result, WxJsonError};

/// Build the HTTP routes: `POST /` only.
pub fn router(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", post(weather_handler))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Decode the posted location and reply with the weather report.
///
/// The location is logged but does not influence the report.
#[instrument(skip_all, fields(body_len = body.len()))]
pub async fn weather_handler(body: Bytes) -> Result<Response> {
    let location: Location = codec::decode(&body).inspect_err(|e| {
        tracing::warn!("Rejecting request: {e}");
    })?;
    info!("Received location: {}", location.format_coordinates());

    let report = WeatherReport::canned();
    let payload = codec::encode(&report)?;
    debug!("Sending report: {}", codec::encode_pretty(&report)?);

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// A bound, not yet serving, weather server
#[derive(Debug)]
pub struct WeatherServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    max_body_bytes: usize,
}

impl WeatherServer {
    /// Bind the listener. Port 0 picks an ephemeral port.
    ///
    /// Once this returns the socket accepts connections, even before
    /// [`serve_until`](Self::serve_until) runs.
    pub async fn bind(addr: SocketAddr, max_body_bytes: usize) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
            max_body_bytes,
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL clients should post to
    #[must_use]
    pub fn url(&self) -> String {
        base_url(self.local_addr)
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight ones.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Weather server running at {}", self.url());
        axum::serve(self.listener, router(self.max_body_bytes))
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("Weather server on {} stopped", self.local_addr);
        Ok(())
    }

    /// Serve on a background task
    #[must_use]
    pub fn spawn(self) -> RunningServer {
        let local_addr = self.local_addr;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.serve_until(async {
            let _ = shutdown_rx.await;
        }));
        RunningServer {
            local_addr,
            shutdown_tx,
            task,
        }
    }
}

/// Handle to a server running on a background task
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<()>>,
}

impl RunningServer {
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    #[must_use]
    pub fn url(&self) -> String {
        base_url(self.local_addr)
    }

    /// Stop accepting connections and wait for the server task to finish
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .map_err(|e| WxJsonError::Io {
                source: std::io::Error::other(e),
            })?
    }
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
