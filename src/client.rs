//! Weather client: posts a location and reads back the report

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::codec;
use crate::config::ClientConfig;
use crate::models::{Location, WeatherReport};
use crate::{Result, WxJsonError};

/// HTTP client for the weather server
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    server_url: String,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // The server is addressed directly, never through HTTP_PROXY.
        let mut builder = Client::builder()
            .user_agent(concat!("wxjson/", env!("CARGO_PKG_VERSION")))
            .no_proxy();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WxJsonError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            server_url: config.server_url.clone(),
        })
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Post the location and return the raw response body
    #[instrument(skip(self), fields(url = %self.server_url))]
    pub async fn post_location(&self, location: &Location) -> Result<String> {
        let payload = codec::encode(location)?;
        debug!("Sending location: {}", codec::encode_pretty(location)?);

        let response = self
            .client
            .post(&self.server_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WxJsonError::status(
                status.as_u16(),
                format!("Server answered {status}: {body}"),
            ));
        }

        debug!("Received {} bytes", body.len());
        Ok(body)
    }

    /// Post the location and decode the weather report
    pub async fn fetch_report(&self, location: &Location) -> Result<WeatherReport> {
        let body = self.post_location(location).await?;
        codec::decode(body.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_server_url() {
        let config = ClientConfig {
            server_url: "http://127.0.0.1:9999".to_string(),
            timeout_seconds: 0,
        };
        let client = WeatherClient::new(&config).unwrap();
        assert_eq!(client.server_url(), "http://127.0.0.1:9999");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig {
            server_url: format!("http://{addr}"),
            timeout_seconds: 5,
        };
        let client = WeatherClient::new(&config).unwrap();
        let result = client.post_location(&Location::zzyzx()).await;
        assert!(matches!(
            result,
            Err(WxJsonError::Transport { status: None, .. })
        ));
    }
}
